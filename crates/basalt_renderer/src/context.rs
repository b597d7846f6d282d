//! Re-export of the shared GPU context.
//!
//! The context lives in `basalt_core` so headless users (tests, tools) can
//! create a device without linking the renderer; this alias keeps renderer
//! call sites short.

pub use basalt_core::{ContextError, GpuContext};
