//! `basalt_core` — GPU-agnostic primitives shared by the renderer and the
//! application shell.
//!
//! The material descriptor types live here rather than in `basalt_renderer`
//! so that scene/authoring code can describe materials without pulling in
//! the whole renderer (and without creating a dependency cycle — the
//! renderer already depends on this crate and lowers the descriptors to GPU
//! records itself).

pub mod color;
pub mod context;
pub mod material;

pub use color::Color;
pub use context::{ContextError, GpuContext};
pub use material::MaterialDescriptor;

// glam math types — re-exported so downstream crates don't need a direct dep.
pub use glam;
