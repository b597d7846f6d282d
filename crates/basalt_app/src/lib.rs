//! Application shell for the basalt renderer.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use basalt_app::{App, AppContext, BasaltApp, Color, MaterialDescriptor};
//! use basalt_renderer::Mesh;
//!
//! struct Viewer;
//!
//! impl BasaltApp for Viewer {
//!     fn setup(&mut self, ctx: &mut AppContext) {
//!         if let Some(renderer) = ctx.renderer.as_deref_mut() {
//!             let triangle = Mesh::triangle(&renderer.context.device);
//!             renderer.add_mesh(triangle);
//!         }
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     App::new(Viewer)
//!         .with_title("Viewer")
//!         .with_materials(vec![MaterialDescriptor::uniform(Color::RED)])
//!         .run()
//! }
//! ```

pub mod builder;
pub mod context;
mod graphics;
pub mod logging;
mod runner;
pub mod traits;

pub use builder::{App, AppConfig};
pub use context::AppContext;
pub use traits::BasaltApp;

// ── Re-export the most-used basalt_core primitives ─────────────────────────
// Users can do `use basalt_app::{Color, MaterialDescriptor};` without adding
// basalt_core as a direct dependency.
pub use basalt_core::{Color, MaterialDescriptor};

// glam math types — re-exported for convenience
pub use basalt_core::glam::{Vec3, Vec4};
