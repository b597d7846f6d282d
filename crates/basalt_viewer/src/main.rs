//! Minimal viewer: one clip-space triangle, one material.
//!
//! Every pixel the triangle covers comes out in the ambient colour of the
//! first (here: only) material in the bank.  Drop a `basalt.toml` next to
//! the binary to override the window config.

use basalt_app::{App, AppConfig, AppContext, BasaltApp, Color, MaterialDescriptor};
use basalt_renderer::Mesh;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{Key, NamedKey};

struct ViewerApp;

impl BasaltApp for ViewerApp {
    fn setup(&mut self, ctx: &mut AppContext) {
        if let Some(renderer) = ctx.renderer.as_deref_mut() {
            let triangle = Mesh::triangle(&renderer.context.device);
            renderer.add_mesh(triangle);
            log::info!("viewer ready, drawing 1 mesh");
        }
    }

    fn on_window_event(&mut self, event: &WindowEvent, ctx: &mut AppContext) {
        if let WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    logical_key: Key::Named(NamedKey::Escape),
                    state: ElementState::Pressed,
                    ..
                },
            ..
        } = event
        {
            ctx.request_exit();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load_or_default("basalt.toml")?;

    App::new(ViewerApp)
        .with_config(config)
        .with_materials(vec![MaterialDescriptor::new(
            Color::RED,
            Color::GREEN,
            Color::BLUE,
        )])
        .run()
}
