use std::sync::Arc;

use anyhow::Context as _;
use basalt_core::{Color, MaterialDescriptor};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::builder::AppConfig;
use crate::context::AppContext;
use crate::graphics::GraphicsState;
use crate::traits::BasaltApp;

struct Runner<A: BasaltApp> {
    app: A,
    config: AppConfig,
    materials: Vec<MaterialDescriptor>,
    window: Option<Arc<Window>>,
    graphics: Option<GraphicsState>,
    window_size: (u32, u32),
    /// Set when GPU setup fails; surfaced as an error after the loop ends.
    init_error: Option<anyhow::Error>,
}

impl<A: BasaltApp> Runner<A> {
    fn new(app: A, config: AppConfig, materials: Vec<MaterialDescriptor>) -> Self {
        Self {
            app,
            config,
            materials,
            window: None,
            graphics: None,
            window_size: (0, 0),
            init_error: None,
        }
    }
}

impl<A: BasaltApp> ApplicationHandler for Runner<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.width,
                self.config.height,
            ));

        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.init_error = Some(e.into());
                event_loop.exit();
                return;
            }
        };
        self.window_size = (self.config.width, self.config.height);

        let mut gfx = match pollster::block_on(GraphicsState::new(
            window.clone(),
            self.config.width,
            self.config.height,
            self.config.vsync,
            &self.materials,
        )) {
            Ok(g) => g,
            Err(e) => {
                self.init_error = Some(e);
                event_loop.exit();
                return;
            }
        };
        gfx.renderer
            .set_clear_color(Color::from(self.config.clear_color));

        // Call user setup — borrow ends before we move gfx into self.graphics
        {
            let mut ctx = AppContext {
                window: &window,
                window_size: self.window_size,
                renderer: Some(&mut gfx.renderer),
                exit_requested: false,
            };
            self.app.setup(&mut ctx);
            if ctx.exit_requested {
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
        self.graphics = Some(gfx);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        // Forward to the user callback first
        if let Some(window) = self.window.clone() {
            let mut ctx = AppContext {
                window: &window,
                window_size: self.window_size,
                renderer: self.graphics.as_mut().map(|g| &mut g.renderer),
                exit_requested: false,
            };
            self.app.on_window_event(&event, &mut ctx);
            if ctx.exit_requested {
                event_loop.exit();
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                let new_size = (size.width, size.height);
                if let Some(gfx) = &mut self.graphics {
                    gfx.resize(size.width, size.height);
                    self.window_size = new_size;
                }
                if let Some(window) = self.window.clone() {
                    if let Some(gfx) = &mut self.graphics {
                        let mut ctx = AppContext {
                            window: &window,
                            window_size: new_size,
                            renderer: Some(&mut gfx.renderer),
                            exit_requested: false,
                        };
                        self.app.on_resize(new_size, &mut ctx);
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(gfx), Some(window)) = (&mut self.graphics, &self.window) else {
            return;
        };

        // ── 1. UPDATE ────────────────────────────────────────────────────────
        {
            let mut ctx = AppContext {
                window,
                window_size: self.window_size,
                renderer: Some(&mut gfx.renderer),
                exit_requested: false,
            };
            self.app.update(&mut ctx);
            if ctx.exit_requested {
                event_loop.exit();
                return;
            }
        }

        // ── 2. RENDER ────────────────────────────────────────────────────────
        match gfx.render() {
            Ok(()) => {}
            // Stale swapchain; reconfiguring with the current size fixes it.
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = self.window_size;
                gfx.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("surface out of memory, exiting");
                event_loop.exit();
                return;
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("surface timeout, skipping frame");
            }
        }

        window.request_redraw();
    }
}

pub(crate) fn run_internal<A: BasaltApp + 'static>(
    config: AppConfig,
    materials: Vec<MaterialDescriptor>,
    app: A,
) -> anyhow::Result<()> {
    crate::logging::init(log::LevelFilter::Info);

    let mut runner = Runner::new(app, config, materials);
    let event_loop = EventLoop::new().context("creating event loop")?;
    // Poll = spin the loop as fast as possible; no sleeping between frames.
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop
        .run_app(&mut runner)
        .context("running event loop")?;

    match runner.init_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
