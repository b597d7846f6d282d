use basalt_renderer::Renderer;
use winit::window::Window;

/// Per-callback view of the running application.
///
/// Handed to every [`crate::BasaltApp`] hook.  The renderer is `None` only
/// for events delivered before the GPU is ready.
pub struct AppContext<'a> {
    pub window: &'a Window,
    /// Current physical window size in pixels.
    pub window_size: (u32, u32),
    pub renderer: Option<&'a mut Renderer>,
    pub(crate) exit_requested: bool,
}

impl AppContext<'_> {
    /// Asks the runner to leave the event loop after this callback returns.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }
}
