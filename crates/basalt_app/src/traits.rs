use crate::context::AppContext;

/// The trait every basalt application implements.
///
/// All methods have empty default implementations, so a minimal app needs
/// zero overrides; a typical viewer implements `setup` to register meshes
/// and maybe `update` to rewrite materials per frame.
#[allow(unused_variables)]
pub trait BasaltApp {
    /// Called once after the window and GPU are ready.
    ///
    /// Use this to add meshes to the renderer's draw list.
    fn setup(&mut self, ctx: &mut AppContext) {}

    /// Called every frame before rendering.
    fn update(&mut self, ctx: &mut AppContext) {}

    /// Called whenever the window is resized.  The runner has already
    /// reconfigured the swapchain with the new dimensions.
    fn on_resize(&mut self, new_size: (u32, u32), ctx: &mut AppContext) {}

    /// Called for every raw winit `WindowEvent`.
    ///
    /// Use this for keyboard shortcuts, drag-and-drop, or any event not
    /// covered by the other hooks.
    fn on_window_event(&mut self, event: &winit::event::WindowEvent, ctx: &mut AppContext) {}
}
