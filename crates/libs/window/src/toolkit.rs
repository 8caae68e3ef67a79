use std::path::Path;

use crate::error::Result;

/// Native window id handed out by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub i32);

/// Calls the window makes into the native windowing toolkit.
///
/// The toolkit keeps one implicit current window, so none of these take a
/// window argument except creation and destruction. Callbacks registered by
/// [`register_callbacks`](Self::register_callbacks) must forward to the
/// functions in [`dispatch`](crate::dispatch).
pub trait Toolkit {
    fn init_window_size(&self, width: i32, height: i32);

    fn init_opengl_es2(&self);

    fn create_window(&self, title: &str) -> Result<WindowId>;

    fn register_callbacks(&self);

    fn destroy_window(&self, id: WindowId);

    /// Tears the toolkit down after the last window is gone.
    fn finish(&self);

    fn show_window(&self);

    fn poll_events(&self);

    fn post_redisplay(&self);

    fn set_pointer_locked(&self, locked: bool);

    fn is_fullscreen(&self) -> bool;

    fn toggle_fullscreen(&self);

    fn swap_buffers(&self);

    fn swap_interval(&self, interval: i32);

    /// Asks for the clipboard contents; they arrive later through
    /// [`dispatch::paste`](crate::dispatch::paste).
    fn request_paste(&self);

    fn set_clipboard_text(&self, text: &str) -> Result<()>;

    fn set_window_icon(&self, path: &Path) -> Result<()>;
}

/// Gamepad input collaborator driven alongside the window.
#[allow(unused_variables)]
pub trait GamepadManager {
    fn add_window(&self, window: WindowId) {}

    /// Called once per idle tick, before a redraw is requested.
    fn update(&self) {}

    fn on_window_focused(&self, window: WindowId, focused: bool) {}
}

/// A [`GamepadManager`] for builds without gamepad support.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoGamepads;

impl GamepadManager for NoGamepads {}
