use crate::keycode::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButtonAction {
    Press,
    Release,
}

/// Application side of the window.
///
/// Every method is invoked from inside [`Window::poll_events`] on the polling
/// thread. Unimplemented methods ignore the event.
///
/// [`Window::poll_events`]: crate::Window::poll_events
#[allow(unused_variables)]
pub trait WindowHandler {
    fn on_draw(&mut self) {}

    fn on_window_size_changed(&mut self, width: i32, height: i32) {}

    fn on_mouse_position(&mut self, x: f64, y: f64) {}

    /// Raw motion while the pointer is locked.
    fn on_mouse_relative_position(&mut self, dx: f64, dy: f64) {}

    /// `button` is 1 for left, 2 for right and 3 for middle.
    fn on_mouse_button(&mut self, x: f64, y: f64, button: i32, action: MouseButtonAction) {}

    fn on_mouse_scroll(&mut self, x: f64, y: f64, dx: f64, dy: f64) {}

    fn on_touch_start(&mut self, id: i32, x: f64, y: f64) {}

    fn on_touch_update(&mut self, id: i32, x: f64, y: f64) {}

    fn on_touch_end(&mut self, id: i32, x: f64, y: f64) {}

    fn on_keyboard_text(&mut self, text: &str) {}

    fn on_keyboard(&mut self, key: KeyCode, action: KeyAction) {}

    fn on_paste(&mut self, text: &str) {}

    fn on_close(&mut self) {}
}
