//! Entry points for toolkit callbacks.
//!
//! Each function routes one native event to the current window. With no
//! current window the event is dropped and nothing is touched. A toolkit
//! backend registers thin `extern "C"` shims that convert the native arguments
//! and call these.

use log::debug;

use crate::handler::{KeyAction, MouseButtonAction};
use crate::keycode::{keysym, KeyCode};
use crate::window::current;

/// Toolkit button numbers for the wheel.
const SCROLL_UP: i32 = 4;
const SCROLL_DOWN: i32 = 5;

pub fn idle() {
    let Some(window) = current() else { return };

    window.gamepads.update();
    window.toolkit.post_redisplay();
}

pub fn display() {
    let Some(window) = current() else { return };

    window.with_handler(|handler| handler.on_draw());
}

pub fn reshape(width: i32, height: i32) {
    let Some(window) = current() else { return };

    let unchanged = {
        let state = window.state.borrow();
        state.width == width && state.height == height
    };

    if unchanged {
        return;
    }

    window.with_handler(|handler| handler.on_window_size_changed(width, height));

    let mut state = window.state();
    state.width = width;
    state.height = height;
}

pub fn mouse_position(x: f64, y: f64) {
    let Some(window) = current() else { return };

    window.with_handler(|handler| handler.on_mouse_position(x, y));
}

pub fn mouse_relative_position(dx: f64, dy: f64) {
    let Some(window) = current() else { return };

    window.with_handler(|handler| handler.on_mouse_relative_position(dx, dy));
}

/// Wheel buttons become scroll events; middle and right are swapped so the
/// application sees 2 as right and 3 as middle.
pub fn mouse_button(x: f64, y: f64, button: i32, action: MouseButtonAction) {
    let Some(window) = current() else { return };

    if button == SCROLL_UP || button == SCROLL_DOWN {
        let dy = if button == SCROLL_DOWN { -1.0 } else { 1.0 };
        window.with_handler(|handler| handler.on_mouse_scroll(x, y, 0.0, dy));
        return;
    }

    let button = match button {
        2 => 3,
        3 => 2,
        button => button,
    };

    window.with_handler(|handler| handler.on_mouse_button(x, y, button, action));
}

pub fn touch_start(touch: i32, x: f64, y: f64) {
    let Some(window) = current() else { return };

    let id = window.state().pointers.obtain(touch);
    window.with_handler(|handler| handler.on_touch_start(id, x, y));
}

pub fn touch_update(touch: i32, x: f64, y: f64) {
    let Some(window) = current() else { return };

    let id = window.state().pointers.obtain(touch);
    window.with_handler(|handler| handler.on_touch_update(id, x, y));
}

pub fn touch_end(touch: i32, x: f64, y: f64) {
    let Some(window) = current() else { return };

    let id = window.state().pointers.obtain(touch);
    window.with_handler(|handler| handler.on_touch_end(id, x, y));
    window.state().pointers.release(id);
}

/// Text produced by a key press. Tab, escape and the copy/paste control
/// characters are handled as keys and never reach the text handler.
pub fn keyboard_text(text: &str, action: KeyAction) {
    let Some(window) = current() else { return };

    if matches!(text, "\t" | "\x03" | "\x16" | "\x1b") {
        return;
    }

    if action == KeyAction::Release {
        return;
    }

    let text = if text == "\r" { "\n" } else { text };

    window.with_handler(|handler| handler.on_keyboard_text(text));
}

/// A key press identified by X11 keysym. Ctrl+V asks the toolkit for the
/// clipboard instead of being delivered as a key.
pub fn keyboard_special(sym: i32, action: KeyAction) {
    let Some(window) = current() else { return };

    let paste = {
        let mut state = window.state();

        if sym == keysym::Control_L {
            state.mod_ctrl = action != KeyAction::Release;
        }

        state.mod_ctrl && (sym == keysym::V || sym == keysym::v) && action == KeyAction::Press
    };

    if paste {
        debug!("Requesting clipboard paste");
        window.toolkit.request_paste();
        return;
    }

    let key = KeyCode::from_keysym(sym);
    window.with_handler(|handler| handler.on_keyboard(key, action));
}

pub fn paste(text: &str) {
    let Some(window) = current() else { return };

    window.with_handler(|handler| handler.on_paste(text));
}

/// Focus goes to the gamepad manager, which stops reading pads while the
/// window is in the background.
pub fn focus(focused: bool) {
    let Some(window) = current() else { return };

    let id = window.state.borrow().id;

    if let Some(id) = id {
        window.gamepads.on_window_focused(id, focused);
    }
}

pub fn close() {
    let Some(window) = current() else { return };

    window.with_handler(|handler| handler.on_close());
}
