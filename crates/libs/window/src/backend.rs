//! EGLUT toolkit binding.

use std::ffi::CString;
use std::os::raw::{c_char, c_double, c_int};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::error::{Error, Result};
use crate::toolkit::{Toolkit, WindowId};
use crate::{dispatch, native};

/// The process-wide EGLUT instance.
#[derive(Debug, Default, Clone, Copy)]
pub struct Eglut;

impl Toolkit for Eglut {
    fn init_window_size(&self, width: i32, height: i32) {
        eglut::init_window_size(width, height);
    }

    fn init_opengl_es2(&self) {
        eglut::init_api_mask(eglut::ApiMask::OPENGL_ES2);
    }

    fn create_window(&self, title: &str) -> Result<WindowId> {
        let c_title = CString::new(title)?;

        let window = eglut::create_window(&c_title);

        if window < 0 {
            return Err(Error::CreateWindow {
                title: title.to_owned(),
            });
        }

        Ok(WindowId(window))
    }

    fn register_callbacks(&self) {
        eglut::idle_func(idle);
        eglut::display_func(display);
        eglut::reshape_func(reshape);
        eglut::mouse_func(mouse);
        eglut::mouse_button_func(mouse_button);
        eglut::mouse_raw_func(mouse_raw);
        eglut::touch_start_func(touch_start);
        eglut::touch_update_func(touch_update);
        eglut::touch_end_func(touch_end);
        eglut::keyboard_func(keyboard);
        eglut::special_func(special);
        eglut::paste_func(paste);
        eglut::focus_func(focus);
        eglut::close_window_func(close_window);
    }

    fn destroy_window(&self, id: WindowId) {
        eglut::destroy_window(id.0);
    }

    fn finish(&self) {
        eglut::fini();
    }

    fn show_window(&self) {
        eglut::show_window();
    }

    fn poll_events(&self) {
        eglut::poll_events();
    }

    fn post_redisplay(&self) {
        eglut::post_redisplay();
    }

    fn set_pointer_locked(&self, locked: bool) {
        eglut::set_mouse_pointer_locked(locked);
    }

    fn is_fullscreen(&self) -> bool {
        eglut::get(eglut::FULLSCREEN_MODE) == eglut::FULLSCREEN
    }

    fn toggle_fullscreen(&self) {
        eglut::toggle_fullscreen();
    }

    fn swap_buffers(&self) {
        eglut::swap_buffers();
    }

    fn swap_interval(&self, interval: i32) {
        eglut::swap_interval(interval);
    }

    fn request_paste(&self) {
        eglut::request_paste();
    }

    fn set_clipboard_text(&self, text: &str) -> Result<()> {
        let text = CString::new(text)?;
        eglut::set_clipboard_text(&text);
        Ok(())
    }

    fn set_window_icon(&self, path: &Path) -> Result<()> {
        let path = CString::new(path.as_os_str().as_bytes())?;
        eglut::set_window_icon(&path);
        Ok(())
    }
}

extern "C" fn idle() {
    dispatch::idle();
}

extern "C" fn display() {
    dispatch::display();
}

extern "C" fn reshape(width: c_int, height: c_int) {
    dispatch::reshape(width, height);
}

extern "C" fn mouse(x: c_int, y: c_int) {
    dispatch::mouse_position(x as f64, y as f64);
}

extern "C" fn mouse_raw(dx: c_double, dy: c_double) {
    dispatch::mouse_relative_position(dx, dy);
}

extern "C" fn mouse_button(x: c_int, y: c_int, button: c_int, action: c_int) {
    dispatch::mouse_button(x as f64, y as f64, button, native::mouse_button_action(action));
}

extern "C" fn touch_start(id: c_int, x: c_double, y: c_double) {
    dispatch::touch_start(id, x, y);
}

extern "C" fn touch_update(id: c_int, x: c_double, y: c_double) {
    dispatch::touch_update(id, x, y);
}

extern "C" fn touch_end(id: c_int, x: c_double, y: c_double) {
    dispatch::touch_end(id, x, y);
}

extern "C" fn keyboard(text: *mut c_char, action: c_int) {
    let Some(text) = (unsafe { native::keyboard_text(text) }) else { return };

    dispatch::keyboard_text(&text, native::key_action(action));
}

extern "C" fn special(key: c_int, action: c_int) {
    dispatch::keyboard_special(key, native::key_action(action));
}

extern "C" fn paste(text: *const c_char, len: c_int) {
    let text = unsafe { native::paste_text(text, len) };

    dispatch::paste(&text);
}

extern "C" fn focus(action: c_int) {
    dispatch::focus(native::focus_gained(action));
}

extern "C" fn close_window() {
    dispatch::close();
}
