//! Conversions from the toolkit's C callback arguments.

#![cfg_attr(not(feature = "backend"), allow(dead_code))]

use std::borrow::Cow;
use std::ffi::CStr;
use std::os::raw::{c_char, c_int};
use std::slice;

use crate::handler::{KeyAction, MouseButtonAction};

pub(crate) fn key_action(action: c_int) -> KeyAction {
    match action {
        eglut::KEY_PRESS => KeyAction::Press,
        eglut::KEY_REPEAT => KeyAction::Repeat,
        _ => KeyAction::Release,
    }
}

pub(crate) fn mouse_button_action(action: c_int) -> MouseButtonAction {
    if action == eglut::MOUSE_PRESS {
        MouseButtonAction::Press
    } else {
        MouseButtonAction::Release
    }
}

pub(crate) fn focus_gained(action: c_int) -> bool {
    action == eglut::FOCUSED
}

/// Text of a key event, or `None` when the toolkit passed no buffer.
///
/// # Safety
///
/// A non-null `text` must point to a nul terminated string that outlives `'a`.
pub(crate) unsafe fn keyboard_text<'a>(text: *const c_char) -> Option<Cow<'a, str>> {
    if text.is_null() {
        return None;
    }

    Some(CStr::from_ptr(text).to_string_lossy())
}

/// Clipboard contents handed over as `(pointer, length)`. Invalid UTF-8 is
/// replaced; a null pointer or negative length reads as empty.
///
/// # Safety
///
/// A non-null `text` must point to at least `len` readable bytes that outlive
/// `'a`.
pub(crate) unsafe fn paste_text<'a>(text: *const c_char, len: c_int) -> Cow<'a, str> {
    match usize::try_from(len) {
        Ok(len) if !text.is_null() => {
            String::from_utf8_lossy(slice::from_raw_parts(text.cast::<u8>(), len))
        }
        _ => Cow::Borrowed(""),
    }
}
