use std::ffi::CStr;

use bitflags::bitflags;

mod ffi {
    pub use libc::{c_char, c_double, c_int};

    pub type IdleFunc = extern "C" fn();
    pub type DisplayFunc = extern "C" fn();
    pub type ReshapeFunc = extern "C" fn(c_int, c_int);
    pub type MouseFunc = extern "C" fn(c_int, c_int);
    pub type MouseButtonFunc = extern "C" fn(c_int, c_int, c_int, c_int);
    pub type MouseRawFunc = extern "C" fn(c_double, c_double);
    pub type TouchFunc = extern "C" fn(c_int, c_double, c_double);
    //the text is a nul terminated char[5]
    pub type KeyboardFunc = extern "C" fn(*mut c_char, c_int);
    pub type SpecialFunc = extern "C" fn(c_int, c_int);
    pub type PasteFunc = extern "C" fn(*const c_char, c_int);
    pub type FocusFunc = extern "C" fn(c_int);
    pub type CloseWindowFunc = extern "C" fn();

    #[cfg_attr(feature = "link", link(name = "eglut"))]
    #[allow(non_snake_case)]
    extern "C" {
        pub fn eglutInitWindowSize(width: c_int, height: c_int);
        pub fn eglutInitAPIMask(mask: c_int);
        pub fn eglutCreateWindow(title: *const c_char) -> c_int;
        pub fn eglutDestroyWindow(win: c_int);
        pub fn eglutFini();
        pub fn eglutShowWindow();
        pub fn eglutPollEvents();
        pub fn eglutPostRedisplay();
        pub fn eglutGet(state: c_int) -> c_int;
        pub fn eglutToggleFullscreen();
        pub fn eglutSetMousePointerLocked(locked: c_int);
        pub fn eglutSwapBuffers();
        pub fn eglutSwapInterval(interval: c_int);
        pub fn eglutRequestPaste();
        pub fn eglutSetClipboardText(text: *const c_char);
        pub fn eglutSetWindowIcon(path: *const c_char);

        pub fn eglutIdleFunc(func: IdleFunc);
        pub fn eglutDisplayFunc(func: DisplayFunc);
        pub fn eglutReshapeFunc(func: ReshapeFunc);
        pub fn eglutMouseFunc(func: MouseFunc);
        pub fn eglutMouseButtonFunc(func: MouseButtonFunc);
        pub fn eglutMouseRawFunc(func: MouseRawFunc);
        pub fn eglutTouchStartFunc(func: TouchFunc);
        pub fn eglutTouchUpdateFunc(func: TouchFunc);
        pub fn eglutTouchEndFunc(func: TouchFunc);
        pub fn eglutKeyboardFunc(func: KeyboardFunc);
        pub fn eglutSpecialFunc(func: SpecialFunc);
        pub fn eglutPasteFunc(func: PasteFunc);
        pub fn eglutFocusFunc(func: FocusFunc);
        pub fn eglutCloseWindowFunc(func: CloseWindowFunc);
    }
}

pub use ffi::{
    CloseWindowFunc, DisplayFunc, FocusFunc, IdleFunc, KeyboardFunc, MouseButtonFunc, MouseFunc,
    MouseRawFunc, PasteFunc, ReshapeFunc, SpecialFunc, TouchFunc,
};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ApiMask: i32 {
        const OPENGL = 0x01;
        const OPENGL_ES1 = 0x02;
        const OPENGL_ES2 = 0x04;
        const OPENVG = 0x08;
    }
}

// eglutGet
pub const ELAPSED_TIME: i32 = 0;
pub const FULLSCREEN_MODE: i32 = 1;

pub const WINDOWED: i32 = 0;
pub const FULLSCREEN: i32 = 1;

pub const POINTER_UNLOCKED: i32 = 0;
pub const POINTER_LOCKED: i32 = 1;

pub const MOUSE_PRESS: i32 = 0;
pub const MOUSE_RELEASE: i32 = 1;

pub const KEY_PRESS: i32 = 0;
pub const KEY_RELEASE: i32 = 1;
pub const KEY_REPEAT: i32 = 2;

pub const FOCUSED: i32 = 0;
pub const NOT_FOCUSED: i32 = 1;

pub type Window = i32;

pub fn init_window_size(width: i32, height: i32) {
    unsafe { ffi::eglutInitWindowSize(width, height) };
}

pub fn init_api_mask(mask: ApiMask) {
    unsafe { ffi::eglutInitAPIMask(mask.bits()) };
}

pub fn create_window(title: &CStr) -> Window {
    unsafe { ffi::eglutCreateWindow(title.as_ptr()) }
}

pub fn destroy_window(window: Window) {
    unsafe { ffi::eglutDestroyWindow(window) };
}

pub fn fini() {
    unsafe { ffi::eglutFini() };
}

pub fn show_window() {
    unsafe { ffi::eglutShowWindow() };
}

pub fn poll_events() {
    unsafe { ffi::eglutPollEvents() };
}

pub fn post_redisplay() {
    unsafe { ffi::eglutPostRedisplay() };
}

pub fn get(state: i32) -> i32 {
    unsafe { ffi::eglutGet(state) }
}

pub fn toggle_fullscreen() {
    unsafe { ffi::eglutToggleFullscreen() };
}

pub fn set_mouse_pointer_locked(locked: bool) {
    let mode = if locked { POINTER_LOCKED } else { POINTER_UNLOCKED };

    unsafe { ffi::eglutSetMousePointerLocked(mode) };
}

pub fn swap_buffers() {
    unsafe { ffi::eglutSwapBuffers() };
}

pub fn swap_interval(interval: i32) {
    unsafe { ffi::eglutSwapInterval(interval) };
}

pub fn request_paste() {
    unsafe { ffi::eglutRequestPaste() };
}

pub fn set_clipboard_text(text: &CStr) {
    unsafe { ffi::eglutSetClipboardText(text.as_ptr()) };
}

pub fn set_window_icon(path: &CStr) {
    unsafe { ffi::eglutSetWindowIcon(path.as_ptr()) };
}

pub fn idle_func(func: IdleFunc) {
    unsafe { ffi::eglutIdleFunc(func) };
}

pub fn display_func(func: DisplayFunc) {
    unsafe { ffi::eglutDisplayFunc(func) };
}

pub fn reshape_func(func: ReshapeFunc) {
    unsafe { ffi::eglutReshapeFunc(func) };
}

pub fn mouse_func(func: MouseFunc) {
    unsafe { ffi::eglutMouseFunc(func) };
}

pub fn mouse_button_func(func: MouseButtonFunc) {
    unsafe { ffi::eglutMouseButtonFunc(func) };
}

pub fn mouse_raw_func(func: MouseRawFunc) {
    unsafe { ffi::eglutMouseRawFunc(func) };
}

pub fn touch_start_func(func: TouchFunc) {
    unsafe { ffi::eglutTouchStartFunc(func) };
}

pub fn touch_update_func(func: TouchFunc) {
    unsafe { ffi::eglutTouchUpdateFunc(func) };
}

pub fn touch_end_func(func: TouchFunc) {
    unsafe { ffi::eglutTouchEndFunc(func) };
}

pub fn keyboard_func(func: KeyboardFunc) {
    unsafe { ffi::eglutKeyboardFunc(func) };
}

pub fn special_func(func: SpecialFunc) {
    unsafe { ffi::eglutSpecialFunc(func) };
}

pub fn paste_func(func: PasteFunc) {
    unsafe { ffi::eglutPasteFunc(func) };
}

pub fn focus_func(func: FocusFunc) {
    unsafe { ffi::eglutFocusFunc(func) };
}

pub fn close_window_func(func: CloseWindowFunc) {
    unsafe { ffi::eglutCloseWindowFunc(func) };
}
