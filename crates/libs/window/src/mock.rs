//! Recording doubles for the toolkit, gamepads and application handler.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::handler::{KeyAction, MouseButtonAction, WindowHandler};
use crate::keycode::KeyCode;
use crate::toolkit::{GamepadManager, Toolkit, WindowId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    InitWindowSize(i32, i32),
    InitOpenGlEs2,
    CreateWindow(String),
    RegisterCallbacks,
    DestroyWindow(WindowId),
    Finish,
    ShowWindow,
    PollEvents,
    PostRedisplay,
    SetPointerLocked(bool),
    ToggleFullscreen,
    SwapBuffers,
    SwapInterval(i32),
    RequestPaste,
    SetClipboardText(String),
    SetWindowIcon(PathBuf),
}

#[derive(Default)]
pub struct MockToolkit {
    calls: RefCell<Vec<Call>>,
    next_id: Cell<i32>,
    pub fullscreen: Cell<bool>,
    pub fail_create: Cell<bool>,
}

impl MockToolkit {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl Toolkit for MockToolkit {
    fn init_window_size(&self, width: i32, height: i32) {
        self.record(Call::InitWindowSize(width, height));
    }

    fn init_opengl_es2(&self) {
        self.record(Call::InitOpenGlEs2);
    }

    fn create_window(&self, title: &str) -> Result<WindowId> {
        self.record(Call::CreateWindow(title.to_owned()));

        if self.fail_create.get() {
            return Err(Error::CreateWindow {
                title: title.to_owned(),
            });
        }

        self.next_id.set(self.next_id.get() + 1);
        Ok(WindowId(self.next_id.get()))
    }

    fn register_callbacks(&self) {
        self.record(Call::RegisterCallbacks);
    }

    fn destroy_window(&self, id: WindowId) {
        self.record(Call::DestroyWindow(id));
    }

    fn finish(&self) {
        self.record(Call::Finish);
    }

    fn show_window(&self) {
        self.record(Call::ShowWindow);
    }

    fn poll_events(&self) {
        self.record(Call::PollEvents);
    }

    fn post_redisplay(&self) {
        self.record(Call::PostRedisplay);
    }

    fn set_pointer_locked(&self, locked: bool) {
        self.record(Call::SetPointerLocked(locked));
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen.get()
    }

    fn toggle_fullscreen(&self) {
        self.record(Call::ToggleFullscreen);
        self.fullscreen.set(!self.fullscreen.get());
    }

    fn swap_buffers(&self) {
        self.record(Call::SwapBuffers);
    }

    fn swap_interval(&self, interval: i32) {
        self.record(Call::SwapInterval(interval));
    }

    fn request_paste(&self) {
        self.record(Call::RequestPaste);
    }

    fn set_clipboard_text(&self, text: &str) -> Result<()> {
        self.record(Call::SetClipboardText(text.to_owned()));
        Ok(())
    }

    fn set_window_icon(&self, path: &Path) -> Result<()> {
        self.record(Call::SetWindowIcon(path.to_owned()));
        Ok(())
    }
}

#[derive(Default)]
pub struct MockGamepads {
    pub added: RefCell<Vec<WindowId>>,
    pub updates: Cell<usize>,
    pub focus: RefCell<Vec<(WindowId, bool)>>,
}

impl GamepadManager for MockGamepads {
    fn add_window(&self, window: WindowId) {
        self.added.borrow_mut().push(window);
    }

    fn update(&self) {
        self.updates.set(self.updates.get() + 1);
    }

    fn on_window_focused(&self, window: WindowId, focused: bool) {
        self.focus.borrow_mut().push((window, focused));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Draw,
    Resize(i32, i32),
    MousePosition(f64, f64),
    MouseRelative(f64, f64),
    MouseButton(i32, MouseButtonAction),
    MouseScroll(f64, f64, f64, f64),
    TouchStart(i32, f64, f64),
    TouchUpdate(i32, f64, f64),
    TouchEnd(i32, f64, f64),
    Text(String),
    Key(KeyCode, KeyAction),
    Paste(String),
    Close,
}

/// Handler that appends every event to a shared log.
#[derive(Default, Clone)]
pub struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl WindowHandler for Recorder {
    fn on_draw(&mut self) {
        self.push(Event::Draw);
    }

    fn on_window_size_changed(&mut self, width: i32, height: i32) {
        self.push(Event::Resize(width, height));
    }

    fn on_mouse_position(&mut self, x: f64, y: f64) {
        self.push(Event::MousePosition(x, y));
    }

    fn on_mouse_relative_position(&mut self, dx: f64, dy: f64) {
        self.push(Event::MouseRelative(dx, dy));
    }

    fn on_mouse_button(&mut self, _x: f64, _y: f64, button: i32, action: MouseButtonAction) {
        self.push(Event::MouseButton(button, action));
    }

    fn on_mouse_scroll(&mut self, x: f64, y: f64, dx: f64, dy: f64) {
        self.push(Event::MouseScroll(x, y, dx, dy));
    }

    fn on_touch_start(&mut self, id: i32, x: f64, y: f64) {
        self.push(Event::TouchStart(id, x, y));
    }

    fn on_touch_update(&mut self, id: i32, x: f64, y: f64) {
        self.push(Event::TouchUpdate(id, x, y));
    }

    fn on_touch_end(&mut self, id: i32, x: f64, y: f64) {
        self.push(Event::TouchEnd(id, x, y));
    }

    fn on_keyboard_text(&mut self, text: &str) {
        self.push(Event::Text(text.to_owned()));
    }

    fn on_keyboard(&mut self, key: KeyCode, action: KeyAction) {
        self.push(Event::Key(key, action));
    }

    fn on_paste(&mut self, text: &str) {
        self.push(Event::Paste(text.to_owned()));
    }

    fn on_close(&mut self) {
        self.push(Event::Close);
    }
}
