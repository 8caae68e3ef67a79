use std::cell::{RefCell, RefMut};
use std::path::Path;
use std::rc::{Rc, Weak};

use log::{debug, info, warn};

use crate::attributes::{GraphicsApi, WindowAttributes};
use crate::error::Result;
use crate::handler::WindowHandler;
use crate::toolkit::{GamepadManager, Toolkit, WindowId};
use crate::touch::TouchPointers;

thread_local! {
    // Toolkit callbacks carry no context pointer, so they find their window here.
    static CURRENT: RefCell<Option<Weak<Shared>>> = const { RefCell::new(None) };
}

pub(crate) struct State {
    pub(crate) title: String,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) graphics_api: GraphicsApi,
    pub(crate) id: Option<WindowId>,
    pub(crate) cursor_disabled: bool,
    pub(crate) mod_ctrl: bool,
    pub(crate) pointers: TouchPointers,
}

/// The part of a window reachable from toolkit callbacks.
pub(crate) struct Shared {
    pub(crate) state: RefCell<State>,
    handler: RefCell<Box<dyn WindowHandler>>,
    pub(crate) toolkit: Rc<dyn Toolkit>,
    pub(crate) gamepads: Rc<dyn GamepadManager>,
}

impl Shared {
    /// Runs `f` against the application handler.
    ///
    /// A handler that pumps events from inside a callback would alias itself;
    /// the nested event is dropped instead.
    pub(crate) fn with_handler(&self, f: impl FnOnce(&mut dyn WindowHandler)) {
        match self.handler.try_borrow_mut() {
            Ok(mut handler) => f(handler.as_mut()),
            Err(_) => warn!("Dropped window event delivered while its handler was running"),
        }
    }

    pub(crate) fn state(&self) -> RefMut<'_, State> {
        self.state.borrow_mut()
    }
}

/// Returns the window that toolkit callbacks are routed to, if any.
pub(crate) fn current() -> Option<Rc<Shared>> {
    CURRENT.with(|current| current.borrow().as_ref().and_then(Weak::upgrade))
}

fn set_current(shared: Option<&Rc<Shared>>) {
    CURRENT.with(|current| *current.borrow_mut() = shared.map(Rc::downgrade));
}

fn is_current(shared: &Rc<Shared>) -> bool {
    CURRENT.with(|current| {
        current
            .borrow()
            .as_ref()
            .is_some_and(|weak| Weak::ptr_eq(weak, &Rc::downgrade(shared)))
    })
}

/// A native toolkit window.
///
/// Only one window receives events at a time: the one most recently shown.
/// The type is `!Send`; create, poll and drop it on one thread.
pub struct Window {
    shared: Rc<Shared>,
}

impl Window {
    /// Creates the native window and registers the toolkit callbacks.
    ///
    /// The window does not receive events until [`show`](Self::show) is called.
    pub fn new(
        attributes: WindowAttributes,
        toolkit: Rc<dyn Toolkit>,
        gamepads: Rc<dyn GamepadManager>,
        handler: impl WindowHandler + 'static,
    ) -> Result<Self> {
        let WindowAttributes {
            title,
            width,
            height,
            graphics_api,
        } = attributes;

        toolkit.init_window_size(width, height);

        if graphics_api == GraphicsApi::OpenGlEs2 {
            toolkit.init_opengl_es2();
        }

        let id = toolkit.create_window(&title)?;

        toolkit.register_callbacks();

        info!("Created window \"{}\" ({}x{}, {:?})", title, width, height, graphics_api);

        let state = State {
            title,
            width,
            height,
            graphics_api,
            id: Some(id),
            cursor_disabled: false,
            mod_ctrl: false,
            pointers: TouchPointers::new(),
        };

        let shared = Rc::new(Shared {
            state: RefCell::new(state),
            handler: RefCell::new(Box::new(handler)),
            toolkit,
            gamepads,
        });

        Ok(Self { shared })
    }

    /// Shows the window and routes all toolkit events to it.
    pub fn show(&mut self) {
        self.shared.toolkit.show_window();

        set_current(Some(&self.shared));

        let id = self.shared.state.borrow().id;

        if let Some(id) = id {
            debug!("Showing window {:?}", id);
            self.shared.gamepads.add_window(id);
        }
    }

    /// Destroys the current window and shuts the toolkit down.
    ///
    /// This acts on the window events are routed to, which is only `self` if
    /// `self` was the last window shown. Without a current window it falls
    /// back to `self`.
    pub fn close(&mut self) {
        let target = match current() {
            Some(current) => {
                if !Rc::ptr_eq(&current, &self.shared) {
                    warn!("Closing a window that is not current closes the current one instead");
                }
                current
            }
            None => Rc::clone(&self.shared),
        };

        let id = target.state().id.take();

        if let Some(id) = id {
            debug!("Closing window {:?}", id);
            target.toolkit.destroy_window(id);
        }

        target.toolkit.finish();
    }

    /// Pumps the toolkit once, delivering queued events to the current window.
    pub fn poll_events(&self) {
        self.shared.toolkit.poll_events();
    }

    pub fn set_icon(&self, path: impl AsRef<Path>) -> Result<()> {
        self.shared.toolkit.set_window_icon(path.as_ref())
    }

    pub fn set_cursor_disabled(&mut self, disabled: bool) {
        self.shared.state().cursor_disabled = disabled;
        self.shared.toolkit.set_pointer_locked(disabled);
    }

    pub fn set_fullscreen(&self, fullscreen: bool) {
        let toolkit = &self.shared.toolkit;

        if toolkit.is_fullscreen() != fullscreen {
            toolkit.toggle_fullscreen();
        }
    }

    pub fn swap_buffers(&self) {
        self.shared.toolkit.swap_buffers();
    }

    pub fn set_swap_interval(&self, interval: i32) {
        self.shared.toolkit.swap_interval(interval);
    }

    pub fn set_clipboard_text(&self, text: &str) -> Result<()> {
        self.shared.toolkit.set_clipboard_text(text)
    }

    /// Last size reported by the toolkit.
    pub fn window_size(&self) -> (i32, i32) {
        let state = self.shared.state.borrow();
        (state.width, state.height)
    }

    pub fn title(&self) -> String {
        self.shared.state.borrow().title.clone()
    }

    pub fn graphics_api(&self) -> GraphicsApi {
        self.shared.state.borrow().graphics_api
    }

    /// `None` once the native window has been destroyed.
    pub fn id(&self) -> Option<WindowId> {
        self.shared.state.borrow().id
    }

    pub fn is_cursor_disabled(&self) -> bool {
        self.shared.state.borrow().cursor_disabled
    }

    pub fn is_current(&self) -> bool {
        is_current(&self.shared)
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        if is_current(&self.shared) {
            set_current(None);
        }

        let id = self.shared.state().id.take();

        if let Some(id) = id {
            self.shared.toolkit.destroy_window(id);
        }
    }
}
