//! Window adapter over an embedded windowing toolkit.
//!
//! The toolkit registers context-free callbacks, so exactly one [`Window`] can
//! receive events at a time: whichever was last [`shown`](Window::show). Events
//! are delivered on the thread calling [`Window::poll_events`] and forwarded to
//! that window's [`WindowHandler`].

mod attributes;
mod error;
mod handler;
mod keycode;
mod native;
mod toolkit;
mod touch;
mod window;

pub mod dispatch;
pub mod logger;

#[cfg(feature = "backend")]
pub mod backend;

#[cfg(test)]
mod mock;

pub use attributes::{GraphicsApi, WindowAttributes};
pub use error::{Error, Result};
pub use handler::{KeyAction, MouseButtonAction, WindowHandler};
pub use keycode::{keysym, KeyCode};
pub use toolkit::{GamepadManager, NoGamepads, Toolkit, WindowId};
pub use touch::{TouchPointers, MAX_TOUCH_POINTERS};
pub use window::Window;
