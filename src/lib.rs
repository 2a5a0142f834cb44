//! # Draw Circle
//!
//! A single window that draws an ellipse while the user drags the mouse,
//! rendered with Direct2D.
//!
//! Everything except the `gui` shell is platform-neutral: the controller
//! talks to the window system through [`platform::Platform`] and to the
//! graphics device through [`resources::GraphicsBackend`].

pub mod colors;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod dpi;
pub mod drag;
pub mod error;
pub mod event;
pub mod event_loop;
pub mod hover;
pub mod logging;
pub mod platform;
pub mod resources;
pub mod shape;

#[cfg(all(windows, feature = "gui"))]
pub mod gui;

pub use config::Config;
pub use controller::WindowController;
pub use dispatch::{Dispatcher, MessageHandler, Response};
pub use error::{GraphicsError, StartupError};
