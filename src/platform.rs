//! Window-system services the controller calls back into.
//!
//! The Win32 shell implements this over a live `HWND`; tests implement it with
//! a recorder.

use thiserror::Error;

use crate::shape::PixelSize;

/// A window-system call that reported failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{call} failed: {message}")]
pub struct PlatformError {
    pub call: &'static str,
    pub message: String,
}

impl PlatformError {
    pub fn new(call: &'static str, message: impl Into<String>) -> Self {
        Self { call, message: message.into() }
    }
}

pub trait Platform {
    /// Current client-area size in physical pixels.
    fn client_size(&self) -> PixelSize;

    /// Add the whole client area to the update region.
    fn invalidate(&mut self);

    /// Open the paint bracket for a paint request.
    fn begin_paint(&mut self);

    /// Close the paint bracket, validating the update region.
    fn end_paint(&mut self);

    /// Route all mouse input to this window until released.
    fn set_capture(&mut self);

    fn release_capture(&mut self);

    /// Ask for a single hover-or-leave notification.
    fn track_hover_and_leave(&mut self) -> Result<(), PlatformError>;

    fn set_title(&mut self, title: &str);

    /// Make the event loop stop with `exit_code`.
    fn post_quit(&mut self, exit_code: i32);
}
