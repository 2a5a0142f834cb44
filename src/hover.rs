//! Hover/leave tracking.
//!
//! Windows only sends `WM_MOUSEHOVER`/`WM_MOUSELEAVE` after a
//! `TrackMouseEvent` request, and each request yields one notification. The
//! tracker requests once per stretch of movement so a resting pointer does not
//! produce a stream of hover messages.

use tracing::debug;

use crate::platform::Platform;

#[derive(Debug, Default, Clone)]
pub struct HoverTracker {
    armed: bool,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Arm tracking if it is not armed yet.
    pub fn on_mouse_move<P: Platform + ?Sized>(&mut self, platform: &mut P) {
        if self.armed {
            return;
        }
        match platform.track_hover_and_leave() {
            Ok(()) => self.armed = true,
            Err(err) => debug!(%err, "hover tracking not armed"),
        }
    }

    /// A hover or leave notification arrived; the next move re-arms.
    pub fn reset(&mut self) {
        self.armed = false;
    }
}
