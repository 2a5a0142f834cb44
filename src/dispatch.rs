//! Generic message dispatch.
//!
//! The window procedure owns a `Dispatcher`, which owns whatever implements
//! `MessageHandler`. The dispatcher decodes raw messages, forwards the ones
//! the handler understands and tells the caller when to fall back to default
//! processing.

use tracing::trace;

use crate::event::{Message, RawMessage};
use crate::platform::Platform;

/// How the window procedure should answer a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Processed; return 0.
    Handled,
    /// Refuse the message; for `WM_CREATE` this makes window creation fail.
    Fail,
    /// Let the system's default window procedure process it.
    Default,
}

impl Response {
    /// The `LRESULT` value for handled or failed messages.
    pub fn lresult(self) -> Option<isize> {
        match self {
            Response::Handled => Some(0),
            Response::Fail => Some(-1),
            Response::Default => None,
        }
    }
}

/// Window-specific message handling.
pub trait MessageHandler {
    fn handle(&mut self, platform: &mut dyn Platform, message: Message) -> Response;
}

pub struct Dispatcher {
    handler: Box<dyn MessageHandler>,
}

impl Dispatcher {
    pub fn new(handler: Box<dyn MessageHandler>) -> Self {
        Self { handler }
    }

    pub fn dispatch(&mut self, platform: &mut dyn Platform, message: Message) -> Response {
        trace!(?message, "dispatch");
        self.handler.handle(platform, message)
    }

    /// Decode and dispatch.
    pub fn dispatch_raw(&mut self, platform: &mut dyn Platform, raw: RawMessage) -> Response {
        match Message::decode(raw) {
            Some(message) => self.dispatch(platform, message),
            None => Response::Default,
        }
    }
}
