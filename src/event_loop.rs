//! Blocking message loop.
//!
//! One message is fetched, delivered and fully handled before the next fetch.
//! The loop ends when the pump reports a quit message.

use tracing::{debug, error};

/// Exit code used when the message source itself fails.
pub const FETCH_FAILED_EXIT_CODE: i32 = 1;

/// What a blocking fetch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched<M> {
    Message(M),
    /// A quit was posted with this exit code.
    Quit(i32),
    Failed(String),
}

/// Source and sink of window messages.
pub trait MessagePump {
    type Message;

    /// Block until the next message is available.
    fn fetch(&mut self) -> Fetched<Self::Message>;

    /// Hand a message to its window for synchronous handling.
    fn deliver(&mut self, message: Self::Message);
}

/// Run until quit and return the process exit code.
pub fn run<P: MessagePump>(pump: &mut P) -> i32 {
    let mut delivered: u64 = 0;
    loop {
        match pump.fetch() {
            Fetched::Message(message) => {
                pump.deliver(message);
                delivered += 1;
            }
            Fetched::Quit(code) => {
                debug!(code, delivered, "quit received");
                return code;
            }
            Fetched::Failed(reason) => {
                error!(%reason, "message retrieval failed");
                return FETCH_FAILED_EXIT_CODE;
            }
        }
    }
}
