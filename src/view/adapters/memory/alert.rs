//! Alert adapter that records messages instead of showing them.

use crate::view::ports::Alert;
use std::cell::RefCell;

/// Alert that keeps every message for later inspection.
#[derive(Debug, Default)]
pub struct RecordingAlert {
    messages: RefCell<Vec<String>>,
}

impl RecordingAlert {
    /// Creates an alert with no recorded messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the messages shown so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Returns the most recent message.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }
}

impl Alert for RecordingAlert {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }
}
