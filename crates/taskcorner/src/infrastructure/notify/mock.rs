//! Recording notifier for unit tests.

use std::sync::Mutex;

use crate::application::report::{ErrorKind, Notifier};

/// Records every notification instead of showing it.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(ErrorKind, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kinds notified so far, in order.
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.messages.lock().unwrap().iter().map(|(k, _)| *k).collect()
    }

    pub fn messages(&self) -> Vec<(ErrorKind, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: ErrorKind, message: &str) {
        self.messages.lock().unwrap().push((kind, message.to_string()));
    }
}
