//! Mock key injector for unit testing.
//!
//! Records every injected [`KeyStroke`] in order instead of calling the OS,
//! so tests can assert the exact chord that would have been sent.  A failing
//! variant lets tests exercise the best-effort error path.

use std::sync::Mutex;

use taskcorner_core::KeyStroke;

use crate::application::gesture::{GestureInjectionError, KeyInjector};

/// A mock injector that records all strokes without performing OS calls.
#[derive(Default)]
pub struct MockKeyInjector {
    strokes: Mutex<Vec<KeyStroke>>,
    should_fail: bool,
}

impl MockKeyInjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// An injector whose every call returns [`GestureInjectionError::Platform`].
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// All strokes injected so far, in order.
    pub fn strokes(&self) -> Vec<KeyStroke> {
        self.strokes.lock().unwrap().clone()
    }
}

impl KeyInjector for MockKeyInjector {
    fn send_keys(&self, strokes: &[KeyStroke]) -> Result<(), GestureInjectionError> {
        if self.should_fail {
            return Err(GestureInjectionError::Platform("mock failure".into()));
        }
        self.strokes.lock().unwrap().extend_from_slice(strokes);
        Ok(())
    }
}
