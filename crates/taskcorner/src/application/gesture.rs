//! Gesture synthesis: the key injection seam and the Task View chord.

use taskcorner_core::{task_view_sequence, KeyStroke};
use thiserror::Error;

/// Error type for synthesized input.
#[derive(Debug, Error)]
pub enum GestureInjectionError {
    #[error("platform error: {0}")]
    Platform(String),
    #[error("only {sent} of {expected} key events were accepted")]
    Partial { sent: u32, expected: u32 },
}

/// Injects raw key transitions into the OS input stream.
pub trait KeyInjector: Send + Sync {
    /// Injects `strokes` in order.
    fn send_keys(&self, strokes: &[KeyStroke]) -> Result<(), GestureInjectionError>;
}

/// Presses `Win+Tab`, opening Task View.
///
/// # Errors
///
/// Propagates the injector's [`GestureInjectionError`].
pub fn open_task_view(injector: &dyn KeyInjector) -> Result<(), GestureInjectionError> {
    injector.send_keys(&task_view_sequence())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::gesture::mock::MockKeyInjector;
    use taskcorner_core::{VK_LWIN, VK_TAB};

    #[test]
    fn test_open_task_view_sends_chord_in_order() {
        let injector = MockKeyInjector::new();

        open_task_view(&injector).expect("mock injection succeeds");

        assert_eq!(
            injector.strokes(),
            vec![
                KeyStroke::press(VK_LWIN),
                KeyStroke::press(VK_TAB),
                KeyStroke::release(VK_TAB),
                KeyStroke::release(VK_LWIN),
            ]
        );
    }

    #[test]
    fn test_open_task_view_propagates_failure() {
        let injector = MockKeyInjector::failing();
        assert!(open_task_view(&injector).is_err());
        assert!(injector.strokes().is_empty());
    }
}
