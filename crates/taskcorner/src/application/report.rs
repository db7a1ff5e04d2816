//! User-visible error reporting.
//!
//! Every error is logged where it is caught.  The user is told about each
//! *kind* of error only once per run: a broken registry key would otherwise
//! pop a dialog on every corner visit.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::error;

/// Error categories surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The OS refused the global input hooks.
    HookInstall,
    /// The taskbar settings could not be read or written.
    StoreAccess,
    /// The gesture key sequence could not be injected.
    GestureInjection,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorKind::HookInstall => "input hook installation failed",
            ErrorKind::StoreAccess => "taskbar settings unavailable",
            ErrorKind::GestureInjection => "gesture injection failed",
        };
        f.write_str(text)
    }
}

/// Seam for showing a message to the user.
///
/// Implementations must not block the caller; reports can originate on the
/// hook thread.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: ErrorKind, message: &str);
}

/// Logs every error and forwards the first of each kind to a [`Notifier`].
pub struct ErrorReporter {
    notifier: Arc<dyn Notifier>,
    reported: Mutex<HashSet<ErrorKind>>,
}

impl ErrorReporter {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            reported: Mutex::new(HashSet::new()),
        }
    }

    /// Records `err` under `kind`.
    pub fn report(&self, kind: ErrorKind, err: &dyn fmt::Display) {
        error!(%kind, "{err}");

        let first = self
            .reported
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(kind);
        if first {
            self.notifier.notify(kind, &format!("{kind}: {err}"));
        }
    }

    /// Whether `kind` has been reported at least once.
    pub fn has_reported(&self, kind: ErrorKind) -> bool {
        self.reported
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::{always, eq};

    #[test]
    fn test_each_kind_reaches_notifier_once() {
        // Arrange
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(eq(ErrorKind::StoreAccess), always())
            .times(1)
            .return_const(());
        notifier
            .expect_notify()
            .with(eq(ErrorKind::GestureInjection), always())
            .times(1)
            .return_const(());
        let reporter = ErrorReporter::new(Arc::new(notifier));

        // Act
        for _ in 0..5 {
            reporter.report(ErrorKind::StoreAccess, &"registry key missing");
        }
        reporter.report(ErrorKind::GestureInjection, &"SendInput blocked");
        reporter.report(ErrorKind::GestureInjection, &"SendInput blocked");

        // Assert – mock expectations are verified on drop
        assert!(reporter.has_reported(ErrorKind::StoreAccess));
        assert!(!reporter.has_reported(ErrorKind::HookInstall));
    }

    #[test]
    fn test_notification_message_includes_kind_and_error() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|kind, msg| {
                *kind == ErrorKind::HookInstall
                    && msg.starts_with("input hook installation failed")
                    && msg.contains("access denied")
            })
            .times(1)
            .return_const(());
        let reporter = ErrorReporter::new(Arc::new(notifier));

        reporter.report(ErrorKind::HookInstall, &"access denied");
    }
}
