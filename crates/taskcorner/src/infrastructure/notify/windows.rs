//! Message box notifier.
//!
//! `MessageBoxW` blocks until dismissed, and reports can originate on the
//! hook thread, so each box is shown from its own short-lived thread.

#![cfg(target_os = "windows")]

use std::thread;

use tracing::warn;
use windows::core::{w, HSTRING};
use windows::Win32::UI::WindowsAndMessaging::{
    MessageBoxW, MB_ICONWARNING, MB_OK, MB_SETFOREGROUND, MB_TOPMOST,
};

use crate::application::report::{ErrorKind, Notifier};

/// Shows each notification in a top-most warning dialog.
#[derive(Debug, Default)]
pub struct MessageBoxNotifier;

impl Notifier for MessageBoxNotifier {
    fn notify(&self, kind: ErrorKind, message: &str) {
        let text = HSTRING::from(message);
        let spawned = thread::Builder::new()
            .name("taskcorner-notify".to_string())
            .spawn(move || {
                // SAFETY: Both strings are NUL-terminated and outlive the call.
                unsafe {
                    MessageBoxW(
                        None,
                        &text,
                        w!("TaskCorner"),
                        MB_OK | MB_ICONWARNING | MB_TOPMOST | MB_SETFOREGROUND,
                    );
                }
            });
        if let Err(e) = spawned {
            warn!(%kind, "could not show notification: {e}");
        }
    }
}
