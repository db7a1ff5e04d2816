//! Global input hook infrastructure.
//!
//! On Windows, this installs low-level mouse and keyboard hooks
//! (`WH_MOUSE_LL`, `WH_KEYBOARD_LL`) on a dedicated Win32 message loop
//! thread.  Native events are normalized to [`InputEvent`]s and handed to
//! every subscriber synchronously on that thread.
//!
//! # Windows-Specific Implementation
//!
//! The hook callbacks must complete within the system's low-level hook
//! timeout or Windows silently removes the hook.  Subscribers must therefore
//! stay short.  Events are only observed: every event is passed on to the
//! next hook in the chain whatever the subscribers do.
//!
//! # Testability
//!
//! The [`HookSource`] trait allows unit tests to drive subscribers with
//! synthetic events via [`mock::MockHookSource`].

use std::sync::Arc;

use taskcorner_core::InputEvent;

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

/// Callback receiving every observed event.
pub type InputHandler = Arc<dyn Fn(&InputEvent) + Send + Sync>;

/// Error type for hook installation.
#[derive(Debug, thiserror::Error)]
pub enum HookInstallError {
    #[error("failed to install mouse hook: {0}")]
    MouseHookInstallFailed(String),
    #[error("failed to install keyboard hook: {0}")]
    KeyboardHookInstallFailed(String),
    #[error("failed to start hook thread: {0}")]
    ThreadStart(String),
    #[error("input hooks are already installed in this process")]
    AlreadyInstalled,
    #[error("platform not supported: {0}")]
    UnsupportedPlatform(String),
}

/// Capability for observing global input.
pub trait HookSource: Send {
    /// Registers a handler for every subsequent event.
    fn subscribe(&mut self, handler: InputHandler);

    /// Installs the pointer and keyboard hooks.
    ///
    /// On failure nothing stays installed.
    fn install(&mut self) -> Result<(), HookInstallError>;

    /// Removes all installed hooks.  Idempotent; never fails.  A hook the OS
    /// refuses to release is logged as a leak.
    fn teardown(&mut self);

    fn is_installed(&self) -> bool;
}
