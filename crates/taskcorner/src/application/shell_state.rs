//! ShellStateStore: capture-once / restore-last management of the taskbar
//! auto-hide preference.
//!
//! # Lifecycle
//!
//! The first mutation ([`ShellStateStore::arm`] at start-up, or the first
//! [`ShellStateStore::suspend`] if arming is disabled) records the value the
//! user had before TaskCorner touched anything.  That captured value is never
//! overwritten, however many suspend/restore cycles follow, and it is what
//! [`ShellStateStore::restore_original`] writes back on exit.
//!
//! Every write is followed by a shell notification; without it Explorer
//! would only pick up the change after a restart.

use std::sync::{Arc, OnceLock};

use taskcorner_core::{AutoHideSetting, RecordError, TaskbarRecord};
use thiserror::Error;
use tracing::{debug, info};

/// Error type for taskbar settings access.
#[derive(Debug, Error)]
pub enum StoreAccessError {
    #[error("cannot open taskbar settings: {0}")]
    Open(String),
    #[error("cannot read taskbar settings: {0}")]
    Read(String),
    #[error("cannot write taskbar settings: {0}")]
    Write(String),
    #[error("taskbar settings have an unexpected shape: {0}")]
    Malformed(#[from] RecordError),
}

/// Access to the persisted taskbar record and the shell broadcast.
///
/// The Windows implementation uses the registry and `SHAppBarMessage`; tests
/// use [`crate::infrastructure::shell::mock::MockShellBackend`].
pub trait ShellBackend: Send + Sync {
    /// Reads the raw settings record.
    fn read_record(&self) -> Result<Vec<u8>, StoreAccessError>;

    /// Replaces the raw settings record.
    fn write_record(&self, bytes: &[u8]) -> Result<(), StoreAccessError>;

    /// Tells the shell the auto-hide state changed.
    ///
    /// May pump messages on the calling thread, so hook callbacks can run
    /// inside it.
    fn notify(&self, setting: AutoHideSetting);
}

/// Owns the captured original flag byte and mediates every write.
///
/// All operations take `&self`: the store is shared between the hook thread
/// and the exit path, and `captured_original` is a write-once cell.
pub struct ShellStateStore {
    backend: Arc<dyn ShellBackend>,
    captured_original: OnceLock<u8>,
}

impl ShellStateStore {
    pub fn new(backend: Arc<dyn ShellBackend>) -> Self {
        Self {
            backend,
            captured_original: OnceLock::new(),
        }
    }

    /// The user's pre-run flag byte, once captured.
    pub fn captured_original(&self) -> Option<u8> {
        self.captured_original.get().copied()
    }

    /// Pins the taskbar (always-on-top) for the duration of the gesture.
    ///
    /// # Errors
    ///
    /// [`StoreAccessError`] if the record cannot be read or is too short.
    /// Nothing is written in that case.
    pub fn suspend(&self) -> Result<(), StoreAccessError> {
        let record = self.read()?;
        self.capture_once(record.flag_byte());
        self.apply(record, AutoHideSetting::AlwaysOnTop)
    }

    /// Enables auto-hide at start-up so the corner is reachable, capturing
    /// the user's setting first.
    ///
    /// # Errors
    ///
    /// Same as [`suspend`](Self::suspend).
    pub fn arm(&self) -> Result<(), StoreAccessError> {
        let record = self.read()?;
        self.capture_once(record.flag_byte());
        self.apply(record, AutoHideSetting::AutoHide)
    }

    /// Writes auto-hide (`enable`) or always-on-top (`!enable`).
    ///
    /// # Errors
    ///
    /// Same as [`suspend`](Self::suspend).
    pub fn restore(&self, enable: bool) -> Result<(), StoreAccessError> {
        let record = self.read()?;
        self.apply(record, AutoHideSetting::from_enabled(enable))
    }

    /// Writes the captured original flag byte back verbatim.
    ///
    /// Returns the restored byte, or `None` when nothing was ever captured
    /// (and therefore nothing was ever changed).
    ///
    /// # Errors
    ///
    /// Same as [`suspend`](Self::suspend).
    pub fn restore_original(&self) -> Result<Option<u8>, StoreAccessError> {
        let Some(original) = self.captured_original() else {
            debug!("no original taskbar setting captured; nothing to restore");
            return Ok(None);
        };
        let mut record = self.read()?;
        record.set_flag_byte(original);
        self.backend.write_record(record.as_bytes())?;
        // A byte we never write ourselves is announced as the shell default.
        self.backend.notify(
            AutoHideSetting::from_byte(original).unwrap_or(AutoHideSetting::AlwaysOnTop),
        );
        info!(original, "restored original taskbar flag");
        Ok(Some(original))
    }

    fn read(&self) -> Result<TaskbarRecord, StoreAccessError> {
        let bytes = self.backend.read_record()?;
        Ok(TaskbarRecord::parse(bytes)?)
    }

    /// The only place `captured_original` is written.
    fn capture_once(&self, current: u8) {
        if self.captured_original.set(current).is_ok() {
            info!(current, "captured original taskbar flag");
        }
    }

    fn apply(
        &self,
        mut record: TaskbarRecord,
        setting: AutoHideSetting,
    ) -> Result<(), StoreAccessError> {
        record.set_auto_hide(setting);
        self.backend.write_record(record.as_bytes())?;
        self.backend.notify(setting);
        debug!(?setting, "taskbar setting written");
        Ok(())
    }
}
