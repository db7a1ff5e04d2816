//! Mock taskbar settings backend for unit testing.
//!
//! Holds the record in memory and records every write and shell
//! notification so tests can check what would have reached the registry and
//! Explorer, and in which order.  Reads and writes can be made to fail.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use taskcorner_core::{AutoHideSetting, AUTO_HIDE_FLAG_OFFSET};

use crate::application::shell_state::{ShellBackend, StoreAccessError};

/// Length of a real `StuckRects3\Settings` record.
const RECORD_LEN: usize = 48;

/// An in-memory [`ShellBackend`].
#[derive(Default)]
pub struct MockShellBackend {
    record: Mutex<Vec<u8>>,
    writes: Mutex<Vec<Vec<u8>>>,
    notifications: Mutex<Vec<AutoHideSetting>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MockShellBackend {
    /// A well-formed record currently holding `setting`.
    pub fn with_setting(setting: AutoHideSetting) -> Self {
        let mut record: Vec<u8> = (0..RECORD_LEN as u8).map(|b| b.wrapping_mul(7)).collect();
        record[AUTO_HIDE_FLAG_OFFSET] = setting.to_byte();
        Self::with_record(record)
    }

    /// An arbitrary raw record, possibly malformed.
    pub fn with_record(record: Vec<u8>) -> Self {
        Self {
            record: Mutex::new(record),
            ..Self::default()
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// The raw record as currently stored.
    pub fn record(&self) -> Vec<u8> {
        self.record.lock().unwrap().clone()
    }

    /// The flag currently stored, if the record has a recognisable one.
    pub fn current_setting(&self) -> Option<AutoHideSetting> {
        self.record
            .lock()
            .unwrap()
            .get(AUTO_HIDE_FLAG_OFFSET)
            .and_then(|b| AutoHideSetting::from_byte(*b))
    }

    /// Every record written, in order.
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.writes.lock().unwrap().clone()
    }

    /// Every shell notification sent, in order.
    pub fn notifications(&self) -> Vec<AutoHideSetting> {
        self.notifications.lock().unwrap().clone()
    }
}

impl ShellBackend for MockShellBackend {
    fn read_record(&self) -> Result<Vec<u8>, StoreAccessError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreAccessError::Read("mock failure".into()));
        }
        Ok(self.record())
    }

    fn write_record(&self, bytes: &[u8]) -> Result<(), StoreAccessError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreAccessError::Write("mock failure".into()));
        }
        *self.record.lock().unwrap() = bytes.to_vec();
        self.writes.lock().unwrap().push(bytes.to_vec());
        Ok(())
    }

    fn notify(&self, setting: AutoHideSetting) {
        self.notifications.lock().unwrap().push(setting);
    }
}
