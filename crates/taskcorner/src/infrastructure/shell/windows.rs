//! Windows taskbar settings backend.
//!
//! Reads and writes the `Settings` value under
//! `HKCU\Software\Microsoft\Windows\CurrentVersion\Explorer\StuckRects3`
//! and announces each change with `SHAppBarMessage(ABM_SETSTATE)` so
//! Explorer applies it without a restart.
//!
//! # Safety
//!
//! This module uses `unsafe` code exclusively for Windows API FFI calls.

#![cfg(target_os = "windows")]

use taskcorner_core::AutoHideSetting;
use tracing::debug;
use windows::core::w;
use windows::Win32::Foundation::{ERROR_SUCCESS, LPARAM, WIN32_ERROR};
use windows::Win32::System::Registry::{
    RegCloseKey, RegOpenKeyExW, RegQueryValueExW, RegSetValueExW, HKEY, HKEY_CURRENT_USER,
    KEY_QUERY_VALUE, KEY_SET_VALUE, REG_BINARY, REG_VALUE_TYPE,
};
use windows::Win32::UI::Shell::{
    SHAppBarMessage, ABM_SETSTATE, ABS_ALWAYSONTOP, ABS_AUTOHIDE, APPBARDATA,
};

use crate::application::shell_state::{ShellBackend, StoreAccessError};

/// Windows implementation of [`ShellBackend`].
pub struct RegistryShellBackend;

impl RegistryShellBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RegistryShellBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellBackend for RegistryShellBackend {
    fn read_record(&self) -> Result<Vec<u8>, StoreAccessError> {
        let key = StuckRectsKey::open()?;

        let mut value_type = REG_VALUE_TYPE(0);
        let mut len: u32 = 0;
        // SAFETY: Size query; no data buffer is passed.
        let status = unsafe {
            RegQueryValueExW(
                key.0,
                w!("Settings"),
                None,
                Some(&mut value_type as *mut REG_VALUE_TYPE),
                None,
                Some(&mut len as *mut u32),
            )
        };
        check(status).map_err(StoreAccessError::Read)?;
        if value_type != REG_BINARY {
            return Err(StoreAccessError::Read(format!(
                "Settings is registry type {}, expected REG_BINARY",
                value_type.0
            )));
        }

        let mut bytes = vec![0u8; len as usize];
        // SAFETY: `bytes` has exactly `len` bytes of writable storage.
        let status = unsafe {
            RegQueryValueExW(
                key.0,
                w!("Settings"),
                None,
                None,
                Some(bytes.as_mut_ptr()),
                Some(&mut len as *mut u32),
            )
        };
        check(status).map_err(StoreAccessError::Read)?;
        bytes.truncate(len as usize);
        Ok(bytes)
    }

    fn write_record(&self, bytes: &[u8]) -> Result<(), StoreAccessError> {
        let key = StuckRectsKey::open()?;
        // SAFETY: `bytes` is a valid slice for the duration of the call.
        let status = unsafe { RegSetValueExW(key.0, w!("Settings"), None, REG_BINARY, Some(bytes)) };
        check(status).map_err(StoreAccessError::Write)
    }

    fn notify(&self, setting: AutoHideSetting) {
        let state = if setting.is_auto_hide() {
            ABS_AUTOHIDE
        } else {
            ABS_ALWAYSONTOP
        };
        let mut data = APPBARDATA {
            cbSize: std::mem::size_of::<APPBARDATA>() as u32,
            lParam: LPARAM(state as isize),
            ..Default::default()
        };
        // SAFETY: `data` is a properly sized APPBARDATA on the stack.
        unsafe {
            SHAppBarMessage(ABM_SETSTATE, &mut data);
        }
        debug!(?setting, "shell notified of taskbar state");
    }
}

/// An open handle to the `StuckRects3` key, closed on drop.
struct StuckRectsKey(HKEY);

impl StuckRectsKey {
    fn open() -> Result<Self, StoreAccessError> {
        let mut key = HKEY::default();
        // SAFETY: `key` is a valid out-pointer; the path literal is NUL-terminated.
        let status = unsafe {
            RegOpenKeyExW(
                HKEY_CURRENT_USER,
                w!(r"Software\Microsoft\Windows\CurrentVersion\Explorer\StuckRects3"),
                None,
                KEY_QUERY_VALUE | KEY_SET_VALUE,
                &mut key,
            )
        };
        check(status).map_err(StoreAccessError::Open)?;
        Ok(Self(key))
    }
}

impl Drop for StuckRectsKey {
    fn drop(&mut self) {
        // SAFETY: The handle was opened by RegOpenKeyExW and is closed once.
        let _ = unsafe { RegCloseKey(self.0) };
    }
}

fn check(status: WIN32_ERROR) -> Result<(), String> {
    if status == ERROR_SUCCESS {
        Ok(())
    } else {
        Err(format!("Win32 error {}", status.0))
    }
}
