//! Taskbar settings backends.
//!
//! - `windows` – the `StuckRects3` registry value plus `SHAppBarMessage`.
//! - `mock` – an in-memory record for tests.

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;
