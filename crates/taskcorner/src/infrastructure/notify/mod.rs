//! User notification adapters for [`crate::application::report::Notifier`].

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;
