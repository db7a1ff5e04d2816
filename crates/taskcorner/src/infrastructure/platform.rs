//! Selection of the OS adapters for the running platform.

use std::sync::Arc;

use crate::application::gesture::KeyInjector;
use crate::application::report::Notifier;
use crate::application::shell_state::ShellBackend;

use super::input_hook::{HookInstallError, HookSource};

/// The full set of OS-facing adapters the service is built from.
pub struct PlatformAdapters {
    pub hooks: Box<dyn HookSource>,
    pub injector: Arc<dyn KeyInjector>,
    pub shell: Arc<dyn ShellBackend>,
    pub notifier: Arc<dyn Notifier>,
}

impl PlatformAdapters {
    /// Builds the native adapters.
    ///
    /// # Errors
    ///
    /// [`HookInstallError::UnsupportedPlatform`] anywhere but Windows: the
    /// gesture, the taskbar setting, and the hooks are all Windows concepts.
    #[cfg(target_os = "windows")]
    pub fn native() -> Result<Self, HookInstallError> {
        use super::gesture::windows::SendInputInjector;
        use super::input_hook::windows::WindowsHookSource;
        use super::notify::windows::MessageBoxNotifier;
        use super::shell::windows::RegistryShellBackend;

        Ok(Self {
            hooks: Box::new(WindowsHookSource::new()),
            injector: Arc::new(SendInputInjector::new()),
            shell: Arc::new(RegistryShellBackend::new()),
            notifier: Arc::new(MessageBoxNotifier),
        })
    }

    #[cfg(not(target_os = "windows"))]
    pub fn native() -> Result<Self, HookInstallError> {
        Err(HookInstallError::UnsupportedPlatform(
            std::env::consts::OS.to_string(),
        ))
    }
}
