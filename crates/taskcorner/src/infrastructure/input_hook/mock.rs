//! Mock hook source for unit testing.
//!
//! Allows tests to deliver synthetic [`InputEvent`]s to subscribers without
//! a running Windows message loop or OS hooks.  Because the service takes
//! ownership of its hook source, tests keep a [`MockHookProbe`] to emit
//! events and inspect install/teardown calls afterwards.

use std::sync::{Arc, Mutex};

use taskcorner_core::InputEvent;

use super::{HookInstallError, HookSource, InputHandler};

#[derive(Default)]
struct Shared {
    handlers: Vec<InputHandler>,
    installed: bool,
    install_count: u32,
    teardown_count: u32,
}

/// A mock implementation of [`HookSource`].
pub struct MockHookSource {
    shared: Arc<Mutex<Shared>>,
    fail_install: bool,
}

impl MockHookSource {
    /// Creates a mock whose `install()` succeeds.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared::default())),
            fail_install: false,
        }
    }

    /// Creates a mock whose `install()` is refused.
    pub fn failing() -> Self {
        Self {
            fail_install: true,
            ..Self::new()
        }
    }

    /// Returns a handle that stays usable after the mock has been moved.
    pub fn probe(&self) -> MockHookProbe {
        MockHookProbe {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl Default for MockHookSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HookSource for MockHookSource {
    fn subscribe(&mut self, handler: InputHandler) {
        self.shared.lock().expect("lock poisoned").handlers.push(handler);
    }

    fn install(&mut self) -> Result<(), HookInstallError> {
        let mut shared = self.shared.lock().expect("lock poisoned");
        shared.install_count += 1;
        if self.fail_install {
            return Err(HookInstallError::MouseHookInstallFailed(
                "mock refusal".to_string(),
            ));
        }
        if shared.installed {
            return Err(HookInstallError::AlreadyInstalled);
        }
        shared.installed = true;
        Ok(())
    }

    fn teardown(&mut self) {
        let mut shared = self.shared.lock().expect("lock poisoned");
        if shared.installed {
            shared.installed = false;
            shared.teardown_count += 1;
        }
    }

    fn is_installed(&self) -> bool {
        self.shared.lock().expect("lock poisoned").installed
    }
}

/// Test-side handle onto a [`MockHookSource`].
#[derive(Clone)]
pub struct MockHookProbe {
    shared: Arc<Mutex<Shared>>,
}

impl MockHookProbe {
    /// Delivers `event` to every subscriber, as if observed by the OS hook.
    /// Events are dropped while the hooks are not installed.
    pub fn emit(&self, event: InputEvent) {
        let handlers = {
            let shared = self.shared.lock().expect("lock poisoned");
            if !shared.installed {
                return;
            }
            shared.handlers.clone()
        };
        for handler in handlers {
            handler(&event);
        }
    }

    pub fn is_installed(&self) -> bool {
        self.shared.lock().expect("lock poisoned").installed
    }

    pub fn install_count(&self) -> u32 {
        self.shared.lock().expect("lock poisoned").install_count
    }

    /// Number of teardowns that actually released hooks.
    pub fn teardown_count(&self) -> u32 {
        self.shared.lock().expect("lock poisoned").teardown_count
    }
}
