//! CornerService: start-up wiring and the ordered teardown the lifecycle
//! host invokes on exit.
//!
//! The service holds the taskbar change as a scoped resource.  It is taken
//! implicitly (arming at start-up, or the first suspend) and released
//! unconditionally: [`CornerService::on_exit_requested`] on the normal path,
//! and `Drop` on every other path, including a failed start.
//!
//! Teardown order: remove hooks → restore taskbar → release UI resources.
//! Hooks go first so no late event can flip the taskbar after it has been
//! restored.

use std::sync::Arc;

use taskcorner_core::InputEvent;
use tracing::{info, warn};

use super::corner_trigger::CornerTriggerUseCase;
use super::report::{ErrorKind, ErrorReporter};
use crate::infrastructure::input_hook::{HookInstallError, HookSource};

/// Where the service is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Created,
    Running,
    Stopped,
}

/// Owns the hook source and the shared trigger use case.
pub struct CornerService {
    hooks: Box<dyn HookSource>,
    trigger: Arc<CornerTriggerUseCase>,
    reporter: Arc<ErrorReporter>,
    state: ServiceState,
}

impl CornerService {
    pub fn new(
        hooks: Box<dyn HookSource>,
        trigger: CornerTriggerUseCase,
        reporter: Arc<ErrorReporter>,
    ) -> Self {
        Self {
            hooks,
            trigger: Arc::new(trigger),
            reporter,
            state: ServiceState::Created,
        }
    }

    pub fn state(&self) -> ServiceState {
        self.state
    }

    /// Shared handle to the trigger use case.
    pub fn trigger(&self) -> Arc<CornerTriggerUseCase> {
        Arc::clone(&self.trigger)
    }

    /// Subscribes the trigger to the hook source, optionally arms the
    /// taskbar, and installs the hooks.
    ///
    /// # Errors
    ///
    /// [`HookInstallError`] if the OS refuses the hooks.  The error has
    /// already been reported to the user and any taskbar change undone; the
    /// service is `Stopped` and must not be treated as active.
    pub fn start(&mut self, arm_shell: bool) -> Result<(), HookInstallError> {
        if self.state != ServiceState::Created {
            return Err(HookInstallError::AlreadyInstalled);
        }

        let trigger = Arc::clone(&self.trigger);
        self.hooks.subscribe(Arc::new(move |event: &InputEvent| {
            trigger.handle_event(event);
        }));

        if arm_shell {
            self.trigger.arm_shell();
        }

        if let Err(e) = self.hooks.install() {
            self.reporter.report(ErrorKind::HookInstall, &e);
            self.on_exit_requested();
            return Err(e);
        }

        self.state = ServiceState::Running;
        info!("corner trigger active");
        Ok(())
    }

    /// Tears everything down.  Idempotent.
    pub fn on_exit_requested(&mut self) {
        if self.state == ServiceState::Stopped {
            return;
        }
        info!("shutting down corner trigger");

        self.hooks.teardown();
        self.trigger.restore_on_exit();

        self.state = ServiceState::Stopped;
        info!("corner trigger stopped");
    }
}

impl Drop for CornerService {
    fn drop(&mut self) {
        if self.state != ServiceState::Stopped {
            warn!("corner service dropped without an exit request; restoring taskbar");
            self.on_exit_requested();
        }
    }
}
