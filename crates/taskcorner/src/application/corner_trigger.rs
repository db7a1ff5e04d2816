//! CornerTriggerUseCase: turns global input events into gestures and
//! taskbar changes.
//!
//! This use case runs on the hook thread for every mouse move, click, and
//! key press in the session, so the common path (a move away from the
//! corner) must do nothing but a comparison.  The only deliberate blocking
//! call is the settle delay after the gesture is injected.
//!
//! # Architecture
//!
//! The decision logic is the pure [`CornerTrigger`] state machine from
//! `taskcorner_core`.  This type executes the side effects the machine asks
//! for through injected traits ([`KeyInjector`], the [`ShellStateStore`]
//! backend) and routes every failure to the [`ErrorReporter`].  Failures
//! never change the state transition the machine already made.
//!
//! # Re-entrancy
//!
//! `SendInput` and `SHAppBarMessage` can pump messages, so Windows may call
//! the hook again on the same thread while a side effect is running.  The
//! machine is therefore only locked while deciding.  An event that arrives
//! while an effect is in flight is queued and dispatched, in order, by the
//! call that owns the effect once it returns.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use taskcorner_core::{CornerTrigger, InputEvent, TriggerAction, TriggerState};
use tracing::{debug, info};

use super::gesture::{open_task_view, KeyInjector};
use super::report::{ErrorKind, ErrorReporter};
use super::shell_state::ShellStateStore;

/// Default pause between injecting the gesture and pinning the taskbar.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Machine state plus the events deferred while an effect runs.
#[derive(Default)]
struct Dispatch {
    trigger: CornerTrigger,
    effect_running: bool,
    deferred: VecDeque<InputEvent>,
}

/// The corner trigger use case.
pub struct CornerTriggerUseCase {
    dispatch: Mutex<Dispatch>,
    injector: Arc<dyn KeyInjector>,
    shell: ShellStateStore,
    reporter: Arc<ErrorReporter>,
    settle_delay: Duration,
}

impl CornerTriggerUseCase {
    pub fn new(
        injector: Arc<dyn KeyInjector>,
        shell: ShellStateStore,
        reporter: Arc<ErrorReporter>,
        settle_delay: Duration,
    ) -> Self {
        Self {
            dispatch: Mutex::new(Dispatch::default()),
            injector,
            shell,
            reporter,
            settle_delay,
        }
    }

    pub fn state(&self) -> TriggerState {
        self.lock_dispatch().trigger.state()
    }

    pub fn shell(&self) -> &ShellStateStore {
        &self.shell
    }

    /// Handles one event from the hook source.
    pub fn handle_event(&self, event: &InputEvent) {
        let mut action = {
            let mut dispatch = self.lock_dispatch();
            if dispatch.effect_running {
                debug!(?event, "effect in flight; deferring event");
                dispatch.deferred.push_back(*event);
                return;
            }
            match dispatch.trigger.on_event(event) {
                TriggerAction::None => return,
                action => {
                    dispatch.effect_running = true;
                    action
                }
            }
        };

        loop {
            self.execute(action);
            match self.next_deferred_action() {
                Some(next) => action = next,
                None => return,
            }
        }
    }

    /// Enables auto-hide at start-up; failures are reported, not returned.
    pub fn arm_shell(&self) {
        match self.shell.arm() {
            Ok(()) => info!("taskbar auto-hide enabled"),
            Err(e) => self.reporter.report(ErrorKind::StoreAccess, &e),
        }
    }

    /// Writes the user's original taskbar setting back.  Runs on exit,
    /// regardless of earlier failures.
    pub fn restore_on_exit(&self) {
        if let Err(e) = self.shell.restore_original() {
            self.reporter.report(ErrorKind::StoreAccess, &e);
        }
    }

    /// Feeds deferred events to the machine until one needs an effect.
    /// Clears `effect_running` when the queue runs dry.
    fn next_deferred_action(&self) -> Option<TriggerAction> {
        let mut dispatch = self.lock_dispatch();
        while let Some(event) = dispatch.deferred.pop_front() {
            let action = dispatch.trigger.on_event(&event);
            if action != TriggerAction::None {
                return Some(action);
            }
        }
        dispatch.effect_running = false;
        None
    }

    fn execute(&self, action: TriggerAction) {
        match action {
            TriggerAction::None => {}
            TriggerAction::FireGesture => self.fire_gesture(),
            TriggerAction::RestoreShell => self.restore_shell(),
        }
    }

    fn fire_gesture(&self) {
        // The view may have partially opened; the machine stays in
        // AwaitingRelease either way.
        if let Err(e) = open_task_view(self.injector.as_ref()) {
            self.reporter.report(ErrorKind::GestureInjection, &e);
        }

        if !self.settle_delay.is_zero() {
            thread::sleep(self.settle_delay);
        }
        self.suspend_shell();
    }

    fn suspend_shell(&self) {
        match self.shell.suspend() {
            Ok(()) => debug!("taskbar pinned for gesture"),
            Err(e) => self.reporter.report(ErrorKind::StoreAccess, &e),
        }
    }

    fn restore_shell(&self) {
        match self.shell.restore(true) {
            Ok(()) => debug!("taskbar auto-hide restored"),
            Err(e) => self.reporter.report(ErrorKind::StoreAccess, &e),
        }
    }

    /// Only decisions run under this lock, so a poisoned guard still holds a
    /// consistent machine.
    fn lock_dispatch(&self) -> MutexGuard<'_, Dispatch> {
        self.dispatch.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
