//! The corner trigger state machine.
//!
//! ```text
//!            Move at corner / FireGesture
//!   ┌──────┐ ─────────────────────────────▶ ┌─────────────────┐
//!   │ Idle │                                │ AwaitingRelease │ ◀─┐ Move (ignored)
//!   └──────┘ ◀───────────────────────────── └─────────────────┘ ──┘
//!            ButtonDown | KeyDown / RestoreShell
//! ```
//!
//! The machine is pure: [`CornerTrigger::on_event`] updates the state and
//! returns the side effect the caller must perform.  Executing the effect
//! (injecting keys, touching the registry) is the application layer's job.
//!
//! `AwaitingRelease` exists because the synthesized gesture causes a burst of
//! focus and input churn.  Without it, a pointer resting on the corner would
//! fire again on the next move event.

use tracing::debug;

use super::input::{InputEvent, PointerKind, ScreenPoint};

/// The single pixel whose occupancy fires the gesture.
pub const DESIGNATED_CORNER: ScreenPoint = ScreenPoint::new(0, 0);

/// Trigger state.  There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerState {
    #[default]
    Idle,
    AwaitingRelease,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerAction {
    None,
    /// Synthesize the gesture and suspend taskbar auto-hide.
    FireGesture,
    /// Turn taskbar auto-hide back on.
    RestoreShell,
}

/// Owns the one [`TriggerState`] instance.
#[derive(Debug, Default)]
pub struct CornerTrigger {
    state: TriggerState,
}

impl CornerTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Feeds one event through the machine.
    pub fn on_event(&mut self, event: &InputEvent) -> TriggerAction {
        match self.state {
            TriggerState::Idle => match event {
                InputEvent::Pointer(p)
                    if p.kind == PointerKind::Move && p.position == DESIGNATED_CORNER =>
                {
                    debug!("pointer reached corner; firing gesture");
                    self.state = TriggerState::AwaitingRelease;
                    TriggerAction::FireGesture
                }
                _ => TriggerAction::None,
            },
            TriggerState::AwaitingRelease => {
                if event.is_press() {
                    debug!(?event, "press while awaiting release; re-arming");
                    self.state = TriggerState::Idle;
                    TriggerAction::RestoreShell
                } else {
                    TriggerAction::None
                }
            }
        }
    }
}
