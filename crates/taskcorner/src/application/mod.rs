//! Application layer use cases.
//!
//! Use cases here orchestrate the pure domain types from `taskcorner_core`
//! and depend only on traits for anything that touches the OS, so they can
//! be unit-tested with the recording mocks in `infrastructure`.
//!
//! # Sub-modules
//!
//! - **`corner_trigger`** – Runs on every global input event.  Feeds the
//!   event through the trigger state machine and executes the resulting
//!   side effect (fire the gesture, restore the taskbar).
//!
//! - **`shell_state`** – Capture-once / restore-last management of the
//!   taskbar auto-hide preference.
//!
//! - **`gesture`** – Key injection seam and the Task View chord.
//!
//! - **`report`** – Funnels every error to the log and, once per kind, to
//!   the user.
//!
//! - **`lifecycle`** – Start-up and the ordered teardown the host invokes on
//!   exit.

pub mod corner_trigger;
pub mod gesture;
pub mod lifecycle;
pub mod report;
pub mod shell_state;
