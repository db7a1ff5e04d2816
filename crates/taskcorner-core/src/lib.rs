//! # taskcorner-core
//!
//! Shared foundation for TaskCorner: the typed input event stream, the corner
//! trigger state machine, the gesture key sequence, and the codec for the
//! taskbar settings record.
//!
//! This crate has zero dependencies on OS APIs.  Everything here can be
//! compiled and tested on any platform; the Windows adapters that produce
//! events and apply side effects live in the `taskcorner` crate.
//!
//! # Architecture overview (for beginners)
//!
//! TaskCorner watches the mouse.  When the pointer lands exactly on the
//! top-left pixel of the virtual screen it presses `Win+Tab` on the user's
//! behalf (opening Task View) and pins the taskbar so it does not slide away
//! while Task View is open.  The next click or key press puts the taskbar back
//! into auto-hide mode.
//!
//! - **`domain::input`** – The event types the hook layer produces.
//! - **`domain::trigger`** – The `Idle` / `AwaitingRelease` state machine that
//!   decides *when* to fire and *when* to restore.
//! - **`domain::gesture`** – The exact key strokes that make up the gesture.
//! - **`domain::taskbar`** – Reading and patching the auto-hide flag inside
//!   the opaque byte record Windows persists for the taskbar.

pub mod domain;

pub use domain::gesture::{task_view_sequence, KeyStroke, VK_LWIN, VK_TAB};
pub use domain::input::{InputEvent, KeyEvent, MouseButton, PointerEvent, PointerKind, ScreenPoint};
pub use domain::taskbar::{AutoHideSetting, RecordError, TaskbarRecord, AUTO_HIDE_FLAG_OFFSET};
pub use domain::trigger::{CornerTrigger, TriggerAction, TriggerState, DESIGNATED_CORNER};
