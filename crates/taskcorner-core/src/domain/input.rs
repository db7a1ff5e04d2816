//! Normalized input events produced by the global input hooks.
//!
//! Events are consumed once by subscribers and never retained.

/// A position in virtual-screen coordinates (multi-monitor origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Mouse buttons the pointer hook classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// What happened to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// The cursor moved to `position`.
    Move,
    /// A button was pressed while the cursor was at `position`.
    ButtonDown(MouseButton),
}

/// A pointer event in virtual-screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: ScreenPoint,
}

impl PointerEvent {
    /// Convenience constructor for a move to `(x, y)`.
    pub const fn moved(x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Move,
            position: ScreenPoint::new(x, y),
        }
    }

    /// Convenience constructor for a button press at `(x, y)`.
    pub const fn pressed(button: MouseButton, x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::ButtonDown(button),
            position: ScreenPoint::new(x, y),
        }
    }
}

/// A key-down observed by the keyboard hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Windows Virtual Key code.
    pub vk_code: u32,
}

/// The single typed stream handed to hook subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
}

impl InputEvent {
    /// Returns `true` for button presses and key-downs, i.e. anything that is
    /// not plain pointer motion.
    pub fn is_press(&self) -> bool {
        match self {
            InputEvent::Pointer(p) => matches!(p.kind, PointerKind::ButtonDown(_)),
            InputEvent::Key(_) => true,
        }
    }
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        InputEvent::Pointer(event)
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        InputEvent::Key(event)
    }
}
