//! The synthesized key sequence that opens Task View.
//!
//! Windows opens Task View on `Win+Tab`.  The sequence must be delivered in
//! strict press-press-release-release order; releasing the modifier before
//! the switch key turns the chord into two unrelated taps.

/// Left Windows key.
pub const VK_LWIN: u16 = 0x5B;
/// Tab key.
pub const VK_TAB: u16 = 0x09;

/// A single synthesized key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStroke {
    /// Windows Virtual Key code.
    pub vk: u16,
    /// `true` for a press, `false` for a release.
    pub pressed: bool,
}

impl KeyStroke {
    pub const fn press(vk: u16) -> Self {
        Self { vk, pressed: true }
    }

    pub const fn release(vk: u16) -> Self {
        Self { vk, pressed: false }
    }
}

/// Returns `[press Win, press Tab, release Tab, release Win]`.
pub const fn task_view_sequence() -> [KeyStroke; 4] {
    [
        KeyStroke::press(VK_LWIN),
        KeyStroke::press(VK_TAB),
        KeyStroke::release(VK_TAB),
        KeyStroke::release(VK_LWIN),
    ]
}
