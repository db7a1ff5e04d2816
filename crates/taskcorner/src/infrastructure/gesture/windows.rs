//! Windows key injection via the SendInput API.
//!
//! The whole chord goes out in a single `SendInput` call so no other input
//! can be interleaved between the four transitions.

#![cfg(target_os = "windows")]

use taskcorner_core::KeyStroke;
use windows::Win32::Foundation::GetLastError;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYBD_EVENT_FLAGS, KEYEVENTF_EXTENDEDKEY,
    KEYEVENTF_KEYUP, VIRTUAL_KEY,
};

use crate::application::gesture::{GestureInjectionError, KeyInjector};

/// Windows implementation of [`KeyInjector`] using SendInput.
pub struct SendInputInjector;

impl SendInputInjector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SendInputInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyInjector for SendInputInjector {
    fn send_keys(&self, strokes: &[KeyStroke]) -> Result<(), GestureInjectionError> {
        let inputs: Vec<INPUT> = strokes.iter().map(|s| keyboard_input(*s)).collect();

        // SAFETY: `inputs` is a valid slice of KEYBDINPUT-backed INPUT structures.
        let sent = unsafe { SendInput(&inputs, std::mem::size_of::<INPUT>() as i32) };

        let expected = inputs.len() as u32;
        if sent != expected {
            // Zero means the call was blocked outright (e.g. by UIPI).
            if sent == 0 {
                // SAFETY: GetLastError has no preconditions.
                let code = unsafe { GetLastError() };
                return Err(GestureInjectionError::Platform(format!(
                    "SendInput rejected the chord (error {})",
                    code.0
                )));
            }
            return Err(GestureInjectionError::Partial { sent, expected });
        }
        Ok(())
    }
}

fn keyboard_input(stroke: KeyStroke) -> INPUT {
    let mut flags = KEYBD_EVENT_FLAGS(0);
    if !stroke.pressed {
        flags |= KEYEVENTF_KEYUP;
    }
    if is_extended(stroke.vk) {
        flags |= KEYEVENTF_EXTENDEDKEY;
    }

    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(stroke.vk),
                wScan: 0,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

/// Windows keys and Right Ctrl/Alt need the extended-key flag.
fn is_extended(vk: u16) -> bool {
    matches!(vk, 0x5B | 0x5C | 0xA3 | 0xA5)
}
