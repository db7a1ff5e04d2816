//! Codec for the persisted taskbar settings record.
//!
//! # What is the taskbar record? (for beginners)
//!
//! Explorer stores the taskbar's docking and visibility preferences as a
//! single opaque binary blob (`StuckRects3\Settings` in the user's registry
//! hive).  Only one byte of it matters here: the byte at offset 8 holds the
//! auto-hide flag.  Every other byte encodes things we do not understand
//! (edge, size, monitor) and must be written back exactly as it was read.
//!
//! [`TaskbarRecord`] wraps the raw bytes, validates the shape once at parse
//! time, and then only ever touches the flag byte.

use thiserror::Error;

/// Byte offset of the auto-hide flag inside the record.
pub const AUTO_HIDE_FLAG_OFFSET: usize = 8;

const AUTO_HIDE_BYTE: u8 = 0x02;
const ALWAYS_ON_TOP_BYTE: u8 = 0x03;

/// The two values the auto-hide flag can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoHideSetting {
    /// Taskbar hides until hovered.
    AutoHide,
    /// Taskbar always visible.
    AlwaysOnTop,
}

impl AutoHideSetting {
    /// `AutoHide` when `enable` is true, `AlwaysOnTop` otherwise.
    pub const fn from_enabled(enable: bool) -> Self {
        if enable {
            AutoHideSetting::AutoHide
        } else {
            AutoHideSetting::AlwaysOnTop
        }
    }

    pub const fn is_auto_hide(self) -> bool {
        matches!(self, AutoHideSetting::AutoHide)
    }

    /// The flag byte persisted for this setting.
    pub const fn to_byte(self) -> u8 {
        match self {
            AutoHideSetting::AutoHide => AUTO_HIDE_BYTE,
            AutoHideSetting::AlwaysOnTop => ALWAYS_ON_TOP_BYTE,
        }
    }

    /// Decodes a flag byte; `None` for values outside the known pair.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            AUTO_HIDE_BYTE => Some(AutoHideSetting::AutoHide),
            ALWAYS_ON_TOP_BYTE => Some(AutoHideSetting::AlwaysOnTop),
            _ => None,
        }
    }
}

/// Error returned when a record does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("taskbar record is {len} bytes; the auto-hide flag needs at least 9")]
    TooShort { len: usize },
}

/// A validated taskbar settings record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarRecord {
    bytes: Vec<u8>,
}

impl TaskbarRecord {
    /// Validates `bytes` and wraps them.
    ///
    /// Any flag value is accepted: Explorer versions disagree on the bits
    /// they set, and an unfamiliar byte still has to be captured and written
    /// back untouched.
    ///
    /// # Errors
    ///
    /// [`RecordError::TooShort`] if the record has no byte at
    /// [`AUTO_HIDE_FLAG_OFFSET`].
    pub fn parse(bytes: Vec<u8>) -> Result<Self, RecordError> {
        if bytes.len() <= AUTO_HIDE_FLAG_OFFSET {
            return Err(RecordError::TooShort { len: bytes.len() });
        }
        Ok(Self { bytes })
    }

    /// The raw flag byte.
    pub fn flag_byte(&self) -> u8 {
        self.bytes[AUTO_HIDE_FLAG_OFFSET]
    }

    /// The stored setting, or `None` when the flag byte is not one we write.
    pub fn auto_hide(&self) -> Option<AutoHideSetting> {
        AutoHideSetting::from_byte(self.flag_byte())
    }

    /// Overwrites the flag byte, leaving every other byte untouched.
    pub fn set_auto_hide(&mut self, setting: AutoHideSetting) {
        self.set_flag_byte(setting.to_byte());
    }

    /// Writes a raw flag byte, e.g. a previously captured original.
    pub fn set_flag_byte(&mut self, flag: u8) {
        self.bytes[AUTO_HIDE_FLAG_OFFSET] = flag;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A realistic 48-byte StuckRects3 record with auto-hide off.
    fn sample_record() -> Vec<u8> {
        let mut bytes = vec![
            0x30, 0x00, 0x00, 0x00, 0xFE, 0xFF, 0xFF, 0xFF, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00,
            0x00, 0x00, 0x3E, 0x00, 0x00, 0x00, 0x28, 0x00, 0x00, 0x00,
        ];
        bytes.extend_from_slice(&[0x00; 8]);
        bytes.extend_from_slice(&[0x10, 0x04, 0x00, 0x00, 0x80, 0x07, 0x00, 0x00]);
        bytes.extend_from_slice(&[0x38, 0x04, 0x00, 0x00, 0x60, 0x00, 0x00, 0x00]);
        bytes
    }

    #[test]
    fn test_parse_reads_flag_at_offset_eight() {
        let record = TaskbarRecord::parse(sample_record()).expect("valid record");
        assert_eq!(record.auto_hide(), Some(AutoHideSetting::AlwaysOnTop));
    }

    #[test]
    fn test_parse_rejects_record_of_eight_bytes() {
        let result = TaskbarRecord::parse(vec![0u8; 8]);
        assert_eq!(result, Err(RecordError::TooShort { len: 8 }));
    }

    #[test]
    fn test_parse_rejects_empty_record() {
        assert_eq!(
            TaskbarRecord::parse(Vec::new()),
            Err(RecordError::TooShort { len: 0 })
        );
    }

    #[test]
    fn test_parse_keeps_unfamiliar_flag_byte() {
        let mut bytes = sample_record();
        bytes[AUTO_HIDE_FLAG_OFFSET] = 0x7A;

        let record = TaskbarRecord::parse(bytes).expect("any flag byte is accepted");

        assert_eq!(record.flag_byte(), 0x7A);
        assert_eq!(record.auto_hide(), None);
    }

    #[test]
    fn test_set_flag_byte_writes_back_verbatim() {
        let original = sample_record();
        let mut record = TaskbarRecord::parse(original.clone()).unwrap();

        record.set_auto_hide(AutoHideSetting::AutoHide);
        record.set_flag_byte(0x7A);
        record.set_flag_byte(original[AUTO_HIDE_FLAG_OFFSET]);

        assert_eq!(record.into_bytes(), original);
    }

    #[test]
    fn test_set_auto_hide_preserves_every_other_byte() {
        // Arrange
        let original = sample_record();
        let mut record = TaskbarRecord::parse(original.clone()).unwrap();

        // Act
        record.set_auto_hide(AutoHideSetting::AutoHide);

        // Assert
        let patched = record.as_bytes();
        assert_eq!(patched.len(), original.len());
        for (i, (a, b)) in original.iter().zip(patched).enumerate() {
            if i == AUTO_HIDE_FLAG_OFFSET {
                assert_eq!(*b, 0x02);
            } else {
                assert_eq!(a, b, "byte {i} must be unchanged");
            }
        }
    }

    #[test]
    fn test_nine_byte_record_is_the_minimum_accepted() {
        let mut bytes = vec![0u8; 9];
        bytes[8] = 0x02;
        let record = TaskbarRecord::parse(bytes).expect("nine bytes is enough");
        assert_eq!(record.auto_hide(), Some(AutoHideSetting::AutoHide));
    }

    #[test]
    fn test_from_enabled_maps_to_expected_bytes() {
        assert_eq!(AutoHideSetting::from_enabled(true).to_byte(), 0x02);
        assert_eq!(AutoHideSetting::from_enabled(false).to_byte(), 0x03);
    }
}
