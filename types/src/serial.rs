//! External serial identifiers for minted assets.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Required length of a serial, in characters.
pub const SERIAL_LEN: usize = 6;

#[derive(Debug, Error)]
pub enum SerialError {
    #[error("serial must be exactly {SERIAL_LEN} characters, got {0}")]
    InvalidLength(usize),
}

/// An externally meaningful, globally unique short identifier for a minted
/// asset, distinct from its internal sequential [`TokenId`].
///
/// Always exactly [`SERIAL_LEN`] characters; validated at construction.
///
/// [`TokenId`]: crate::TokenId
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Serial(String);

impl Serial {
    pub fn new(raw: impl Into<String>) -> Result<Self, SerialError> {
        let s = raw.into();
        let len = s.chars().count();
        if len != SERIAL_LEN {
            return Err(SerialError::InvalidLength(len));
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_length_accepted() {
        let s = Serial::new("ABCDEF").unwrap();
        assert_eq!(s.as_str(), "ABCDEF");
    }

    #[test]
    fn short_serial_rejected() {
        assert!(matches!(
            Serial::new("ABCDE"),
            Err(SerialError::InvalidLength(5))
        ));
    }

    #[test]
    fn long_serial_rejected() {
        assert!(matches!(
            Serial::new("ABCDEFG"),
            Err(SerialError::InvalidLength(7))
        ));
    }

    #[test]
    fn empty_serial_rejected() {
        assert!(matches!(
            Serial::new(""),
            Err(SerialError::InvalidLength(0))
        ));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 6 multi-byte characters are a valid serial.
        let s = Serial::new("ÆÆÆÆÆÆ").unwrap();
        assert_eq!(s.as_str().chars().count(), SERIAL_LEN);
    }
}
