//! Error types for the CipherShift library.

use std::fmt;

/// Errors produced by the CipherShift library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherShiftError {
    /// Modulus `p` is zero or negative at construction time.
    InvalidModulus,
    /// A code unit outside the printable ASCII range [32, 126] was
    /// encountered at the given position.
    InputOutOfRange {
        /// 0-based character position of the offending code unit.
        position: usize,
        /// The offending code point value.
        value: u32,
    },
}

impl fmt::Display for CipherShiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherShiftError::InvalidModulus => {
                write!(f, "Modulus p must be a positive integer")
            }
            CipherShiftError::InputOutOfRange { position, value } => {
                write!(
                    f,
                    "Code point {} at position {} is outside printable ASCII [32, 126]",
                    value, position
                )
            }
        }
    }
}

impl std::error::Error for CipherShiftError {}
