use std::fmt;

use thiserror::Error;

use super::layout::{DATA_SIZE, MESSAGE_SIZE};

/// Wire field that carried an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireField {
    /// Suggestion for the teammate slot at this index.
    Suggestion(usize),
    Intention,
    PositionConfidence,
    SideConfidence,
}

impl fmt::Display for WireField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireField::Suggestion(index) => write!(f, "suggestion[{index}]"),
            WireField::Intention => f.write_str("intention"),
            WireField::PositionConfidence => f.write_str("current position confidence"),
            WireField::SideConfidence => f.write_str("current side confidence"),
        }
    }
}

/// Reason a frame was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("frame is {len} bytes, expected at least {}", MESSAGE_SIZE)]
    TruncatedInput { len: usize },

    #[error("unexpected header tag {found:02x?}")]
    InvalidHeader { found: [u8; 4] },

    #[error("unsupported protocol version {found}")]
    UnsupportedVersion { found: u8 },

    #[error("player number {0} outside 1-5")]
    InvalidPlayerNumber(u8),

    #[error("boolean byte {0} is neither 0 nor 1")]
    InvalidBooleanEncoding(u8),

    #[error("{field} ordinal {value} is not a known variant")]
    InvalidEnumValue { field: WireField, value: u8 },

    #[error("{field} {value} outside 0-100")]
    InvalidConfidence { field: WireField, value: u8 },

    #[error("payload of {declared} bytes exceeds {}", DATA_SIZE)]
    PayloadTooLarge { declared: usize },
}

/// Fieldless discriminant of [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeFailure {
    TruncatedInput,
    InvalidHeader,
    UnsupportedVersion,
    InvalidPlayerNumber,
    InvalidBooleanEncoding,
    InvalidEnumValue,
    InvalidConfidence,
    PayloadTooLarge,
}

impl DecodeError {
    pub fn kind(&self) -> DecodeFailure {
        match self {
            DecodeError::TruncatedInput { .. } => DecodeFailure::TruncatedInput,
            DecodeError::InvalidHeader { .. } => DecodeFailure::InvalidHeader,
            DecodeError::UnsupportedVersion { .. } => DecodeFailure::UnsupportedVersion,
            DecodeError::InvalidPlayerNumber(_) => DecodeFailure::InvalidPlayerNumber,
            DecodeError::InvalidBooleanEncoding(_) => DecodeFailure::InvalidBooleanEncoding,
            DecodeError::InvalidEnumValue { .. } => DecodeFailure::InvalidEnumValue,
            DecodeError::InvalidConfidence { .. } => DecodeFailure::InvalidConfidence,
            DecodeError::PayloadTooLarge { .. } => DecodeFailure::PayloadTooLarge,
        }
    }

    /// Wrong protocol or corruption, as opposed to a well-framed message
    /// carrying an out-of-range value.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            DecodeError::TruncatedInput { .. }
                | DecodeError::InvalidHeader { .. }
                | DecodeError::UnsupportedVersion { .. }
        )
    }
}
