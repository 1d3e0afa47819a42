//! Error types for hexsum core.

use thiserror::Error;

/// Errors produced when decoding a checksummed hex string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The body is not valid hex (bad character or odd length).
    ///
    /// No bytes can be recovered from the input.
    #[error("invalid hex string: {0}")]
    MalformedHex(#[from] hex::FromHexError),

    /// The hex decoded fine but its mixed casing is not the canonical checksum.
    ///
    /// The decoded bytes travel with the error so callers can still use them.
    #[error("invalid checksum: expected {expected}")]
    ChecksumMismatch { data: Vec<u8>, expected: String },
}

impl DecodeError {
    /// Decoded bytes carried by a checksum mismatch, if any.
    pub fn data(&self) -> Option<&[u8]> {
        match self {
            DecodeError::MalformedHex(_) => None,
            DecodeError::ChecksumMismatch { data, .. } => Some(data),
        }
    }

    /// Consume the error, returning the decoded bytes of a checksum mismatch.
    pub fn into_data(self) -> Option<Vec<u8>> {
        match self {
            DecodeError::MalformedHex(_) => None,
            DecodeError::ChecksumMismatch { data, .. } => Some(data),
        }
    }

    pub fn is_checksum_mismatch(&self) -> bool {
        matches!(self, DecodeError::ChecksumMismatch { .. })
    }
}

/// Errors produced when parsing an [`Address`](crate::Address).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AddressError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("invalid address length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },
}
