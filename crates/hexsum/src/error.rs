//! Error types for hexsum.

use hexsum_core::{AddressError, DecodeError};
use hexsum_signature::SignatureError;
use thiserror::Error;

/// Errors that can occur across hexsum operations.
#[derive(Debug, Error)]
pub enum HexsumError {
    /// Hex decoding error, including rejected checksum mismatches.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Address parsing error.
    #[error("address error: {0}")]
    Address(#[from] AddressError),

    /// Signature error.
    #[error("signature error: {0}")]
    Signature(#[from] SignatureError),

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

/// Result type for hexsum operations.
pub type Result<T> = std::result::Result<T, HexsumError>;
