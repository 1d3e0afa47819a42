//! # hexsum
//!
//! Checksummed hexadecimal encoding for binary data, in the style of EIP-55.
//!
//! ## Overview
//!
//! - **Codec**: canonical case-mixed hex whose casing encodes a Keccak256
//!   checksum of the lowercase form
//! - **Decoder**: applies a caller-chosen policy to checksum mismatches
//! - **Addresses**: 20-byte values displayed and parsed in checksummed form
//! - **Signatures**: secp256k1 sign / verify / recover wrappers
//!
//! ## Checksum semantics
//!
//! - Canonical casing: valid.
//! - Uniform casing (all lower or all upper): no checksum asserted, accepted.
//! - Any other mixed casing: mismatch. The bytes are still decoded; the
//!   [`MismatchPolicy`] decides whether that is a warning or an error.
//!
//! ## Usage
//!
//! ```rust
//! use hexsum::{HexConfig, HexDecoder};
//!
//! let decoder = HexDecoder::new(HexConfig::strict());
//! let encoded = decoder.encode(&[0xd1, 0x22, 0x0a]);
//! assert_eq!(decoder.decode(&encoded).unwrap(), vec![0xd1, 0x22, 0x0a]);
//! ```
//!
//! ## Re-exports
//!
//! - `hexsum::core` - Codec, hasher capability, addresses
//! - `hexsum::signature` - secp256k1 ECDSA

pub mod config;
pub mod decoder;
pub mod error;
pub mod logging;

// Re-export component crates
pub use hexsum_core as core;
pub use hexsum_signature as signature;

pub use config::{HexConfig, MismatchPolicy};
pub use decoder::HexDecoder;
pub use error::{HexsumError, Result};

// Re-export commonly used types
pub use hexsum_core::{
    decode_hex, encode_hex, Address, AddressError, ChecksumHasher, ChecksumHexCodec,
    ChecksumStatus, DecodeError, Decoded, Keccak256,
};
pub use hexsum_signature::{KeyPair, PublicKey, RecoverableSignature, SignatureError};
