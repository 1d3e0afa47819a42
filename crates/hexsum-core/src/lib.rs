//! # hexsum core
//!
//! Checksummed hexadecimal encoding for binary data (EIP-55 style).
//!
//! The checksum is carried in the casing of the hex letters, derived from a
//! hash of the lowercase hex text, so the encoded form is exactly as long as
//! plain hex. This crate contains no I/O and never logs.
//!
//! ## Key Types
//!
//! - [`ChecksumHexCodec`] - Encoder/decoder, generic over the hash capability
//! - [`ChecksumHasher`] - The hash capability; [`Keccak256`] in production
//! - [`ChecksumStatus`] - Valid, not asserted (uniform case), or mismatch
//! - [`Address`] - 20-byte value rendered in checksummed form
//!
//! ## Usage
//!
//! ```rust
//! use hexsum_core::{decode_hex, encode_hex};
//!
//! let encoded = encode_hex(&[0xde, 0xad, 0xbe, 0xef]);
//! assert_eq!(decode_hex(&encoded).unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
//! ```

pub mod address;
pub mod codec;
pub mod error;
pub mod hasher;

pub use address::{Address, ADDRESS_SIZE};
pub use codec::{decode_hex, encode_hex, ChecksumHexCodec, ChecksumStatus, Decoded, HEX_PREFIX};
pub use error::{AddressError, DecodeError};
pub use hasher::{keccak256, ChecksumHasher, Keccak256, DIGEST_SIZE};
