//! # hexsum testkit
//!
//! Testing utilities for hexsum.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with their canonical checksummed encodings
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Deterministic key pairs and a stub hasher
//!
//! ## Golden Vectors
//!
//! ```rust
//! use hexsum_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, actual) in verify_all_vectors() {
//!     assert!(matches, "{}: {}", name, actual);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use hexsum_testkit::generators::mismatched_encoding;
//!
//! proptest! {
//!     #[test]
//!     fn flipped_letter_is_detected((data, input) in mismatched_encoding(32)) {
//!         let err = hexsum_core::decode_hex(&input).unwrap_err();
//!         prop_assert_eq!(err.into_data(), Some(data));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use hexsum_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::with_index(0);
//! let signed = fixture.sign_message(b"payload").unwrap();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{
    corrupted_key_pair, key_pair_for_tests, multi_party_fixtures, SignedMessage, StubHasher,
    TestFixture,
};
pub use generators::{canonical_encoding, flip_letter_keeping_mixed_case, mismatched_encoding};
pub use vectors::{
    all_vectors, verify_all_vectors, GoldenVector, MismatchVector, BAD_CHECKSUM_VECTOR,
    MALFORMED_INPUTS,
};
