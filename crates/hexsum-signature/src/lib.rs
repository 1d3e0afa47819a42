//! # hexsum signature
//!
//! secp256k1 ECDSA signing, verification and public-key recovery with
//! Ethereum-style byte layouts:
//!
//! - private keys: 32 bytes
//! - public keys: 65 bytes, uncompressed SEC1
//! - signatures: 65 bytes, `r || s || v`
//!
//! Addresses derived from public keys render through the checksummed hex
//! codec in [`hexsum_core`].
//!
//! ```rust
//! use hexsum_core::keccak256;
//! use hexsum_signature::{recover, verify, KeyPair};
//!
//! let keypair = KeyPair::generate();
//! let hash = keccak256(b"message");
//! let sig = keypair.sign(&hash).unwrap();
//!
//! assert!(verify(keypair.public_key().as_bytes(), &hash, sig.as_bytes()));
//! assert_eq!(recover(&hash, sig.as_bytes()).unwrap(), keypair.public_key());
//! ```

pub mod ecdsa;
pub mod error;
pub mod keys;

pub use ecdsa::{recover, sign, verify};
pub use error::SignatureError;
pub use keys::{
    address_from_public_key, KeyPair, PublicKey, RecoverableSignature, HASH_SIZE,
    PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE, SIGNATURE_SIZE,
};
