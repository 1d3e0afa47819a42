//! secp256k1 key material with strong types.
//!
//! Public keys are kept in uncompressed SEC1 form (`0x04 || x || y`) and
//! signatures in recoverable form (`r || s || v`).

use hexsum_core::{keccak256, Address, ADDRESS_SIZE, DIGEST_SIZE};
use k256::ecdsa::{SigningKey, VerifyingKey};
use std::fmt;

use crate::ecdsa;
use crate::error::SignatureError;

/// Size of a private key in bytes.
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Size of an uncompressed public key in bytes.
pub const PUBLIC_KEY_SIZE: usize = 65;

/// Size of a recoverable signature in bytes.
pub const SIGNATURE_SIZE: usize = 65;

/// Size of the message hash that gets signed.
pub const HASH_SIZE: usize = 32;

/// A 65-byte uncompressed secp256k1 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey(pub [u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Parse from a SEC1-encoded key (compressed or uncompressed).
    pub fn from_sec1(bytes: &[u8]) -> Result<Self, SignatureError> {
        let key =
            VerifyingKey::from_sec1_bytes(bytes).map_err(|_| SignatureError::InvalidPublicKey)?;
        Ok(Self::from_verifying_key(&key))
    }

    pub(crate) fn from_verifying_key(key: &VerifyingKey) -> Self {
        let point = key.to_encoded_point(false);
        let mut bytes = [0u8; PUBLIC_KEY_SIZE];
        bytes.copy_from_slice(point.as_bytes());
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Address derived from this key: the last 20 bytes of
    /// `Keccak256(x || y)`.
    pub fn address(&self) -> Address {
        address_from_public_key(&self.0)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secp256k1Pub({}...)", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; PUBLIC_KEY_SIZE]> for PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

/// A 65-byte recoverable signature: `r || s || v` with `v` the recovery id.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RecoverableSignature(pub [u8; SIGNATURE_SIZE]);

impl RecoverableSignature {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }

    /// The recovery id byte.
    pub const fn recovery_id(&self) -> u8 {
        self.0[SIGNATURE_SIZE - 1]
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for RecoverableSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secp256k1Sig({}...)", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for RecoverableSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; SIGNATURE_SIZE]> for RecoverableSignature {
    fn from(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }
}

/// Derive an address from an uncompressed public key.
pub fn address_from_public_key(public_key: &[u8; PUBLIC_KEY_SIZE]) -> Address {
    let hash = keccak256(&public_key[1..]);
    let mut bytes = [0u8; ADDRESS_SIZE];
    bytes.copy_from_slice(&hash[DIGEST_SIZE - ADDRESS_SIZE..]);
    Address::from_bytes(bytes)
}

/// A secp256k1 keypair.
///
/// This wraps k256's SigningKey.
#[derive(Clone)]
pub struct KeyPair {
    signing_key: SigningKey,
}

impl KeyPair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::rngs::OsRng);
        Self { signing_key }
    }

    /// Create from a 32-byte private key.
    ///
    /// Fails on the wrong length, zero, or a scalar outside the curve order.
    pub fn from_private_key(private_key: &[u8]) -> Result<Self, SignatureError> {
        Ok(Self {
            signing_key: ecdsa::signing_key(private_key)?,
        })
    }

    /// Get the public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_verifying_key(self.signing_key.verifying_key())
    }

    /// Get the raw private key bytes (secret key material).
    pub fn private_key(&self) -> [u8; PRIVATE_KEY_SIZE] {
        self.signing_key.to_bytes().into()
    }

    /// Address of this keypair.
    pub fn address(&self) -> Address {
        self.public_key().address()
    }

    /// Sign a 32-byte hash.
    pub fn sign(&self, hash: &[u8]) -> Result<RecoverableSignature, SignatureError> {
        ecdsa::sign_with_key(&self.signing_key, hash)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPair({})", self.address())
    }
}
