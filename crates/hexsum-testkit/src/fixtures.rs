//! Test fixtures and helpers.
//!
//! Deterministic key pairs and a stub hasher so tests do not depend on
//! randomness or on the real digest.

use hexsum_core::{keccak256, Address, ChecksumHasher, DIGEST_SIZE};
use hexsum_signature::{KeyPair, RecoverableSignature, SignatureError, PRIVATE_KEY_SIZE};

const TEST_KEY_DOMAIN: &[u8] = b"hexsum-test-key:";

/// Deterministic keypair for tests. The same index always yields the same key.
pub fn key_pair_for_tests(index: u32) -> KeyPair {
    let mut counter = 0u32;
    loop {
        let mut seed = Vec::with_capacity(TEST_KEY_DOMAIN.len() + 8);
        seed.extend_from_slice(TEST_KEY_DOMAIN);
        seed.extend_from_slice(&index.to_be_bytes());
        seed.extend_from_slice(&counter.to_be_bytes());

        // A digest outside the curve order is astronomically rare; try the next one.
        if let Ok(kp) = KeyPair::from_private_key(&keccak256(&seed)) {
            return kp;
        }
        counter += 1;
    }
}

/// Keypair whose private key differs from `key_pair` in one byte.
///
/// Signatures it produces must not verify against the original public key.
pub fn corrupted_key_pair(key_pair: &KeyPair) -> Result<KeyPair, SignatureError> {
    let mut private_key: [u8; PRIVATE_KEY_SIZE] = key_pair.private_key();
    private_key[5] ^= 0x55;
    KeyPair::from_private_key(&private_key)
}

/// A hash paired with its signature.
#[derive(Debug, Clone)]
pub struct SignedMessage {
    pub hash: [u8; DIGEST_SIZE],
    pub signature: RecoverableSignature,
}

/// A test fixture with a deterministic keypair.
pub struct TestFixture {
    pub key_pair: KeyPair,
}

impl TestFixture {
    /// Create the fixture for a given test key index.
    pub fn with_index(index: u32) -> Self {
        Self {
            key_pair: key_pair_for_tests(index),
        }
    }

    /// Address of the fixture's keypair.
    pub fn address(&self) -> Address {
        self.key_pair.address()
    }

    /// Hash a message with Keccak256 and sign the hash.
    pub fn sign_message(&self, message: &[u8]) -> Result<SignedMessage, SignatureError> {
        let hash = keccak256(message);
        let signature = self.key_pair.sign(&hash)?;
        Ok(SignedMessage { hash, signature })
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::with_index(0)
    }
}

/// Create multiple test fixtures for multi-party tests.
pub fn multi_party_fixtures(count: u32) -> Vec<TestFixture> {
    (0..count).map(TestFixture::with_index).collect()
}

/// Hasher returning a fixed digest, for testing the casing rule in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubHasher {
    pub digest: [u8; DIGEST_SIZE],
}

impl StubHasher {
    pub const fn new(digest: [u8; DIGEST_SIZE]) -> Self {
        Self { digest }
    }

    /// Every nibble is above 7: every letter gets upper-cased.
    pub const fn all_high() -> Self {
        Self::new([0xff; DIGEST_SIZE])
    }

    /// Every nibble is at most 7: the encoding stays lowercase.
    pub const fn all_low() -> Self {
        Self::new([0x00; DIGEST_SIZE])
    }
}

impl ChecksumHasher for StubHasher {
    fn digest(&self, _data: &[u8]) -> [u8; DIGEST_SIZE] {
        self.digest
    }
}
