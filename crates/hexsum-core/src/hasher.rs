//! Hash capability used to derive the checksum casing.
//!
//! The codec only needs a fixed-size digest of the lowercase hex text, so the
//! hash sits behind [`ChecksumHasher`]. Production code binds it to Keccak256.

use sha3::Digest;

/// Size in bytes of a checksum digest.
pub const DIGEST_SIZE: usize = 32;

/// A deterministic hash producing a 32-byte digest.
///
/// The same implementation must be used at encode and decode time for the
/// checksum to mean anything across a system.
pub trait ChecksumHasher {
    fn digest(&self, data: &[u8]) -> [u8; DIGEST_SIZE];
}

impl<H: ChecksumHasher + ?Sized> ChecksumHasher for &H {
    fn digest(&self, data: &[u8]) -> [u8; DIGEST_SIZE] {
        (**self).digest(data)
    }
}

/// Keccak256 (the pre-standard SHA-3 variant used by Ethereum).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keccak256;

impl ChecksumHasher for Keccak256 {
    fn digest(&self, data: &[u8]) -> [u8; DIGEST_SIZE] {
        keccak256(data)
    }
}

/// Compute the Keccak256 digest of the given data.
pub fn keccak256(data: &[u8]) -> [u8; DIGEST_SIZE] {
    sha3::Keccak256::new().chain_update(data).finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_keccak256_deterministic() {
        let h1 = Keccak256.digest(b"test data");
        let h2 = Keccak256.digest(b"test data");
        assert_eq!(h1, h2);
        assert_ne!(h1, Keccak256.digest(b"different data"));
    }

    #[test]
    fn test_hasher_by_reference() {
        let hasher = Keccak256;
        let by_ref: &dyn ChecksumHasher = &hasher;
        assert_eq!(by_ref.digest(b"abc"), keccak256(b"abc"));
    }
}
