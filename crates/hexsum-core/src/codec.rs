//! Checksummed hex encoding (EIP-55 style).
//!
//! The checksum lives in the letter casing: a hex letter is upper-cased when
//! the digest nibble at the same position (wrapping around the 64-character
//! digest) is greater than 7. Digits are never touched, so the encoding adds
//! no characters over plain hex.
//!
//! Decoding is tolerant by construction:
//!
//! - canonical casing decodes as [`ChecksumStatus::Valid`]
//! - all-lowercase or all-uppercase input carries no checksum and decodes as
//!   [`ChecksumStatus::NotAsserted`]
//! - any other mixed casing decodes as [`ChecksumStatus::Mismatch`]; the bytes
//!   are still returned

use crate::error::DecodeError;
use crate::hasher::{ChecksumHasher, Keccak256};

/// Literal prefix of every encoded string. Only this exact casing is stripped.
pub const HEX_PREFIX: &str = "0x";

/// How the casing of a decoded string relates to its canonical checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumStatus {
    /// Casing matches the canonical form exactly.
    Valid,
    /// Uniformly cased input; no checksum was asserted.
    NotAsserted,
    /// Mixed casing that differs from the canonical form.
    Mismatch,
}

/// Result of inspecting a hex string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub data: Vec<u8>,
    pub status: ChecksumStatus,
    /// Canonical checksummed form of `data`, with prefix.
    pub canonical: String,
}

impl Decoded {
    pub fn is_valid(&self) -> bool {
        self.status == ChecksumStatus::Valid
    }
}

/// Encoder/decoder for checksummed hex strings.
///
/// Stateless apart from the hash capability; safe to share across threads
/// whenever `H` is.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChecksumHexCodec<H = Keccak256> {
    hasher: H,
}

impl ChecksumHexCodec<Keccak256> {
    /// Codec bound to Keccak256.
    pub const fn keccak() -> Self {
        Self { hasher: Keccak256 }
    }
}

impl<H: ChecksumHasher> ChecksumHexCodec<H> {
    /// Create a codec with the given hash capability.
    pub const fn new(hasher: H) -> Self {
        Self { hasher }
    }

    /// Get the hash capability.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Encode bytes into their canonical `0x`-prefixed checksummed form.
    ///
    /// Never fails; empty input encodes to `"0x"`.
    pub fn encode(&self, data: &[u8]) -> String {
        let lower = hex::encode(data);
        let digest_hex = hex::encode(self.hasher.digest(lower.as_bytes()));
        let digest_hex = digest_hex.as_bytes();

        let mut out = String::with_capacity(HEX_PREFIX.len() + lower.len());
        out.push_str(HEX_PREFIX);
        for (i, c) in lower.chars().enumerate() {
            // The digest is shorter than long inputs; wrap around it.
            if c.is_ascii_alphabetic() && digest_hex[i % digest_hex.len()] > b'7' {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Decode a hex string and classify its checksum casing.
    ///
    /// Fails only on malformed hex.
    pub fn inspect(&self, s: &str) -> Result<Decoded, DecodeError> {
        let body = strip_prefix(s);
        let data = hex::decode(body)?;
        let canonical = self.encode(&data);

        let status = if strip_prefix(&canonical) == body {
            ChecksumStatus::Valid
        } else if is_uniform_case(body) {
            ChecksumStatus::NotAsserted
        } else {
            ChecksumStatus::Mismatch
        };

        Ok(Decoded {
            data,
            status,
            canonical,
        })
    }

    /// Decode a hex string, reporting a checksum mismatch as an error.
    ///
    /// On [`DecodeError::ChecksumMismatch`] the decoded bytes are still
    /// available through [`DecodeError::data`].
    pub fn decode(&self, s: &str) -> Result<Vec<u8>, DecodeError> {
        let decoded = self.inspect(s)?;
        match decoded.status {
            ChecksumStatus::Valid | ChecksumStatus::NotAsserted => Ok(decoded.data),
            ChecksumStatus::Mismatch => Err(DecodeError::ChecksumMismatch {
                data: decoded.data,
                expected: decoded.canonical,
            }),
        }
    }
}

/// Encode bytes with the Keccak256-bound codec.
pub fn encode_hex(data: &[u8]) -> String {
    ChecksumHexCodec::keccak().encode(data)
}

/// Decode a string with the Keccak256-bound codec.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, DecodeError> {
    ChecksumHexCodec::keccak().decode(s)
}

fn strip_prefix(s: &str) -> &str {
    s.strip_prefix(HEX_PREFIX).unwrap_or(s)
}

fn is_uniform_case(body: &str) -> bool {
    let has_lower = body.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = body.bytes().any(|b| b.is_ascii_uppercase());
    !(has_lower && has_upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::DIGEST_SIZE;
    use proptest::prelude::*;

    /// Hasher returning a fixed digest regardless of input.
    struct FixedDigest([u8; DIGEST_SIZE]);

    impl ChecksumHasher for FixedDigest {
        fn digest(&self, _data: &[u8]) -> [u8; DIGEST_SIZE] {
            self.0
        }
    }

    const VECTORS: &[(&str, &str)] = &[
        (
            "5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        ),
        (
            "19ef9290b8cf5ec5e72f9fde3e044b37736ec0c7",
            "0x19ef9290B8cf5EC5e72F9fDE3E044b37736Ec0C7",
        ),
        (
            "dbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        ),
        (
            "D1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ),
        (
            "5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed19ef9290b8cf5ec5e72f9fde3e044b37736ec0c7",
            "0x5AaEB6053f3E94C9b9A09f33669435e7Ef1BeaEd19eF9290B8Cf5EC5E72F9Fde3E044b37736EC0C7",
        ),
    ];

    #[test]
    fn test_encode_vectors() {
        for (source, expected) in VECTORS {
            let data = hex::decode(source).unwrap();
            assert_eq!(encode_hex(&data), *expected, "source {}", source);
        }
    }

    #[test]
    fn test_decode_vectors() {
        for (source, checksummed) in VECTORS {
            let data = hex::decode(source).unwrap();
            let decoded = ChecksumHexCodec::keccak().inspect(checksummed).unwrap();
            assert_eq!(decoded.data, data);
            assert_eq!(decoded.status, ChecksumStatus::Valid);
        }
    }

    #[test]
    fn test_decode_bad_checksum_returns_data() {
        let data = hex::decode("D1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb").unwrap();
        let err = decode_hex("0xd1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb").unwrap_err();

        assert_eq!(
            err,
            DecodeError::ChecksumMismatch {
                data: data.clone(),
                expected: "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb".into(),
            }
        );
        assert_eq!(err.to_string(), "invalid checksum: expected 0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb");
        assert_eq!(err.into_data(), Some(data));
    }

    #[test]
    fn test_decode_odd_length() {
        let err = decode_hex("0").unwrap_err();
        assert_eq!(err, DecodeError::MalformedHex(hex::FromHexError::OddLength));
        assert!(err.data().is_none());
    }

    #[test]
    fn test_decode_invalid_character() {
        let err = decode_hex("0xzz").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MalformedHex(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 })
        ));
    }

    #[test]
    fn test_only_lowercase_prefix_is_stripped() {
        // "0X" stays in the body, and 'X' is not a hex digit.
        assert!(matches!(
            decode_hex("0X5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
            Err(DecodeError::MalformedHex(_))
        ));
        // Whitespace is not trimmed.
        assert!(matches!(decode_hex(" 0xab"), Err(DecodeError::MalformedHex(_))));
    }

    #[test]
    fn test_prefix_is_optional() {
        let with = decode_hex("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap();
        let without = decode_hex("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode_hex(&[]), "0x");
        assert_eq!(decode_hex("0x").unwrap(), Vec::<u8>::new());
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_uniform_case_not_asserted() {
        let codec = ChecksumHexCodec::keccak();
        let lower = codec
            .inspect("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed")
            .unwrap();
        let upper = codec
            .inspect("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED")
            .unwrap();

        assert_eq!(lower.status, ChecksumStatus::NotAsserted);
        assert_eq!(upper.status, ChecksumStatus::NotAsserted);
        assert_eq!(lower.data, upper.data);
        assert_eq!(lower.canonical, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    }

    #[test]
    fn test_stub_all_high_uppercases_every_letter() {
        let codec = ChecksumHexCodec::new(FixedDigest([0xff; DIGEST_SIZE]));
        assert_eq!(codec.encode(&[0xab, 0x12, 0xcd]), "0xAB12CD");
    }

    #[test]
    fn test_stub_all_low_keeps_lowercase() {
        let codec = ChecksumHexCodec::new(FixedDigest([0x77; DIGEST_SIZE]));
        assert_eq!(codec.encode(&[0xab, 0x12, 0xcd]), "0xab12cd");
    }

    #[test]
    fn test_digest_wraps_for_long_input() {
        // Only digest nibble 0 is high, so positions 0 and 64 are upper-cased.
        let mut digest = [0u8; DIGEST_SIZE];
        digest[0] = 0x80;
        let codec = ChecksumHexCodec::new(FixedDigest(digest));

        let encoded = codec.encode(&[0xaa; 33]);
        let body = &encoded[HEX_PREFIX.len()..];
        assert_eq!(body.len(), 66);
        for (i, c) in body.chars().enumerate() {
            if i == 0 || i == 64 {
                assert_eq!(c, 'A', "position {}", i);
            } else {
                assert_eq!(c, 'a', "position {}", i);
            }
        }
    }

    #[test]
    fn test_digits_only_is_valid() {
        let decoded = ChecksumHexCodec::keccak().inspect("0x0123456789").unwrap();
        assert_eq!(decoded.status, ChecksumStatus::Valid);
        assert_eq!(decoded.data, vec![0x01, 0x23, 0x45, 0x67, 0x89]);
    }

    proptest! {
        #[test]
        fn prop_roundtrip(data in prop::collection::vec(any::<u8>(), 0..128)) {
            let encoded = encode_hex(&data);
            let decoded = ChecksumHexCodec::keccak().inspect(&encoded).unwrap();
            prop_assert_eq!(decoded.status, ChecksumStatus::Valid);
            prop_assert_eq!(decoded.data, data);
        }

        #[test]
        fn prop_digits_unchanged(data in prop::collection::vec(any::<u8>(), 0..128)) {
            let encoded = encode_hex(&data);
            let plain = hex::encode(&data);
            prop_assert_eq!(encoded.len(), HEX_PREFIX.len() + plain.len());
            prop_assert_eq!(encoded[HEX_PREFIX.len()..].to_ascii_lowercase(), plain.clone());
            for (e, p) in encoded[HEX_PREFIX.len()..].chars().zip(plain.chars()) {
                if p.is_ascii_digit() {
                    prop_assert_eq!(e, p);
                }
            }
        }
    }
}
