//! 20-byte addresses rendered with the checksummed hex codec.
//!
//! Parsing is strict about the checksum: a mixed-case string with the wrong
//! casing is rejected, while uniformly cased input is accepted.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::codec::{decode_hex, encode_hex};
use crate::error::AddressError;

/// Size of an address in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// A 20-byte address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address(pub [u8; ADDRESS_SIZE]);

impl Address {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, checking its length.
    pub fn from_slice(slice: &[u8]) -> Result<Self, AddressError> {
        let arr: [u8; ADDRESS_SIZE] = slice.try_into().map_err(|_| AddressError::InvalidLength {
            expected: ADDRESS_SIZE,
            got: slice.len(),
        })?;
        Ok(Self(arr))
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    /// Canonical checksummed form, `0x`-prefixed.
    pub fn to_checksum(&self) -> String {
        encode_hex(&self.0)
    }

    /// The zero address.
    pub const ZERO: Self = Self([0u8; ADDRESS_SIZE]);
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = decode_hex(s)?;
        Self::from_slice(&bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_SIZE]> for Address {
    fn from(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = AddressError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(slice)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_checksum())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    const CANONICAL: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    #[test]
    fn test_address_display_roundtrip() {
        let addr: Address = CANONICAL.parse().unwrap();
        assert_eq!(addr.to_string(), CANONICAL);
        assert_eq!(format!("{:?}", addr), format!("Address({})", CANONICAL));
    }

    #[test]
    fn test_address_accepts_uniform_case() {
        let lower: Address = CANONICAL.to_ascii_lowercase().parse().unwrap();
        let canonical: Address = CANONICAL.parse().unwrap();
        assert_eq!(lower, canonical);
    }

    #[test]
    fn test_address_rejects_bad_checksum() {
        let err = "0xd1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb"
            .parse::<Address>()
            .unwrap_err();
        assert!(matches!(
            err,
            AddressError::Decode(DecodeError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_address_rejects_wrong_length() {
        let err = "0xabcd".parse::<Address>().unwrap_err();
        assert_eq!(
            err,
            AddressError::InvalidLength {
                expected: ADDRESS_SIZE,
                got: 2
            }
        );
    }

    #[test]
    fn test_address_serde_as_string() {
        let addr: Address = CANONICAL.parse().unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{}\"", CANONICAL));

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);

        let bad = serde_json::from_str::<Address>("\"0xd1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_zero_address() {
        assert_eq!(
            Address::ZERO.to_string(),
            "0x0000000000000000000000000000000000000000"
        );
        assert_eq!(Address::default(), Address::ZERO);
    }
}
