//! Decoding with a caller-chosen checksum policy.
//!
//! The core codec reports checksum mismatches without judging them. The
//! decoder applies [`HexConfig`] on top: mismatches are either logged and
//! tolerated or turned into errors. Malformed hex is always an error.

use hexsum_core::{
    Address, ChecksumHasher, ChecksumHexCodec, ChecksumStatus, DecodeError, Keccak256,
};

use crate::config::{HexConfig, MismatchPolicy};
use crate::error::Result;

/// Checksummed hex decoder with a configured mismatch policy.
#[derive(Debug, Clone)]
pub struct HexDecoder<H = Keccak256> {
    codec: ChecksumHexCodec<H>,
    config: HexConfig,
}

impl HexDecoder<Keccak256> {
    /// Create a Keccak256-bound decoder.
    pub fn new(config: HexConfig) -> Self {
        Self::with_codec(ChecksumHexCodec::keccak(), config)
    }
}

impl Default for HexDecoder<Keccak256> {
    fn default() -> Self {
        Self::new(HexConfig::default())
    }
}

impl<H: ChecksumHasher> HexDecoder<H> {
    /// Create a decoder around an existing codec.
    pub fn with_codec(codec: ChecksumHexCodec<H>, config: HexConfig) -> Self {
        Self { codec, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &HexConfig {
        &self.config
    }

    /// Get the underlying codec.
    pub fn codec(&self) -> &ChecksumHexCodec<H> {
        &self.codec
    }

    /// Encode bytes into canonical checksummed form.
    pub fn encode(&self, data: &[u8]) -> String {
        self.codec.encode(data)
    }

    /// Decode a hex string, applying the mismatch policy.
    pub fn decode(&self, s: &str) -> Result<Vec<u8>> {
        let decoded = self.codec.inspect(s)?;
        match decoded.status {
            ChecksumStatus::Valid => Ok(decoded.data),
            ChecksumStatus::NotAsserted => {
                tracing::debug!(input = s, "hex input carries no checksum");
                Ok(decoded.data)
            }
            ChecksumStatus::Mismatch => match self.config.mismatch_policy {
                MismatchPolicy::Warn => {
                    tracing::warn!(
                        input = s,
                        expected = %decoded.canonical,
                        "hex checksum mismatch, using decoded bytes"
                    );
                    Ok(decoded.data)
                }
                MismatchPolicy::Reject => Err(DecodeError::ChecksumMismatch {
                    data: decoded.data,
                    expected: decoded.canonical,
                }
                .into()),
            },
        }
    }

    /// Decode a 20-byte address, applying the mismatch policy.
    pub fn decode_address(&self, s: &str) -> Result<Address> {
        let bytes = self.decode(s)?;
        Ok(Address::from_slice(&bytes)?)
    }
}
