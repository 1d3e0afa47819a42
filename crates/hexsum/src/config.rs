//! Configuration for hexsum decoding.

use serde::{Deserialize, Serialize};

use crate::error::{HexsumError, Result};

/// What to do with well-formed input whose mixed casing fails the checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MismatchPolicy {
    /// Log a warning and use the decoded bytes.
    #[default]
    Warn,
    /// Fail the decode.
    Reject,
}

/// Configuration for [`HexDecoder`](crate::HexDecoder).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HexConfig {
    /// Handling of checksum mismatches.
    pub mismatch_policy: MismatchPolicy,
}

impl HexConfig {
    /// Configuration that rejects checksum mismatches.
    pub fn strict() -> Self {
        Self {
            mismatch_policy: MismatchPolicy::Reject,
        }
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| HexsumError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| HexsumError::Config(e.to_string()))
    }
}
