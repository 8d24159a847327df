use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Content checksum identifying a stored binary asset
///
/// SHA-256, lowercase hex. Stored media keep the checksum of the bytes they
/// were created from so a reloaded aggregate can be compared against the
/// original upload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checksum(String);

impl Checksum {
    /// Create a checksum from a SHA-256 hex string
    ///
    /// # Errors
    /// Returns an error if the value is not a 64-character hex string
    pub fn new(value: &str) -> Result<Self, ChecksumError> {
        if value.len() != 64 {
            return Err(ChecksumError::InvalidLength(value.len()));
        }

        if !value.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ChecksumError::InvalidCharacters);
        }

        Ok(Self(value.to_lowercase()))
    }

    /// Compute the checksum of a byte slice
    #[must_use]
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hex::encode(hasher.finalize()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Checksum {
    type Err = ChecksumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Errors that can occur when creating a checksum
#[derive(Debug, thiserror::Error)]
pub enum ChecksumError {
    #[error("Invalid checksum length: expected 64 characters, got {0}")]
    InvalidLength(usize),
    #[error("Invalid characters: checksum must contain only hexadecimal characters")]
    InvalidCharacters,
}
