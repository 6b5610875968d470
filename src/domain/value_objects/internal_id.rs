//! Internal Id Value Object
//!
//! A deterministic 24-character lowercase hexadecimal identifier derived
//! from an item's human-authored external id. The same external id always
//! produces the same internal id, across runs and across machines, so a
//! re-registered item keeps its identity in the destination item table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Deterministic internal identifier for a registered item
///
/// Derived from the external id via SHA-256: the first 12 digest bytes are
/// rendered as lowercase hex in byte order. This is an immutable value
/// object; the inner string always holds exactly 24 lowercase hex chars.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InternalId(String);

impl InternalId {
    /// Length of the rendered identifier in characters
    pub const LEN: usize = 24;

    /// Number of digest bytes consumed
    const DIGEST_BYTES: usize = 12;

    /// Derive the internal id for an external id
    ///
    /// Total and infallible: any string (including empty or non-ASCII)
    /// maps to a well-formed id. If the digest ever yielded fewer than 12
    /// bytes the output is right-padded with '0' to keep the fixed length.
    pub fn from_external(external_id: &str) -> Self {
        use sha2::{Digest, Sha256};
        use std::fmt::Write as _;

        let digest = Sha256::digest(external_id.as_bytes());

        let mut hex = String::with_capacity(Self::LEN);
        for byte in digest.iter().take(Self::DIGEST_BYTES) {
            let _ = write!(hex, "{:02x}", byte);
        }
        while hex.len() < Self::LEN {
            hex.push('0');
        }

        Self(hex)
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for InternalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
