//! Cryptographic error types for `jwcrypto`.

use std::fmt;

use thiserror::Error;

/// One component of a DSA domain-parameter triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomainParameter {
    /// Prime modulus `p`.
    P,
    /// Subgroup order `q`.
    Q,
    /// Subgroup generator `g`.
    G,
}

impl DomainParameter {
    /// Field name used in serialized key objects.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::P => "p",
            Self::Q => "q",
            Self::G => "g",
        }
    }
}

impl fmt::Display for DomainParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// Errors produced by key generation, signing and key deserialization.
///
/// Signature verification never produces an error: a malformed or forged
/// signature is reported as `false`.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The requested keysize label has no registered parameter group.
    #[error("key size not supported: {0}")]
    KeySizeNotSupported(String),

    /// Supplied domain parameters do not match the canonical group.
    #[error("bad {0}")]
    BadParameter(DomainParameter),

    /// Invalid key material (malformed hex, missing field, value out of range).
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// No registry entry for the algorithm tag, or the tag does not match.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// JSON encoding or decoding of a key object failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Signature creation failure.
    #[error("signature error: {0}")]
    Signature(String),

    /// A deferred (async) operation's worker task did not complete.
    #[error("background task failed: {0}")]
    Task(String),
}

impl From<serde_json::Error> for CryptoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
