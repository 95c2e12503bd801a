//! Algorithm-agnostic key framework.
//!
//! This module provides:
//! - [`Algorithm`] — short tag identifying a signature algorithm (`"DS"`)
//! - [`AsymmetricPublicKey`] / [`AsymmetricSecretKey`] — object-safe key capabilities
//! - [`generate_keypair`] — generate a key pair by tag and keysize label
//! - [`public_key_from_object`] / [`secret_key_from_object`] — decode a key
//!   object, dispatching on its `"algorithm"` field
//!
//! Algorithms are listed in a static registry; each algorithm module exports
//! one [`AlgorithmEntry`] with its constructors.

use std::any::Any;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::ds;
use crate::error::CryptoError;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Signature algorithm tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// DSA over a fixed parameter group.
    Ds,
}

impl Algorithm {
    /// Wire tag written into serialized keys.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Ds => "DS",
        }
    }
}

impl FromStr for Algorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DS" => Ok(Self::Ds),
            other => Err(CryptoError::UnknownAlgorithm(other.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Verification half of a key pair.
pub trait AsymmetricPublicKey: fmt::Debug + Send + Sync {
    /// Algorithm this key belongs to.
    fn algorithm(&self) -> Algorithm;

    /// Numeric keysize label.
    fn keysize(&self) -> u32;

    /// Check `signature` over `message`. Malformed input yields `false`.
    fn verify(&self, message: &[u8], signature: &str) -> bool;

    /// Export as a tagged key object.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Serialization`] if the object cannot be built.
    fn serialize_to_object(&self) -> Result<Value, CryptoError>;

    /// Export as JSON text.
    ///
    /// # Errors
    ///
    /// As [`AsymmetricPublicKey::serialize_to_object`].
    fn serialize(&self) -> Result<String, CryptoError> {
        Ok(self.serialize_to_object()?.to_string())
    }

    /// Concrete key, for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Same algorithm, same keysize, same public value.
    fn equals(&self, other: &dyn AsymmetricPublicKey) -> bool;
}

/// Signing half of a key pair.
pub trait AsymmetricSecretKey: fmt::Debug + Send + Sync {
    /// Algorithm this key belongs to.
    fn algorithm(&self) -> Algorithm;

    /// Numeric keysize label.
    fn keysize(&self) -> u32;

    /// Sign `message`, returning the algorithm's text encoding.
    ///
    /// # Errors
    ///
    /// Algorithm-specific signing failure.
    fn sign(&self, message: &[u8]) -> Result<String, CryptoError>;

    /// Export as a tagged key object. The result contains secret material.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Serialization`] if the object cannot be built.
    fn serialize_to_object(&self) -> Result<Value, CryptoError>;

    /// Export as JSON text. The result contains secret material.
    ///
    /// # Errors
    ///
    /// As [`AsymmetricSecretKey::serialize_to_object`].
    fn serialize(&self) -> Result<String, CryptoError> {
        Ok(self.serialize_to_object()?.to_string())
    }

    /// Concrete key, for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// A freshly generated pair of boxed keys.
#[derive(Debug)]
pub struct GeneratedKeyPair {
    /// Algorithm of both halves.
    pub algorithm: Algorithm,
    /// Keysize label of both halves.
    pub keysize: u32,
    /// Public half.
    pub public: Box<dyn AsymmetricPublicKey>,
    /// Secret half.
    pub secret: Box<dyn AsymmetricSecretKey>,
}

/// Constructors one algorithm contributes to the registry.
pub struct AlgorithmEntry {
    /// Tag the entry is registered under.
    pub algorithm: Algorithm,
    /// Generate a pair for a keysize label.
    pub generate: fn(u32) -> Result<GeneratedKeyPair, CryptoError>,
    /// Decode and validate a public key object.
    pub public_from_object: fn(&Value) -> Result<Box<dyn AsymmetricPublicKey>, CryptoError>,
    /// Decode and validate a secret key object.
    pub secret_from_object: fn(&Value) -> Result<Box<dyn AsymmetricSecretKey>, CryptoError>,
}

impl fmt::Debug for AlgorithmEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmEntry")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

static REGISTRY: &[AlgorithmEntry] = &[ds::REGISTRY_ENTRY];

/// Algorithms with a registry entry.
pub fn registered_algorithms() -> impl Iterator<Item = Algorithm> {
    REGISTRY.iter().map(|entry| entry.algorithm)
}

/// Find the registry entry for a tag.
///
/// # Errors
///
/// Returns [`CryptoError::UnknownAlgorithm`] if the tag is not registered.
pub fn lookup(tag: &str) -> Result<&'static AlgorithmEntry, CryptoError> {
    let algorithm: Algorithm = tag.parse()?;
    REGISTRY
        .iter()
        .find(|entry| entry.algorithm == algorithm)
        .ok_or_else(|| CryptoError::UnknownAlgorithm(tag.to_owned()))
}

/// Generate a key pair for `tag` at keysize label `keysize`.
///
/// # Errors
///
/// - [`CryptoError::UnknownAlgorithm`] if `tag` is not registered
/// - [`CryptoError::KeySizeNotSupported`] if the algorithm has no such keysize
pub fn generate_keypair(tag: &str, keysize: u32) -> Result<GeneratedKeyPair, CryptoError> {
    (lookup(tag)?.generate)(keysize)
}

fn entry_for_object(object: &Value) -> Result<&'static AlgorithmEntry, CryptoError> {
    let tag = object
        .get("algorithm")
        .and_then(Value::as_str)
        .ok_or_else(|| CryptoError::InvalidKeyMaterial("missing algorithm tag".to_owned()))?;
    lookup(tag)
}

/// Decode a public key object, dispatching on its `"algorithm"` field.
///
/// # Errors
///
/// - [`CryptoError::InvalidKeyMaterial`] if the tag is missing or the key is malformed
/// - [`CryptoError::UnknownAlgorithm`] if the tag is not registered
/// - any validation error of the selected algorithm
pub fn public_key_from_object(object: &Value) -> Result<Box<dyn AsymmetricPublicKey>, CryptoError> {
    (entry_for_object(object)?.public_from_object)(object)
}

/// Decode a secret key object, dispatching on its `"algorithm"` field.
///
/// # Errors
///
/// As [`public_key_from_object`].
pub fn secret_key_from_object(object: &Value) -> Result<Box<dyn AsymmetricSecretKey>, CryptoError> {
    (entry_for_object(object)?.secret_from_object)(object)
}

/// Decode a public key from JSON text.
///
/// # Errors
///
/// [`CryptoError::Serialization`] for malformed JSON, otherwise as
/// [`public_key_from_object`].
pub fn public_key_from_str(json: &str) -> Result<Box<dyn AsymmetricPublicKey>, CryptoError> {
    let object: Value = serde_json::from_str(json)?;
    public_key_from_object(&object)
}

/// Decode a secret key from JSON text.
///
/// # Errors
///
/// As [`public_key_from_str`].
pub fn secret_key_from_str(json: &str) -> Result<Box<dyn AsymmetricSecretKey>, CryptoError> {
    let object: Value = serde_json::from_str(json)?;
    secret_key_from_object(&object)
}
