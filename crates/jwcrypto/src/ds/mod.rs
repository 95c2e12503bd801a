//! DSA signatures over fixed, pinned domain parameters (algorithm tag `"DS"`).
//!
//! This module provides:
//! - [`KeyPair::generate`] — sample `x` in `[1, q-1]`, derive `y = g^x mod p`
//! - [`SecretKey::sign`] — `hex(r) || hex(s)`, each half zero-padded to `bitlen(q) / 4`
//! - [`PublicKey::verify`] — returns `bool`, never an error
//! - [`keysize_from_object`] — the only way a deserialized key gets a keysize
//!
//! # Parameter Pinning
//!
//! Domain parameters are never generated. A deserialized key must carry the
//! exact `p`, `q`, `g` of one of the two registered groups (see [`params`]);
//! anything else is rejected with [`CryptoError::BadParameter`].
//!
//! # Sync and Async
//!
//! `generate` and `sign` are blocking, CPU-bound calls. `generate_async` and
//! `sign_async` run the same work on Tokio's blocking pool.

pub mod digest;
pub mod params;
pub mod scalar;
pub mod signature;
pub mod validate;

mod keypair;
mod public_key;
mod secret_key;

use std::any::Any;

use serde::Deserialize;
use serde_json::Value;

use crate::error::CryptoError;
use crate::keys::{
    Algorithm, AlgorithmEntry, AsymmetricPublicKey, AsymmetricSecretKey, GeneratedKeyPair,
};

pub use keypair::KeyPair;
pub use params::{DomainParameters, HashAlgorithm, KeySize};
pub use public_key::PublicKey;
pub use secret_key::SecretKey;
pub use signature::Signature;
pub use validate::{keysize_from_object, DomainParameterHex, PublicKeyObject, SecretKeyObject};

/// Algorithm tag carried by serialized DS keys.
pub const ALGORITHM_TAG: &str = Algorithm::Ds.tag();

// ---------------------------------------------------------------------------
// Key framework integration
// ---------------------------------------------------------------------------

pub(crate) const REGISTRY_ENTRY: AlgorithmEntry = AlgorithmEntry {
    algorithm: Algorithm::Ds,
    generate: generate_boxed,
    public_from_object: public_from_value,
    secret_from_object: secret_from_value,
};

fn generate_boxed(label: u32) -> Result<GeneratedKeyPair, CryptoError> {
    let keysize = KeySize::try_from(label)?;
    let (secret, public) = KeyPair::generate(keysize)?.into_parts();
    Ok(GeneratedKeyPair {
        algorithm: Algorithm::Ds,
        keysize: label,
        public: Box::new(public),
        secret: Box::new(secret),
    })
}

fn public_from_value(object: &Value) -> Result<Box<dyn AsymmetricPublicKey>, CryptoError> {
    let object = PublicKeyObject::deserialize(object)?;
    Ok(Box::new(PublicKey::deserialize_from_object(&object)?))
}

fn secret_from_value(object: &Value) -> Result<Box<dyn AsymmetricSecretKey>, CryptoError> {
    let object = SecretKeyObject::deserialize(object)?;
    Ok(Box::new(SecretKey::deserialize_from_object(&object)?))
}

impl AsymmetricPublicKey for PublicKey {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Ds
    }

    fn keysize(&self) -> u32 {
        Self::keysize(self).label()
    }

    fn verify(&self, message: &[u8], signature: &str) -> bool {
        Self::verify(self, message, signature)
    }

    fn serialize_to_object(&self) -> Result<Value, CryptoError> {
        Ok(serde_json::to_value(Self::serialize_to_object(self))?)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals(&self, other: &dyn AsymmetricPublicKey) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| other == self)
    }
}

impl AsymmetricSecretKey for SecretKey {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Ds
    }

    fn keysize(&self) -> u32 {
        Self::keysize(self).label()
    }

    fn sign(&self, message: &[u8]) -> Result<String, CryptoError> {
        Self::sign(self, message)
    }

    fn serialize_to_object(&self) -> Result<Value, CryptoError> {
        Ok(serde_json::to_value(Self::serialize_to_object(self))?)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
