//! `jwcrypto` — DSA signing keys for JSON-carried assertions.
//!
//! Keys use one of two fixed, pinned DSA parameter groups and serialize to
//! flat JSON objects. Zero network, zero file I/O; the only mutable external
//! resource is the random source.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod keys;

pub mod ds;

pub use ds::{
    keysize_from_object, DomainParameters, HashAlgorithm, KeyPair, KeySize, PublicKey, SecretKey,
    Signature,
};
pub use error::{CryptoError, DomainParameter};
pub use keys::{
    generate_keypair, public_key_from_object, public_key_from_str, secret_key_from_object,
    secret_key_from_str, Algorithm, AsymmetricPublicKey, AsymmetricSecretKey, GeneratedKeyPair,
};
