//! DSA signing key.
//!
//! The secret scalar `x` is zeroized on drop and masked in `Debug`. The
//! public value `y` is always recomputed from `x`, never accepted from input.

// Big-integer arithmetic is arbitrary precision and cannot overflow.
#![allow(clippy::arithmetic_side_effects)]

use std::fmt;

use num_bigint_dig::BigUint;
use num_traits::Zero;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::digest::hash_to_int;
use super::params::{DomainParameters, KeySize};
use super::public_key::PublicKey;
use super::scalar::{mod_inverse, random_scalar_mod};
use super::signature::Signature;
use super::validate::{
    check_algorithm_tag, keysize_from_object, parse_hex, DomainParameterHex, SecretKeyObject,
};
use super::ALGORITHM_TAG;
use crate::error::CryptoError;

/// A DSA secret key: scalar `x` in `[1, q-1]` and its public value `y`.
///
/// Intentionally does NOT implement `Serialize`; exporting `x` requires an
/// explicit [`SecretKey::serialize_to_object`] call.
#[derive(Clone)]
pub struct SecretKey {
    x: BigUint,
    y: BigUint,
    keysize: KeySize,
}

impl SecretKey {
    /// Build a key from a secret scalar, deriving `y = g^x mod p`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKeyMaterial`] if `x` is not in `[1, q)`.
    pub fn from_scalar(x: BigUint, keysize: KeySize) -> Result<Self, CryptoError> {
        let params = keysize.params();
        if x.is_zero() || &x >= params.q() {
            let mut x = x;
            x.zeroize();
            return Err(CryptoError::InvalidKeyMaterial(
                "x is outside [1, q)".to_owned(),
            ));
        }
        let y = params.g().modpow(&x, params.p());
        Ok(Self { x, y, keysize })
    }

    /// Keysize selecting this key's group.
    #[must_use]
    pub const fn keysize(&self) -> KeySize {
        self.keysize
    }

    /// Domain parameters of this key's group.
    #[must_use]
    pub fn params(&self) -> &'static DomainParameters {
        self.keysize.params()
    }

    /// Public value `y` derived from `x`.
    #[must_use]
    pub const fn y(&self) -> &BigUint {
        &self.y
    }

    /// The matching public key.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        PublicKey::new(self.y.clone(), self.keysize)
    }

    /// Sign `message` with a nonce from the operating system CSPRNG.
    ///
    /// Returns `hex(r) || hex(s)`, each half zero-padded to `bitlen(q) / 4`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Signature`] if a nonce has no inverse mod `q`,
    /// which cannot happen for a prime `q`.
    pub fn sign(&self, message: &[u8]) -> Result<String, CryptoError> {
        self.sign_with_rng(message, &mut OsRng)
    }

    /// Sign `message` drawing nonces from `rng`.
    ///
    /// # Errors
    ///
    /// As [`SecretKey::sign`].
    pub fn sign_with_rng<R: CryptoRng + RngCore + ?Sized>(
        &self,
        message: &[u8],
        rng: &mut R,
    ) -> Result<String, CryptoError> {
        let sig = self.sign_signature_with_rng(message, rng)?;
        Ok(sig.to_hex(self.params().q_bit_length()))
    }

    /// Produce the `(r, s)` pair for `message`.
    ///
    /// A fresh nonce is drawn until both `r` and `s` are non-zero. Each retry
    /// is a `debug` event, not an error; no iteration cap is applied since a
    /// zero component has probability about `2/q`.
    ///
    /// # Errors
    ///
    /// As [`SecretKey::sign`].
    pub fn sign_signature_with_rng<R: CryptoRng + RngCore + ?Sized>(
        &self,
        message: &[u8],
        rng: &mut R,
    ) -> Result<Signature, CryptoError> {
        let params = self.params();
        let (p, q, g) = (params.p(), params.q(), params.g());
        let e = hash_to_int(params.hash_algorithm(), message, params.q_bit_length());

        loop {
            let mut k = random_scalar_mod(q, rng);

            let r = g.modpow(&k, p) % q;
            if r.is_zero() {
                k.zeroize();
                tracing::debug!(keysize = %self.keysize, "r is zero, retrying with a fresh nonce");
                continue;
            }

            let k_inv = mod_inverse(&k, q);
            k.zeroize();
            let mut k_inv = k_inv.ok_or_else(|| {
                CryptoError::Signature("nonce has no inverse mod q".to_owned())
            })?;

            let s = (&k_inv * ((&e + (&self.x * &r) % q) % q)) % q;
            k_inv.zeroize();
            if s.is_zero() {
                tracing::debug!(keysize = %self.keysize, "s is zero, retrying with a fresh nonce");
                continue;
            }

            return Ok(Signature::new(r, s));
        }
    }

    /// Sign on the blocking thread pool and resolve once the signature exists.
    ///
    /// Must be awaited inside a Tokio runtime.
    ///
    /// # Errors
    ///
    /// As [`SecretKey::sign`], plus [`CryptoError::Task`] if the worker task
    /// panicked or was cancelled by runtime shutdown.
    pub async fn sign_async(&self, message: Vec<u8>) -> Result<String, CryptoError> {
        let key = self.clone();
        tokio::task::spawn_blocking(move || key.sign(&message))
            .await
            .map_err(|e| CryptoError::Task(e.to_string()))?
    }

    /// Export as a key object carrying `x` and the group's `p`, `q`, `g`.
    #[must_use]
    pub fn serialize_to_object(&self) -> SecretKeyObject {
        SecretKeyObject {
            algorithm: Some(ALGORITHM_TAG.to_owned()),
            x: self.x.to_str_radix(16),
            params: DomainParameterHex::from(self.params()),
        }
    }

    /// Import a key object, validating its domain parameters first, and
    /// recompute `y`.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::UnknownAlgorithm`] if the object is tagged for another algorithm
    /// - [`CryptoError::BadParameter`] if `p`, `q` or `g` is not canonical
    /// - [`CryptoError::InvalidKeyMaterial`] if `x` is not hex or not in `[1, q)`
    pub fn deserialize_from_object(object: &SecretKeyObject) -> Result<Self, CryptoError> {
        check_algorithm_tag(object.algorithm.as_deref())?;
        let keysize = keysize_from_object(&object.params)?;
        let x = parse_hex(&object.x)
            .ok_or_else(|| CryptoError::InvalidKeyMaterial("x is not a hex integer".to_owned()))?;
        Self::from_scalar(x, keysize)
    }

    /// Export as JSON text. The output contains the secret scalar.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Serialization`] if JSON encoding fails.
    pub fn serialize(&self) -> Result<String, CryptoError> {
        Ok(serde_json::to_string(&self.serialize_to_object())?)
    }

    /// Import from JSON text produced by [`SecretKey::serialize`].
    ///
    /// # Errors
    ///
    /// [`CryptoError::Serialization`] for malformed JSON, otherwise as
    /// [`SecretKey::deserialize_from_object`].
    pub fn deserialize(json: &str) -> Result<Self, CryptoError> {
        let object: SecretKeyObject = serde_json::from_str(json)?;
        Self::deserialize_from_object(&object)
    }

    /// `x` as big-endian bytes left-padded to the byte length of `q`.
    fn x_fixed_width(&self) -> Vec<u8> {
        let width = self.params().q_bit_length().div_ceil(8);
        let mut bytes = self.x.to_bytes_be();
        let mut out = vec![0u8; width.saturating_sub(bytes.len())];
        out.extend_from_slice(&bytes);
        bytes.zeroize();
        out
    }
}

/// Constant-time byte comparison.
///
/// The early return on length mismatch only reveals the keysize, which is
/// public.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        if self.keysize != other.keysize {
            return false;
        }
        let mut a = self.x_fixed_width();
        let mut b = other.x_fixed_width();
        let equal = constant_time_eq(&a, &b);
        a.zeroize();
        b.zeroize();
        equal
    }
}

impl Eq for SecretKey {}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.x.zeroize();
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(DS/{}, ***)", self.keysize)
    }
}
