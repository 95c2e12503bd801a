//! DSA verification key.

// Big-integer arithmetic is arbitrary precision and cannot overflow.
#![allow(clippy::arithmetic_side_effects)]

use num_bigint_dig::BigUint;
use num_traits::Zero;

use super::digest::hash_to_int;
use super::params::{DomainParameters, KeySize};
use super::scalar::mod_inverse;
use super::signature::Signature;
use super::validate::{
    check_algorithm_tag, keysize_from_object, parse_hex, DomainParameterHex, PublicKeyObject,
};
use super::ALGORITHM_TAG;
use crate::error::CryptoError;

/// A DSA public key: `y = g^x mod p` under the group selected by `keysize`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    y: BigUint,
    keysize: KeySize,
}

impl PublicKey {
    pub(crate) const fn new(y: BigUint, keysize: KeySize) -> Self {
        Self { y, keysize }
    }

    /// Public value `y`.
    #[must_use]
    pub const fn y(&self) -> &BigUint {
        &self.y
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

    /// Verify a hex-encoded signature over `message`.
    ///
    /// Never fails loudly: a signature of the wrong length, with non-hex
    /// characters, or with a component outside `(0, q)` verifies as `false`,
    /// exactly like a forgery.
    #[must_use]
    pub fn verify(&self, message: &[u8], signature: &str) -> bool {
        let params = self.params();
        match Signature::from_hex(signature, params.q_bit_length()) {
            Some(sig) => self.verify_signature(message, &sig),
            None => {
                tracing::debug!(
                    len = signature.len(),
                    expected = params.signature_half_hex_len() * 2,
                    "rejected malformed signature encoding"
                );
                false
            }
        }
    }

    /// Verify a decoded signature over `message`.
    #[must_use]
    pub fn verify_signature(&self, message: &[u8], signature: &Signature) -> bool {
        let params = self.params();
        let (p, q, g) = (params.p(), params.q(), params.g());
        let (r, s) = (signature.r(), signature.s());

        if r.is_zero() || r >= q {
            tracing::debug!("rejected signature: r out of range");
            return false;
        }
        if s.is_zero() || s >= q {
            tracing::debug!("rejected signature: s out of range");
            return false;
        }

        let Some(w) = mod_inverse(s, q) else {
            tracing::debug!("rejected signature: s not invertible mod q");
            return false;
        };

        let e = hash_to_int(params.hash_algorithm(), message, params.q_bit_length());
        let u1 = (e * &w) % q;
        let u2 = (r * &w) % q;
        let v = ((g.modpow(&u1, p) * self.y.modpow(&u2, p)) % p) % q;

        &v == r
    }

    /// Export as a key object carrying `y` and the group's `p`, `q`, `g`.
    #[must_use]
    pub fn serialize_to_object(&self) -> PublicKeyObject {
        PublicKeyObject {
            algorithm: Some(ALGORITHM_TAG.to_owned()),
            y: self.y.to_str_radix(16),
            params: DomainParameterHex::from(self.params()),
        }
    }

    /// Import a key object, validating its domain parameters first.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::UnknownAlgorithm`] if the object is tagged for another algorithm
    /// - [`CryptoError::BadParameter`] if `p`, `q` or `g` is not canonical
    /// - [`CryptoError::InvalidKeyMaterial`] if `y` is not hex or not in `[1, p)`
    pub fn deserialize_from_object(object: &PublicKeyObject) -> Result<Self, CryptoError> {
        check_algorithm_tag(object.algorithm.as_deref())?;
        let keysize = keysize_from_object(&object.params)?;

        let y = parse_hex(&object.y)
            .ok_or_else(|| CryptoError::InvalidKeyMaterial("y is not a hex integer".to_owned()))?;
        if y.is_zero() || &y >= keysize.params().p() {
            return Err(CryptoError::InvalidKeyMaterial(
                "y is outside [1, p)".to_owned(),
            ));
        }
        Ok(Self::new(y, keysize))
    }

    /// Export as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Serialization`] if JSON encoding fails.
    pub fn serialize(&self) -> Result<String, CryptoError> {
        Ok(serde_json::to_string(&self.serialize_to_object())?)
    }

    /// Import from JSON text produced by [`PublicKey::serialize`].
    ///
    /// # Errors
    ///
    /// [`CryptoError::Serialization`] for malformed JSON, otherwise as
    /// [`PublicKey::deserialize_from_object`].
    pub fn deserialize(json: &str) -> Result<Self, CryptoError> {
        let object: PublicKeyObject = serde_json::from_str(json)?;
        Self::deserialize_from_object(&object)
    }
}
