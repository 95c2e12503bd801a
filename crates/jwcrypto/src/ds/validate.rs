//! Serialized key objects and domain-parameter validation.
//!
//! Keys travel as flat JSON objects:
//!
//! - public: `{ "algorithm": "DS", "y": hex, "p": hex, "q": hex, "g": hex }`
//! - secret: `{ "algorithm": "DS", "x": hex, "p": hex, "q": hex, "g": hex }`
//!
//! The embedded `p`, `q`, `g` are never trusted. [`keysize_from_object`]
//! re-derives the keysize from `p` and then requires all three values to equal
//! the canonical group exactly, so a key cannot claim a trusted keysize while
//! carrying attacker-chosen parameters.

use num_bigint_dig::BigUint;
use serde::{Deserialize, Serialize};

use super::params::{keysize_from_p_bit_length, DomainParameters, KeySize};
use super::ALGORITHM_TAG;
use crate::error::{CryptoError, DomainParameter};

/// Hex-encoded `(p, q, g)` as carried inside a key object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainParameterHex {
    /// Prime modulus.
    pub p: String,
    /// Subgroup order.
    pub q: String,
    /// Generator.
    pub g: String,
}

impl From<&DomainParameters> for DomainParameterHex {
    fn from(params: &DomainParameters) -> Self {
        Self {
            p: params.p().to_str_radix(16),
            q: params.q().to_str_radix(16),
            g: params.g().to_str_radix(16),
        }
    }
}

/// Wire layout of a public key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyObject {
    /// Algorithm tag; optional on input, always written on output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    /// Public value `y`.
    pub y: String,
    /// Domain parameters.
    #[serde(flatten)]
    pub params: DomainParameterHex,
}

/// Wire layout of a secret key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKeyObject {
    /// Algorithm tag; optional on input, always written on output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    /// Secret scalar `x`.
    pub x: String,
    /// Domain parameters.
    #[serde(flatten)]
    pub params: DomainParameterHex,
}

/// Parse a hex string, rejecting empty input and anything but `[0-9a-fA-F]`.
pub(crate) fn parse_hex(hex: &str) -> Option<BigUint> {
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    BigUint::parse_bytes(hex.as_bytes(), 16)
}

/// Reject an `algorithm` field naming anything other than `"DS"`.
pub(crate) fn check_algorithm_tag(tag: Option<&str>) -> Result<(), CryptoError> {
    match tag {
        None => Ok(()),
        Some(t) if t == ALGORITHM_TAG => Ok(()),
        Some(t) => Err(CryptoError::UnknownAlgorithm(format!(
            "expected {ALGORITHM_TAG}, object is tagged {t}"
        ))),
    }
}

/// Infer and confirm the keysize of externally supplied domain parameters.
///
/// # Errors
///
/// Returns [`CryptoError::BadParameter`] naming the first of `p`, `q`, `g`
/// that is malformed or differs from the canonical group. A `p` whose bit
/// length selects no group is reported as bad `p`.
pub fn keysize_from_object(params: &DomainParameterHex) -> Result<KeySize, CryptoError> {
    let reject = |which: DomainParameter| {
        tracing::warn!(parameter = %which, "rejected non-canonical domain parameter");
        CryptoError::BadParameter(which)
    };

    let p = parse_hex(&params.p).ok_or_else(|| reject(DomainParameter::P))?;
    let keysize = keysize_from_p_bit_length(p.bits()).ok_or_else(|| reject(DomainParameter::P))?;
    let canonical = keysize.params();
    if &p != canonical.p() {
        return Err(reject(DomainParameter::P));
    }

    let q = parse_hex(&params.q).ok_or_else(|| reject(DomainParameter::Q))?;
    if &q != canonical.q() {
        return Err(reject(DomainParameter::Q));
    }

    let g = parse_hex(&params.g).ok_or_else(|| reject(DomainParameter::G))?;
    if &g != canonical.g() {
        return Err(reject(DomainParameter::G));
    }
    Ok(keysize)
}
