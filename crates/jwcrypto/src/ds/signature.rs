//! Fixed-width hex encoding of `(r, s)`.
//!
//! A signature is `hex(r) || hex(s)`, each half left-padded with zeros to
//! `bitlen(q) / 4` characters, so the halves split without a delimiter.

use num_bigint_dig::BigUint;

/// A DSA signature pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    pub(crate) const fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// First component.
    #[must_use]
    pub const fn r(&self) -> &BigUint {
        &self.r
    }

    /// Second component.
    #[must_use]
    pub const fn s(&self) -> &BigUint {
        &self.s
    }

    /// Encode as `2 * (q_bit_length / 4)` lowercase hex characters.
    #[must_use]
    pub fn to_hex(&self, q_bit_length: usize) -> String {
        let half = q_bit_length / 4;
        format!(
            "{:0>half$}{:0>half$}",
            self.r.to_str_radix(16),
            self.s.to_str_radix(16)
        )
    }

    /// Split and parse an encoded signature.
    ///
    /// Returns `None` unless `encoded` is exactly `2 * (q_bit_length / 4)`
    /// hex digits. No range check is applied to the components.
    #[must_use]
    pub fn from_hex(encoded: &str, q_bit_length: usize) -> Option<Self> {
        let half = q_bit_length / 4;
        if half == 0 || encoded.len() != half.checked_mul(2)? {
            return None;
        }
        if !encoded.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let (r_hex, s_hex) = encoded.split_at(half);
        let r = BigUint::parse_bytes(r_hex.as_bytes(), 16)?;
        let s = BigUint::parse_bytes(s_hex.as_bytes(), 16)?;
        Some(Self { r, s })
    }
}
