//! Scalars mod `q`: uniform sampling in `[1, q-1]` and inversion.
//!
//! The sampler is used for both the secret key `x` and the per-signature
//! nonce `k`.

// Big-integer arithmetic is arbitrary precision and cannot overflow.
#![allow(clippy::arithmetic_side_effects)]

use num_bigint_dig::{BigInt, BigUint, ModInverse, RandBigInt, Sign};
use num_integer::Integer;
use num_traits::One;
use rand::{CryptoRng, RngCore};

/// Extra random bits drawn beyond `bitlen(q)` to flatten the modular bias.
const OVERSAMPLE_BITS: usize = 64;

/// Draw a scalar uniformly from `[1, q-1]`.
///
/// Follows FIPS 186-3 B.1.1: draw `c` with `bitlen(q) + 64` random bits and
/// return `(c mod (q-1)) + 1`. The bias is on the order of 2^-64, so no
/// rejection loop is needed.
///
/// `q` must be at least 2.
#[must_use]
pub fn random_scalar_mod<R: CryptoRng + RngCore + ?Sized>(q: &BigUint, rng: &mut R) -> BigUint {
    let c = rng.gen_biguint(q.bits() + OVERSAMPLE_BITS);
    (c % (q - BigUint::one())) + BigUint::one()
}

/// Inverse of `a` modulo `m`, normalized into `[0, m)`.
///
/// Returns `None` when `gcd(a, m) != 1`.
#[must_use]
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let inverse = a.clone().mod_inverse(m)?;
    let modulus = BigInt::from_biguint(Sign::Plus, m.clone());
    inverse.mod_floor(&modulus).to_biguint()
}
