//! Message representative: digest interpreted as a big-endian integer.

// Big-integer arithmetic is arbitrary precision and cannot overflow.
#![allow(clippy::arithmetic_side_effects)]

use num_bigint_dig::BigUint;
use ring::digest;

use super::params::HashAlgorithm;

/// Hash `message` and return the leftmost `min(q_bit_length, outlen)` bits of
/// the digest as an integer (FIPS 186-3 §4.6).
///
/// Every shipped group pairs `q` with a digest of the same length, so the
/// digest is used whole. No reduction mod `q` happens here.
#[must_use]
pub fn hash_to_int(algorithm: HashAlgorithm, message: &[u8], q_bit_length: usize) -> BigUint {
    let hash = digest::digest(algorithm.to_ring_algorithm(), message);
    let e = BigUint::from_bytes_be(hash.as_ref());
    match algorithm.output_bits().checked_sub(q_bit_length) {
        Some(excess) if excess > 0 => e >> excess,
        _ => e,
    }
}
