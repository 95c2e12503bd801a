//! FIPS 180 digests interpreted as big-endian integers.

use jwcrypto::ds::digest::hash_to_int;
use jwcrypto::{HashAlgorithm, KeySize};
use num_bigint_dig::BigUint;

fn hex(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 16).unwrap()
}

/// SHA-1("hello world"), the 128 group's message representative.
#[test]
fn sha1_hello_world() {
    let params = KeySize::Ds128.params();
    assert_eq!(params.hash_algorithm(), HashAlgorithm::Sha1);
    assert_eq!(
        hash_to_int(params.hash_algorithm(), b"hello world", params.q_bit_length()),
        hex("2aae6c35c94fcfb415dbe95f408b9ce91ee846ed")
    );
}

/// SHA-256("hello world"), the 256 group's message representative.
#[test]
fn sha256_hello_world() {
    let params = KeySize::Ds256.params();
    assert_eq!(params.hash_algorithm(), HashAlgorithm::Sha256);
    assert_eq!(
        hash_to_int(params.hash_algorithm(), b"hello world", params.q_bit_length()),
        hex("b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9")
    );
}

/// SHA-256 of the empty string.
#[test]
fn sha256_empty() {
    assert_eq!(
        hash_to_int(HashAlgorithm::Sha256, b"", 256),
        hex("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
    );
}

/// SHA-1 of the empty string.
#[test]
fn sha1_empty() {
    assert_eq!(
        hash_to_int(HashAlgorithm::Sha1, b"", 160),
        hex("da39a3ee5e6b4b0d3255bfef95601890afd80709")
    );
}

#[test]
fn digest_names() {
    assert_eq!(HashAlgorithm::Sha1.name(), "sha1");
    assert_eq!(HashAlgorithm::Sha256.name(), "sha256");
}
