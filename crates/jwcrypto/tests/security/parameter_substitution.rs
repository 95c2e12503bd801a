//! A key object must not be able to bring its own group.
//!
//! An attacker who controls `p`, `q`, `g` can pick a group where forging is
//! easy (for example `g = 1`, so every `y` is 1 and any `r = 1` verifies).
//! Import must refuse anything but the exact pinned values.

use jwcrypto::{CryptoError, DomainParameter, KeyPair, KeySize, PublicKey, SecretKey};
use num_bigint_dig::BigUint;

fn flip_bit(hex: &str, bit: usize) -> String {
    let value = BigUint::parse_bytes(hex.as_bytes(), 16).unwrap();
    (value ^ (BigUint::from(1u32) << bit)).to_str_radix(16)
}

#[test]
fn single_bit_flips_in_each_parameter() {
    for keysize in KeySize::ALL {
        let kp = KeyPair::generate(keysize).expect("keygen should succeed");
        let canonical = kp.public_key().serialize_to_object();

        for bit in [0, 1, 17, 100] {
            for (which, expected) in [
                ("p", DomainParameter::P),
                ("q", DomainParameter::Q),
                ("g", DomainParameter::G),
            ] {
                let mut object = canonical.clone();
                match which {
                    "p" => object.params.p = flip_bit(&object.params.p, bit),
                    "q" => object.params.q = flip_bit(&object.params.q, bit),
                    _ => object.params.g = flip_bit(&object.params.g, bit),
                }
                match PublicKey::deserialize_from_object(&object) {
                    Err(CryptoError::BadParameter(actual)) => assert_eq!(
                        actual, expected,
                        "bit {bit} of {which} in {keysize} group blamed on {actual}"
                    ),
                    other => panic!("bit {bit} of {which} accepted or misreported: {other:?}"),
                }
            }
        }
    }
}

#[test]
fn trivial_generator_is_rejected() {
    let kp = KeyPair::generate(KeySize::Ds128).expect("keygen should succeed");
    let mut object = kp.public_key().serialize_to_object();
    object.params.g = "1".to_owned();
    object.y = "1".to_owned();
    assert!(matches!(
        PublicKey::deserialize_from_object(&object),
        Err(CryptoError::BadParameter(DomainParameter::G))
    ));
}

#[test]
fn small_attacker_group_is_rejected() {
    let kp = KeyPair::generate(KeySize::Ds128).expect("keygen should succeed");
    let mut object = kp.secret_key().serialize_to_object();
    object.params.p = "17".to_owned();
    object.params.q = "b".to_owned();
    object.params.g = "2".to_owned();
    assert!(matches!(
        SecretKey::deserialize_from_object(&object),
        Err(CryptoError::BadParameter(DomainParameter::P))
    ));
}

/// The standard group's `p` paired with the test group's `q` and `g`.
#[test]
fn cross_group_splice_is_rejected() {
    let small = KeyPair::generate(KeySize::Ds128).expect("keygen should succeed");
    let large = KeyPair::generate(KeySize::Ds256).expect("keygen should succeed");

    let mut object = small.public_key().serialize_to_object();
    object.params.p = large.public_key().serialize_to_object().params.p;
    assert!(matches!(
        PublicKey::deserialize_from_object(&object),
        Err(CryptoError::BadParameter(DomainParameter::Q))
    ));
}

/// Leading zeros are tolerated, since they do not change the value.
#[test]
fn zero_padded_parameters_are_accepted() {
    let kp = KeyPair::generate(KeySize::Ds256).expect("keygen should succeed");
    let mut object = kp.public_key().serialize_to_object();
    object.params.p = format!("0000{}", object.params.p);
    object.params.q = format!("00{}", object.params.q);
    let restored = PublicKey::deserialize_from_object(&object).expect("value is unchanged");
    assert_eq!(&restored, kp.public_key());
}
