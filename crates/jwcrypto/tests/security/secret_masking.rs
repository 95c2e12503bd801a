//! Secret scalars must not appear in debug output.

use jwcrypto::{generate_keypair, KeyPair, KeySize};

#[test]
fn secret_key_debug_is_masked() {
    let kp = KeyPair::generate(KeySize::Ds128).expect("keygen should succeed");
    let x_hex = kp.secret_key().serialize_to_object().x;

    let debug_str = format!("{:?}", kp.secret_key());
    assert_eq!(debug_str, "SecretKey(DS/128, ***)");
    assert!(!debug_str.contains(&x_hex));
}

#[test]
fn keypair_debug_omits_secret() {
    let kp = KeyPair::generate(KeySize::Ds256).expect("keygen should succeed");
    let x_hex = kp.secret_key().serialize_to_object().x;
    let debug_str = format!("{kp:?}");
    assert!(!debug_str.contains(&x_hex));
}

#[test]
fn boxed_pair_debug_is_masked() {
    let pair = generate_keypair("DS", 128).expect("keygen should succeed");
    let debug_str = format!("{pair:?}");
    assert!(debug_str.contains("SecretKey(DS/128, ***)"));
}
