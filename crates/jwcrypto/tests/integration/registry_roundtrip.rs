//! Integration tests for tag-dispatched generation and decoding.

use jwcrypto::{
    generate_keypair, public_key_from_object, public_key_from_str, secret_key_from_object,
    secret_key_from_str, Algorithm, CryptoError,
};

#[test]
fn generate_sign_verify_by_tag() {
    for label in [128, 256] {
        let pair = generate_keypair("DS", label).expect("keygen should succeed");
        assert_eq!(pair.secret.algorithm(), Algorithm::Ds);
        assert_eq!(pair.secret.keysize(), label);

        let sig = pair.secret.sign(b"by tag").expect("signing should succeed");
        assert!(pair.public.verify(b"by tag", &sig));
    }
}

#[test]
fn unsupported_keysize_reports_label() {
    match generate_keypair("DS", 2048) {
        Err(CryptoError::KeySizeNotSupported(label)) => assert_eq!(label, "2048"),
        other => panic!("expected KeySizeNotSupported, got: {other:?}"),
    }
}

#[test]
fn objects_dispatch_on_algorithm_field() {
    let pair = generate_keypair("DS", 128).expect("keygen should succeed");

    let public = public_key_from_object(&pair.public.serialize_to_object().unwrap()).unwrap();
    let secret = secret_key_from_object(&pair.secret.serialize_to_object().unwrap()).unwrap();
    assert!(public.equals(pair.public.as_ref()));

    let sig = secret.sign(b"dispatch").expect("signing should succeed");
    assert!(pair.public.verify(b"dispatch", &sig));
}

#[test]
fn json_text_dispatch() {
    let pair = generate_keypair("DS", 256).expect("keygen should succeed");
    let public = public_key_from_str(&pair.public.serialize().unwrap()).unwrap();
    let secret = secret_key_from_str(&pair.secret.serialize().unwrap()).unwrap();

    let sig = secret.sign(b"json").expect("signing should succeed");
    assert!(public.verify(b"json", &sig));
}

#[test]
fn unknown_algorithm_field() {
    let object = serde_json::json!({"algorithm": "RS", "n": "1", "e": "3"});
    assert!(matches!(
        public_key_from_object(&object),
        Err(CryptoError::UnknownAlgorithm(tag)) if tag == "RS"
    ));
}
