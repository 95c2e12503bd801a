//! Integration tests for key serialization.

use jwcrypto::{CryptoError, KeyPair, KeySize, PublicKey, SecretKey};

#[test]
fn public_key_object_roundtrip() {
    for keysize in KeySize::ALL {
        let kp = KeyPair::generate(keysize).expect("keygen should succeed");
        let object = kp.public_key().serialize_to_object();
        assert_eq!(object.algorithm.as_deref(), Some("DS"));

        let restored = PublicKey::deserialize_from_object(&object).expect("should deserialize");
        assert_eq!(&restored, kp.public_key());
    }
}

#[test]
fn secret_key_object_roundtrip() {
    for keysize in KeySize::ALL {
        let kp = KeyPair::generate(keysize).expect("keygen should succeed");
        let restored = SecretKey::deserialize_from_object(&kp.secret_key().serialize_to_object())
            .expect("should deserialize");
        assert_eq!(&restored, kp.secret_key());
        assert_eq!(&restored.public_key(), kp.public_key());
    }
}

/// A restored secret key signs for the original public key, and the other way round.
#[test]
fn restored_keys_interoperate() {
    let kp = KeyPair::generate(KeySize::Ds256).expect("keygen should succeed");
    let secret = SecretKey::deserialize(&kp.secret_key().serialize().unwrap()).unwrap();
    let public = PublicKey::deserialize(&kp.public_key().serialize().unwrap()).unwrap();

    let sig = secret.sign(b"restored").expect("signing should succeed");
    assert!(kp.public_key().verify(b"restored", &sig));

    let sig = kp.secret_key().sign(b"original").expect("signing should succeed");
    assert!(public.verify(b"original", &sig));
}

/// Field names are part of the wire contract.
#[test]
fn wire_field_names() {
    let kp = KeyPair::generate(KeySize::Ds128).expect("keygen should succeed");

    let public: serde_json::Value =
        serde_json::from_str(&kp.public_key().serialize().unwrap()).unwrap();
    let mut fields: Vec<&str> = public.as_object().unwrap().keys().map(String::as_str).collect();
    fields.sort_unstable();
    assert_eq!(fields, ["algorithm", "g", "p", "q", "y"]);

    let secret: serde_json::Value =
        serde_json::from_str(&kp.secret_key().serialize().unwrap()).unwrap();
    let mut fields: Vec<&str> = secret.as_object().unwrap().keys().map(String::as_str).collect();
    fields.sort_unstable();
    assert_eq!(fields, ["algorithm", "g", "p", "q", "x"]);
}

/// Objects produced without the tag still decode.
#[test]
fn untagged_public_object_decodes() {
    let kp = KeyPair::generate(KeySize::Ds128).expect("keygen should succeed");
    let mut object = kp.public_key().serialize_to_object();
    object.algorithm = None;
    let restored = PublicKey::deserialize_from_object(&object).expect("should deserialize");
    assert_eq!(&restored, kp.public_key());
}

#[test]
fn missing_field_is_serialization_error() {
    let result = PublicKey::deserialize(r#"{"algorithm":"DS","y":"1","p":"1","q":"1"}"#);
    assert!(matches!(result, Err(CryptoError::Serialization(_))));
}

#[test]
fn foreign_tag_is_rejected() {
    let kp = KeyPair::generate(KeySize::Ds128).expect("keygen should succeed");
    let mut object = kp.secret_key().serialize_to_object();
    object.algorithm = Some("RS".to_owned());
    assert!(matches!(
        SecretKey::deserialize_from_object(&object),
        Err(CryptoError::UnknownAlgorithm(_))
    ));
}
