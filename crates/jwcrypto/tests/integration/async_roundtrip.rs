//! Integration tests for the deferred entry points.

use jwcrypto::{KeyPair, KeySize};

#[tokio::test]
async fn async_generate_then_async_sign() {
    let kp = KeyPair::generate_async(KeySize::Ds256)
        .await
        .expect("async keygen should succeed");
    let sig = kp
        .secret_key()
        .sign_async(b"deferred delivery".to_vec())
        .await
        .expect("async signing should succeed");
    assert!(kp.public_key().verify(b"deferred delivery", &sig));
}

/// Sync and async paths produce interchangeable results.
#[tokio::test]
async fn async_signature_matches_sync_key() {
    let kp = KeyPair::generate(KeySize::Ds128).expect("keygen should succeed");
    let async_sig = kp.secret_key().sign_async(b"mixed".to_vec()).await.unwrap();
    let sync_sig = kp.secret_key().sign(b"mixed").unwrap();
    assert_eq!(async_sig.len(), sync_sig.len());
    assert!(kp.public_key().verify(b"mixed", &async_sig));
    assert!(kp.public_key().verify(b"mixed", &sync_sig));
}
