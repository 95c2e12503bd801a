//! DSA key-pair generation.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use super::params::KeySize;
use super::public_key::PublicKey;
use super::scalar::random_scalar_mod;
use super::secret_key::SecretKey;
use crate::error::CryptoError;
use crate::keys::Algorithm;

/// A secret key and its public key, created together from one scalar.
#[derive(Clone)]
pub struct KeyPair {
    keysize: KeySize,
    secret: SecretKey,
    public: PublicKey,
}

impl KeyPair {
    /// Generate a key pair with the operating system CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKeyMaterial`] only if the sampler
    /// produced a scalar outside `[1, q)`, which it cannot.
    pub fn generate(keysize: KeySize) -> Result<Self, CryptoError> {
        Self::generate_with_rng(keysize, &mut OsRng)
    }

    /// Generate a key pair drawing the secret scalar from `rng`.
    ///
    /// # Errors
    ///
    /// As [`KeyPair::generate`].
    pub fn generate_with_rng<R: CryptoRng + RngCore + ?Sized>(
        keysize: KeySize,
        rng: &mut R,
    ) -> Result<Self, CryptoError> {
        let x = random_scalar_mod(keysize.params().q(), rng);
        let secret = SecretKey::from_scalar(x, keysize)?;
        let public = secret.public_key();
        Ok(Self {
            keysize,
            secret,
            public,
        })
    }

    /// Generate on the blocking thread pool and resolve with the complete pair.
    ///
    /// Must be awaited inside a Tokio runtime.
    ///
    /// # Errors
    ///
    /// As [`KeyPair::generate`], plus [`CryptoError::Task`] if the worker task
    /// panicked or was cancelled by runtime shutdown.
    pub async fn generate_async(keysize: KeySize) -> Result<Self, CryptoError> {
        tokio::task::spawn_blocking(move || Self::generate(keysize))
            .await
            .map_err(|e| CryptoError::Task(e.to_string()))?
    }

    /// Always [`Algorithm::Ds`].
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        Algorithm::Ds
    }

    /// Keysize shared by both halves.
    #[must_use]
    pub const fn keysize(&self) -> KeySize {
        self.keysize
    }

    /// Public half.
    #[must_use]
    pub const fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Secret half.
    #[must_use]
    pub const fn secret_key(&self) -> &SecretKey {
        &self.secret
    }

    /// Split into `(secret, public)`.
    #[must_use]
    pub fn into_parts(self) -> (SecretKey, PublicKey) {
        (self.secret, self.public)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("keysize", &self.keysize)
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}
