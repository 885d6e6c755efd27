// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use p256::{
    ecdsa::{signature::Signer, Signature, SigningKey},
    elliptic_curve::rand_core::{CryptoRng, RngCore},
    SecretKey as P256SecretKey,
};
use zeroize::Zeroizing;

use super::{KeyError, PrivateKey, PublicKey, SIGNATURE_SIZE};

#[derive(Clone)]
pub struct Keypair {
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}

impl Keypair {
    #[inline]
    pub fn from_private(private_key: PrivateKey) -> Result<Self, KeyError> {
        let public_key = private_key.public_key()?;
        Ok(Self {
            private_key,
            public_key,
        })
    }

    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self, KeyError> {
        let secret = P256SecretKey::random(rng);
        let public_key = PublicKey::from_p256(&secret.public_key())?;
        let bytes = Zeroizing::new(secret.to_bytes());
        Ok(Self {
            private_key: PrivateKey::from_slice(bytes.as_slice())?,
            public_key,
        })
    }

    /// Deterministic (RFC 6979) ECDSA over SHA-256(`message`), `r ‖ s` big endian.
    pub fn sign(&self, message: &[u8]) -> Result<[u8; SIGNATURE_SIZE], KeyError> {
        let sk = SigningKey::from_slice(self.private_key.as_be_bytes())
            .map_err(|_| KeyError::InvalidPrivateKey)?;
        let sign: Signature = sk.try_sign(message).map_err(|_| KeyError::InvalidPrivateKey)?;

        let mut buf = [0u8; SIGNATURE_SIZE];
        buf.copy_from_slice(sign.to_bytes().as_slice());
        Ok(buf)
    }
}

impl core::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Keypair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}
