// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use core::cmp::Ordering;
use core::fmt::{self, Debug, Formatter};

use neo_base::{encoding::ToHex, AddressVersion, UInt160};
use p256::{elliptic_curve::sec1::ToEncodedPoint, PublicKey as P256PublicKey};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

mod keypair;

pub use keypair::Keypair;

pub const KEY_SIZE: usize = 32;
pub const COMPRESSED_KEY_SIZE: usize = 33;
pub const SIGNATURE_SIZE: usize = 64;

/// `PUSHDATA1 0x21`, the prefix of a pushed compressed public key.
pub const PUSH_PUBLIC_KEY: [u8; 2] = [0x0C, 0x21];

/// `SYSCALL System.Crypto.CheckSig`.
pub const CHECK_SIG_SYSCALL: [u8; 5] = [0x41, 0x56, 0xE7, 0xB3, 0x27];

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("ecc256: invalid private key length")]
    InvalidPrivateKeyLength,

    #[error("ecc256: private key out of range")]
    InvalidPrivateKey,

    #[error("ecc256: invalid public key encoding")]
    InvalidPublicKey,

    #[error("ecc256: invalid signature")]
    InvalidSignature,
}

#[derive(Clone)]
pub struct PrivateKey {
    key: Zeroizing<[u8; KEY_SIZE]>,
}

impl PrivateKey {
    #[inline]
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self {
            key: Zeroizing::new(bytes),
        }
    }

    #[inline]
    pub fn from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        if slice.len() != KEY_SIZE {
            return Err(KeyError::InvalidPrivateKeyLength);
        }
        let mut key = Zeroizing::new([0u8; KEY_SIZE]);
        key.copy_from_slice(slice);
        Ok(Self { key })
    }

    #[inline]
    pub fn as_be_bytes(&self) -> &[u8] {
        self.key.as_slice()
    }

    /// Derives the public point, rejecting zero and out-of-range scalars.
    pub fn public_key(&self) -> Result<PublicKey, KeyError> {
        let secret = p256::SecretKey::from_slice(self.as_be_bytes())
            .map_err(|_| KeyError::InvalidPrivateKey)?;
        PublicKey::from_p256(&secret.public_key())
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&"***").finish()
    }
}

impl Eq for PrivateKey {}

impl PartialEq for PrivateKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key.as_slice().ct_eq(other.key.as_slice()).into()
    }
}

impl PartialEq<[u8]> for PrivateKey {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.key.as_slice().ct_eq(other).into()
    }
}

/// A point on secp256r1, stored as affine coordinates.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct PublicKey {
    gx: [u8; KEY_SIZE],
    gy: [u8; KEY_SIZE],
}

impl PublicKey {
    /// Accepts both the compressed and the uncompressed SEC1 encodings.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let key = P256PublicKey::from_sec1_bytes(bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Self::from_p256(&key)
    }

    pub(crate) fn from_p256(key: &P256PublicKey) -> Result<Self, KeyError> {
        let encoded = key.to_encoded_point(false);
        let (x, y) = match (encoded.x(), encoded.y()) {
            (Some(x), Some(y)) => (x, y),
            _ => return Err(KeyError::InvalidPublicKey),
        };

        let mut gx = [0u8; KEY_SIZE];
        let mut gy = [0u8; KEY_SIZE];
        gx.copy_from_slice(x.as_slice());
        gy.copy_from_slice(y.as_slice());
        Ok(Self { gx, gy })
    }

    #[inline]
    pub fn to_uncompressed(&self) -> [u8; 65] {
        let mut buf = [0u8; 65];
        buf[0] = 0x04;
        buf[1..33].copy_from_slice(&self.gx);
        buf[33..].copy_from_slice(&self.gy);
        buf
    }

    #[inline]
    pub fn to_compressed(&self) -> [u8; COMPRESSED_KEY_SIZE] {
        let mut buf = [0u8; COMPRESSED_KEY_SIZE];
        buf[0] = 0x02 + (self.gy[KEY_SIZE - 1] & 0x01);
        buf[1..].copy_from_slice(&self.gx);
        buf
    }

    /// `PUSHDATA1 <compressed key> SYSCALL System.Crypto.CheckSig`
    pub fn signature_redeem_script(&self) -> Vec<u8> {
        let mut script =
            Vec::with_capacity(PUSH_PUBLIC_KEY.len() + COMPRESSED_KEY_SIZE + CHECK_SIG_SYSCALL.len());
        script.extend_from_slice(&PUSH_PUBLIC_KEY);
        script.extend_from_slice(&self.to_compressed());
        script.extend_from_slice(&CHECK_SIG_SYSCALL);
        script
    }

    /// Script hash of the single-signature verification script.
    #[inline]
    pub fn script_hash(&self) -> UInt160 {
        UInt160::from_script(&self.signature_redeem_script())
    }

    #[inline]
    pub fn to_address(&self, version: AddressVersion) -> String {
        self.script_hash().to_address(version)
    }

    /// Checks a 64-byte `r ‖ s` ECDSA signature over SHA-256(`message`).
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), KeyError> {
        use p256::ecdsa::{signature::Verifier, Signature, VerifyingKey};

        let signature = Signature::from_slice(signature).map_err(|_| KeyError::InvalidSignature)?;
        VerifyingKey::from_sec1_bytes(&self.to_uncompressed())
            .map_err(|_| KeyError::InvalidPublicKey)?
            .verify(message, &signature)
            .map_err(|_| KeyError::InvalidSignature)
    }
}

impl Ord for PublicKey {
    /// Points order by x, then by y, the order multi-signature scripts list keys in.
    fn cmp(&self, other: &Self) -> Ordering {
        self.gx.cmp(&other.gx).then_with(|| self.gy.cmp(&other.gy))
    }
}

impl PartialOrd for PublicKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("compressed", &self.to_compressed().to_hex_lower())
            .finish()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_compressed().to_hex_lower())
    }
}
