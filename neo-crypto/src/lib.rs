// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

//! Key material and key protection for Neo N3 accounts.

pub mod aes;
pub mod ecc256;
pub mod nep2;
pub mod scrypt;

pub use ecc256::{KeyError, Keypair, PrivateKey, PublicKey, SIGNATURE_SIZE};
pub use scrypt::{DeriveScryptKey, ScryptDeriveError, ScryptParams};
