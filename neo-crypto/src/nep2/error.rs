// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use neo_base::encoding::FromBase58CheckError;

use crate::{aes::EcbError, ecc256::KeyError, scrypt::ScryptDeriveError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Nep2Error {
    #[error("nep2: invalid base58check encoding: {0}")]
    InvalidBase58(#[from] FromBase58CheckError),

    #[error("nep2: invalid payload length or prefix")]
    InvalidFormat,

    #[error("nep2: address hash mismatch")]
    InvalidAddressHash,

    #[error("nep2: invalid private key: {0}")]
    InvalidPrivateKey(#[from] KeyError),

    #[error("nep2: {0}")]
    Scrypt(#[from] ScryptDeriveError),

    #[error("nep2: {0}")]
    Ecb(#[from] EcbError),
}
