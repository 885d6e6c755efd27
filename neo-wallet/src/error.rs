// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use std::collections::TryReserveError;

use neo_base::{
    encoding::{FromBase58CheckError, WifDecodeError},
    AddressError,
};
use neo_crypto::{nep2::Nep2Error, KeyError, ScryptDeriveError};
use thiserror::Error;

pub type WalletResult<T> = Result<T, WalletError>;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("checksum mismatch: {0}")]
    ChecksumMismatch(&'static str),

    #[error("out of memory")]
    OutOfMemory,

    #[error("crypto failure: {0}")]
    CryptoFailure(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("account is locked")]
    WalletLocked,

    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    #[error("state conflict: {0}")]
    StateConflict(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not supported: {0}")]
    NotSupported(String),

    #[error("bulk operation stopped at {address} after {processed} account(s): {source}")]
    BulkOperation {
        address: String,
        processed: usize,
        #[source]
        source: Box<WalletError>,
    },
}

impl From<Nep2Error> for WalletError {
    fn from(err: Nep2Error) -> Self {
        match err {
            Nep2Error::InvalidBase58(FromBase58CheckError::InvalidChecksum) => {
                Self::ChecksumMismatch("nep2 base58 checksum")
            }
            Nep2Error::InvalidBase58(_) | Nep2Error::InvalidFormat => {
                Self::InvalidFormat(err.to_string())
            }
            Nep2Error::InvalidAddressHash => Self::ChecksumMismatch("wrong password"),
            Nep2Error::Scrypt(err) => err.into(),
            Nep2Error::InvalidPrivateKey(_) | Nep2Error::Ecb(_) => {
                Self::CryptoFailure(err.to_string())
            }
        }
    }
}

impl From<KeyError> for WalletError {
    fn from(err: KeyError) -> Self {
        Self::InvalidFormat(err.to_string())
    }
}

impl From<ScryptDeriveError> for WalletError {
    fn from(err: ScryptDeriveError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

impl From<WifDecodeError> for WalletError {
    fn from(err: WifDecodeError) -> Self {
        match err {
            WifDecodeError::InvalidChecksum => Self::ChecksumMismatch("wif checksum"),
            other => Self::InvalidFormat(other.to_string()),
        }
    }
}

impl From<AddressError> for WalletError {
    fn from(err: AddressError) -> Self {
        match err {
            AddressError::Base58(FromBase58CheckError::InvalidChecksum) => {
                Self::ChecksumMismatch("address checksum")
            }
            other => Self::InvalidFormat(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidFormat(err.to_string())
    }
}

impl From<toml::de::Error> for WalletError {
    fn from(err: toml::de::Error) -> Self {
        Self::InvalidFormat(err.to_string())
    }
}

impl From<TryReserveError> for WalletError {
    fn from(_: TryReserveError) -> Self {
        Self::OutOfMemory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nep2_errors_map_to_taxonomy() {
        assert!(matches!(
            WalletError::from(Nep2Error::InvalidAddressHash),
            WalletError::ChecksumMismatch("wrong password")
        ));
        assert!(matches!(
            WalletError::from(Nep2Error::InvalidFormat),
            WalletError::InvalidFormat(_)
        ));
        assert!(matches!(
            WalletError::from(Nep2Error::Scrypt(ScryptDeriveError::InvalidParams)),
            WalletError::InvalidArgument(_)
        ));
    }

    #[test]
    fn bulk_error_keeps_source() {
        use std::error::Error as _;

        let err = WalletError::BulkOperation {
            address: "NUz6PKTAM7NbPJzkKJFNay3VckQtcDkgWo".into(),
            processed: 2,
            source: Box::new(WalletError::ChecksumMismatch("wrong password")),
        };
        assert!(err.to_string().contains("after 2 account(s)"));
        assert!(err.source().is_some());
    }
}
