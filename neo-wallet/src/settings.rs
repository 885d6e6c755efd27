// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Wallet settings
//!
//! Defaults for new wallets and for encoding addresses. Every field is
//! optional in TOML; missing fields fall back to the Neo N3 MainNet values.

use std::path::Path;

use neo_base::AddressVersion;
use neo_crypto::ScryptParams;
use serde::{Deserialize, Serialize};

use crate::error::WalletResult;

/// NEP-6 format version written by new wallets.
pub const DEFAULT_WALLET_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSettings {
    /// Address version byte for address encoding
    #[serde(default = "default_address_version")]
    pub address_version: u8,

    /// Version string stored in the NEP-6 file
    #[serde(default = "default_wallet_version")]
    pub wallet_version: String,

    /// Scrypt cost used when encrypting keys
    #[serde(default)]
    pub scrypt: ScryptParams,
}

fn default_address_version() -> u8 {
    AddressVersion::MAINNET.0
}

fn default_wallet_version() -> String {
    DEFAULT_WALLET_VERSION.to_string()
}

impl Default for WalletSettings {
    fn default() -> Self {
        Self {
            address_version: default_address_version(),
            wallet_version: default_wallet_version(),
            scrypt: ScryptParams::DEFAULT,
        }
    }
}

impl WalletSettings {
    #[inline]
    pub fn address_version(&self) -> AddressVersion {
        AddressVersion(self.address_version)
    }

    pub fn from_toml_str(text: &str) -> WalletResult<Self> {
        let settings: Self = toml::from_str(text)?;
        if !settings.scrypt.is_valid() {
            return Err(crate::WalletError::InvalidArgument(format!(
                "invalid {}",
                settings.scrypt
            )));
        }
        Ok(settings)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> WalletResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading wallet settings");
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WalletError;

    #[test]
    fn empty_toml_uses_defaults() {
        let settings = WalletSettings::from_toml_str("").unwrap();
        assert_eq!(settings, WalletSettings::default());
        assert_eq!(settings.address_version(), AddressVersion::MAINNET);
        assert_eq!(settings.scrypt, ScryptParams::DEFAULT);
    }

    #[test]
    fn partial_toml_overrides() {
        let settings = WalletSettings::from_toml_str(
            r#"
            wallet_version = "1.1"

            [scrypt]
            n = 1024
            r = 1
            p = 1
            "#,
        )
        .unwrap();
        assert_eq!(settings.address_version, 0x35);
        assert_eq!(settings.wallet_version, "1.1");
        assert_eq!(settings.scrypt, ScryptParams::new(1024, 1, 1, 64).unwrap());
    }

    #[test]
    fn rejects_invalid_scrypt_and_syntax() {
        let err = WalletSettings::from_toml_str("[scrypt]\nn = 1000\nr = 1\np = 1\n").unwrap_err();
        assert!(matches!(err, WalletError::InvalidArgument(_)));

        let err = WalletSettings::from_toml_str("address_version = \"x\"").unwrap_err();
        assert!(matches!(err, WalletError::InvalidFormat(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = WalletSettings::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, WalletError::Io(_)));
    }
}
