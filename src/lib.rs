// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! # neo-keyring: offline credential management for Neo N3
//!
//! Generates and imports accounts, derives addresses and multi-signature
//! verification scripts, encrypts private keys with NEP-2, recovers keys from
//! BIP-39 backups and reads and writes NEP-6 wallet files. Nothing here talks
//! to the network.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use neo_keyring::prelude::*;
//!
//! fn main() -> WalletResult<()> {
//!     let mut wallet = Wallet::new("main");
//!     let address = wallet.create_account(Some("savings".into()))?.address().to_string();
//!     wallet.lock_all("correct horse battery staple")?;
//!     wallet.save("wallet.json")?;
//!
//!     let mut restored = Wallet::load("wallet.json")?;
//!     restored.unlock_all("correct horse battery staple")?;
//!     let signature = restored.account(&address).map(|a| a.sign(b"payload")).transpose()?;
//!     assert!(signature.is_some());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`base`] - hashing, Base58Check, WIF and `UInt160` addresses
//! - [`crypto`] - secp256r1 keys, scrypt, AES-256-ECB and NEP-2
//! - [`wallet`] - BIP-39 mnemonics, accounts, contracts and NEP-6 wallets

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use neo_base as base;
pub use neo_crypto as crypto;
pub use neo_wallet as wallet;

/// Common imports for wallet tooling
pub mod prelude {
    pub use crate::base::{AddressVersion, UInt160};
    pub use crate::crypto::nep2::{decrypt_nep2, encrypt_nep2};
    pub use crate::crypto::{Keypair, PrivateKey, PublicKey, ScryptParams};
    pub use crate::wallet::{
        Account, AccountExtra, Contract, KeyMaterial, Language, Mnemonic, Nep6Wallet, Wallet,
        WalletError, WalletResult, WalletSettings,
    };
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Installs a global `tracing` subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Does nothing when a subscriber is already set.
#[cfg(feature = "logging")]
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,neo=info"));
    let _ = fmt().with_env_filter(env_filter).try_init();
    tracing::debug!(version = VERSION, "logging initialised");
}
