// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Wallet primitives for managing Neo N3 accounts.
//!
//! Accounts are created from fresh keys, WIF, NEP-2, public keys, scripts or
//! addresses; a [`Wallet`] groups them with a single default and persists
//! them as a NEP-6 JSON file. BIP-39 mnemonics live in [`mnemonic`].

pub mod account;
pub mod contract;
mod error;
pub mod mnemonic;
pub mod nep6;
mod settings;
mod wallet;

pub use account::{Account, AccountExtra, KeyMaterial};
pub use contract::{Contract, ContractParameter, ContractParameterType};
pub use error::{WalletError, WalletResult};
pub use mnemonic::{Language, Mnemonic};
pub use nep6::{Nep6Account, Nep6Contract, Nep6Parameter, Nep6Wallet};
pub use settings::{WalletSettings, DEFAULT_WALLET_VERSION};
pub use wallet::{AccountRef, Wallet};
