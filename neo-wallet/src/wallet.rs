// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use std::path::Path;

use neo_base::{AddressVersion, UInt160};
use neo_crypto::{nep2::decrypt_nep2, ScryptParams};
use serde_json::Value;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::{
    account::{Account, KeyMaterial},
    error::{WalletError, WalletResult},
    nep6::Nep6Wallet,
    settings::WalletSettings,
};

/// Selects a wallet member by address or by script hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountRef<'a> {
    Address(&'a str),
    ScriptHash(UInt160),
}

impl<'a> From<&'a str> for AccountRef<'a> {
    fn from(address: &'a str) -> Self {
        Self::Address(address)
    }
}

impl From<UInt160> for AccountRef<'_> {
    fn from(hash: UInt160) -> Self {
        Self::ScriptHash(hash)
    }
}

impl From<&Account> for AccountRef<'_> {
    fn from(account: &Account) -> Self {
        Self::ScriptHash(account.script_hash())
    }
}

/// An ordered set of accounts with at most one default.
#[derive(Debug, Clone)]
pub struct Wallet {
    name: String,
    version: String,
    scrypt: ScryptParams,
    address_version: AddressVersion,
    accounts: Vec<Account>,
    default_account: Option<UInt160>,
    extra: Option<Value>,
}

impl Wallet {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_settings(name, &WalletSettings::default())
    }

    pub fn with_settings(name: impl Into<String>, settings: &WalletSettings) -> Self {
        Self {
            name: name.into(),
            version: settings.wallet_version.clone(),
            scrypt: settings.scrypt,
            address_version: settings.address_version(),
            accounts: Vec::new(),
            default_account: None,
            extra: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn scrypt(&self) -> ScryptParams {
        self.scrypt
    }

    pub fn address_version(&self) -> AddressVersion {
        self.address_version
    }

    pub fn extra(&self) -> Option<&Value> {
        self.extra.as_ref()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn contains(&self, address: &str) -> bool {
        self.position(AccountRef::Address(address)).is_some()
    }

    pub fn account(&self, address: &str) -> Option<&Account> {
        self.position(AccountRef::Address(address))
            .map(|index| &self.accounts[index])
    }

    pub fn account_by_script_hash(&self, hash: &UInt160) -> Option<&Account> {
        self.position(AccountRef::ScriptHash(*hash))
            .map(|index| &self.accounts[index])
    }

    pub fn account_mut(&mut self, address: &str) -> Option<&mut Account> {
        self.position(AccountRef::Address(address))
            .map(move |index| &mut self.accounts[index])
    }

    pub fn default_account(&self) -> Option<&Account> {
        self.default_account
            .and_then(|hash| self.account_by_script_hash(&hash))
    }

    fn position(&self, target: AccountRef<'_>) -> Option<usize> {
        match target {
            AccountRef::Address(address) => self.accounts.iter().position(|a| a.address() == address),
            AccountRef::ScriptHash(hash) => self.accounts.iter().position(|a| a.script_hash() == hash),
        }
    }

    fn sync_default_flags(&mut self) {
        let default = self.default_account;
        for account in self.accounts.iter_mut() {
            account.set_default(Some(account.script_hash()) == default);
        }
    }

    /// Adds `account`; the first account of an empty wallet becomes the default.
    pub fn add_account(&mut self, mut account: Account) -> WalletResult<()> {
        if account.address_version() != self.address_version {
            return Err(WalletError::InvalidArgument(format!(
                "account address version 0x{:02x} differs from wallet 0x{:02x}",
                account.address_version().0,
                self.address_version.0
            )));
        }
        if self.position(AccountRef::ScriptHash(account.script_hash())).is_some() {
            return Err(WalletError::StateConflict(format!(
                "account {} already exists",
                account.address()
            )));
        }
        self.accounts.try_reserve(1)?;

        account.set_default(false);
        let hash = account.script_hash();
        debug!(address = account.address(), "adding account");
        self.accounts.push(account);

        if self.default_account.is_none() {
            self.default_account = Some(hash);
            self.sync_default_flags();
        }
        Ok(())
    }

    /// Removes and returns an account. A removed default passes to the first remaining account.
    pub fn remove_account(&mut self, address: &str) -> WalletResult<Account> {
        let index = self
            .position(AccountRef::Address(address))
            .ok_or_else(|| WalletError::NotFound(address.to_string()))?;
        let mut removed = self.accounts.remove(index);
        debug!(address, "removed account");

        if self.default_account == Some(removed.script_hash()) {
            self.default_account = self.accounts.first().map(Account::script_hash);
            self.sync_default_flags();
            removed.set_default(false);
            debug!(default = ?self.default_account, "default account reassigned");
        }
        Ok(removed)
    }

    pub fn set_default_account<'a>(&mut self, target: impl Into<AccountRef<'a>>) -> WalletResult<()> {
        let target = target.into();
        let index = self.position(target).ok_or_else(|| {
            WalletError::NotFound(match target {
                AccountRef::Address(address) => address.to_string(),
                AccountRef::ScriptHash(hash) => hash.to_string(),
            })
        })?;

        self.default_account = Some(self.accounts[index].script_hash());
        self.sync_default_flags();
        debug!(address = self.accounts[index].address(), "default account set");
        Ok(())
    }

    pub fn clear_default_account(&mut self) {
        self.default_account = None;
        self.sync_default_flags();
    }

    pub fn create_account(&mut self, label: Option<String>) -> WalletResult<&Account> {
        let account = Account::create(label)?.with_address_version(self.address_version);
        self.push_new(account)
    }

    pub fn import_wif(&mut self, wif: &str) -> WalletResult<&Account> {
        let account = Account::from_wif(wif)?.with_address_version(self.address_version);
        self.push_new(account)
    }

    /// Imports a NEP-2 key locked, checking `password` with the wallet's scrypt cost.
    pub fn import_nep2(&mut self, nep2: &str, password: &str) -> WalletResult<&Account> {
        let account = Account::from_nep2(nep2, password, self.scrypt, self.address_version)?;
        self.push_new(account)
    }

    fn push_new(&mut self, account: Account) -> WalletResult<&Account> {
        self.add_account(account)?;
        let index = self.accounts.len() - 1;
        Ok(&self.accounts[index])
    }

    pub fn export_wif(&self, address: &str) -> WalletResult<Zeroizing<String>> {
        self.account(address)
            .ok_or_else(|| WalletError::NotFound(address.to_string()))?
            .export_wif()
    }

    pub fn export_nep2(&self, address: &str, password: &str) -> WalletResult<String> {
        self.account(address)
            .ok_or_else(|| WalletError::NotFound(address.to_string()))?
            .export_nep2(password, self.scrypt)
    }

    /// Encrypts every unlocked key-holding account in order, returning how many were locked.
    ///
    /// Stops at the first failure; accounts locked before it stay locked.
    pub fn lock_all(&mut self, password: &str) -> WalletResult<usize> {
        let scrypt = self.scrypt;
        self.for_each_key(
            |account| matches!(account.key_material(), KeyMaterial::Live(_)),
            |account| account.encrypt(password, scrypt),
        )
    }

    /// Decrypts every locked key-holding account in order, returning how many were unlocked.
    ///
    /// Stops at the first failure; accounts unlocked before it stay unlocked.
    pub fn unlock_all(&mut self, password: &str) -> WalletResult<usize> {
        let scrypt = self.scrypt;
        self.for_each_key(
            |account| matches!(account.key_material(), KeyMaterial::Encrypted(_)),
            |account| account.decrypt(password, scrypt),
        )
    }

    fn for_each_key(
        &mut self,
        pending: impl Fn(&Account) -> bool,
        mut apply: impl FnMut(&mut Account) -> WalletResult<()>,
    ) -> WalletResult<usize> {
        let mut processed = 0;
        for account in self.accounts.iter_mut().filter(|a| pending(a)) {
            if let Err(err) = apply(&mut *account) {
                warn!(address = account.address(), processed, error = %err, "bulk key operation failed");
                return Err(WalletError::BulkOperation {
                    address: account.address().to_string(),
                    processed,
                    source: Box::new(err),
                });
            }
            processed += 1;
            debug!(address = account.address(), processed, "account key state changed");
        }
        Ok(processed)
    }

    /// Checks `password` against the first NEP-2 key in the wallet without changing any account.
    ///
    /// False when no account carries a NEP-2 key.
    pub fn verify_password(&self, password: &str) -> bool {
        self.accounts
            .iter()
            .find_map(|account| account.nep2_key())
            .map_or(false, |nep2| {
                decrypt_nep2(nep2, password, self.address_version, self.scrypt).is_ok()
            })
    }

    pub fn to_nep6(&self) -> Nep6Wallet {
        Nep6Wallet {
            name: Some(self.name.clone()),
            version: self.version.clone(),
            scrypt: self.scrypt,
            accounts: self.accounts.iter().map(Account::to_nep6_account).collect(),
            extra: self.extra.clone(),
        }
    }

    pub fn from_nep6(nep6: &Nep6Wallet, version: AddressVersion) -> WalletResult<Self> {
        let mut wallet = Self {
            name: nep6.name.clone().unwrap_or_default(),
            version: nep6.version.clone(),
            scrypt: nep6.scrypt,
            address_version: version,
            accounts: Vec::new(),
            default_account: None,
            extra: nep6.extra.clone(),
        };
        wallet.accounts.try_reserve(nep6.accounts.len())?;

        let mut default = None;
        for record in &nep6.accounts {
            let account = Account::from_nep6_account(record, version)?;
            if record.is_default {
                default = Some(account.script_hash());
            }
            wallet.add_account(account)?;
        }

        wallet.default_account = default;
        wallet.sync_default_flags();
        Ok(wallet)
    }

    /// Writes the wallet as pretty NEP-6 JSON.
    ///
    /// Every key-holding account must have been encrypted at least once, so
    /// that no key is dropped from the file.
    pub fn save(&self, path: impl AsRef<Path>) -> WalletResult<()> {
        if let Some(account) = self.accounts.iter().find(|a| a.has_unsaved_key()) {
            debug!(address = account.address(), "refusing to save unencrypted key");
            return Err(WalletError::InvalidState(
                "account key has not been encrypted",
            ));
        }

        let json = self.to_nep6().to_json_pretty()?;
        std::fs::write(path.as_ref(), json)?;
        debug!(path = %path.as_ref().display(), accounts = self.accounts.len(), "wallet saved");
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> WalletResult<Self> {
        Self::load_with_version(path, AddressVersion::MAINNET)
    }

    pub fn load_with_version(path: impl AsRef<Path>, version: AddressVersion) -> WalletResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let wallet = Self::from_nep6(&Nep6Wallet::from_json(&text)?, version)?;
        debug!(path = %path.as_ref().display(), accounts = wallet.len(), "wallet loaded");
        Ok(wallet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_crypto::{PrivateKey, PublicKey};

    fn fast_settings() -> WalletSettings {
        WalletSettings {
            scrypt: ScryptParams::new(16, 1, 1, 64).unwrap(),
            ..WalletSettings::default()
        }
    }

    fn keyed(byte: u8) -> Account {
        Account::from_private_key(PrivateKey::new([byte; 32])).unwrap()
    }

    fn public(byte: u8) -> PublicKey {
        PrivateKey::new([byte; 32]).public_key().unwrap()
    }

    #[test]
    fn new_wallet_defaults() {
        let wallet = Wallet::new("main");
        assert_eq!(wallet.name(), "main");
        assert_eq!(wallet.version(), "1.0");
        assert_eq!(wallet.scrypt(), ScryptParams::DEFAULT);
        assert!(wallet.is_empty());
        assert!(wallet.default_account().is_none());
    }

    #[test]
    fn first_account_becomes_default() {
        let mut wallet = Wallet::new("w");
        wallet.add_account(keyed(1)).unwrap();
        wallet.add_account(keyed(2)).unwrap();

        let default = wallet.default_account().unwrap();
        assert_eq!(default.script_hash(), keyed(1).script_hash());
        assert!(default.is_default());
        assert_eq!(wallet.accounts().iter().filter(|a| a.is_default()).count(), 1);
    }

    #[test]
    fn duplicate_account_conflicts() {
        let mut wallet = Wallet::new("w");
        wallet.add_account(keyed(1)).unwrap();
        let err = wallet.add_account(Account::from_public_key(&public(1))).unwrap_err();
        assert!(matches!(err, WalletError::StateConflict(_)));
        assert_eq!(wallet.len(), 1);
    }

    #[test]
    fn remove_reassigns_default() {
        let mut wallet = Wallet::new("w");
        let first = keyed(1);
        let second = keyed(2);
        wallet.add_account(first.clone()).unwrap();
        wallet.add_account(second.clone()).unwrap();

        let removed = wallet.remove_account(first.address()).unwrap();
        assert!(!removed.is_default());
        assert_eq!(wallet.default_account().unwrap().address(), second.address());
        assert!(wallet.accounts()[0].is_default());

        wallet.remove_account(second.address()).unwrap();
        assert!(wallet.default_account().is_none());

        let err = wallet.remove_account(second.address()).unwrap_err();
        assert!(matches!(err, WalletError::NotFound(_)));
    }

    #[test]
    fn set_and_clear_default() {
        let mut wallet = Wallet::new("w");
        let first = keyed(1);
        let second = keyed(2);
        wallet.add_account(first.clone()).unwrap();
        wallet.add_account(second.clone()).unwrap();

        wallet.set_default_account(second.address()).unwrap();
        assert_eq!(wallet.default_account().unwrap().address(), second.address());
        assert!(!wallet.account(first.address()).unwrap().is_default());

        wallet.set_default_account(first.script_hash()).unwrap();
        assert_eq!(wallet.default_account().unwrap().address(), first.address());

        wallet.set_default_account(&second).unwrap();
        assert_eq!(wallet.default_account().unwrap().address(), second.address());

        let err = wallet.set_default_account(keyed(3).script_hash()).unwrap_err();
        assert!(matches!(err, WalletError::NotFound(_)));

        wallet.clear_default_account();
        assert!(wallet.default_account().is_none());
        assert!(wallet.accounts().iter().all(|a| !a.is_default()));
    }

    #[test]
    fn lock_and_unlock_all() {
        let mut wallet = Wallet::with_settings("w", &fast_settings());
        wallet.add_account(keyed(1)).unwrap();
        wallet.add_account(keyed(2)).unwrap();
        wallet.add_account(Account::from_public_key(&public(3))).unwrap();

        assert_eq!(wallet.lock_all("pw").unwrap(), 2);
        assert!(wallet.accounts().iter().all(Account::is_locked));
        assert_eq!(wallet.lock_all("pw").unwrap(), 0);
        assert!(wallet.verify_password("pw"));
        assert!(!wallet.verify_password("nope"));

        let err = wallet.unlock_all("nope").unwrap_err();
        match err {
            WalletError::BulkOperation {
                address,
                processed,
                source,
            } => {
                assert_eq!(address, keyed(1).address());
                assert_eq!(processed, 0);
                assert!(matches!(*source, WalletError::ChecksumMismatch(_)));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(wallet.accounts()[0].is_locked());

        assert_eq!(wallet.unlock_all("pw").unwrap(), 2);
        assert!(!wallet.accounts()[0].is_locked());
        assert!(wallet.accounts()[2].is_watch_only());
    }

    #[test]
    fn bulk_failure_keeps_progress() {
        let mut wallet = Wallet::with_settings("w", &fast_settings());
        let mut first = keyed(1);
        first.encrypt("one", fast_settings().scrypt).unwrap();
        let mut second = keyed(2);
        second.encrypt("two", fast_settings().scrypt).unwrap();
        wallet.add_account(first).unwrap();
        wallet.add_account(second.clone()).unwrap();

        let err = wallet.unlock_all("one").unwrap_err();
        assert!(matches!(
            err,
            WalletError::BulkOperation { ref address, processed: 1, .. } if address == second.address()
        ));
        assert!(!wallet.accounts()[0].is_locked());
        assert!(wallet.accounts()[1].is_locked());
    }

    #[test]
    fn convenience_import_export() {
        let mut wallet = Wallet::with_settings("w", &fast_settings());
        let address = wallet
            .import_wif("L3tgppXLgdaeqSGSFw1Go3skBiy8vQAM7YMXvTHsKQtE16PBncSU")
            .unwrap()
            .address()
            .to_string();
        assert_eq!(address, "NMACuhqEaNAeDSQVipcUPYiJ9TVgVyUxGV");
        assert_eq!(
            wallet.export_wif(&address).unwrap().as_str(),
            "L3tgppXLgdaeqSGSFw1Go3skBiy8vQAM7YMXvTHsKQtE16PBncSU"
        );

        let nep2 = wallet.export_nep2(&address, "pw").unwrap();
        let imported = wallet
            .import_nep2("6PYUUUFej7aPL1hgnuDDKqZHvyHZrJVCGfLWGpzFMxvkDw7HHXmKn1jNpx", "city of zion")
            .unwrap();
        assert!(imported.is_locked());

        let err = wallet.import_nep2(&nep2, "pw").unwrap_err();
        assert!(matches!(err, WalletError::StateConflict(_)));

        let created = wallet.create_account(Some("fresh".into())).unwrap();
        assert_eq!(created.label(), Some("fresh"));
        assert_eq!(wallet.len(), 3);

        assert!(matches!(wallet.export_wif("Nmissing"), Err(WalletError::NotFound(_))));
    }

    #[test]
    fn nep6_roundtrip_keeps_default_and_multisig() {
        let mut wallet = Wallet::with_settings("w", &fast_settings());
        wallet.add_account(keyed(1)).unwrap();
        let multisig = Account::create_multisig(2, &[public(1), public(2), public(3)]).unwrap();
        wallet.add_account(multisig.clone()).unwrap();
        wallet.set_default_account(multisig.address()).unwrap();
        wallet.lock_all("pw").unwrap();

        let nep6 = wallet.to_nep6();
        let restored = Wallet::from_nep6(&nep6, AddressVersion::MAINNET).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.default_account().unwrap().address(), multisig.address());
        assert_eq!(restored.account(multisig.address()).unwrap().extra(), multisig.extra());
        assert_eq!(restored.to_nep6(), nep6);
    }

    #[test]
    fn save_requires_encrypted_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");

        let mut wallet = Wallet::with_settings("w", &fast_settings());
        wallet.add_account(keyed(1)).unwrap();
        assert!(matches!(wallet.save(&path), Err(WalletError::InvalidState(_))));

        wallet.lock_all("pw").unwrap();
        wallet.unlock_all("pw").unwrap();
        wallet.save(&path).unwrap();

        let loaded = Wallet::load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.accounts()[0].is_locked());
        assert!(loaded.verify_password("pw"));
    }

    #[test]
    fn mismatched_address_version_rejected() {
        let settings = WalletSettings {
            address_version: 0x17,
            ..fast_settings()
        };
        let mut wallet = Wallet::with_settings("legacy", &settings);
        assert!(matches!(
            wallet.add_account(keyed(1)),
            Err(WalletError::InvalidArgument(_))
        ));
        let created = wallet.create_account(None).unwrap();
        assert!(created.address().starts_with('A'));
    }
}
