// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use neo_base::{
    encoding::{WifDecode, WifEncode, WIF_VERSION},
    AddressVersion, UInt160,
};
use neo_crypto::{
    ecc256::KEY_SIZE,
    nep2::{decrypt_nep2, encrypt_nep2},
    Keypair, PrivateKey, PublicKey, ScryptParams, SIGNATURE_SIZE,
};
use rand::rngs::OsRng;
use serde_json::Value;
use zeroize::Zeroizing;

use crate::{
    contract::Contract,
    error::{WalletError, WalletResult},
    nep6::{Nep6Account, Nep6Contract},
};

/// What an account holds of its private key.
#[derive(Clone, Debug)]
pub enum KeyMaterial {
    /// Decrypted key, usable for signing.
    Live(PrivateKey),
    /// NEP-2 ciphertext only.
    Encrypted(String),
    WatchOnly,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AccountExtra {
    #[default]
    None,
    Multisig {
        threshold: usize,
        participants: Vec<PublicKey>,
    },
}

#[derive(Clone, Debug)]
pub struct Account {
    address: String,
    script_hash: UInt160,
    version: AddressVersion,
    label: Option<String>,
    contract: Option<Contract>,
    key: KeyMaterial,
    public_key: Option<PublicKey>,
    nep2_key: Option<String>,
    is_default: bool,
    // NEP-6 `lock` flag, kept apart from whether a live key is held
    lock: bool,
    extra: AccountExtra,
    nep6_extra: Option<Value>,
}

impl Account {
    fn build(
        script_hash: UInt160,
        contract: Option<Contract>,
        key: KeyMaterial,
        public_key: Option<PublicKey>,
    ) -> Self {
        let version = AddressVersion::MAINNET;
        Self {
            address: script_hash.to_address(version),
            script_hash,
            version,
            label: None,
            contract,
            key,
            public_key,
            nep2_key: None,
            is_default: false,
            lock: false,
            extra: AccountExtra::None,
            nep6_extra: None,
        }
    }

    /// New account over a freshly generated key pair.
    pub fn create(label: Option<String>) -> WalletResult<Self> {
        let keypair = Keypair::generate(&mut OsRng)?;
        let mut account = Self::from_keypair(keypair);
        account.label = label;
        Ok(account)
    }

    #[inline]
    pub fn create_random() -> WalletResult<Self> {
        Self::create(None)
    }

    fn from_keypair(keypair: Keypair) -> Self {
        let contract = Contract::signature(&keypair.public_key);
        Self::build(
            contract.script_hash(),
            Some(contract),
            KeyMaterial::Live(keypair.private_key),
            Some(keypair.public_key),
        )
    }

    pub fn from_private_key(private_key: PrivateKey) -> WalletResult<Self> {
        Ok(Self::from_keypair(Keypair::from_private(private_key)?))
    }

    pub fn from_wif(wif: &str) -> WalletResult<Self> {
        let decoded = wif.wif_decode(1 + KEY_SIZE)?;
        if decoded.version() != WIF_VERSION || !decoded.compressed() {
            return Err(WalletError::InvalidFormat("unsupported wif version or flag".into()));
        }
        Self::from_private_key(PrivateKey::from_slice(decoded.data())?)
    }

    /// Imports a NEP-2 key as a locked account. The password is checked once
    /// and the decrypted key is wiped before returning.
    pub fn from_nep2(
        nep2: &str,
        password: &str,
        params: ScryptParams,
        version: AddressVersion,
    ) -> WalletResult<Self> {
        let private = decrypt_nep2(nep2, password, version, params)?;
        let public = private.public_key()?;
        drop(private);

        let contract = Contract::signature(&public);
        let mut account = Self::build(
            contract.script_hash(),
            Some(contract),
            KeyMaterial::Encrypted(nep2.to_string()),
            Some(public),
        )
        .with_address_version(version);
        account.nep2_key = Some(nep2.to_string());
        Ok(account)
    }

    /// Watch-only account over the single-signature contract of `public_key`.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let contract = Contract::signature(public_key);
        Self::build(
            contract.script_hash(),
            Some(contract),
            KeyMaterial::WatchOnly,
            Some(public_key.clone()),
        )
    }

    /// Watch-only account over an arbitrary verification script.
    ///
    /// Standard signature and multi-signature scripts are recognised.
    pub fn from_script(script: Vec<u8>) -> WalletResult<Self> {
        if script.is_empty() {
            return Err(WalletError::InvalidArgument("empty verification script".into()));
        }

        let contract = Contract::new(script, Vec::new(), false);
        if let Some(public) = contract.signature_key() {
            return Ok(Self::from_public_key(&public));
        }
        if let Some((threshold, participants)) = contract.multisig_parts() {
            return Self::create_multisig(threshold, &participants);
        }
        Ok(Self::build(contract.script_hash(), Some(contract), KeyMaterial::WatchOnly, None))
    }

    /// Watch-only account known only by its address.
    pub fn from_address(address: &str, version: AddressVersion) -> WalletResult<Self> {
        let script_hash = UInt160::from_address(address, version)?;
        Ok(Self::build(script_hash, None, KeyMaterial::WatchOnly, None).with_address_version(version))
    }

    /// Watch-only `threshold`-of-n account.
    pub fn create_multisig(threshold: usize, public_keys: &[PublicKey]) -> WalletResult<Self> {
        let contract = Contract::multisig(threshold, public_keys)?;
        let mut participants = public_keys.to_vec();
        participants.sort();

        let mut account = Self::build(contract.script_hash(), Some(contract), KeyMaterial::WatchOnly, None);
        account.extra = AccountExtra::Multisig {
            threshold,
            participants,
        };
        Ok(account)
    }

    /// Moves this account's key onto a multi-signature contract it takes part in.
    pub fn into_multisig(mut self, threshold: usize, public_keys: &[PublicKey]) -> WalletResult<Self> {
        let own = self.public_key.as_ref().ok_or_else(|| {
            WalletError::InvalidArgument("account has no public key".into())
        })?;
        if !public_keys.contains(own) {
            return Err(WalletError::InvalidArgument(
                "account key is not a multisig participant".into(),
            ));
        }

        let contract = Contract::multisig(threshold, public_keys)?;
        let mut participants = public_keys.to_vec();
        participants.sort();

        self.script_hash = contract.script_hash();
        self.address = self.script_hash.to_address(self.version);
        self.contract = Some(contract);
        self.extra = AccountExtra::Multisig {
            threshold,
            participants,
        };
        Ok(self)
    }

    /// Re-encodes the address under `version`; the script hash is unchanged.
    pub fn with_address_version(mut self, version: AddressVersion) -> Self {
        self.version = version;
        self.address = self.script_hash.to_address(version);
        self
    }

    /// Encrypts the key into NEP-2 and wipes the plaintext.
    pub fn encrypt(&mut self, password: &str, params: ScryptParams) -> WalletResult<()> {
        let private = match &self.key {
            KeyMaterial::Live(private) => private,
            KeyMaterial::Encrypted(_) => return Err(WalletError::WalletLocked),
            KeyMaterial::WatchOnly => {
                return Err(WalletError::InvalidArgument("watch-only account has no key".into()))
            }
        };

        let nep2 = encrypt_nep2(private, password, self.version, params)?;
        self.key = KeyMaterial::Encrypted(nep2.clone());
        self.nep2_key = Some(nep2);
        Ok(())
    }

    /// Restores the key from NEP-2. A wrong password leaves the account untouched.
    pub fn decrypt(&mut self, password: &str, params: ScryptParams) -> WalletResult<()> {
        let nep2 = match &self.key {
            KeyMaterial::Encrypted(nep2) => nep2,
            _ => return Err(WalletError::InvalidState("account is not encrypted")),
        };

        let private = decrypt_nep2(nep2, password, self.version, params)?;
        let public = private.public_key()?;
        match self.public_key.clone() {
            Some(expected) if expected != public => {
                return Err(WalletError::ChecksumMismatch("decrypted key does not match account"));
            }
            Some(_) => {}
            None => {
                if self.contract.is_none() {
                    if public.script_hash() != self.script_hash {
                        return Err(WalletError::ChecksumMismatch(
                            "decrypted key does not match account",
                        ));
                    }
                    self.contract = Some(Contract::signature(&public));
                } else if let AccountExtra::Multisig { participants, .. } = &self.extra {
                    if !participants.contains(&public) {
                        return Err(WalletError::ChecksumMismatch(
                            "decrypted key is not a multisig participant",
                        ));
                    }
                }
                self.public_key = Some(public);
            }
        }

        self.nep2_key = Some(nep2.clone());
        self.key = KeyMaterial::Live(private);
        Ok(())
    }

    pub fn export_wif(&self) -> WalletResult<Zeroizing<String>> {
        Ok(self.live_key()?.as_be_bytes().wif_encode(WIF_VERSION, true))
    }

    pub fn export_nep2(&self, password: &str, params: ScryptParams) -> WalletResult<String> {
        Ok(encrypt_nep2(self.live_key()?, password, self.version, params)?)
    }

    /// ECDSA-P256 over SHA-256(`data`).
    pub fn sign(&self, data: &[u8]) -> WalletResult<[u8; SIGNATURE_SIZE]> {
        let keypair = Keypair::from_private(self.live_key()?.clone())?;
        Ok(keypair.sign(data)?)
    }

    /// Needs only the public key, so locked accounts verify too.
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        self.public_key
            .as_ref()
            .map_or(false, |public| public.verify(data, signature).is_ok())
    }

    fn live_key(&self) -> WalletResult<&PrivateKey> {
        match &self.key {
            KeyMaterial::Live(private) => Ok(private),
            _ => Err(WalletError::WalletLocked),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn script_hash(&self) -> UInt160 {
        self.script_hash
    }

    pub fn address_version(&self) -> AddressVersion {
        self.version
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub(crate) fn set_default(&mut self, value: bool) {
        self.is_default = value;
    }

    pub fn is_locked(&self) -> bool {
        !matches!(self.key, KeyMaterial::Live(_))
    }

    /// The `lock` flag carried by the NEP-6 record. It does not gate signing.
    pub fn nep6_lock(&self) -> bool {
        self.lock
    }

    pub fn set_nep6_lock(&mut self, value: bool) {
        self.lock = value;
    }

    pub fn is_watch_only(&self) -> bool {
        matches!(self.key, KeyMaterial::WatchOnly)
    }

    /// Holds a live key that was never written out as NEP-2.
    pub(crate) fn has_unsaved_key(&self) -> bool {
        matches!(self.key, KeyMaterial::Live(_)) && self.nep2_key.is_none()
    }

    pub fn is_multisig(&self) -> bool {
        matches!(self.extra, AccountExtra::Multisig { .. })
    }

    pub fn key_material(&self) -> &KeyMaterial {
        &self.key
    }

    pub fn extra(&self) -> &AccountExtra {
        &self.extra
    }

    pub fn contract(&self) -> Option<&Contract> {
        self.contract.as_ref()
    }

    pub fn verification_script(&self) -> Option<&[u8]> {
        self.contract.as_ref().map(Contract::script)
    }

    pub fn public_key(&self) -> Option<&PublicKey> {
        self.public_key.as_ref()
    }

    pub fn nep2_key(&self) -> Option<&str> {
        self.nep2_key.as_deref()
    }

    pub fn nep6_extra(&self) -> Option<&Value> {
        self.nep6_extra.as_ref()
    }

    pub fn set_nep6_extra(&mut self, extra: Option<Value>) {
        self.nep6_extra = extra;
    }

    pub fn to_nep6_account(&self) -> Nep6Account {
        Nep6Account {
            address: self.address.clone(),
            label: self.label.clone(),
            is_default: self.is_default,
            lock: self.lock,
            key: self.nep2_key.clone(),
            contract: self.contract.as_ref().map(Nep6Contract::from),
            extra: self.nep6_extra.clone(),
        }
    }

    /// Rebuilds an account from its NEP-6 record. Accounts with a key load locked.
    pub fn from_nep6_account(record: &Nep6Account, version: AddressVersion) -> WalletResult<Self> {
        let script_hash = UInt160::from_address(&record.address, version)?;
        let contract = record.contract.as_ref().map(Contract::try_from).transpose()?;
        if let Some(contract) = &contract {
            if contract.script_hash() != script_hash {
                return Err(WalletError::InvalidFormat(format!(
                    "contract script does not hash to {}",
                    record.address
                )));
            }
        }

        let public_key = contract.as_ref().and_then(Contract::signature_key);
        let extra = match contract.as_ref().and_then(Contract::multisig_parts) {
            Some((threshold, participants)) => AccountExtra::Multisig {
                threshold,
                participants,
            },
            None => AccountExtra::None,
        };
        let key = match &record.key {
            Some(nep2) => KeyMaterial::Encrypted(nep2.clone()),
            None => KeyMaterial::WatchOnly,
        };

        let mut account = Self::build(script_hash, contract, key, public_key).with_address_version(version);
        account.label = record.label.clone();
        account.is_default = record.is_default;
        account.lock = record.lock;
        account.nep2_key = record.key.clone();
        account.extra = extra;
        account.nep6_extra = record.extra.clone();
        Ok(account)
    }
}
