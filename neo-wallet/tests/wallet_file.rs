use std::fs;

use neo_crypto::ScryptParams;
use neo_wallet::{Account, Wallet, WalletError, WalletSettings};

fn fast_settings() -> WalletSettings {
    WalletSettings::from_toml_str("[scrypt]\nn = 16\nr = 1\np = 1\n").expect("settings")
}

#[test]
fn save_and_load_roundtrip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("wallet.json");

    let mut wallet = Wallet::with_settings("disk", &fast_settings());
    let first = wallet.create_account(Some("first".into())).expect("create").address().to_string();
    let second = wallet.create_account(None).expect("create").address().to_string();
    wallet.set_default_account(second.as_str()).expect("default");
    wallet.lock_all("hunter2").expect("lock");
    wallet.save(&path).expect("save");

    let mut loaded = Wallet::load(&path).expect("load");
    assert_eq!(loaded.name(), "disk");
    assert_eq!(loaded.scrypt(), ScryptParams::new(16, 1, 1, 64).unwrap());
    assert_eq!(loaded.default_account().map(Account::address), Some(second.as_str()));
    assert_eq!(loaded.account(&first).and_then(Account::label), Some("first"));

    assert_eq!(loaded.unlock_all("hunter2").expect("unlock"), 2);
    let signature = loaded.account(&first).unwrap().sign(b"tx").expect("sign");
    assert!(wallet.account(&first).unwrap().verify(b"tx", &signature));
}

#[test]
fn unlocked_keys_survive_save() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("wallet.json");

    let mut wallet = Wallet::with_settings("disk", &fast_settings());
    let address = wallet.create_account(None).expect("create").address().to_string();
    let wif = wallet.export_wif(&address).expect("wif");
    wallet.lock_all("pw").expect("lock");
    wallet.unlock_all("pw").expect("unlock");
    wallet.save(&path).expect("save");

    let mut loaded = Wallet::load(&path).expect("load");
    loaded.unlock_all("pw").expect("unlock");
    assert_eq!(loaded.export_wif(&address).expect("wif").as_str(), wif.as_str());
}

#[test]
fn load_reports_io_and_format_errors() {
    let dir = tempfile::tempdir().expect("tempdir");

    let missing = Wallet::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(missing, WalletError::Io(_)));

    let garbage = dir.path().join("garbage.json");
    fs::write(&garbage, "{\"name\": 1").expect("write");
    assert!(matches!(Wallet::load(&garbage), Err(WalletError::InvalidFormat(_))));

    let two_defaults = dir.path().join("two_defaults.json");
    fs::write(
        &two_defaults,
        r#"{"name":"x","version":"1.0","scrypt":{"n":16,"r":1,"p":1},"accounts":[
            {"address":"NPTmAHDxo6Pkyic8Nvu3kwyXoYJCvcCB6i","isDefault":true},
            {"address":"Niy8xPXfJYdApDYLnFnyMTcSxVM7AkFMvH","isDefault":true}],"extra":null}"#,
    )
    .expect("write");
    assert!(matches!(Wallet::load(&two_defaults), Err(WalletError::InvalidFormat(_))));
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let wallet = Wallet::new("empty");
    let err = wallet.save(dir.path().join("no/such/dir/wallet.json")).unwrap_err();
    assert!(matches!(err, WalletError::Io(_)));
}

#[test]
fn settings_file_drives_new_wallets() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("wallet.toml");
    fs::write(&path, "wallet_version = \"1.0\"\n\n[scrypt]\nn = 16\nr = 1\np = 1\n").expect("write");

    let settings = WalletSettings::from_toml_file(&path).expect("settings");
    let wallet = Wallet::with_settings("configured", &settings);
    assert_eq!(wallet.scrypt().n, 16);
    assert_eq!(wallet.version(), "1.0");
}
