// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use neo_keyring::prelude::*;

fn fast_settings() -> WalletSettings {
    WalletSettings {
        scrypt: ScryptParams::new(16, 1, 1, 64).expect("params"),
        ..WalletSettings::default()
    }
}

fn key(fill: u8) -> PrivateKey {
    PrivateKey::from_slice(&[fill; 32]).expect("key")
}

#[test]
fn multisig_wallet_survives_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("treasury.json");

    let keys = [key(1), key(2), key(3)];
    let publics: Vec<PublicKey> = keys.iter().map(|k| k.public_key().expect("public")).collect();

    let mut wallet = Wallet::with_settings("treasury", &fast_settings());
    let signer = Account::from_private_key(keys[0].clone())
        .expect("account")
        .into_multisig(2, &publics)
        .expect("multisig");
    let multisig_address = signer.address().to_string();
    wallet.add_account(signer).expect("add");

    let watch = Account::create_multisig(2, &publics).expect("watch");
    assert!(matches!(
        wallet.add_account(watch),
        Err(WalletError::StateConflict(_))
    ));

    assert_eq!(wallet.lock_all("pw").expect("lock"), 1);
    wallet.save(&path).expect("save");

    let mut loaded = Wallet::load(&path).expect("load");
    let account = loaded.account(&multisig_address).expect("account");
    assert!(account.is_locked());
    match account.extra() {
        AccountExtra::Multisig { threshold, participants } => {
            assert_eq!(*threshold, 2);
            assert_eq!(participants.len(), 3);
        }
        AccountExtra::None => panic!("multisig metadata lost"),
    }

    assert!(loaded.verify_password("pw"));
    assert!(!loaded.verify_password("nope"));
    loaded.unlock_all("pw").expect("unlock");

    let signature = loaded.account(&multisig_address).unwrap().sign(b"tx").expect("sign");
    assert!(publics[0].verify(b"tx", &signature).is_ok());
}

#[test]
fn mnemonic_backup_is_stable() {
    let mnemonic = Mnemonic::parse(
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
    )
    .expect("mnemonic");
    assert_eq!(mnemonic.entropy().expect("entropy").as_slice(), &[0u8; 16]);
    assert_eq!(mnemonic.language(), Language::English);

    let generated = neo_keyring::wallet::mnemonic::generate(256, Language::English).expect("generate");
    assert_eq!(generated.word_count(), 24);
    assert_eq!(Mnemonic::parse(generated.phrase()).expect("parse"), generated);
}

#[test]
fn nep2_keys_move_between_wallets() {
    let settings = fast_settings();
    let nep2 = encrypt_nep2(&key(7), "move", AddressVersion::MAINNET, settings.scrypt).expect("encrypt");

    let mut wallet = Wallet::with_settings("receiver", &settings);
    let address = wallet.import_nep2(&nep2, "move").expect("import").address().to_string();
    assert!(wallet.account(&address).unwrap().is_locked());
    assert_eq!(wallet.export_nep2(&address, "move").ok(), None);

    wallet.unlock_all("move").expect("unlock");
    let exported = wallet.export_nep2(&address, "move").expect("export");
    let recovered = decrypt_nep2(&exported, "move", AddressVersion::MAINNET, settings.scrypt).expect("decrypt");
    assert_eq!(recovered, key(7));
}
