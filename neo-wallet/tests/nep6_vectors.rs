use neo_base::AddressVersion;
use neo_wallet::{AccountExtra, ContractParameterType, Nep6Wallet, Wallet, WalletError};

const FIXTURE: &str = include_str!("fixtures/nep6_wallet.json");

fn fixture_wallet() -> Wallet {
    let nep6 = Nep6Wallet::from_json(FIXTURE).expect("parse wallet");
    Wallet::from_nep6(&nep6, AddressVersion::MAINNET).expect("wallet import")
}

#[test]
fn parse_nep6_wallet_fixture() {
    let nep6 = Nep6Wallet::from_json(FIXTURE).expect("parse wallet");
    assert_eq!(nep6.name.as_deref(), Some("fixture"));
    assert_eq!(nep6.version, "1.0");
    assert_eq!(nep6.scrypt.n, 16);
    assert_eq!(nep6.accounts.len(), 3);

    let multisig = &nep6.accounts[2];
    let contract = multisig.contract.as_ref().expect("contract");
    assert_eq!(contract.parameters.len(), 2);
    assert_eq!(contract.parameters[1].parameter_type, ContractParameterType::Signature);
}

#[test]
fn wallet_imports_fixture_accounts() {
    let wallet = fixture_wallet();
    assert_eq!(wallet.name(), "fixture");
    assert_eq!(wallet.len(), 3);
    assert!(wallet.accounts().iter().all(|a| a.is_locked()));

    let default = wallet.default_account().expect("default account");
    assert_eq!(default.address(), "NPTmAHDxo6Pkyic8Nvu3kwyXoYJCvcCB6i");
    assert_eq!(default.label(), Some("coz"));

    let treasury = wallet
        .account("Nhvj6Ek884FF9mWHAvGdKNMX5rHkzTEAFY")
        .expect("multisig account");
    assert!(treasury.is_watch_only());
    match treasury.extra() {
        AccountExtra::Multisig {
            threshold,
            participants,
        } => {
            assert_eq!(*threshold, 2);
            assert_eq!(participants.len(), 3);
        }
        other => panic!("unexpected extra {other:?}"),
    }
    assert_eq!(
        treasury.nep6_extra().and_then(|v| v.get("note")).and_then(|v| v.as_str()),
        Some("2-of-3")
    );
}

#[test]
fn wallet_reserializes_fixture() {
    let nep6 = Nep6Wallet::from_json(FIXTURE).expect("parse wallet");
    let wallet = fixture_wallet();
    assert_eq!(wallet.to_nep6(), nep6);

    let pretty = wallet.to_nep6().to_json_pretty().expect("serialize");
    assert_eq!(Nep6Wallet::from_json(&pretty).expect("reparse"), nep6);
}

#[test]
fn lock_flags_survive_reload_and_unlock() {
    let nep6 = Nep6Wallet::from_json(FIXTURE).expect("parse wallet");
    let flags: Vec<bool> = nep6.accounts.iter().map(|a| a.lock).collect();
    assert_eq!(flags, vec![false, true, false]);

    let mut wallet = fixture_wallet();
    let reloaded: Vec<bool> = wallet.accounts().iter().map(|a| a.nep6_lock()).collect();
    assert_eq!(reloaded, flags);

    let default = wallet
        .account_mut("NPTmAHDxo6Pkyic8Nvu3kwyXoYJCvcCB6i")
        .expect("default account");
    default.decrypt("city of zion", nep6.scrypt).expect("decrypt");
    assert!(!default.is_locked());
    assert_eq!(wallet.to_nep6(), nep6);
}

#[test]
fn unlock_all_stops_at_first_wrong_password() {
    let mut wallet = fixture_wallet();
    assert!(wallet.verify_password("city of zion"));

    let err = wallet.unlock_all("city of zion").expect_err("second key uses another password");
    match err {
        WalletError::BulkOperation {
            address, processed, ..
        } => {
            assert_eq!(address, "Niy8xPXfJYdApDYLnFnyMTcSxVM7AkFMvH");
            assert_eq!(processed, 1);
        }
        other => panic!("unexpected error {other:?}"),
    }

    assert!(!wallet.accounts()[0].is_locked());
    assert!(wallet.accounts()[1].is_locked());

    let mut second = wallet.accounts()[1].clone();
    second.decrypt("wallet", wallet.scrypt()).expect("decrypt second");
    assert!(second.sign(b"payload").is_ok());
}
