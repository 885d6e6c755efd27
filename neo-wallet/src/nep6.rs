// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! NEP-6 wallet file schema.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use neo_crypto::ScryptParams;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    contract::{Contract, ContractParameter, ContractParameterType},
    error::{WalletError, WalletResult},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Nep6Wallet {
    #[serde(default)]
    pub name: Option<String>,
    pub version: String,
    pub scrypt: ScryptParams,
    pub accounts: Vec<Nep6Account>,
    #[serde(default)]
    pub extra: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nep6Account {
    pub address: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub lock: bool,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub contract: Option<Nep6Contract>,
    #[serde(default)]
    pub extra: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nep6Contract {
    /// Base64 of the verification script.
    pub script: String,
    pub parameters: Vec<Nep6Parameter>,
    #[serde(default)]
    pub deployed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nep6Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub parameter_type: ContractParameterType,
}

impl Nep6Wallet {
    /// Parses and checks a NEP-6 document.
    pub fn from_json(text: &str) -> WalletResult<Self> {
        let wallet: Self = serde_json::from_str(text)?;
        if !wallet.scrypt.is_valid() {
            return Err(WalletError::InvalidFormat(format!("invalid {}", wallet.scrypt)));
        }
        if let Some(account) = wallet.accounts.iter().find(|a| a.address.is_empty()) {
            return Err(WalletError::InvalidFormat(format!(
                "account with empty address (label {:?})",
                account.label
            )));
        }
        if wallet.accounts.iter().filter(|a| a.is_default).count() > 1 {
            return Err(WalletError::InvalidFormat("more than one default account".into()));
        }
        Ok(wallet)
    }

    pub fn to_json(&self) -> WalletResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> WalletResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&Contract> for Nep6Contract {
    fn from(contract: &Contract) -> Self {
        Self {
            script: BASE64.encode(contract.script()),
            parameters: contract
                .parameters()
                .iter()
                .map(|param| Nep6Parameter {
                    name: param.name().to_string(),
                    parameter_type: param.parameter_type(),
                })
                .collect(),
            deployed: contract.deployed(),
        }
    }
}

impl TryFrom<&Nep6Contract> for Contract {
    type Error = WalletError;

    fn try_from(contract: &Nep6Contract) -> Result<Self, Self::Error> {
        let script = BASE64
            .decode(contract.script.as_bytes())
            .map_err(|err| WalletError::InvalidFormat(format!("contract script: {err}")))?;
        let parameters = contract
            .parameters
            .iter()
            .map(|param| ContractParameter::new(param.name.clone(), param.parameter_type))
            .collect();
        Ok(Contract::new(script, parameters, contract.deployed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLET: &str = r#"{
        "name": "name",
        "version": "1.0",
        "scrypt": {"n": 16384, "r": 8, "p": 8},
        "accounts": [{
            "address": "NUz6PKTAM7NbPJzkKJFNay3VckQtcDkgWo",
            "label": null,
            "isDefault": true,
            "lock": false,
            "key": null,
            "contract": {
                "script": "DCECb/A7lJJBzh2t1DUZ5pYOCoW0GmmgXDKBA6orzhWUyhZBVuezJw==",
                "parameters": [{"name": "signature", "type": "Signature"}],
                "deployed": false
            },
            "extra": null
        }],
        "extra": null
    }"#;

    #[test]
    fn parse_wallet() {
        let wallet = Nep6Wallet::from_json(WALLET).unwrap();
        assert_eq!(wallet.name.as_deref(), Some("name"));
        assert_eq!(wallet.scrypt, ScryptParams::DEFAULT);
        let account = &wallet.accounts[0];
        assert!(account.is_default);
        let contract = account.contract.as_ref().unwrap();
        assert_eq!(contract.parameters[0].parameter_type, ContractParameterType::Signature);

        let contract = Contract::try_from(contract).unwrap();
        assert_eq!(contract.script().len(), 40);
        assert_eq!(Nep6Contract::from(&contract), *account.contract.as_ref().unwrap());
    }

    #[test]
    fn json_roundtrip() {
        let wallet = Nep6Wallet::from_json(WALLET).unwrap();
        let compact = Nep6Wallet::from_json(&wallet.to_json().unwrap()).unwrap();
        let pretty = Nep6Wallet::from_json(&wallet.to_json_pretty().unwrap()).unwrap();
        assert_eq!(compact, wallet);
        assert_eq!(pretty, wallet);

        let json = wallet.to_json().unwrap();
        assert!(json.contains(r#""isDefault":true"#));
        assert!(json.contains(r#""type":"Signature""#));
        assert!(json.contains(r#""scrypt":{"n":16384,"r":8,"p":8}"#));
    }

    #[test]
    fn rejects_invalid_documents() {
        assert!(matches!(Nep6Wallet::from_json("{"), Err(WalletError::InvalidFormat(_))));

        let missing_address = WALLET.replace(r#""address": "NUz6PKTAM7NbPJzkKJFNay3VckQtcDkgWo","#, "");
        assert!(matches!(
            Nep6Wallet::from_json(&missing_address),
            Err(WalletError::InvalidFormat(_))
        ));

        let mut wallet = Nep6Wallet::from_json(WALLET).unwrap();
        let mut second = wallet.accounts[0].clone();
        second.address = "NaUr8JTThhtst4UG7jbGtoHXsc99PSHj7U".into();
        wallet.accounts.push(second);
        assert!(matches!(
            Nep6Wallet::from_json(&wallet.to_json().unwrap()),
            Err(WalletError::InvalidFormat(_))
        ));

        let bad_scrypt = WALLET.replace(r#""n": 16384"#, r#""n": 1000"#);
        assert!(matches!(
            Nep6Wallet::from_json(&bad_scrypt),
            Err(WalletError::InvalidFormat(_))
        ));
    }

    #[test]
    fn rejects_bad_script_encoding() {
        let contract = Nep6Contract {
            script: "not base64!".into(),
            parameters: Vec::new(),
            deployed: false,
        };
        assert!(matches!(Contract::try_from(&contract), Err(WalletError::InvalidFormat(_))));
    }
}
