// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Verification contracts: the script an account's witness must satisfy.

use core::fmt;
use core::str::FromStr;

use neo_base::UInt160;
use neo_crypto::{
    ecc256::{CHECK_SIG_SYSCALL, COMPRESSED_KEY_SIZE, PUSH_PUBLIC_KEY},
    PublicKey,
};
use serde::{Deserialize, Serialize};

use crate::error::{WalletError, WalletResult};

/// `SYSCALL System.Crypto.CheckMultisig`.
pub const CHECK_MULTISIG_SYSCALL: [u8; 5] = [0x41, 0x9E, 0xD0, 0xDC, 0x3A];

/// Largest participant set a multi-signature script may list.
pub const MAX_MULTISIG_KEYS: usize = 16;

const PUSH0: u8 = 0x10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ContractParameterType {
    Any = 0x00,
    Boolean = 0x10,
    Integer = 0x11,
    ByteArray = 0x12,
    String = 0x13,
    Hash160 = 0x14,
    Hash256 = 0x15,
    PublicKey = 0x16,
    Signature = 0x17,
    Array = 0x20,
    Map = 0x22,
    InteropInterface = 0x30,
    Void = 0xFF,
}

impl ContractParameterType {
    pub fn name(self) -> &'static str {
        use ContractParameterType::*;
        match self {
            Any => "Any",
            Boolean => "Boolean",
            Integer => "Integer",
            ByteArray => "ByteArray",
            String => "String",
            Hash160 => "Hash160",
            Hash256 => "Hash256",
            PublicKey => "PublicKey",
            Signature => "Signature",
            Array => "Array",
            Map => "Map",
            InteropInterface => "InteropInterface",
            Void => "Void",
        }
    }
}

impl From<ContractParameterType> for u8 {
    fn from(value: ContractParameterType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for ContractParameterType {
    type Error = WalletError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use ContractParameterType::*;
        let ty = match value {
            0x00 => Any,
            0x10 => Boolean,
            0x11 => Integer,
            0x12 => ByteArray,
            0x13 => String,
            0x14 => Hash160,
            0x15 => Hash256,
            0x16 => PublicKey,
            0x17 => Signature,
            0x20 => Array,
            0x22 => Map,
            0x30 => InteropInterface,
            0xFF => Void,
            _ => {
                return Err(WalletError::InvalidFormat(format!(
                    "unknown parameter type 0x{value:02x}"
                )))
            }
        };
        Ok(ty)
    }
}

impl fmt::Display for ContractParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContractParameterType {
    type Err = WalletError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        use ContractParameterType::*;
        [
            Any,
            Boolean,
            Integer,
            ByteArray,
            String,
            Hash160,
            Hash256,
            PublicKey,
            Signature,
            Array,
            Map,
            InteropInterface,
            Void,
        ]
        .into_iter()
        .find(|ty| ty.name() == value)
        .ok_or_else(|| WalletError::InvalidFormat(format!("unknown parameter type '{value}'")))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractParameter {
    name: String,
    parameter_type: ContractParameterType,
}

impl ContractParameter {
    pub fn new(name: impl Into<String>, parameter_type: ContractParameterType) -> Self {
        Self {
            name: name.into(),
            parameter_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameter_type(&self) -> ContractParameterType {
        self.parameter_type
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contract {
    script: Vec<u8>,
    parameters: Vec<ContractParameter>,
    deployed: bool,
}

impl Contract {
    pub fn new(script: Vec<u8>, parameters: Vec<ContractParameter>, deployed: bool) -> Self {
        Self {
            script,
            parameters,
            deployed,
        }
    }

    /// Single-signature contract over `public_key`.
    pub fn signature(public_key: &PublicKey) -> Self {
        Self {
            script: public_key.signature_redeem_script(),
            parameters: vec![ContractParameter::new(
                "signature",
                ContractParameterType::Signature,
            )],
            deployed: false,
        }
    }

    /// `threshold`-of-n contract; keys are listed in point order regardless of input order.
    pub fn multisig(threshold: usize, public_keys: &[PublicKey]) -> WalletResult<Self> {
        let script = multisig_redeem_script(threshold, public_keys)?;
        let parameters = (0..threshold)
            .map(|i| ContractParameter::new(format!("signature{i}"), ContractParameterType::Signature))
            .collect();
        Ok(Self {
            script,
            parameters,
            deployed: false,
        })
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn parameters(&self) -> &[ContractParameter] {
        &self.parameters
    }

    pub fn deployed(&self) -> bool {
        self.deployed
    }

    #[inline]
    pub fn script_hash(&self) -> UInt160 {
        UInt160::from_script(&self.script)
    }

    /// The key of a single-signature script.
    pub fn signature_key(&self) -> Option<PublicKey> {
        let script = self.script.as_slice();
        let key_end = PUSH_PUBLIC_KEY.len() + COMPRESSED_KEY_SIZE;
        if script.len() != key_end + CHECK_SIG_SYSCALL.len()
            || script[..PUSH_PUBLIC_KEY.len()] != PUSH_PUBLIC_KEY
            || script[key_end..] != CHECK_SIG_SYSCALL
        {
            return None;
        }
        PublicKey::from_sec1_bytes(&script[PUSH_PUBLIC_KEY.len()..key_end]).ok()
    }

    /// Threshold and participants of a multi-signature script.
    pub fn multisig_parts(&self) -> Option<(usize, Vec<PublicKey>)> {
        parse_multisig(&self.script)
    }
}

/// `PUSH(m) {PUSHDATA1 key}*n PUSH(n) SYSCALL System.Crypto.CheckMultisig`
pub fn multisig_redeem_script(threshold: usize, public_keys: &[PublicKey]) -> WalletResult<Vec<u8>> {
    let n = public_keys.len();
    if threshold == 0 || threshold > n || n > MAX_MULTISIG_KEYS {
        return Err(WalletError::InvalidArgument(format!(
            "invalid multisig parameters: m={threshold}, n={n}"
        )));
    }

    let mut sorted = public_keys.to_vec();
    sorted.sort();
    if sorted.windows(2).any(|pair| pair[0] == pair[1]) {
        return Err(WalletError::InvalidArgument(
            "duplicate multisig participant".into(),
        ));
    }

    let mut script = Vec::with_capacity(2 + n * (PUSH_PUBLIC_KEY.len() + COMPRESSED_KEY_SIZE) + 5);
    script.push(PUSH0 + threshold as u8);
    for key in &sorted {
        script.extend_from_slice(&PUSH_PUBLIC_KEY);
        script.extend_from_slice(&key.to_compressed());
    }
    script.push(PUSH0 + n as u8);
    script.extend_from_slice(&CHECK_MULTISIG_SYSCALL);
    Ok(script)
}

fn parse_multisig(script: &[u8]) -> Option<(usize, Vec<PublicKey>)> {
    let push_count = |op: u8| -> Option<usize> {
        (PUSH0 + 1..=PUSH0 + MAX_MULTISIG_KEYS as u8)
            .contains(&op)
            .then(|| (op - PUSH0) as usize)
    };

    let (&first, mut rest) = script.split_first()?;
    let threshold = push_count(first)?;

    let mut keys = Vec::new();
    while rest.starts_with(&PUSH_PUBLIC_KEY) {
        let body = rest.get(PUSH_PUBLIC_KEY.len()..PUSH_PUBLIC_KEY.len() + COMPRESSED_KEY_SIZE)?;
        keys.push(PublicKey::from_sec1_bytes(body).ok()?);
        rest = &rest[PUSH_PUBLIC_KEY.len() + COMPRESSED_KEY_SIZE..];
    }

    let (&last, tail) = rest.split_first()?;
    if push_count(last)? != keys.len() || threshold > keys.len() || *tail != CHECK_MULTISIG_SYSCALL {
        return None;
    }
    Some((threshold, keys))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use neo_base::AddressVersion;
    use neo_crypto::PrivateKey;

    fn key(byte: u8) -> PublicKey {
        PrivateKey::new([byte; 32]).public_key().unwrap()
    }

    #[test]
    fn signature_contract_roundtrip() {
        let contract = Contract::signature(&key(1));
        assert_eq!(contract.parameters().len(), 1);
        assert_eq!(contract.parameters()[0].parameter_type(), ContractParameterType::Signature);
        assert_eq!(contract.signature_key(), Some(key(1)));
        assert!(contract.multisig_parts().is_none());
        assert_eq!(
            contract.script_hash().to_address(AddressVersion::MAINNET),
            "NUz6PKTAM7NbPJzkKJFNay3VckQtcDkgWo"
        );
    }

    #[test]
    fn multisig_known_vector() {
        let contract = Contract::multisig(2, &[key(1), key(2), key(3)]).unwrap();
        assert_eq!(
            contract.script(),
            hex!(
                "12"
                "0c2102550f471003f3df97c3df506ac797f6721fb1a1fb7b8f6f83d224498a65c88e24"
                "0c2102591ab771ebbcfd6d9cb9094d106528add1a69d44c2c1f627f089ec58b9c61adf"
                "0c21026ff03b949241ce1dadd43519e6960e0a85b41a69a05c328103aa2bce1594ca16"
                "13419ed0dc3a"
            )
            .as_slice()
        );
        assert_eq!(
            contract.script_hash().to_address(AddressVersion::MAINNET),
            "Nhvj6Ek884FF9mWHAvGdKNMX5rHkzTEAFY"
        );
        assert_eq!(contract.parameters().len(), 2);
        assert_eq!(contract.parameters()[1].name(), "signature1");

        let (threshold, keys) = contract.multisig_parts().unwrap();
        assert_eq!(threshold, 2);
        assert_eq!(keys, vec![key(2), key(3), key(1)]);
        assert!(contract.signature_key().is_none());
    }

    #[test]
    fn multisig_ignores_input_order() {
        let a = Contract::multisig(2, &[key(3), key(1), key(2)]).unwrap();
        let b = Contract::multisig(2, &[key(1), key(2), key(3)]).unwrap();
        assert_eq!(a.script_hash(), b.script_hash());
    }

    #[test]
    fn multisig_rejects_bad_parameters() {
        let keys: Vec<PublicKey> = (1..=17).map(key).collect();
        assert!(matches!(Contract::multisig(0, &keys[..3]), Err(WalletError::InvalidArgument(_))));
        assert!(matches!(Contract::multisig(4, &keys[..3]), Err(WalletError::InvalidArgument(_))));
        assert!(matches!(Contract::multisig(1, &keys), Err(WalletError::InvalidArgument(_))));
        assert!(matches!(Contract::multisig(1, &[]), Err(WalletError::InvalidArgument(_))));
        assert!(matches!(
            Contract::multisig(1, &[key(1), key(1)]),
            Err(WalletError::InvalidArgument(_))
        ));
        assert!(Contract::multisig(16, &keys[..16]).is_ok());
    }

    #[test]
    fn parameter_type_names() {
        for ty in [ContractParameterType::Signature, ContractParameterType::PublicKey, ContractParameterType::Void] {
            assert_eq!(ty.to_string().parse::<ContractParameterType>().unwrap(), ty);
            assert_eq!(ContractParameterType::try_from(u8::from(ty)).unwrap(), ty);
        }
        assert_eq!(u8::from(ContractParameterType::Signature), 0x17);
        assert!("Signatur".parse::<ContractParameterType>().is_err());
        assert!(ContractParameterType::try_from(0x01).is_err());
    }
}
