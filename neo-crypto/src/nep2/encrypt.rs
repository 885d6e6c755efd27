// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use neo_base::{encoding::ToBase58Check, AddressVersion};
use zeroize::Zeroizing;

use crate::{
    aes::{Aes256EcbCipher, AES256_KEY_SIZE},
    ecc256::PrivateKey,
    scrypt::{DeriveScryptKey, ScryptParams},
};

use super::{address_hash, Nep2Error, NEP2_PAYLOAD_SIZE, NEP2_PREFIX};

/// Encrypt a private key into its 58-character NEP-2 form (prefix `6P`).
pub fn encrypt_nep2(
    private: &PrivateKey,
    passphrase: impl AsRef<[u8]>,
    version: AddressVersion,
    params: ScryptParams,
) -> Result<String, Nep2Error> {
    let address = private.public_key()?.to_address(version);
    let address_hash = address_hash(&address);

    let derived = passphrase.derive_scrypt_key::<64>(&address_hash, params)?;
    let (derived_half1, derived_half2) = derived.split_at(AES256_KEY_SIZE);

    let mut masked = Zeroizing::new([0u8; AES256_KEY_SIZE]);
    masked
        .iter_mut()
        .zip(private.as_be_bytes().iter().zip(derived_half1.iter()))
        .for_each(|(out, (key, mask))| *out = key ^ mask);
    derived_half2.aes256_ecb_encrypt_aligned(masked.as_mut_slice())?;

    let mut payload = Vec::with_capacity(NEP2_PAYLOAD_SIZE);
    payload.extend_from_slice(&NEP2_PREFIX);
    payload.extend_from_slice(&address_hash);
    payload.extend_from_slice(masked.as_slice());
    Ok(payload.to_base58_check())
}
