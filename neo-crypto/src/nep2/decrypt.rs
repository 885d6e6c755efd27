// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use neo_base::{encoding::FromBase58Check, AddressVersion};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::{
    aes::{Aes256EcbCipher, AES256_KEY_SIZE},
    ecc256::PrivateKey,
    scrypt::{DeriveScryptKey, ScryptParams},
};

use super::{address_hash, Nep2Error, NEP2_ADDRESS_HASH_SIZE, NEP2_PAYLOAD_SIZE, NEP2_PREFIX};

/// Decrypt a NEP-2 string back into the 32-byte private key.
///
/// A wrong passphrase surfaces as `Nep2Error::InvalidAddressHash`.
pub fn decrypt_nep2(
    nep2: &str,
    passphrase: impl AsRef<[u8]>,
    version: AddressVersion,
    params: ScryptParams,
) -> Result<PrivateKey, Nep2Error> {
    let data = Vec::<u8>::from_base58_check(nep2)?;
    if data.len() != NEP2_PAYLOAD_SIZE || data[..NEP2_PREFIX.len()] != NEP2_PREFIX {
        return Err(Nep2Error::InvalidFormat);
    }

    let hash_end = NEP2_PREFIX.len() + NEP2_ADDRESS_HASH_SIZE;
    let expected_hash = &data[NEP2_PREFIX.len()..hash_end];
    let encrypted_key = &data[hash_end..];

    let derived = passphrase.derive_scrypt_key::<64>(expected_hash, params)?;
    let (derived_half1, derived_half2) = derived.split_at(AES256_KEY_SIZE);

    let mut decrypted = Zeroizing::new([0u8; AES256_KEY_SIZE]);
    decrypted.copy_from_slice(encrypted_key);
    derived_half2.aes256_ecb_decrypt_aligned(decrypted.as_mut_slice())?;
    decrypted
        .iter_mut()
        .zip(derived_half1.iter())
        .for_each(|(byte, mask)| *byte ^= mask);

    // A wrong passphrase usually yields a valid scalar, so the address hash is the real check.
    let private = PrivateKey::from_slice(decrypted.as_slice())?;
    let address = match private.public_key() {
        Ok(public) => public.to_address(version),
        Err(_) => return Err(Nep2Error::InvalidAddressHash),
    };

    if !bool::from(address_hash(&address).as_slice().ct_eq(expected_hash)) {
        tracing::debug!("nep2: address hash mismatch");
        return Err(Nep2Error::InvalidAddressHash);
    }

    Ok(private)
}
