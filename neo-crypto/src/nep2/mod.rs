// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! NEP-2 passphrase-protected private keys.

mod decrypt;
mod encrypt;
mod error;

pub use decrypt::decrypt_nep2;
pub use encrypt::encrypt_nep2;
pub use error::Nep2Error;

use neo_base::hash::hash256;

pub(crate) const NEP2_PREFIX: [u8; 3] = [0x01, 0x42, 0xE0];
pub(crate) const NEP2_ADDRESS_HASH_SIZE: usize = 4;
pub(crate) const NEP2_PAYLOAD_SIZE: usize = NEP2_PREFIX.len() + NEP2_ADDRESS_HASH_SIZE + 32;

/// First four bytes of SHA256(SHA256(address)), used as the scrypt salt.
pub(crate) fn address_hash(address: &str) -> [u8; NEP2_ADDRESS_HASH_SIZE] {
    let digest = hash256(address.as_bytes());
    let mut hash = [0u8; NEP2_ADDRESS_HASH_SIZE];
    hash.copy_from_slice(&digest[..NEP2_ADDRESS_HASH_SIZE]);
    hash
}
