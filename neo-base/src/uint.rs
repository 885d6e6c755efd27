// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use core::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
};

use crate::{
    encoding::{FromBase58Check, FromBase58CheckError, ToBase58Check, ToRevHex},
    hash::{hash160, HASH160_SIZE},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("address: invalid length {length}, expected 21 bytes (version + script hash)")]
    InvalidLength { length: usize },

    #[error("address: invalid version byte (expected 0x{expected:02X}, found 0x{found:02X})")]
    InvalidVersion { expected: u8, found: u8 },

    #[error("address: {0}")]
    Base58(#[from] FromBase58CheckError),
}

/// Wrapper around the Neo protocol address version byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AddressVersion(pub u8);

impl AddressVersion {
    /// N3 address version, which makes every address start with 'N'.
    pub const MAINNET: Self = Self(0x35);
}

impl Default for AddressVersion {
    fn default() -> Self {
        Self::MAINNET
    }
}

/// Neo's 160-bit script hash (little-endian in memory, big-endian when formatted).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct UInt160([u8; HASH160_SIZE]);

impl UInt160 {
    #[inline]
    pub const fn new(bytes: [u8; HASH160_SIZE]) -> Self {
        Self(bytes)
    }

    /// Script hash of a verification script.
    #[inline]
    pub fn from_script(script: &[u8]) -> Self {
        Self(hash160(script))
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8; HASH160_SIZE] {
        &self.0
    }

    pub fn to_address(&self, version: AddressVersion) -> String {
        let mut payload = Vec::with_capacity(1 + HASH160_SIZE);
        payload.push(version.0);
        payload.extend_from_slice(&self.0);
        payload.to_base58_check()
    }

    pub fn from_address(address: &str, version: AddressVersion) -> Result<Self, AddressError> {
        let decoded = Vec::<u8>::from_base58_check(address)?;
        if decoded.len() != 1 + HASH160_SIZE {
            return Err(AddressError::InvalidLength {
                length: decoded.len(),
            });
        }
        if decoded[0] != version.0 {
            return Err(AddressError::InvalidVersion {
                expected: version.0,
                found: decoded[0],
            });
        }
        let mut buf = [0u8; HASH160_SIZE];
        buf.copy_from_slice(&decoded[1..]);
        Ok(Self(buf))
    }
}

impl AsRef<[u8]> for UInt160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; HASH160_SIZE]> for UInt160 {
    #[inline]
    fn from(value: [u8; HASH160_SIZE]) -> Self {
        Self(value)
    }
}

impl Ord for UInt160 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for UInt160 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for UInt160 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.0.to_rev_hex_upper())
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}
