// Copyright @ 2025 - Present, R3E Network
// All Rights Reserved

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

const DEFAULT_DKLEN: usize = 64;

/// Cost parameters of the scrypt key derivation used by NEP-2.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScryptParams {
    pub n: u64,
    pub r: u32,
    pub p: u32,

    #[serde(default = "default_dklen", skip_serializing_if = "is_default_dklen")]
    pub dklen: usize,
}

fn default_dklen() -> usize {
    DEFAULT_DKLEN
}

fn is_default_dklen(dklen: &usize) -> bool {
    *dklen == DEFAULT_DKLEN
}

impl ScryptParams {
    /// The NEP-2 reference parameters.
    pub const DEFAULT: Self = Self {
        n: 16384,
        r: 8,
        p: 8,
        dklen: DEFAULT_DKLEN,
    };

    pub const LIGHT: Self = Self {
        n: 4096,
        r: 8,
        p: 2,
        dklen: 32,
    };

    pub const STANDARD: Self = Self {
        n: 32768,
        r: 8,
        p: 16,
        dklen: DEFAULT_DKLEN,
    };

    pub fn new(n: u64, r: u32, p: u32, dklen: usize) -> Result<Self, ScryptDeriveError> {
        let params = Self { n, r, p, dklen };
        if !params.is_valid() {
            return Err(ScryptDeriveError::InvalidParams);
        }
        Ok(params)
    }

    /// `n` must be a power of two, `r` and `p` positive.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.n.is_power_of_two() && self.r > 0 && self.p > 0
    }
}

impl Default for ScryptParams {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl core::fmt::Display for ScryptParams {
    #[inline]
    fn fmt(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::write!(
            formatter,
            "ScryptParams{{n:{},r:{},p:{}}}",
            self.n,
            self.r,
            self.p
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScryptDeriveError {
    #[error("scrypt: invalid scrypt params")]
    InvalidParams,

    #[error("scrypt: invalid derived length")]
    InvalidDerivedLength,
}

pub trait DeriveScryptKey {
    fn derive_scrypt_key<const N: usize>(
        &self,
        salt: &[u8],
        scrypt: ScryptParams,
    ) -> Result<Zeroizing<[u8; N]>, ScryptDeriveError>;
}

impl<T: ?Sized + AsRef<[u8]>> DeriveScryptKey for T {
    /// N must be in [10, 64] and equal `scrypt.dklen`, and `scrypt` must pass
    /// `ScryptParams::is_valid`.
    fn derive_scrypt_key<const N: usize>(
        &self,
        salt: &[u8],
        scrypt: ScryptParams,
    ) -> Result<Zeroizing<[u8; N]>, ScryptDeriveError> {
        if !scrypt.is_valid() {
            return Err(ScryptDeriveError::InvalidParams);
        }
        if scrypt.dklen != N {
            return Err(ScryptDeriveError::InvalidDerivedLength);
        }

        let params = scrypt::Params::new(scrypt.n.ilog2() as u8, scrypt.r, scrypt.p, N)
            .map_err(|_err| ScryptDeriveError::InvalidParams)?;

        let mut derived = Zeroizing::new([0u8; N]);
        scrypt::scrypt(self.as_ref(), salt, &params, derived.as_mut_slice())
            .map_err(|_err| ScryptDeriveError::InvalidDerivedLength)?;

        Ok(derived)
    }
}
