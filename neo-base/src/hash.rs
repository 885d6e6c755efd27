// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use sha2::Digest;

pub const HASH160_SIZE: usize = 20;
pub const HASH256_SIZE: usize = 32;

pub trait Sha256 {
    fn sha256(&self) -> [u8; HASH256_SIZE];
}

impl<T: ?Sized + AsRef<[u8]>> Sha256 for T {
    #[inline]
    fn sha256(&self) -> [u8; HASH256_SIZE] {
        let mut h = sha2::Sha256::new();
        h.update(self.as_ref());
        h.finalize().into()
    }
}

pub trait Sha256Twice {
    fn sha256_twice(&self) -> [u8; HASH256_SIZE];
}

impl<T: ?Sized + AsRef<[u8]>> Sha256Twice for T {
    #[inline]
    fn sha256_twice(&self) -> [u8; HASH256_SIZE] {
        self.sha256().sha256()
    }
}

pub trait Ripemd160 {
    fn ripemd160(&self) -> [u8; HASH160_SIZE];
}

impl<T: ?Sized + AsRef<[u8]>> Ripemd160 for T {
    #[inline]
    fn ripemd160(&self) -> [u8; HASH160_SIZE] {
        let mut h = ripemd::Ripemd160::new();
        h.update(self.as_ref());
        h.finalize().into()
    }
}

/// RIPEMD160(SHA256(data)), the script hash function.
#[inline]
pub fn hash160(data: impl AsRef<[u8]>) -> [u8; HASH160_SIZE] {
    data.sha256().ripemd160()
}

/// SHA256(SHA256(data)).
#[inline]
pub fn hash256(data: impl AsRef<[u8]>) -> [u8; HASH256_SIZE] {
    data.sha256_twice()
}
