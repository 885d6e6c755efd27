// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

use crate::hash::Sha256Twice;

const CHECKSUM_SIZE: usize = 4;

pub trait ToBase58Check {
    fn to_base58_check(&self) -> String;
}

impl<T: ?Sized + AsRef<[u8]>> ToBase58Check for T {
    fn to_base58_check(&self) -> String {
        let src = self.as_ref();
        let mut buf = Vec::with_capacity(src.len() + CHECKSUM_SIZE);
        buf.extend_from_slice(src);

        let check = buf.sha256_twice();
        buf.extend_from_slice(&check[..CHECKSUM_SIZE]);

        bs58::encode(buf).into_string()
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, thiserror::Error)]
pub enum FromBase58CheckError {
    #[error("base58check: invalid character '{0}'")]
    InvalidChar(char),

    #[error("base58check: invalid length")]
    InvalidLength,

    #[error("base58check: invalid checksum")]
    InvalidChecksum,
}

pub trait FromBase58Check: Sized {
    type Error;

    fn from_base58_check<T: AsRef<str>>(src: T) -> Result<Self, Self::Error>;
}

impl FromBase58Check for Vec<u8> {
    type Error = FromBase58CheckError;

    fn from_base58_check<T: AsRef<str>>(src: T) -> Result<Vec<u8>, Self::Error> {
        use bs58::decode::Error;

        let mut v = bs58::decode(src.as_ref())
            .into_vec()
            .map_err(|err| match err {
                Error::InvalidCharacter { character, .. } => Self::Error::InvalidChar(character),
                _ => Self::Error::InvalidLength,
            })?;

        // at least one payload byte
        if v.len() <= CHECKSUM_SIZE {
            return Err(Self::Error::InvalidLength);
        }

        let at = v.len() - CHECKSUM_SIZE;
        let sha = v[..at].sha256_twice();
        if sha[..CHECKSUM_SIZE] != v[at..] {
            return Err(Self::Error::InvalidChecksum);
        }

        v.truncate(at);
        Ok(v)
    }
}
