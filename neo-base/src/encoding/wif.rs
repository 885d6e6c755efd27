// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

use zeroize::Zeroizing;

use crate::encoding::base58::{FromBase58Check, ToBase58Check};

/// Version byte Neo uses for WIF-encoded private keys.
pub const WIF_VERSION: u8 = 0x80;

const COMPRESSED_FLAG: u8 = 0x01;

#[derive(Clone)]
pub struct Wif {
    version: u8,

    compressed: bool,

    // include version byte, data-bytes and compressed flag byte
    whole: Zeroizing<Vec<u8>>,
}

impl Wif {
    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn data(&self) -> &[u8] {
        if self.compressed {
            &self.whole[1..self.whole.len() - 1]
        } else {
            &self.whole[1..]
        }
    }

    pub fn compressed(&self) -> bool {
        self.compressed
    }
}

impl core::fmt::Debug for Wif {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Wif")
            .field("version", &self.version)
            .field("compressed", &self.compressed)
            .finish_non_exhaustive()
    }
}

pub trait WifEncode {
    fn wif_encode(&self, version: u8, compressed: bool) -> Zeroizing<String>;
}

pub trait WifDecode {
    type Error;

    fn wif_decode(&self, expected_data_size: usize) -> Result<Wif, Self::Error>;
}

impl<T: ?Sized + AsRef<[u8]>> WifEncode for T {
    fn wif_encode(&self, version: u8, compressed: bool) -> Zeroizing<String> {
        let data = self.as_ref();
        let mut buf = Zeroizing::new(Vec::with_capacity(1 + data.len() + 1));

        buf.push(version);
        buf.extend_from_slice(data);
        if compressed {
            buf.push(COMPRESSED_FLAG);
        }

        Zeroizing::new(buf.as_slice().to_base58_check())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, thiserror::Error)]
pub enum WifDecodeError {
    #[error("wif-decode: invalid base58 encoded")]
    InvalidBase58Encoded,

    #[error("wif-decode: invalid checksum")]
    InvalidChecksum,

    #[error("wif-decode: invalid length '{0}'")]
    InvalidWifLength(usize),

    #[error("wif-decode: invalid compressed flag '{0}'")]
    InvalidCompressedFlag(u8),
}

impl<T: ?Sized + AsRef<str>> WifDecode for T {
    type Error = WifDecodeError;

    /// `expected_data_size` counts the version byte and the key bytes.
    fn wif_decode(&self, expected_data_size: usize) -> Result<Wif, Self::Error> {
        use crate::encoding::FromBase58CheckError as B58Error;

        let b58 = Zeroizing::new(Vec::from_base58_check(self.as_ref()).map_err(|err| match err {
            B58Error::InvalidChecksum => Self::Error::InvalidChecksum,
            _ => Self::Error::InvalidBase58Encoded,
        })?);

        if b58.len() <= 1
            || (b58.len() != expected_data_size && b58.len() != expected_data_size + 1)
        {
            return Err(Self::Error::InvalidWifLength(b58.len()));
        }

        let compressed = b58.len() == expected_data_size + 1;

        let last = b58.last().copied().unwrap_or(0);
        if compressed && last != COMPRESSED_FLAG {
            return Err(Self::Error::InvalidCompressedFlag(last));
        }

        Ok(Wif {
            version: b58[0],
            compressed,
            whole: b58,
        })
    }
}
