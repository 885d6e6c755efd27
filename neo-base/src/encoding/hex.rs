// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

/// Lowercase hex, as used for public keys in logs and `Debug` output.
pub trait ToHex {
    fn to_hex_lower(&self) -> String;
}

impl<T: ?Sized + AsRef<[u8]>> ToHex for T {
    #[inline]
    fn to_hex_lower(&self) -> String {
        hex::encode(self.as_ref())
    }
}

/// Uppercase hex of the reversed bytes, the display form of little-endian hashes.
pub trait ToRevHex {
    fn to_rev_hex_upper(&self) -> String;
}

impl<T: ?Sized + AsRef<[u8]>> ToRevHex for T {
    #[inline]
    fn to_rev_hex_upper(&self) -> String {
        let mut rev = self.as_ref().to_vec();
        rev.reverse();
        hex::encode_upper(rev)
    }
}
