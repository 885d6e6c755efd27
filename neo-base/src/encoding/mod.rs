// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

mod base58;
mod hex;
mod wif;

pub use self::base58::*;
pub use self::hex::*;
pub use self::wif::*;
