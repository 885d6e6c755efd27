// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Encoding and hashing primitives shared by the Neo wallet crates.
//!
//! Nothing in here touches secret material directly; callers are expected to
//! hold private keys in zeroizing buffers before handing bytes to these helpers.

pub mod encoding;
pub mod hash;
pub mod uint;

pub use uint::{AddressError, AddressVersion, UInt160};
