//! Account and validator operator addresses.
//!
//! A Meridian address is a prefix followed by the hex encoding of a 20-byte
//! identifier. Construction is lenient; [`decode`](AccountAddress::decode) is
//! the codec that validates an address, so a misconfigured address surfaces
//! as an error at the point of use instead of a panic at construction.

use crate::error::AddressError;
use serde::{Deserialize, Serialize};
use std::fmt;

fn decode_with_prefix(raw: &str, prefix: &'static str) -> Result<[u8; 20], AddressError> {
    let payload = raw
        .strip_prefix(prefix)
        .ok_or_else(|| AddressError::BadPrefix(raw.to_string(), prefix))?;
    let bytes = hex::decode(payload)?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| AddressError::BadLength(len))
}

/// A Meridian account address, prefixed with `mrdn_`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountAddress(String);

impl AccountAddress {
    /// The standard prefix for all Meridian account addresses.
    pub const PREFIX: &'static str = "mrdn_";

    /// Wrap a raw string; validity is checked by [`decode`](Self::decode).
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Encode a 20-byte account identifier.
    pub fn from_bytes(bytes: &[u8; 20]) -> Self {
        Self(format!("{}{}", Self::PREFIX, hex::encode(bytes)))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode to the underlying 20-byte identifier.
    pub fn decode(&self) -> Result<[u8; 20], AddressError> {
        decode_with_prefix(&self.0, Self::PREFIX)
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A validator operator address, prefixed with `mrdnval_`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ValidatorAddress(String);

impl ValidatorAddress {
    /// The standard prefix for all validator operator addresses.
    pub const PREFIX: &'static str = "mrdnval_";

    /// Wrap a raw string; validity is checked by [`decode`](Self::decode).
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Encode a 20-byte operator identifier.
    pub fn from_bytes(bytes: &[u8; 20]) -> Self {
        Self(format!("{}{}", Self::PREFIX, hex::encode(bytes)))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode to the underlying 20-byte identifier.
    pub fn decode(&self) -> Result<[u8; 20], AddressError> {
        decode_with_prefix(&self.0, Self::PREFIX)
    }
}

impl fmt::Display for ValidatorAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ValidatorAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
