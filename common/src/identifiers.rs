//! Identifier types for ledger entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque account address as assigned by the host ledger network.
///
/// The core never interprets the address beyond equality against the stored
/// owner; format validation is a courtesy for callers building addresses
/// from external input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Create a new address.
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate the address format: a `0x`-prefixed hex string of at most
    /// 64 digits.
    pub fn is_valid(&self) -> bool {
        match self.0.strip_prefix("0x") {
            Some(digits) => {
                !digits.is_empty()
                    && digits.len() <= 64
                    && digits.chars().all(|c| c.is_ascii_hexdigit())
            }
            None => false,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
