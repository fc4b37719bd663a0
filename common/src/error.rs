//! Error types for the CuBit ledger core.

use crate::fixed::Fixed;
use crate::identifiers::Address;
use thiserror::Error;

/// Main error type for ledger operations.
///
/// Every failure is detected before any state is written, so a call that
/// returns one of these has had no effect on the ledger record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Caller does not hold the owner capability.
    #[error("Unauthorized caller: {0}")]
    Unauthorized(Address),

    /// One-time initialization was already performed on this record.
    #[error("Ledger already initialized")]
    AlreadyInitialized,

    /// Liquid and reserve assets do not sum to the stated total.
    #[error("Invalid asset split: {la} + {re} != {total}")]
    InvalidAssetSplit {
        la: Fixed,
        re: Fixed,
        total: Fixed,
    },

    /// Spread fraction outside [0, 1].
    #[error("Invalid spread: {0} exceeds 1.0")]
    InvalidSpread(Fixed),

    /// Derived circulation would exceed the fixed total supply.
    #[error("Supply exceeded: circulation {circulation} exceeds supply {supply}")]
    SupplyExceeded {
        circulation: Fixed,
        supply: Fixed,
    },

    /// Fixed-point computation left the representable range.
    #[error("Arithmetic overflow in fixed-point computation")]
    ArithmeticOverflow,
}

impl LedgerError {
    /// Get a stable error code for host-facing reporting.
    pub fn error_code(&self) -> &'static str {
        match self {
            LedgerError::Unauthorized(_) => "UNAUTHORIZED",
            LedgerError::AlreadyInitialized => "ALREADY_INITIALIZED",
            LedgerError::InvalidAssetSplit { .. } => "INVALID_ASSET_SPLIT",
            LedgerError::InvalidSpread(_) => "INVALID_SPREAD",
            LedgerError::SupplyExceeded { .. } => "SUPPLY_EXCEEDED",
            LedgerError::ArithmeticOverflow => "ARITHMETIC_OVERFLOW",
        }
    }
}

/// Result type alias for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let cases = [
            (
                LedgerError::Unauthorized(Address::new("0xdeadbeef")),
                "UNAUTHORIZED",
            ),
            (LedgerError::AlreadyInitialized, "ALREADY_INITIALIZED"),
            (
                LedgerError::InvalidAssetSplit {
                    la: Fixed::from_int(600),
                    re: Fixed::from_int(500),
                    total: Fixed::from_int(1000),
                },
                "INVALID_ASSET_SPLIT",
            ),
            (
                LedgerError::InvalidSpread(Fixed::from_int(2)),
                "INVALID_SPREAD",
            ),
            (
                LedgerError::SupplyExceeded {
                    circulation: Fixed::from_int(2),
                    supply: Fixed::from_int(1),
                },
                "SUPPLY_EXCEEDED",
            ),
            (LedgerError::ArithmeticOverflow, "ARITHMETIC_OVERFLOW"),
        ];

        for (error, code) in cases {
            assert_eq!(error.error_code(), code);
        }
    }

    #[test]
    fn test_display_carries_offending_values() {
        let err = LedgerError::InvalidAssetSplit {
            la: Fixed::from_int(600),
            re: Fixed::from_int(500),
            total: Fixed::from_int(1000),
        };
        assert_eq!(err.to_string(), "Invalid asset split: 600 + 500 != 1000");
    }
}
