//! Fixed-point monetary arithmetic.
//!
//! Every monetary and ratio quantity in the ledger is an unsigned integer
//! count of 10^-18 units: `SCALE` represents the logical value 1.0. Native
//! floating point is never used. Multiply-then-divide widens to 256 bits
//! before the division so the intermediate product cannot overflow.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LedgerError, Result};

mod wide {
    use uint::construct_uint;

    construct_uint! {
        /// 256-bit integer for overflow-safe intermediate products.
        #[doc(hidden)]
        pub struct U256(4);
    }
}

use wide::U256;

/// Fixed-point denominator: one logical unit.
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// A non-negative fixed-point quantity scaled by 10^18.
///
/// Used for USD amounts, CuBit amounts, exchange rates, and fractions alike;
/// the unsigned representation makes the ledger's non-negativity invariants
/// structural.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fixed(u128);

impl Fixed {
    /// The value 0.
    pub const ZERO: Fixed = Fixed(0);

    /// The value 1.0 (`SCALE` raw units).
    pub const ONE: Fixed = Fixed(SCALE);

    /// Construct from a raw count of 10^-18 units.
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Construct from a whole number of units.
    pub const fn from_int(units: u64) -> Self {
        Self(units as u128 * SCALE)
    }

    /// The raw count of 10^-18 units.
    pub const fn raw(self) -> u128 {
        self.0
    }

    /// Whether the value is exactly zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    pub fn checked_add(self, rhs: Fixed) -> Result<Fixed> {
        self.0
            .checked_add(rhs.0)
            .map(Fixed)
            .ok_or(LedgerError::ArithmeticOverflow)
    }

    /// Checked subtraction. Underflow below zero is out of domain.
    pub fn checked_sub(self, rhs: Fixed) -> Result<Fixed> {
        self.0
            .checked_sub(rhs.0)
            .map(Fixed)
            .ok_or(LedgerError::ArithmeticOverflow)
    }

    /// Compute `self * num / den` with a 256-bit intermediate product,
    /// truncating toward zero on the final division.
    ///
    /// Fails with `ArithmeticOverflow` when the truncated quotient does not
    /// fit back into 128 bits. A zero `den` is reported the same way: the
    /// quotient is unrepresentable, and the error taxonomy has no separate
    /// division kind. Ledger callers guard the divisor themselves
    /// (`value_cubit` is never zero and `change_assets` branches on a zero
    /// total before dividing), so this path marks a caller bug.
    pub fn mul_div(self, num: Fixed, den: Fixed) -> Result<Fixed> {
        if den.is_zero() {
            return Err(LedgerError::ArithmeticOverflow);
        }
        let wide = U256::from(self.0) * U256::from(num.0);
        let quotient = wide / U256::from(den.0);
        if quotient.bits() > 128 {
            return Err(LedgerError::ArithmeticOverflow);
        }
        Ok(Fixed(quotient.low_u128()))
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int = self.0 / SCALE;
        let frac = self.0 % SCALE;
        if frac == 0 {
            write!(f, "{int}")
        } else {
            let digits = format!("{frac:018}");
            write!(f, "{}.{}", int, digits.trim_end_matches('0'))
        }
    }
}

impl From<Fixed> for u128 {
    fn from(value: Fixed) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_constants() {
        assert_eq!(Fixed::ONE.raw(), SCALE);
        assert_eq!(Fixed::from_int(15_000_000).raw(), 15_000_000 * SCALE);
        assert!(Fixed::ZERO.is_zero());
    }

    #[test]
    fn test_checked_add_sub() {
        let a = Fixed::from_int(3);
        let b = Fixed::from_int(2);

        assert_eq!(a.checked_add(b).unwrap(), Fixed::from_int(5));
        assert_eq!(a.checked_sub(b).unwrap(), Fixed::from_int(1));

        assert_eq!(
            b.checked_sub(a),
            Err(LedgerError::ArithmeticOverflow),
            "underflow is out of domain"
        );
        assert_eq!(
            Fixed::from_raw(u128::MAX).checked_add(Fixed::ONE),
            Err(LedgerError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_mul_div_truncates_toward_zero() {
        // 1 / 3 at scale: the last digit is truncated, not rounded.
        let third = Fixed::ONE.mul_div(Fixed::ONE, Fixed::from_int(3)).unwrap();
        assert_eq!(third.raw(), 333_333_333_333_333_333);
    }

    #[test]
    fn test_mul_div_wide_intermediate() {
        // Both factors near the supply cap: the product only fits in 256 bits.
        let big = Fixed::from_int(500_000_000);
        let result = big.mul_div(big, big).unwrap();
        assert_eq!(result, big);
    }

    #[test]
    fn test_mul_div_overflow_and_zero_divisor() {
        let max = Fixed::from_raw(u128::MAX);
        assert_eq!(
            max.mul_div(Fixed::from_int(2), Fixed::ONE),
            Err(LedgerError::ArithmeticOverflow)
        );
        assert_eq!(
            Fixed::ONE.mul_div(Fixed::ONE, Fixed::ZERO),
            Err(LedgerError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Fixed::from_int(1000).to_string(), "1000");
        assert_eq!(Fixed::from_raw(SCALE / 2).to_string(), "0.5");
        assert_eq!(
            Fixed::from_raw(11_917 * 10u128.pow(16)).to_string(),
            "119.17"
        );
    }

    #[test]
    fn test_serde_transparent() {
        let value = Fixed::from_int(42);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, format!("{}", 42u128 * SCALE));

        let back: Fixed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    proptest! {
        #[test]
        fn prop_mul_div_by_one_is_identity(raw in 0u128..=u128::MAX / 2) {
            let v = Fixed::from_raw(raw);
            prop_assert_eq!(v.mul_div(Fixed::ONE, Fixed::ONE).unwrap(), v);
        }

        #[test]
        fn prop_fraction_never_exceeds_base(
            raw in 0u128..10u128.pow(30),
            frac in 0u128..=SCALE,
        ) {
            let v = Fixed::from_raw(raw);
            let scaled = v.mul_div(Fixed::from_raw(frac), Fixed::ONE).unwrap();
            prop_assert!(scaled <= v);
        }

        #[test]
        fn prop_add_then_sub_round_trips(
            a in 0u128..u128::MAX / 2,
            b in 0u128..u128::MAX / 2,
        ) {
            let sum = Fixed::from_raw(a).checked_add(Fixed::from_raw(b)).unwrap();
            prop_assert_eq!(sum.checked_sub(Fixed::from_raw(b)).unwrap(), Fixed::from_raw(a));
        }
    }
}
