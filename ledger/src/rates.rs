//! The rate engine: deposit rate and spread to redemption rate.

use cubit_common::{Fixed, LedgerError, Result};

/// Derive the redemption rate by marking the deposit rate down by `spread`.
///
/// `spread` is a fixed-point fraction of the deposit rate. The markdown is
/// `deposit_rate * spread / SCALE` with a 256-bit intermediate product and a
/// final division that truncates toward zero.
///
/// Fails with `InvalidSpread` when `spread` exceeds 1.0 (the result would
/// leave the unsigned accounting domain) and with `ArithmeticOverflow` for
/// pathological out-of-domain inputs.
pub fn redemption_rate(deposit_rate: Fixed, spread: Fixed) -> Result<Fixed> {
    if spread > Fixed::ONE {
        return Err(LedgerError::InvalidSpread(spread));
    }

    let spread_amount = deposit_rate.mul_div(spread, Fixed::ONE)?;
    // spread <= 1.0 bounds the markdown by the rate itself.
    deposit_rate.checked_sub(spread_amount)
}
