//! Conversions between whole-token amounts and minimal units (wei-like, 18 decimals).

use alloy_primitives::U256;

use crate::{
    constants::DECIMALS,
    errors::{Result, StaurError},
};

/// Scales a whole-token amount up to minimal units.
pub fn to_minimal_units(whole: U256) -> Result<U256> {
    whole.checked_mul(DECIMALS).ok_or(StaurError::AmountOverflow)
}

/// Splits an amount in minimal units into whole tokens and the fractional remainder.
pub fn to_whole_units(amount: U256) -> (U256, U256) {
    (amount / DECIMALS, amount % DECIMALS)
}

/// Renders an amount in minimal units as a decimal token amount, e.g. `1.5` or `42`.
pub fn format_units(amount: U256) -> String {
    let (whole, fraction) = to_whole_units(amount);
    if fraction.is_zero() {
        return whole.to_string();
    }

    let fraction = format!("{:0>18}", fraction.to_string());
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}
