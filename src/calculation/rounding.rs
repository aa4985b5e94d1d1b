//! Whole-peso rounding.
//!
//! Chilean payroll amounts are integral pesos. Every derived line item is
//! rounded at its own boundary, not only at the end, so downstream sums
//! reproduce reference liquidations bit-for-bit.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to a whole peso, midpoints away from zero.
///
/// # Examples
///
/// ```
/// use liquidation_engine::calculation::round_peso;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_peso(Decimal::from_str("18481.932").unwrap()), Decimal::from(18482));
/// assert_eq!(round_peso(Decimal::from_str("6000.5").unwrap()), Decimal::from(6001));
/// ```
pub fn round_peso(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
