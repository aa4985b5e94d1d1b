//! Health contribution.
//!
//! A flat percentage of the capped taxable income. The employee's health
//! provider code does not change the rate in the current rule set; plan
//! surcharges above the legal minimum are not modeled.

use rust_decimal::Decimal;

use crate::config::PayrollRules;

use super::rounding::round_peso;

/// Computes the health contribution on the capped taxable income.
pub fn calculate_health_deduction(capped_taxable: Decimal, rules: &PayrollRules) -> Decimal {
    round_peso(capped_taxable * rules.rates().health_percentage / Decimal::ONE_HUNDRED)
}
