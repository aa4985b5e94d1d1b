//! Advisory deduction-ratio check.
//!
//! Chilean labor law caps agreed deductions at a share of gross income.
//! The engine reports a violation but never clamps net pay; enforcing the
//! cap is the employer's call, not the calculator's.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::PayrollRules;

/// The outcome of the deduction-ratio check.
#[derive(Debug, Clone)]
pub struct DeductionRatioCheck {
    /// Deductions as a percentage of gross income, to one decimal place.
    pub ratio_percentage: Decimal,
    /// True when the ratio exceeds the configured cap.
    pub exceeded: bool,
}

/// Checks total deductions against the configured share of gross income.
///
/// A zero gross income never flags; there is nothing to take a share of.
pub fn check_deduction_ratio(
    gross_income: Decimal,
    total_deductions: Decimal,
    rules: &PayrollRules,
) -> DeductionRatioCheck {
    if gross_income <= Decimal::ZERO {
        return DeductionRatioCheck {
            ratio_percentage: Decimal::ZERO,
            exceeded: false,
        };
    }

    let raw_percentage = total_deductions / gross_income * Decimal::ONE_HUNDRED;

    DeductionRatioCheck {
        // The comparison uses the exact ratio; the reported percentage is
        // rounded for display only.
        exceeded: raw_percentage > rules.rates().deduction_cap_percentage,
        ratio_percentage: raw_percentage
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
    }
}
