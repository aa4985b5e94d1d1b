//! Second-category income tax.
//!
//! Income up to a UTM-indexed threshold is exempt; the excess is taxed by
//! a progressive bracket schedule supplied entirely by the rules
//! configuration, so replacing the simplified schedule with the full
//! statutory table is a configuration change.

use rust_decimal::Decimal;

use crate::config::PayrollRules;
use crate::error::{EngineError, EngineResult};

use super::rounding::round_peso;

/// The result of an income tax calculation.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// Tax withheld for the period.
    pub amount: Decimal,
    /// The tax-exempt threshold in pesos (`exempt_utm_multiplier` × UTM).
    pub exempt_threshold: Decimal,
    /// Taxable income above the threshold; zero when exempt.
    pub taxable_excess: Decimal,
}

/// Computes the income tax on the capped taxable income.
///
/// Income at or below the exempt threshold owes nothing. Above it, the
/// excess is matched to the first bracket whose upper limit covers it;
/// the tax is the bracket's fixed amount plus its marginal rate applied
/// to the excess over the previous bracket's limit, rounded to a whole
/// peso.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] when no bracket covers the
/// excess, which can only happen with a malformed schedule whose top
/// bracket is not open-ended.
pub fn calculate_income_tax(
    capped_taxable: Decimal,
    rules: &PayrollRules,
) -> EngineResult<IncomeTaxResult> {
    let schedule = rules.tax();
    let exempt_threshold = round_peso(schedule.exempt_utm_multiplier * rules.limits().utm_value);

    if capped_taxable <= exempt_threshold {
        return Ok(IncomeTaxResult {
            amount: Decimal::ZERO,
            exempt_threshold,
            taxable_excess: Decimal::ZERO,
        });
    }

    let excess = capped_taxable - exempt_threshold;
    let mut bracket_floor = Decimal::ZERO;

    for bracket in &schedule.brackets {
        if bracket.upper_limit.is_none_or(|limit| excess <= limit) {
            let marginal =
                round_peso((excess - bracket_floor) * bracket.rate_percentage / Decimal::ONE_HUNDRED);
            return Ok(IncomeTaxResult {
                amount: bracket.fixed_amount + marginal,
                exempt_threshold,
                taxable_excess: excess,
            });
        }
        // Brackets are sorted ascending, so a non-covering bracket always
        // carries an upper limit.
        if let Some(limit) = bracket.upper_limit {
            bracket_floor = limit;
        }
    }

    Err(EngineError::CalculationError {
        message: format!(
            "tax schedule does not cover taxable excess of {}",
            excess
        ),
    })
}
