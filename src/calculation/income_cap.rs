//! Taxable income cap (tope imponible).
//!
//! Statutory deductions are computed on taxable income up to a cap
//! expressed in UF. Income above the cap still belongs to the employee;
//! only the deduction base is clamped.

use rust_decimal::Decimal;

use crate::config::PayrollRules;

use super::rounding::round_peso;

/// The result of applying the tope imponible.
#[derive(Debug, Clone)]
pub struct TaxableCapResult {
    /// Taxable income clamped to the cap. Feeds every downstream deduction.
    pub capped: Decimal,
    /// The cap in pesos (`taxable_cap_uf` × `uf_value`, rounded).
    pub cap: Decimal,
    /// True when the raw taxable income exceeded the cap.
    pub exceeded: bool,
}

/// Clamps taxable income to the tope imponible.
///
/// The cap is `taxable_cap_uf × uf_value` rounded to a whole peso. When
/// the raw total exceeds it, the capped value — not the original — must
/// feed every subsequent deduction step.
///
/// # Examples
///
/// ```no_run
/// use liquidation_engine::calculation::apply_taxable_cap;
/// use liquidation_engine::config::RulesLoader;
/// use rust_decimal::Decimal;
///
/// let loader = RulesLoader::load("./config/cl").unwrap();
/// let result = apply_taxable_cap(Decimal::from(4_000_000), loader.rules());
/// assert!(result.exceeded);
/// assert_eq!(result.capped, result.cap);
/// ```
pub fn apply_taxable_cap(total_taxable: Decimal, rules: &PayrollRules) -> TaxableCapResult {
    let limits = rules.limits();
    let cap = round_peso(limits.taxable_cap_uf * limits.uf_value);

    if total_taxable > cap {
        TaxableCapResult {
            capped: cap,
            cap,
            exceeded: true,
        }
    } else {
        TaxableCapResult {
            capped: total_taxable,
            cap,
            exceeded: false,
        }
    }
}
