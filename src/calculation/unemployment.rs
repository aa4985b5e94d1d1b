//! Unemployment insurance (seguro de cesantía).
//!
//! The employee-side rate depends on the contract type: indefinite
//! contracts withhold 0.6%, fixed-term contracts 3.0%, and project-based
//! contracts nothing, all on the capped taxable income.

use rust_decimal::Decimal;

use crate::config::PayrollRules;
use crate::models::ContractType;

use super::rounding::round_peso;

/// Computes the unemployment insurance withheld for a contract type.
///
/// # Examples
///
/// ```no_run
/// use liquidation_engine::calculation::calculate_unemployment_insurance;
/// use liquidation_engine::config::RulesLoader;
/// use liquidation_engine::models::ContractType;
/// use rust_decimal::Decimal;
///
/// let loader = RulesLoader::load("./config/cl").unwrap();
/// let amount = calculate_unemployment_insurance(
///     Decimal::from(1_000_000),
///     ContractType::Indefinite,
///     loader.rules(),
/// );
/// assert_eq!(amount, Decimal::from(6_000));
/// ```
pub fn calculate_unemployment_insurance(
    capped_taxable: Decimal,
    contract_type: ContractType,
    rules: &PayrollRules,
) -> Decimal {
    let percentage = rules.unemployment_percentage(contract_type);
    round_peso(capped_taxable * percentage / Decimal::ONE_HUNDRED)
}
