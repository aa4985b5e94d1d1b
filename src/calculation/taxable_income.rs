//! Taxable income assembly.
//!
//! Taxable income is the proportional base salary plus every taxable
//! additional income line: overtime, bonuses, commissions, and the legal
//! gratification.

use rust_decimal::Decimal;

use crate::models::{AdditionalIncome, EmployeeSnapshot, PayPeriod};

use super::proportional_salary::calculate_proportional_salary;

/// The taxable income lines of a liquidation, before the cap.
#[derive(Debug, Clone)]
pub struct TaxableIncomeResult {
    /// Base salary scaled to the days worked.
    pub proportional_base_salary: Decimal,
    /// Overtime pay amount.
    pub overtime: Decimal,
    /// Bonuses.
    pub bonuses: Decimal,
    /// Commissions.
    pub commissions: Decimal,
    /// Legal gratification.
    pub legal_gratification: Decimal,
    /// Sum of every line above, uncapped.
    pub total: Decimal,
}

/// Assembles the taxable income breakdown for a liquidation.
///
/// The result's `total` is the raw sum; applying the tope imponible is a
/// separate step so that the cap can be flagged and warned about.
pub fn calculate_taxable_income(
    employee: &EmployeeSnapshot,
    period: &PayPeriod,
    income: &AdditionalIncome,
) -> TaxableIncomeResult {
    let proportional_base_salary =
        calculate_proportional_salary(employee.base_salary, period.days_worked);

    let total = proportional_base_salary
        + income.overtime_amount
        + income.bonuses
        + income.commissions
        + income.legal_gratification;

    TaxableIncomeResult {
        proportional_base_salary,
        overtime: income.overtime_amount,
        bonuses: income.bonuses,
        commissions: income.commissions,
        legal_gratification: income.legal_gratification,
        total,
    }
}
