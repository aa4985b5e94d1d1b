//! Family allowance calculation.
//!
//! The monthly allowance per dependent is selected by the employee's
//! *unclamped* base salary against ascending tiers; salaries above the
//! eligibility ceiling receive nothing regardless of dependent count.

use rust_decimal::Decimal;

use crate::config::PayrollRules;

/// Computes the family allowance for an employee.
///
/// Zero dependents yield zero. Otherwise the per-dependent amount for the
/// employee's base salary tier is multiplied by the dependent count. A
/// salary above the eligibility ceiling yields zero silently; that is the
/// statutory behavior, not an error condition.
pub fn calculate_family_allowance(
    base_salary: Decimal,
    dependents: u32,
    rules: &PayrollRules,
) -> Decimal {
    if dependents == 0 {
        return Decimal::ZERO;
    }

    rules.per_dependent_amount(base_salary) * Decimal::from(dependents)
}
