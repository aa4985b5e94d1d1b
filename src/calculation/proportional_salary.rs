//! Proportional base salary calculation.
//!
//! Partial months scale the base salary against the statutory 30-day
//! month convention; a full month (or more) pays the nominal salary
//! unchanged.

use rust_decimal::Decimal;

use crate::models::FULL_MONTH_DAYS;

use super::rounding::round_peso;

/// Scales a base salary to the days worked in the period.
///
/// At `days_worked >= 30` the base salary is returned unchanged; below
/// that, the salary is `round(base_salary / 30 * days_worked)`.
///
/// # Examples
///
/// ```
/// use liquidation_engine::calculation::calculate_proportional_salary;
/// use rust_decimal::Decimal;
///
/// let half_month = calculate_proportional_salary(Decimal::from(900_000), 15);
/// assert_eq!(half_month, Decimal::from(450_000));
///
/// let full_month = calculate_proportional_salary(Decimal::from(900_000), 30);
/// assert_eq!(full_month, Decimal::from(900_000));
/// ```
pub fn calculate_proportional_salary(base_salary: Decimal, days_worked: u32) -> Decimal {
    if days_worked >= FULL_MONTH_DAYS {
        return base_salary;
    }

    round_peso(base_salary / Decimal::from(FULL_MONTH_DAYS) * Decimal::from(days_worked))
}
