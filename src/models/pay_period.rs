//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type describing the calendar
//! month a liquidation covers and the days actually worked in it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The number of days in the statutory month convention.
///
/// Chilean payroll scales partial months against a 30-day month
/// regardless of the calendar length of the period.
pub const FULL_MONTH_DAYS: u32 = 30;

/// Represents the pay period a liquidation covers.
///
/// `days_worked` drives the proportional scaling of the base salary;
/// `worked_hours` and `overtime_hours` are informational — the overtime
/// pay amount is supplied separately as additional income.
///
/// # Example
///
/// ```
/// use liquidation_engine::models::PayPeriod;
/// use rust_decimal::Decimal;
///
/// let period = PayPeriod {
///     year: 2024,
///     month: 6,
///     days_worked: 30,
///     worked_hours: Decimal::from(180),
///     overtime_hours: Decimal::ZERO,
/// };
/// assert!(period.is_full_month());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Calendar year of the liquidation.
    pub year: i32,
    /// Calendar month of the liquidation (1-12).
    pub month: u32,
    /// Days worked within the period (0-31).
    pub days_worked: u32,
    /// Ordinary hours worked. Informational only.
    #[serde(default)]
    pub worked_hours: Decimal,
    /// Overtime hours worked. Informational only.
    #[serde(default)]
    pub overtime_hours: Decimal,
}

impl PayPeriod {
    /// Returns true when the employee worked the full statutory month.
    ///
    /// At 30 or more days worked the base salary applies unscaled.
    pub fn is_full_month(&self) -> bool {
        self.days_worked >= FULL_MONTH_DAYS
    }

    /// Returns the period as a "YYYY-MM" label for display purposes.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}
