//! Liquidation result models for the Payroll Liquidation Engine.
//!
//! This module contains the [`LiquidationResult`] type and its associated
//! structures that capture all outputs from a liquidation calculation,
//! including the taxable and non-taxable income breakdowns, statutory
//! deductions, totals, and warnings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EmployeeSnapshot, PayPeriod};

/// Breakdown of the taxable income side of a liquidation.
///
/// When the taxable cap applies, `total` holds the capped amount that fed
/// the deduction math, so the itemized lines may sum above it; the result's
/// `tope_imponible_exceeded` flag records that condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxableIncome {
    /// Base salary scaled to the days worked in the period.
    pub proportional_base_salary: Decimal,
    /// Overtime pay amount supplied by the caller.
    pub overtime: Decimal,
    /// Bonuses for the period.
    pub bonuses: Decimal,
    /// Commissions for the period.
    pub commissions: Decimal,
    /// Legal gratification for the period.
    pub legal_gratification: Decimal,
    /// Total taxable income, capped at the tope imponible when exceeded.
    pub total: Decimal,
}

/// Breakdown of the non-taxable income side of a liquidation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonTaxableIncome {
    /// Food allowance (colación).
    pub food_allowance: Decimal,
    /// Transport allowance (movilización).
    pub transport_allowance: Decimal,
    /// Computed family allowance for the employee's dependents.
    pub family_allowance: Decimal,
    /// Total non-taxable income.
    pub total: Decimal,
}

/// Itemized deductions withheld from the liquidation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Mandatory pension contribution (10% of capped taxable income).
    pub pension: Decimal,
    /// Pension fund administrator commission.
    pub pension_commission: Decimal,
    /// Disability and survivorship insurance (SIS).
    pub disability_insurance: Decimal,
    /// Health contribution (7% flat).
    pub health: Decimal,
    /// Unemployment insurance; rate depends on the contract type.
    pub unemployment_insurance: Decimal,
    /// Second-category income tax.
    pub income_tax: Decimal,
    /// Sum of the caller-supplied additional deductions.
    pub other_deductions: Decimal,
    /// Total of every deduction line above.
    pub total: Decimal,
}

/// Grand totals of a liquidation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidationTotals {
    /// Taxable plus non-taxable income.
    pub gross_income: Decimal,
    /// Total deductions withheld.
    pub total_deductions: Decimal,
    /// Net salary: gross income minus total deductions.
    pub net_salary: Decimal,
}

/// A warning generated during a liquidation calculation.
///
/// Warnings record business-rule conditions that do not stop the
/// calculation, such as the taxable cap or the deduction ratio limit
/// being exceeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidationWarning {
    /// A stable code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the condition.
    pub message: String,
}

/// Warning code for taxable income above the tope imponible.
pub const WARN_TOPE_IMPONIBLE: &str = "TOPE_IMPONIBLE_EXCEEDED";
/// Warning code for total deductions above the legal ratio of gross income.
pub const WARN_DEDUCTION_CAP: &str = "DEDUCTION_CAP_EXCEEDED";
/// Warning code for a pension fund code missing from the rules table.
pub const WARN_UNKNOWN_FUND: &str = "UNKNOWN_PENSION_FUND";

/// The complete result of a liquidation calculation.
///
/// Constructed fresh on every call; it has no identity or mutation after
/// construction. Callers may persist a serialized copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee snapshot the liquidation was computed for.
    pub employee: EmployeeSnapshot,
    /// The pay period the liquidation covers.
    pub period: PayPeriod,
    /// Taxable income breakdown.
    pub taxable_income: TaxableIncome,
    /// Non-taxable income breakdown.
    pub non_taxable_income: NonTaxableIncome,
    /// Itemized deductions.
    pub deductions: Deductions,
    /// Grand totals.
    pub totals: LiquidationTotals,
    /// True when raw taxable income exceeded the tope imponible and the
    /// capped value fed the deduction math.
    pub tope_imponible_exceeded: bool,
    /// Business-rule warnings raised during the calculation.
    pub warnings: Vec<LiquidationWarning>,
}

impl LiquidationResult {
    /// Returns true if any warning with the given code was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}
