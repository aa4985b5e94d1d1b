//! Additional income and deduction line items.
//!
//! Both structs default every field to zero so callers only supply the
//! line items that apply to the period. All amounts are whole pesos and
//! must not be negative; the calculator rejects negative values before
//! computing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Optional income line items for a liquidation.
///
/// Bonuses, commissions, legal gratification, and the overtime amount are
/// taxable; the food and transport allowances are non-taxable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalIncome {
    /// Discretionary bonuses for the period. Taxable.
    #[serde(default)]
    pub bonuses: Decimal,
    /// Sales or production commissions. Taxable.
    #[serde(default)]
    pub commissions: Decimal,
    /// Legal gratification (gratificación legal). Taxable.
    #[serde(default)]
    pub legal_gratification: Decimal,
    /// Overtime pay amount, already valued by the caller. Taxable.
    #[serde(default)]
    pub overtime_amount: Decimal,
    /// Food allowance (colación). Non-taxable.
    #[serde(default)]
    pub food_allowance: Decimal,
    /// Transport allowance (movilización). Non-taxable.
    #[serde(default)]
    pub transport_allowance: Decimal,
}

/// Optional deduction line items for a liquidation.
///
/// These are summed into a single "other deductions" total; no cap is
/// applied to the sum itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalDeductions {
    /// Repayment installment for a company loan.
    #[serde(default)]
    pub loan_deduction: Decimal,
    /// Salary advance already paid out during the period.
    #[serde(default)]
    pub salary_advance: Decimal,
    /// Voluntary pension savings (APV).
    #[serde(default)]
    pub voluntary_pension_savings: Decimal,
    /// Any other agreed deduction.
    #[serde(default)]
    pub other: Decimal,
}

impl AdditionalDeductions {
    /// Sums the four deduction fields.
    pub fn total(&self) -> Decimal {
        self.loan_deduction + self.salary_advance + self.voluntary_pension_savings + self.other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_additional_income_defaults_to_zero() {
        let income = AdditionalIncome::default();
        assert_eq!(income.bonuses, Decimal::ZERO);
        assert_eq!(income.commissions, Decimal::ZERO);
        assert_eq!(income.legal_gratification, Decimal::ZERO);
        assert_eq!(income.overtime_amount, Decimal::ZERO);
        assert_eq!(income.food_allowance, Decimal::ZERO);
        assert_eq!(income.transport_allowance, Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_partial_income() {
        let json = r#"{"bonuses": "50000", "food_allowance": "40000"}"#;

        let income: AdditionalIncome = serde_json::from_str(json).unwrap();
        assert_eq!(income.bonuses, dec("50000"));
        assert_eq!(income.food_allowance, dec("40000"));
        assert_eq!(income.commissions, Decimal::ZERO);
        assert_eq!(income.overtime_amount, Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_empty_income_object() {
        let income: AdditionalIncome = serde_json::from_str("{}").unwrap();
        assert_eq!(income, AdditionalIncome::default());
    }

    #[test]
    fn test_deductions_total_sums_all_fields() {
        let deductions = AdditionalDeductions {
            loan_deduction: dec("30000"),
            salary_advance: dec("100000"),
            voluntary_pension_savings: dec("25000"),
            other: dec("5000"),
        };
        assert_eq!(deductions.total(), dec("160000"));
    }

    #[test]
    fn test_deductions_total_is_zero_by_default() {
        assert_eq!(AdditionalDeductions::default().total(), Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_partial_deductions() {
        let json = r#"{"salary_advance": "150000"}"#;

        let deductions: AdditionalDeductions = serde_json::from_str(json).unwrap();
        assert_eq!(deductions.salary_advance, dec("150000"));
        assert_eq!(deductions.loan_deduction, Decimal::ZERO);
        assert_eq!(deductions.total(), dec("150000"));
    }
}
