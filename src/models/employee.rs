//! Employee model and related types.
//!
//! This module defines the EmployeeSnapshot struct and ContractType enum
//! for representing workers in the liquidation engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the type of employment contract.
///
/// The contract type determines the unemployment insurance rate withheld
/// from the employee's taxable income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// Open-ended contract (contrato indefinido).
    Indefinite,
    /// Fixed-term contract (contrato a plazo fijo).
    FixedTerm,
    /// Contract for a specific project or task (por obra o faena).
    ProjectBased,
}

/// An immutable snapshot of an employee at calculation time.
///
/// The identity fields (`id`, `rut`, names) are used for labeling only and
/// never enter the arithmetic; the remaining fields drive the statutory
/// withholding rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSnapshot {
    /// Internal identifier for the employee.
    pub id: String,
    /// Chilean national id (RUT), e.g. "12.345.678-5".
    pub rut: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Monthly nominal salary in whole pesos. Must be positive.
    pub base_salary: Decimal,
    /// The type of employment contract.
    pub contract_type: ContractType,
    /// Code of the pension fund administrator (AFP) the employee belongs to.
    pub pension_fund_code: String,
    /// Code of the health institution (FONASA or an ISAPRE). Bookkeeping
    /// only; the health contribution is a flat rate in the current rule set.
    pub health_provider_code: String,
    /// Number of dependents eligible for the family allowance.
    #[serde(default)]
    pub family_allowance_count: u32,
}

impl EmployeeSnapshot {
    /// Returns the employee's full name for display purposes.
    ///
    /// # Examples
    ///
    /// ```
    /// use liquidation_engine::models::{ContractType, EmployeeSnapshot};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = EmployeeSnapshot {
    ///     id: "emp_001".to_string(),
    ///     rut: "12.345.678-5".to_string(),
    ///     first_name: "María".to_string(),
    ///     last_name: "González".to_string(),
    ///     base_salary: Decimal::from(1_000_000),
    ///     contract_type: ContractType::Indefinite,
    ///     pension_fund_code: "modelo".to_string(),
    ///     health_provider_code: "fonasa".to_string(),
    ///     family_allowance_count: 0,
    /// };
    /// assert_eq!(employee.full_name(), "María González");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true if the employee is on a fixed-term contract.
    pub fn is_fixed_term(&self) -> bool {
        self.contract_type == ContractType::FixedTerm
    }
}
