//! Request types for the Payroll Liquidation Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AdditionalDeductions, AdditionalIncome, ContractType, EmployeeSnapshot, PayPeriod,
};

/// Request body for the `/calculate` endpoint.
///
/// Contains the employee snapshot, the pay period, and any additional
/// income and deduction line items; both line-item objects are optional
/// and default to all zeros.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// The pay period for the calculation.
    pub period: PayPeriodRequest,
    /// Additional income line items for the period.
    #[serde(default)]
    pub additional_income: AdditionalIncomeRequest,
    /// Additional deduction line items for the period.
    #[serde(default)]
    pub additional_deductions: AdditionalDeductionsRequest,
}

/// Employee information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Internal identifier for the employee.
    pub id: String,
    /// Chilean national id (RUT).
    pub rut: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Monthly nominal salary in whole pesos.
    pub base_salary: Decimal,
    /// The type of employment contract.
    pub contract_type: ContractType,
    /// Code of the pension fund administrator.
    pub pension_fund_code: String,
    /// Code of the health institution.
    pub health_provider_code: String,
    /// Number of dependents eligible for the family allowance.
    #[serde(default)]
    pub family_allowance_count: u32,
}

/// Pay period information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// Calendar year of the liquidation.
    pub year: i32,
    /// Calendar month of the liquidation (1-12).
    pub month: u32,
    /// Days worked within the period.
    pub days_worked: u32,
    /// Ordinary hours worked. Informational only.
    #[serde(default)]
    pub worked_hours: Decimal,
    /// Overtime hours worked. Informational only.
    #[serde(default)]
    pub overtime_hours: Decimal,
}

/// Additional income line items in a calculation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdditionalIncomeRequest {
    /// Discretionary bonuses. Taxable.
    #[serde(default)]
    pub bonuses: Decimal,
    /// Commissions. Taxable.
    #[serde(default)]
    pub commissions: Decimal,
    /// Legal gratification. Taxable.
    #[serde(default)]
    pub legal_gratification: Decimal,
    /// Overtime pay amount. Taxable.
    #[serde(default)]
    pub overtime_amount: Decimal,
    /// Food allowance. Non-taxable.
    #[serde(default)]
    pub food_allowance: Decimal,
    /// Transport allowance. Non-taxable.
    #[serde(default)]
    pub transport_allowance: Decimal,
}

/// Additional deduction line items in a calculation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdditionalDeductionsRequest {
    /// Company loan installment.
    #[serde(default)]
    pub loan_deduction: Decimal,
    /// Salary advance already paid out.
    #[serde(default)]
    pub salary_advance: Decimal,
    /// Voluntary pension savings (APV).
    #[serde(default)]
    pub voluntary_pension_savings: Decimal,
    /// Any other agreed deduction.
    #[serde(default)]
    pub other: Decimal,
}

impl From<EmployeeRequest> for EmployeeSnapshot {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeSnapshot {
            id: req.id,
            rut: req.rut,
            first_name: req.first_name,
            last_name: req.last_name,
            base_salary: req.base_salary,
            contract_type: req.contract_type,
            pension_fund_code: req.pension_fund_code,
            health_provider_code: req.health_provider_code,
            family_allowance_count: req.family_allowance_count,
        }
    }
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            year: req.year,
            month: req.month,
            days_worked: req.days_worked,
            worked_hours: req.worked_hours,
            overtime_hours: req.overtime_hours,
        }
    }
}

impl From<AdditionalIncomeRequest> for AdditionalIncome {
    fn from(req: AdditionalIncomeRequest) -> Self {
        AdditionalIncome {
            bonuses: req.bonuses,
            commissions: req.commissions,
            legal_gratification: req.legal_gratification,
            overtime_amount: req.overtime_amount,
            food_allowance: req.food_allowance,
            transport_allowance: req.transport_allowance,
        }
    }
}

impl From<AdditionalDeductionsRequest> for AdditionalDeductions {
    fn from(req: AdditionalDeductionsRequest) -> Self {
        AdditionalDeductions {
            loan_deduction: req.loan_deduction,
            salary_advance: req.salary_advance,
            voluntary_pension_savings: req.voluntary_pension_savings,
            other: req.other,
        }
    }
}
