//! Domain models for the Payroll Liquidation Engine.
//!
//! This module contains all the core data structures used throughout
//! the engine, including employee snapshots, pay periods, additional
//! income and deduction line items, and liquidation results.

mod employee;
mod income;
mod liquidation;
mod pay_period;

pub use employee::{ContractType, EmployeeSnapshot};
pub use income::{AdditionalDeductions, AdditionalIncome};
pub use liquidation::{
    Deductions, LiquidationResult, LiquidationTotals, LiquidationWarning, NonTaxableIncome,
    TaxableIncome, WARN_DEDUCTION_CAP, WARN_TOPE_IMPONIBLE, WARN_UNKNOWN_FUND,
};
pub use pay_period::{FULL_MONTH_DAYS, PayPeriod};
