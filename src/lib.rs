//! Payroll Liquidation Engine for Chilean Salary Settlements
//!
//! This crate provides functionality for computing monthly payroll
//! liquidations under Chilean statutory rules (AFP pension withholdings,
//! health contributions, unemployment insurance, family allowances, and
//! second-category income tax), from an employee snapshot, a pay period,
//! and an injected set of jurisdiction rules.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
