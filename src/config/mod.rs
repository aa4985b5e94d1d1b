//! Jurisdiction rules configuration.
//!
//! This module contains the strongly-typed [`PayrollRules`] structure and
//! the [`RulesLoader`] that reads it from a directory of YAML files.

mod loader;
mod types;

pub use loader::RulesLoader;
pub use types::{
    ContributionRates, FamilyAllowanceBracket, FamilyAllowanceConfig, IncomeLimits, PayrollRules,
    PensionFund, PensionFundsConfig, TaxBracket, TaxSchedule, UnemploymentRates,
};
