//! Configuration loading functionality.
//!
//! This module provides the [`RulesLoader`] type for loading jurisdiction
//! rules from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    ContributionRates, FamilyAllowanceConfig, IncomeLimits, PayrollRules, PensionFundsConfig,
    TaxSchedule,
};

/// Loads and provides access to the jurisdiction rules.
///
/// The `RulesLoader` reads YAML configuration files from a directory and
/// assembles them into an immutable [`PayrollRules`] value.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/cl/
/// ├── funds.yaml            # Pension fund administrators and commissions
/// ├── rates.yaml            # Statutory contribution rates
/// ├── limits.yaml           # UF/UTM values and income limits
/// ├── tax.yaml              # Income tax schedule
/// └── family_allowance.yaml # Family allowance tiers
/// ```
///
/// # Example
///
/// ```no_run
/// use liquidation_engine::config::RulesLoader;
///
/// let loader = RulesLoader::load("./config/cl").unwrap();
/// let rules = loader.rules();
/// println!("UF value: ${}", rules.limits().uf_value);
/// ```
#[derive(Debug, Clone)]
pub struct RulesLoader {
    rules: PayrollRules,
}

impl RulesLoader {
    /// Loads the jurisdiction rules from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/cl")
    ///
    /// # Returns
    ///
    /// Returns a `RulesLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The fund table, tax schedule, or allowance table is empty
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let funds_path = path.join("funds.yaml");
        let funds_config = Self::load_yaml::<PensionFundsConfig>(&funds_path)?;
        if funds_config.funds.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: funds_path.display().to_string(),
                message: "no pension funds defined".to_string(),
            });
        }

        let rates_path = path.join("rates.yaml");
        let rates = Self::load_yaml::<ContributionRates>(&rates_path)?;

        let limits_path = path.join("limits.yaml");
        let limits = Self::load_yaml::<IncomeLimits>(&limits_path)?;

        let tax_path = path.join("tax.yaml");
        let tax = Self::load_yaml::<TaxSchedule>(&tax_path)?;
        if tax.brackets.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: tax_path.display().to_string(),
                message: "tax schedule has no brackets".to_string(),
            });
        }

        let allowance_path = path.join("family_allowance.yaml");
        let family_allowance = Self::load_yaml::<FamilyAllowanceConfig>(&allowance_path)?;
        if family_allowance.brackets.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: allowance_path.display().to_string(),
                message: "family allowance table has no tiers".to_string(),
            });
        }

        let rules = PayrollRules::new(funds_config.funds, rates, limits, tax, family_allowance);

        Ok(Self { rules })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded jurisdiction rules.
    pub fn rules(&self) -> &PayrollRules {
        &self.rules
    }
}
