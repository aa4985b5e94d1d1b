//! Configuration types for the jurisdiction rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Per the engine's
//! design, every statutory rate lives here rather than in code, so a rules
//! change is a configuration change, not a redeploy.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::ContractType;

/// A pension fund administrator (AFP) record.
#[derive(Debug, Clone, Deserialize)]
pub struct PensionFund {
    /// The human-readable name of the administrator.
    pub name: String,
    /// The administrator's commission as a percentage of taxable income.
    pub commission_percentage: Decimal,
}

/// Pension funds configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PensionFundsConfig {
    /// Map of fund code to administrator record.
    pub funds: HashMap<String, PensionFund>,
}

/// Unemployment insurance rates by contract type, as percentages.
#[derive(Debug, Clone, Deserialize)]
pub struct UnemploymentRates {
    /// Rate for open-ended contracts.
    pub indefinite: Decimal,
    /// Rate for fixed-term contracts.
    pub fixed_term: Decimal,
    /// Rate for project-based contracts.
    pub project_based: Decimal,
}

/// Statutory contribution rates, as percentages of capped taxable income.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionRates {
    /// Mandatory pension contribution rate.
    pub pension_percentage: Decimal,
    /// Health contribution rate.
    pub health_percentage: Decimal,
    /// Disability and survivorship insurance (SIS) rate.
    pub disability_insurance_percentage: Decimal,
    /// Commission applied when a pension fund code is not in the table.
    pub default_commission_percentage: Decimal,
    /// Unemployment insurance rates by contract type.
    pub unemployment_insurance: UnemploymentRates,
    /// Advisory ceiling for total deductions as a share of gross income.
    pub deduction_cap_percentage: Decimal,
}

/// Inflation-indexed unit values and statutory income limits.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeLimits {
    /// Value of one UF (unidad de fomento) in pesos.
    pub uf_value: Decimal,
    /// Value of one UTM (unidad tributaria mensual) in pesos.
    pub utm_value: Decimal,
    /// Taxable income cap, expressed in UF.
    pub taxable_cap_uf: Decimal,
    /// Monthly minimum wage in pesos.
    pub minimum_wage: Decimal,
    /// Base salary ceiling for family allowance eligibility.
    pub family_allowance_ceiling: Decimal,
}

/// One bracket of the progressive income tax schedule.
///
/// A bracket covers taxable excess up to `upper_limit` (`None` for the
/// open-ended top bracket). The tax owed is `fixed_amount` plus
/// `rate_percentage` applied to the excess above the previous bracket's
/// upper limit.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBracket {
    /// Upper bound of the bracket in pesos of taxable excess; `None`
    /// for the top bracket.
    pub upper_limit: Option<Decimal>,
    /// Marginal rate for this bracket, as a percentage.
    pub rate_percentage: Decimal,
    /// Cumulative tax owed at the bottom of this bracket.
    pub fixed_amount: Decimal,
}

/// The income tax schedule from tax.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxSchedule {
    /// Tax-exempt threshold, expressed as a multiple of the UTM.
    pub exempt_utm_multiplier: Decimal,
    /// Progressive brackets applied to the excess over the threshold.
    pub brackets: Vec<TaxBracket>,
}

/// One tier of the family allowance table.
#[derive(Debug, Clone, Deserialize)]
pub struct FamilyAllowanceBracket {
    /// Base salary upper bound for this tier; `None` for the tier bounded
    /// only by the eligibility ceiling.
    pub salary_limit: Option<Decimal>,
    /// Monthly allowance per dependent in this tier.
    pub per_dependent_amount: Decimal,
}

/// Family allowance configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct FamilyAllowanceConfig {
    /// Ascending salary tiers.
    pub brackets: Vec<FamilyAllowanceBracket>,
}

/// The complete jurisdiction rules loaded from YAML files.
///
/// An immutable value injected into every calculation call. Refreshing it
/// when statutory rates change (annually or by decree) is the concern of
/// the process hosting the engine, not of the calculator.
#[derive(Debug, Clone)]
pub struct PayrollRules {
    /// Pension fund administrators by code.
    funds: HashMap<String, PensionFund>,
    /// Statutory contribution rates.
    rates: ContributionRates,
    /// Unit values and income limits.
    limits: IncomeLimits,
    /// Income tax schedule.
    tax: TaxSchedule,
    /// Family allowance tiers (sorted ascending, open tier last).
    family_allowance: Vec<FamilyAllowanceBracket>,
}

impl PayrollRules {
    /// Creates a new PayrollRules from its component parts.
    ///
    /// Tax brackets and family allowance tiers are sorted by their upper
    /// bounds, open-ended entries last, so lookups can walk them in order.
    pub fn new(
        funds: HashMap<String, PensionFund>,
        rates: ContributionRates,
        limits: IncomeLimits,
        tax: TaxSchedule,
        family_allowance: FamilyAllowanceConfig,
    ) -> Self {
        let mut tax = tax;
        tax.brackets
            .sort_by_key(|b| b.upper_limit.unwrap_or(Decimal::MAX));

        let mut family_brackets = family_allowance.brackets;
        family_brackets.sort_by_key(|b| b.salary_limit.unwrap_or(Decimal::MAX));

        Self {
            funds,
            rates,
            limits,
            tax,
            family_allowance: family_brackets,
        }
    }

    /// Returns all pension fund administrators.
    pub fn funds(&self) -> &HashMap<String, PensionFund> {
        &self.funds
    }

    /// Returns the statutory contribution rates.
    pub fn rates(&self) -> &ContributionRates {
        &self.rates
    }

    /// Returns the unit values and income limits.
    pub fn limits(&self) -> &IncomeLimits {
        &self.limits
    }

    /// Returns the income tax schedule.
    pub fn tax(&self) -> &TaxSchedule {
        &self.tax
    }

    /// Returns the family allowance tiers, ascending.
    pub fn family_allowance_brackets(&self) -> &[FamilyAllowanceBracket] {
        &self.family_allowance
    }

    /// Looks up the commission percentage for a pension fund code.
    ///
    /// Returns `None` when the code is not in the table; callers fall back
    /// to [`ContributionRates::default_commission_percentage`].
    pub fn commission_percentage(&self, fund_code: &str) -> Option<Decimal> {
        self.funds.get(fund_code).map(|f| f.commission_percentage)
    }

    /// Returns the unemployment insurance percentage for a contract type.
    pub fn unemployment_percentage(&self, contract_type: ContractType) -> Decimal {
        match contract_type {
            ContractType::Indefinite => self.rates.unemployment_insurance.indefinite,
            ContractType::FixedTerm => self.rates.unemployment_insurance.fixed_term,
            ContractType::ProjectBased => self.rates.unemployment_insurance.project_based,
        }
    }

    /// Returns the monthly allowance per dependent for a base salary.
    ///
    /// Walks the ascending tiers and returns the first whose limit covers
    /// the salary. Salaries above the eligibility ceiling get zero
    /// regardless of tier.
    pub fn per_dependent_amount(&self, base_salary: Decimal) -> Decimal {
        if base_salary > self.limits.family_allowance_ceiling {
            return Decimal::ZERO;
        }

        self.family_allowance
            .iter()
            .find(|b| b.salary_limit.is_none_or(|limit| base_salary <= limit))
            .map(|b| b.per_dependent_amount)
            .unwrap_or(Decimal::ZERO)
    }
}
