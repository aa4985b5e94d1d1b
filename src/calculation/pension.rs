//! Pension deductions.
//!
//! Three withholdings share the capped taxable income as their base: the
//! mandatory pension contribution, the fund administrator's commission,
//! and the disability and survivorship insurance (SIS). An unrecognized
//! fund code falls back to the configured default commission; the
//! orchestrator surfaces that fallback as a warning.

use rust_decimal::Decimal;

use crate::config::PayrollRules;

use super::rounding::round_peso;

/// The pension-side deductions of a liquidation.
#[derive(Debug, Clone)]
pub struct PensionDeductions {
    /// Mandatory pension contribution.
    pub pension: Decimal,
    /// Fund administrator commission.
    pub commission: Decimal,
    /// Disability and survivorship insurance (SIS).
    pub disability_insurance: Decimal,
    /// False when the fund code was missing from the rules table and the
    /// default commission applied.
    pub fund_recognized: bool,
}

/// Computes the pension deductions on the capped taxable income.
///
/// Each line is rounded to a whole peso independently. The commission
/// percentage comes from the fund table, or the configured default when
/// the code is unrecognized — net pay is identical either way for codes
/// whose commission equals the default.
pub fn calculate_pension_deductions(
    capped_taxable: Decimal,
    fund_code: &str,
    rules: &PayrollRules,
) -> PensionDeductions {
    let rates = rules.rates();
    let hundred = Decimal::ONE_HUNDRED;

    let (commission_percentage, fund_recognized) = match rules.commission_percentage(fund_code) {
        Some(percentage) => (percentage, true),
        None => (rates.default_commission_percentage, false),
    };

    PensionDeductions {
        pension: round_peso(capped_taxable * rates.pension_percentage / hundred),
        commission: round_peso(capped_taxable * commission_percentage / hundred),
        disability_insurance: round_peso(
            capped_taxable * rates.disability_insurance_percentage / hundred,
        ),
        fund_recognized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ContributionRates, FamilyAllowanceBracket, FamilyAllowanceConfig, IncomeLimits,
        PayrollRules, PensionFund, TaxBracket, TaxSchedule, UnemploymentRates,
    };
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_rules() -> PayrollRules {
        let mut funds = HashMap::new();
        funds.insert(
            "modelo".to_string(),
            PensionFund {
                name: "AFP Modelo".to_string(),
                commission_percentage: dec("0.58"),
            },
        );
        funds.insert(
            "provida".to_string(),
            PensionFund {
                name: "AFP ProVida".to_string(),
                commission_percentage: dec("1.45"),
            },
        );

        PayrollRules::new(
            funds,
            ContributionRates {
                pension_percentage: dec("10.0"),
                health_percentage: dec("7.0"),
                disability_insurance_percentage: dec("1.88"),
                default_commission_percentage: dec("0.58"),
                unemployment_insurance: UnemploymentRates {
                    indefinite: dec("0.6"),
                    fixed_term: dec("3.0"),
                    project_based: dec("0.0"),
                },
                deduction_cap_percentage: dec("45.0"),
            },
            IncomeLimits {
                uf_value: dec("37800"),
                utm_value: dec("66000"),
                taxable_cap_uf: dec("84.3"),
                minimum_wage: dec("500000"),
                family_allowance_ceiling: dec("1100000"),
            },
            TaxSchedule {
                exempt_utm_multiplier: dec("13.5"),
                brackets: vec![TaxBracket {
                    upper_limit: None,
                    rate_percentage: dec("4.0"),
                    fixed_amount: dec("0"),
                }],
            },
            FamilyAllowanceConfig {
                brackets: vec![FamilyAllowanceBracket {
                    salary_limit: None,
                    per_dependent_amount: dec("4119"),
                }],
            },
        )
    }

    #[test]
    fn test_pension_is_ten_percent() {
        let rules = create_test_rules();
        let result = calculate_pension_deductions(dec("1000000"), "modelo", &rules);
        assert_eq!(result.pension, dec("100000"));
    }

    #[test]
    fn test_commission_uses_fund_table() {
        let rules = create_test_rules();
        let result = calculate_pension_deductions(dec("1000000"), "provida", &rules);

        assert_eq!(result.commission, dec("14500"));
        assert!(result.fund_recognized);
    }

    #[test]
    fn test_disability_insurance_rate() {
        let rules = create_test_rules();
        let result = calculate_pension_deductions(dec("1000000"), "modelo", &rules);
        assert_eq!(result.disability_insurance, dec("18800"));
    }

    #[test]
    fn test_unknown_fund_falls_back_to_default_commission() {
        let rules = create_test_rules();
        let result = calculate_pension_deductions(dec("1000000"), "desconocida", &rules);

        assert_eq!(result.commission, dec("5800"));
        assert!(!result.fund_recognized);
    }

    #[test]
    fn test_each_line_rounds_independently() {
        let rules = create_test_rules();
        // On 3,186,540: commission 0.58% = 18,481.932 -> 18,482
        // and SIS 1.88% = 59,906.952 -> 59,907
        let result = calculate_pension_deductions(dec("3186540"), "modelo", &rules);

        assert_eq!(result.pension, dec("318654"));
        assert_eq!(result.commission, dec("18482"));
        assert_eq!(result.disability_insurance, dec("59907"));
    }

    #[test]
    fn test_zero_taxable_yields_zero_deductions() {
        let rules = create_test_rules();
        let result = calculate_pension_deductions(Decimal::ZERO, "modelo", &rules);

        assert_eq!(result.pension, Decimal::ZERO);
        assert_eq!(result.commission, Decimal::ZERO);
        assert_eq!(result.disability_insurance, Decimal::ZERO);
    }
}
