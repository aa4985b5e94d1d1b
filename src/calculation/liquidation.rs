//! Liquidation orchestration.
//!
//! Runs the full settlement calculation: proportional salary, taxable
//! income and its cap, family allowance, statutory deductions, income
//! tax, and totals, assembling a [`LiquidationResult`] with any warnings
//! raised along the way.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::PayrollRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AdditionalDeductions, AdditionalIncome, Deductions, EmployeeSnapshot, LiquidationResult,
    LiquidationTotals, LiquidationWarning, NonTaxableIncome, PayPeriod, TaxableIncome,
    WARN_DEDUCTION_CAP, WARN_TOPE_IMPONIBLE, WARN_UNKNOWN_FUND,
};

use super::deduction_cap::check_deduction_ratio;
use super::family_allowance::calculate_family_allowance;
use super::health::calculate_health_deduction;
use super::income_cap::apply_taxable_cap;
use super::income_tax::calculate_income_tax;
use super::pension::calculate_pension_deductions;
use super::taxable_income::calculate_taxable_income;
use super::unemployment::calculate_unemployment_insurance;

/// Computes a complete liquidation for one employee and period.
///
/// Pure function of its arguments plus the injected rules: no hidden
/// state, no I/O, safe to call concurrently. Business-rule conditions
/// (taxable cap, deduction ratio, unknown pension fund) become warnings
/// on the result; out-of-range inputs are rejected up front.
///
/// # Errors
///
/// - [`EngineError::InvalidEmployee`] for a non-positive base salary
/// - [`EngineError::InvalidPeriod`] for a month outside 1-12 or more
///   than 31 days worked
/// - [`EngineError::InvalidAmount`] for any negative income or deduction
///   line item
/// - [`EngineError::CalculationError`] for a malformed tax schedule
pub fn calculate_liquidation(
    employee: &EmployeeSnapshot,
    period: &PayPeriod,
    additional_income: &AdditionalIncome,
    additional_deductions: &AdditionalDeductions,
    rules: &PayrollRules,
) -> EngineResult<LiquidationResult> {
    validate_inputs(employee, period, additional_income, additional_deductions)?;

    let mut warnings: Vec<LiquidationWarning> = Vec::new();

    // Taxable side: proportional salary plus the taxable line items,
    // then the tope imponible.
    let taxable = calculate_taxable_income(employee, period, additional_income);
    let cap_result = apply_taxable_cap(taxable.total, rules);
    if cap_result.exceeded {
        warnings.push(LiquidationWarning {
            code: WARN_TOPE_IMPONIBLE.to_string(),
            message: format!(
                "Taxable income {} exceeds the tope imponible of {}; deductions were computed on the capped amount",
                taxable.total, cap_result.cap
            ),
        });
    }
    let capped_taxable = cap_result.capped;

    // Non-taxable side. The family allowance tier is selected by the
    // unclamped base salary.
    let family_allowance =
        calculate_family_allowance(employee.base_salary, employee.family_allowance_count, rules);
    let non_taxable_total =
        additional_income.food_allowance + additional_income.transport_allowance + family_allowance;

    // Statutory deductions, each on the capped taxable income.
    let pension = calculate_pension_deductions(capped_taxable, &employee.pension_fund_code, rules);
    if !pension.fund_recognized {
        warnings.push(LiquidationWarning {
            code: WARN_UNKNOWN_FUND.to_string(),
            message: format!(
                "Pension fund code '{}' is not in the rules table; default commission of {}% applied",
                employee.pension_fund_code,
                rules.rates().default_commission_percentage
            ),
        });
    }
    let health = calculate_health_deduction(capped_taxable, rules);
    let unemployment =
        calculate_unemployment_insurance(capped_taxable, employee.contract_type, rules);
    let income_tax = calculate_income_tax(capped_taxable, rules)?;
    let other_deductions = additional_deductions.total();

    let total_deductions = pension.pension
        + pension.commission
        + pension.disability_insurance
        + health
        + unemployment
        + income_tax.amount
        + other_deductions;

    let gross_income = capped_taxable + non_taxable_total;
    let net_salary = gross_income - total_deductions;

    // Advisory only: the ratio check warns but never clamps net pay.
    let ratio = check_deduction_ratio(gross_income, total_deductions, rules);
    if ratio.exceeded {
        warnings.push(LiquidationWarning {
            code: WARN_DEDUCTION_CAP.to_string(),
            message: format!(
                "Total deductions are {}% of gross income, above the {}% legal limit",
                ratio.ratio_percentage,
                rules.rates().deduction_cap_percentage
            ),
        });
    }

    Ok(LiquidationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee: employee.clone(),
        period: period.clone(),
        taxable_income: TaxableIncome {
            proportional_base_salary: taxable.proportional_base_salary,
            overtime: taxable.overtime,
            bonuses: taxable.bonuses,
            commissions: taxable.commissions,
            legal_gratification: taxable.legal_gratification,
            total: capped_taxable,
        },
        non_taxable_income: NonTaxableIncome {
            food_allowance: additional_income.food_allowance,
            transport_allowance: additional_income.transport_allowance,
            family_allowance,
            total: non_taxable_total,
        },
        deductions: Deductions {
            pension: pension.pension,
            pension_commission: pension.commission,
            disability_insurance: pension.disability_insurance,
            health,
            unemployment_insurance: unemployment,
            income_tax: income_tax.amount,
            other_deductions,
            total: total_deductions,
        },
        totals: LiquidationTotals {
            gross_income,
            total_deductions,
            net_salary,
        },
        tope_imponible_exceeded: cap_result.exceeded,
        warnings,
    })
}

/// Rejects out-of-range inputs before any arithmetic runs.
fn validate_inputs(
    employee: &EmployeeSnapshot,
    period: &PayPeriod,
    additional_income: &AdditionalIncome,
    additional_deductions: &AdditionalDeductions,
) -> EngineResult<()> {
    if employee.base_salary <= Decimal::ZERO {
        return Err(EngineError::InvalidEmployee {
            field: "base_salary".to_string(),
            message: "must be positive".to_string(),
        });
    }

    if period.month < 1 || period.month > 12 {
        return Err(EngineError::InvalidPeriod {
            field: "month".to_string(),
            message: "must be between 1 and 12".to_string(),
        });
    }

    if period.days_worked > 31 {
        return Err(EngineError::InvalidPeriod {
            field: "days_worked".to_string(),
            message: "cannot exceed 31".to_string(),
        });
    }

    let income_fields = [
        ("bonuses", additional_income.bonuses),
        ("commissions", additional_income.commissions),
        ("legal_gratification", additional_income.legal_gratification),
        ("overtime_amount", additional_income.overtime_amount),
        ("food_allowance", additional_income.food_allowance),
        ("transport_allowance", additional_income.transport_allowance),
        ("loan_deduction", additional_deductions.loan_deduction),
        ("salary_advance", additional_deductions.salary_advance),
        (
            "voluntary_pension_savings",
            additional_deductions.voluntary_pension_savings,
        ),
        ("other", additional_deductions.other),
    ];

    for (field, amount) in income_fields {
        if amount < Decimal::ZERO {
            return Err(EngineError::InvalidAmount {
                field: field.to_string(),
            });
        }
    }

    Ok(())
}
