//! Comprehensive integration tests for the Payroll Liquidation Engine.
//!
//! This test suite covers the full calculation pipeline over HTTP:
//! - Standard indefinite-contract liquidations
//! - Fixed-term and project-based unemployment insurance branching
//! - Proportional salary for partial months
//! - Tope imponible clamping and its warning
//! - Family allowance tiers and the eligibility ceiling
//! - Income tax brackets and the exempt threshold
//! - The advisory 45% deduction-ratio warning
//! - Unknown pension fund fallback
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use liquidation_engine::api::{AppState, create_router};
use liquidation_engine::config::RulesLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let rules = RulesLoader::load("./config/cl").expect("Failed to load rules");
    AppState::new(rules)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_employee(
    base_salary: &str,
    contract_type: &str,
    pension_fund_code: &str,
    family_allowance_count: u32,
) -> Value {
    json!({
        "id": "emp_001",
        "rut": "12.345.678-5",
        "first_name": "María",
        "last_name": "González",
        "base_salary": base_salary,
        "contract_type": contract_type,
        "pension_fund_code": pension_fund_code,
        "health_provider_code": "fonasa",
        "family_allowance_count": family_allowance_count
    })
}

fn create_period(days_worked: u32) -> Value {
    json!({
        "year": 2024,
        "month": 6,
        "days_worked": days_worked,
        "worked_hours": "180",
        "overtime_hours": "0"
    })
}

fn create_request(employee: Value, period: Value) -> Value {
    json!({
        "employee": employee,
        "period": period
    })
}

fn field(result: &Value, path: &[&str]) -> Decimal {
    let mut value = result;
    for key in path {
        value = &value[key];
    }
    decimal(value.as_str().unwrap_or_else(|| {
        panic!("expected decimal string at {:?}, got {}", path, value)
    }))
}

fn assert_net_pay_identity(result: &Value) {
    let gross = field(result, &["taxable_income", "total"])
        + field(result, &["non_taxable_income", "total"]);
    assert_eq!(field(result, &["totals", "gross_income"]), gross);
    assert_eq!(
        field(result, &["totals", "net_salary"]),
        gross - field(result, &["totals", "total_deductions"])
    );
}

fn warning_codes(result: &Value) -> Vec<String> {
    result["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["code"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Standard liquidations
// =============================================================================

#[tokio::test]
async fn test_indefinite_full_month_standard_liquidation() {
    let router = create_router_for_test();
    let request = create_request(
        create_employee("1000000", "indefinite", "modelo", 0),
        create_period(30),
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&result, &["taxable_income", "total"]), decimal("1000000"));
    assert_eq!(field(&result, &["deductions", "pension"]), decimal("100000"));
    assert_eq!(
        field(&result, &["deductions", "pension_commission"]),
        decimal("5800")
    );
    assert_eq!(
        field(&result, &["deductions", "disability_insurance"]),
        decimal("18800")
    );
    assert_eq!(field(&result, &["deductions", "health"]), decimal("70000"));
    assert_eq!(
        field(&result, &["deductions", "unemployment_insurance"]),
        decimal("6000")
    );
    // 1,000,000 - 891,000 exempt = 109,000 excess at 4%
    assert_eq!(field(&result, &["deductions", "income_tax"]), decimal("4360"));
    assert_eq!(
        field(&result, &["totals", "total_deductions"]),
        decimal("204960")
    );
    assert_eq!(field(&result, &["totals", "net_salary"]), decimal("795040"));
    assert_eq!(result["tope_imponible_exceeded"], false);
    assert!(warning_codes(&result).is_empty());
    assert_net_pay_identity(&result);
}

#[tokio::test]
async fn test_fixed_term_contract_unemployment_rate() {
    let router = create_router_for_test();
    let request = create_request(
        create_employee("1000000", "fixed_term", "habitat", 0),
        create_period(30),
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    // 3.0% instead of 0.6%
    assert_eq!(
        field(&result, &["deductions", "unemployment_insurance"]),
        decimal("30000")
    );
    // Habitat commission is 1.27%
    assert_eq!(
        field(&result, &["deductions", "pension_commission"]),
        decimal("12700")
    );
    assert_eq!(field(&result, &["totals", "net_salary"]), decimal("764140"));
    assert_net_pay_identity(&result);
}

#[tokio::test]
async fn test_project_based_contract_has_no_unemployment_insurance() {
    let router = create_router_for_test();
    let request = create_request(
        create_employee("1000000", "project_based", "modelo", 0),
        create_period(30),
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        field(&result, &["deductions", "unemployment_insurance"]),
        Decimal::ZERO
    );
    assert_net_pay_identity(&result);
}

#[tokio::test]
async fn test_partial_month_proportional_salary() {
    let router = create_router_for_test();
    let request = create_request(
        create_employee("900000", "indefinite", "modelo", 0),
        create_period(15),
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        field(&result, &["taxable_income", "proportional_base_salary"]),
        decimal("450000")
    );
    assert_eq!(field(&result, &["taxable_income", "total"]), decimal("450000"));
    // Below the exempt threshold
    assert_eq!(field(&result, &["deductions", "income_tax"]), Decimal::ZERO);
    assert_eq!(field(&result, &["totals", "net_salary"]), decimal("359730"));
    assert_net_pay_identity(&result);
}

#[tokio::test]
async fn test_additional_taxable_income_enters_deduction_base() {
    let router = create_router_for_test();
    let mut request = create_request(
        create_employee("800000", "indefinite", "modelo", 0),
        create_period(30),
    );
    request["additional_income"] = json!({
        "bonuses": "100000",
        "commissions": "50000",
        "overtime_amount": "50000"
    });

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&result, &["taxable_income", "total"]), decimal("1000000"));
    assert_eq!(field(&result, &["deductions", "pension"]), decimal("100000"));
    assert_eq!(field(&result, &["totals", "net_salary"]), decimal("795040"));
    assert_net_pay_identity(&result);
}

#[tokio::test]
async fn test_non_taxable_allowances_do_not_enter_deduction_base() {
    let router = create_router_for_test();
    let mut request = create_request(
        create_employee("1000000", "indefinite", "modelo", 0),
        create_period(30),
    );
    request["additional_income"] = json!({
        "food_allowance": "40000",
        "transport_allowance": "25000"
    });

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    // Same deductions as the allowance-free liquidation
    assert_eq!(
        field(&result, &["totals", "total_deductions"]),
        decimal("204960")
    );
    assert_eq!(
        field(&result, &["non_taxable_income", "total"]),
        decimal("65000")
    );
    assert_eq!(field(&result, &["totals", "gross_income"]), decimal("1065000"));
    assert_eq!(field(&result, &["totals", "net_salary"]), decimal("860040"));
    assert_net_pay_identity(&result);
}

// =============================================================================
// Tope imponible
// =============================================================================

#[tokio::test]
async fn test_tope_imponible_clamps_and_warns() {
    let router = create_router_for_test();
    let request = create_request(
        create_employee("4000000", "indefinite", "modelo", 0),
        create_period(30),
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["tope_imponible_exceeded"], true);
    assert!(warning_codes(&result).contains(&"TOPE_IMPONIBLE_EXCEEDED".to_string()));
    // 84.3 UF * 37,800 = 3,186,540
    assert_eq!(field(&result, &["taxable_income", "total"]), decimal("3186540"));
    assert_eq!(field(&result, &["deductions", "pension"]), decimal("318654"));
    assert_eq!(
        field(&result, &["deductions", "pension_commission"]),
        decimal("18482")
    );
    assert_eq!(
        field(&result, &["deductions", "disability_insurance"]),
        decimal("59907")
    );
    assert_eq!(field(&result, &["deductions", "health"]), decimal("223058"));
    assert_eq!(
        field(&result, &["deductions", "unemployment_insurance"]),
        decimal("19119")
    );
    // 18,000 + 13.5% of (2,295,540 - 300,000)
    assert_eq!(field(&result, &["deductions", "income_tax"]), decimal("287398"));
    assert_eq!(field(&result, &["totals", "net_salary"]), decimal("2259922"));
    assert_net_pay_identity(&result);
}

#[tokio::test]
async fn test_income_at_cap_is_not_flagged() {
    let router = create_router_for_test();
    let request = create_request(
        create_employee("3186540", "indefinite", "modelo", 0),
        create_period(30),
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["tope_imponible_exceeded"], false);
    assert_eq!(field(&result, &["taxable_income", "total"]), decimal("3186540"));
    assert!(warning_codes(&result).is_empty());
}

// =============================================================================
// Family allowance
// =============================================================================

#[tokio::test]
async fn test_family_allowance_tier_a() {
    let router = create_router_for_test();
    let request = create_request(
        create_employee("450000", "indefinite", "modelo", 2),
        create_period(30),
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        field(&result, &["non_taxable_income", "family_allowance"]),
        decimal("42486")
    );
    assert_eq!(field(&result, &["totals", "gross_income"]), decimal("492486"));
    assert_eq!(field(&result, &["totals", "net_salary"]), decimal("402216"));
    assert_net_pay_identity(&result);
}

#[tokio::test]
async fn test_family_allowance_tier_selected_by_unclamped_salary() {
    let router = create_router_for_test();
    // Salary in tier B even with a partial month that halves taxable income
    let request = create_request(
        create_employee("700000", "indefinite", "modelo", 1),
        create_period(15),
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        field(&result, &["non_taxable_income", "family_allowance"]),
        decimal("13036")
    );
}

#[tokio::test]
async fn test_family_allowance_zero_above_ceiling() {
    let router = create_router_for_test();
    let request = create_request(
        create_employee("1200000", "indefinite", "modelo", 3),
        create_period(30),
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        field(&result, &["non_taxable_income", "family_allowance"]),
        Decimal::ZERO
    );
    // Silently zero: no warning for this condition
    assert!(warning_codes(&result).is_empty());
}

#[tokio::test]
async fn test_family_allowance_zero_without_dependents() {
    let router = create_router_for_test();
    let request = create_request(
        create_employee("450000", "indefinite", "modelo", 0),
        create_period(30),
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        field(&result, &["non_taxable_income", "family_allowance"]),
        Decimal::ZERO
    );
}

// =============================================================================
// Income tax boundaries
// =============================================================================

#[tokio::test]
async fn test_income_tax_zero_at_exempt_threshold() {
    let router = create_router_for_test();
    // 13.5 * 66,000 = 891,000 exactly
    let request = create_request(
        create_employee("891000", "indefinite", "modelo", 0),
        create_period(30),
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&result, &["deductions", "income_tax"]), Decimal::ZERO);
}

#[tokio::test]
async fn test_income_tax_positive_above_exempt_threshold() {
    let router = create_router_for_test();
    let request = create_request(
        create_employee("892000", "indefinite", "modelo", 0),
        create_period(30),
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    // 1,000 excess at 4%
    assert_eq!(field(&result, &["deductions", "income_tax"]), decimal("40"));
}

#[tokio::test]
async fn test_income_tax_top_bracket() {
    let router = create_router_for_test();
    // Excess 309,000 lands in the open bracket:
    // 18,000 + 13.5% of 9,000 = 19,215
    let request = create_request(
        create_employee("1200000", "indefinite", "modelo", 0),
        create_period(30),
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&result, &["deductions", "income_tax"]), decimal("19215"));
    assert_net_pay_identity(&result);
}

// =============================================================================
// Deduction-ratio warning and unknown fund fallback
// =============================================================================

#[tokio::test]
async fn test_deduction_ratio_warning_is_advisory() {
    let router = create_router_for_test();
    let mut request = create_request(
        create_employee("1000000", "indefinite", "modelo", 0),
        create_period(30),
    );
    request["additional_deductions"] = json!({
        "loan_deduction": "300000",
        "salary_advance": "200000"
    });

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(warning_codes(&result).contains(&"DEDUCTION_CAP_EXCEEDED".to_string()));
    assert_eq!(
        field(&result, &["deductions", "other_deductions"]),
        decimal("500000")
    );
    // Net pay is returned uncapped
    assert_eq!(field(&result, &["totals", "net_salary"]), decimal("295040"));
    assert_net_pay_identity(&result);
}

#[tokio::test]
async fn test_unknown_pension_fund_uses_default_commission_and_warns() {
    let router = create_router_for_test();
    let request = create_request(
        create_employee("1000000", "indefinite", "desconocida", 0),
        create_period(30),
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    // Default commission 0.58% matches AFP Modelo's rate
    assert_eq!(
        field(&result, &["deductions", "pension_commission"]),
        decimal("5800")
    );
    assert!(warning_codes(&result).contains(&"UNKNOWN_PENSION_FUND".to_string()));
    assert_eq!(field(&result, &["totals", "net_salary"]), decimal("795040"));
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{not valid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_period_returns_400() {
    let router = create_router_for_test();
    let request = json!({
        "employee": create_employee("1000000", "indefinite", "modelo", 0)
    });

    let (status, error) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        error["message"]
            .as_str()
            .unwrap()
            .contains("missing field")
    );
}

#[tokio::test]
async fn test_days_worked_above_31_returns_400() {
    let router = create_router_for_test();
    let request = create_request(
        create_employee("1000000", "indefinite", "modelo", 0),
        create_period(32),
    );

    let (status, error) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_PERIOD");
}

#[tokio::test]
async fn test_negative_deduction_returns_400() {
    let router = create_router_for_test();
    let mut request = create_request(
        create_employee("1000000", "indefinite", "modelo", 0),
        create_period(30),
    );
    request["additional_deductions"] = json!({"loan_deduction": "-10000"});

    let (status, error) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_AMOUNT");
}

#[tokio::test]
async fn test_zero_base_salary_returns_400() {
    let router = create_router_for_test();
    let request = create_request(
        create_employee("0", "indefinite", "modelo", 0),
        create_period(30),
    );

    let (status, error) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_EMPLOYEE");
}
