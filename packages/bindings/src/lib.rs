use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// BRRRR
// ---------------------------------------------------------------------------

#[napi]
pub fn analyze_brrrr(input_json: String) -> NapiResult<String> {
    let input: dealsletter_core::brrrr::BrrrrInputs =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = dealsletter_core::brrrr::calculate_brrrr(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

#[napi]
pub fn project_rental_years(input_json: String) -> NapiResult<String> {
    let input: dealsletter_core::projection::ProjectionInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = dealsletter_core::projection::project_years(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

#[napi]
pub fn investment_score(input_json: String) -> NapiResult<String> {
    let input: dealsletter_core::scoring::ScoreInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = dealsletter_core::scoring::investment_score(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Financing
// ---------------------------------------------------------------------------

#[napi]
pub fn financing_defaults(strategy_json: String) -> NapiResult<String> {
    let strategy: dealsletter_core::financing::Strategy =
        serde_json::from_str(&strategy_json).map_err(to_napi_error)?;
    let output = dealsletter_core::financing::financing_defaults(strategy);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[derive(serde::Deserialize)]
struct ClosingCostsBindingInput {
    purchase_price: rust_decimal::Decimal,
    financing_type: dealsletter_core::financing::FinancingType,
    custom_lender_points_percent: Option<rust_decimal::Decimal>,
}

#[napi]
pub fn closing_costs_for_financing_type(input_json: String) -> NapiResult<String> {
    let input: ClosingCostsBindingInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = dealsletter_core::financing::closing_costs_for_financing_type(
        input.purchase_price,
        input.financing_type,
        input.custom_lender_points_percent,
    );
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[derive(serde::Deserialize)]
struct ValidateFinancingBindingInput {
    down_payment_percent: rust_decimal::Decimal,
    interest_rate_percent: rust_decimal::Decimal,
    loan_term_years: u32,
    strategy: dealsletter_core::financing::Strategy,
}

#[napi]
pub fn validate_financing(input_json: String) -> NapiResult<String> {
    let input: ValidateFinancingBindingInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = dealsletter_core::financing::validate_financing_params(
        input.down_payment_percent,
        input.interest_rate_percent,
        input.loan_term_years,
        input.strategy,
    );
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[derive(serde::Deserialize)]
struct LoanBindingInput {
    principal: rust_decimal::Decimal,
    annual_rate_percent: rust_decimal::Decimal,
    term_years: u32,
    #[serde(default)]
    interest_only: bool,
}

#[napi]
pub fn monthly_loan_payment(input_json: String) -> NapiResult<String> {
    let input: LoanBindingInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let terms = dealsletter_core::amortization::LoanTerms::new(
        input.principal,
        input.annual_rate_percent,
        input.term_years,
        input.interest_only,
    )
    .map_err(to_napi_error)?;
    let payment = terms.monthly_payment();
    serde_json::to_string(&serde_json::json!({ "monthly_payment": payment }))
        .map_err(to_napi_error)
}
