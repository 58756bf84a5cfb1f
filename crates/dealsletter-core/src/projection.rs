use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::monthly_payment;
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};

const HUNDRED: Decimal = dec!(100);
const TWELVE: Decimal = dec!(12);

const DEFAULT_APPRECIATION_RATE: Rate = dec!(0.03);
const DEFAULT_RENT_GROWTH_RATE: Rate = dec!(0.025);
const DEFAULT_EXPENSE_RATIO: Rate = dec!(0.40);
const DEFAULT_LOAN_TERM_YEARS: u32 = 30;

/// Inputs for the N-year hold projection used by the non-BRRRR
/// strategies. `*_percent` fields are 0-100, `*_rate`/`*_ratio` fields
/// are 0-1 fractions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub purchase_price: Money,
    pub monthly_rent: Money,
    pub down_payment_percent: Percent,
    pub interest_rate_percent: Percent,
    pub years: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appreciation_rate: Option<Rate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent_growth_rate: Option<Rate>,
    /// Operating expenses as a share of gross rent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_ratio: Option<Rate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_term_years: Option<u32>,
}

/// One projected year. Each row depends only on the previous row's
/// value, rent and balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub year: u32,
    pub property_value: Money,
    pub loan_balance: Money,
    /// Annual gross rent collected this year.
    pub gross_rent: Money,
    pub net_operating_income: Money,
    pub cash_flow: Money,
    pub cumulative_cash_flow: Money,
    pub equity: Money,
    pub total_roi_percent: Percent,
}

/// Project an N-year hold: appreciation, rent growth, fixed debt
/// service, and an approximated annual principal paydown.
///
/// The paydown is annual debt service minus one year of interest on the
/// opening balance, clamped at zero. A yearly approximation, not a
/// monthly schedule; it keeps the recurrence first-order so each row
/// follows from the one before it.
///
/// Pure and restartable: identical inputs always produce identical rows.
pub fn project_years(input: &ProjectionInput) -> ComputationOutput<Vec<ProjectionRow>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let appreciation_rate = input.appreciation_rate.unwrap_or(DEFAULT_APPRECIATION_RATE);
    let rent_growth_rate = input.rent_growth_rate.unwrap_or(DEFAULT_RENT_GROWTH_RATE);
    let expense_ratio = input.expense_ratio.unwrap_or(DEFAULT_EXPENSE_RATIO);
    let loan_term_years = input.loan_term_years.unwrap_or(DEFAULT_LOAN_TERM_YEARS);

    let down_payment = input.purchase_price * input.down_payment_percent / HUNDRED;
    let loan_amount = input.purchase_price - down_payment;
    let annual_rate = input.interest_rate_percent / HUNDRED;
    let annual_debt_service =
        monthly_payment(loan_amount, input.interest_rate_percent, loan_term_years) * TWELVE;

    let mut rows = Vec::with_capacity(input.years as usize);
    let mut property_value = input.purchase_price;
    let mut monthly_rent = input.monthly_rent;
    let mut loan_balance = loan_amount;
    let mut cumulative_cash_flow = Decimal::ZERO;

    for year in 1..=input.years {
        property_value *= Decimal::ONE + appreciation_rate;
        monthly_rent *= Decimal::ONE + rent_growth_rate;

        let gross_rent = monthly_rent * TWELVE;
        let net_operating_income = gross_rent - gross_rent * expense_ratio;
        let cash_flow = net_operating_income - annual_debt_service;
        cumulative_cash_flow += cash_flow;

        // Approximate paydown: this year's payments minus interest on
        // the opening balance
        let interest = loan_balance * annual_rate;
        let principal_paydown = (annual_debt_service - interest).max(Decimal::ZERO);
        loan_balance = (loan_balance - principal_paydown).max(Decimal::ZERO);

        let equity = property_value - loan_balance;
        let total_roi_percent = if down_payment.is_zero() {
            Decimal::ZERO
        } else {
            (cumulative_cash_flow + equity - down_payment) / down_payment * HUNDRED
        };

        rows.push(ProjectionRow {
            year,
            property_value,
            loan_balance,
            gross_rent,
            net_operating_income,
            cash_flow,
            cumulative_cash_flow,
            equity,
            total_roi_percent,
        });
    }

    if let Some(first) = rows.first() {
        if first.cash_flow < Decimal::ZERO {
            warnings.push(format!(
                "Year 1 cash flow is negative ({}); the hold starts out of pocket",
                first.cash_flow.round_dp(2)
            ));
        }
    }
    if input.years == 0 {
        warnings.push("Projection horizon is 0 years; no rows generated".to_string());
    }

    let elapsed = start.elapsed().as_micros() as u64;

    with_metadata(
        "N-Year Hold Projection (appreciation, rent growth, approximated paydown)",
        input,
        warnings,
        elapsed,
        rows,
    )
}
