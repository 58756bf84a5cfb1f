use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{interest_only_payment, monthly_payment};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};

// ---------------------------------------------------------------------------
// Model constants
// ---------------------------------------------------------------------------

const HUNDRED: Decimal = dec!(100);
const TWELVE: Decimal = dec!(12);

/// ARV fallback: purchase price + renovation spend at a 1.5x value-add
/// multiplier. Behavioural constant; override via `BrrrrInputs::arv`.
const VALUE_ADD_MULTIPLIER: Decimal = dec!(1.5);

const DEFAULT_REFINANCE_LTV: Rate = dec!(0.75);
const DEFAULT_RENOVATION_MONTHS: u32 = 6;
const DEFAULT_CLOSING_COST_RATE: Rate = dec!(0.03);
const DEFAULT_PROPERTY_TAX_RATE: Rate = dec!(0.012);
const DEFAULT_INSURANCE_RATE: Rate = dec!(0.005);
const DEFAULT_MAINTENANCE_RATE: Rate = dec!(0.05);
const DEFAULT_MANAGEMENT_RATE: Rate = dec!(0.08);
const DEFAULT_VACANCY_RATE: Rate = dec!(0.05);

/// Fixed monthly utility and upkeep carry while the unit sits vacant
/// through renovation.
const VACANT_UTILITIES_MONTHLY: Money = dec!(200);
const VACANT_MAINTENANCE_MONTHLY: Money = dec!(150);

/// Appreciation assumed in the 5-year summary ROI.
const SUMMARY_APPRECIATION_RATE: Rate = dec!(0.03);
const SUMMARY_YEARS: u32 = 5;

const REFINANCE_TERM_YEARS: u32 = 30;
const CONVENTIONAL_CARRY_TERM_YEARS: u32 = 30;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Loan product used for the acquisition phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InitialLoanType {
    /// Interest-only note; renovation draws are lender-financed and
    /// repaid out of the refinance.
    #[default]
    HardMoney,
    /// Fully amortised 30-year carry; renovation is paid in cash.
    Conventional,
}

/// Inputs for a BRRRR analysis. Optional knobs fall back to the
/// documented defaults above. `*_percent` fields are 0-100,
/// `*_rate`/`*_ltv` fields are 0-1 fractions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrrrrInputs {
    pub purchase_price: Money,
    pub down_payment_percent: Percent,
    pub renovation_costs: Money,
    pub monthly_rent: Money,
    /// After-repair value. Defaults to price + renovation * 1.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arv: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refinance_ltv: Option<Rate>,
    #[serde(default)]
    pub initial_loan_type: InitialLoanType,
    pub initial_interest_rate_percent: Percent,
    pub refinance_interest_rate_percent: Percent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renovation_months: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_cost_rate: Option<Rate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_tax_rate: Option<Rate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_rate: Option<Rate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_rate: Option<Rate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_rate: Option<Rate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vacancy_rate: Option<Rate>,
}

/// Phase 1: acquisition and renovation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquisitionPhase {
    pub down_payment: Money,
    pub initial_loan_amount: Money,
    pub closing_costs: Money,
    /// Cash paid for renovation (zero when hard money finances the draw).
    pub renovation_cash: Money,
    pub monthly_holding_cost: Money,
    pub total_holding_costs: Money,
    pub total_cash_invested: Money,
}

/// Phase 2: cash-out refinance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinancePhase {
    pub arv: Money,
    pub refinance_ltv: Rate,
    pub refinance_amount: Money,
    pub initial_loan_payoff: Money,
    /// May be negative: the investor brings cash to the refinance table.
    pub cash_returned: Money,
    pub cash_left_in_deal: Money,
    pub capital_recovery_percent: Percent,
}

/// Cash-on-cash return on the cash left in the deal.
///
/// `rust_decimal` carries no IEEE infinities, so the fully-recovered
/// state is a first-class variant rather than a float sentinel. The UI
/// renders `Infinite` as "INFINITE"; it is an expected outcome, not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "percent", rename_all = "snake_case")]
pub enum CashOnCash {
    Finite(Percent),
    /// All invested capital recovered at refinance (cash left == 0).
    Infinite,
    /// Refinance returned more than was invested (cash left < 0).
    NegativeInfinite,
}

impl CashOnCash {
    pub fn is_infinite(&self) -> bool {
        !matches!(self, CashOnCash::Finite(_))
    }

    pub fn as_finite(&self) -> Option<Percent> {
        match self {
            CashOnCash::Finite(p) => Some(*p),
            _ => None,
        }
    }
}

/// Phase 3: stabilized rental operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilizedPhase {
    pub new_loan_payment: Money,
    pub monthly_operating_expenses: Money,
    pub monthly_cash_flow: Money,
    pub annual_cash_flow: Money,
    pub cash_on_cash_return: CashOnCash,
    pub cap_rate_percent: Percent,
}

/// Qualitative deal tier from capital recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrrrrRating {
    Poor,
    Marginal,
    Good,
    Excellent,
}

impl std::fmt::Display for BrrrrRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BrrrrRating::Poor => "poor",
            BrrrrRating::Marginal => "marginal",
            BrrrrRating::Good => "good",
            BrrrrRating::Excellent => "excellent",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrrrrSummary {
    pub total_roi_5yr_percent: Percent,
    pub is_infinite_return: bool,
    pub rating: BrrrrRating,
    pub recommendation: String,
}

/// One row of the year 0-5 cash timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineYear {
    pub year: u32,
    pub cash_flow: Money,
    pub cumulative_return: Money,
}

/// Complete BRRRR analysis output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrrrrResults {
    pub acquisition: AcquisitionPhase,
    pub refinance: RefinancePhase,
    pub stabilized: StabilizedPhase,
    pub summary: BrrrrSummary,
    pub timeline: Vec<TimelineYear>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the three-phase BRRRR model.
///
/// Total function: every denominator is guarded, nothing panics, and the
/// fully-recovered refinance surfaces as `CashOnCash::Infinite` rather
/// than an error. The caller is responsible for passing non-negative
/// economics; degenerate inputs produce degenerate but well-defined
/// numbers.
pub fn calculate_brrrr(inputs: &BrrrrInputs) -> ComputationOutput<BrrrrResults> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let refinance_ltv = inputs.refinance_ltv.unwrap_or(DEFAULT_REFINANCE_LTV);
    let renovation_months = inputs.renovation_months.unwrap_or(DEFAULT_RENOVATION_MONTHS);
    let closing_cost_rate = inputs.closing_cost_rate.unwrap_or(DEFAULT_CLOSING_COST_RATE);
    let property_tax_rate = inputs.property_tax_rate.unwrap_or(DEFAULT_PROPERTY_TAX_RATE);
    let insurance_rate = inputs.insurance_rate.unwrap_or(DEFAULT_INSURANCE_RATE);
    let maintenance_rate = inputs.maintenance_rate.unwrap_or(DEFAULT_MAINTENANCE_RATE);
    let management_rate = inputs.management_rate.unwrap_or(DEFAULT_MANAGEMENT_RATE);
    let vacancy_rate = inputs.vacancy_rate.unwrap_or(DEFAULT_VACANCY_RATE);

    let monthly_taxes = inputs.purchase_price * property_tax_rate / TWELVE;
    let monthly_insurance = inputs.purchase_price * insurance_rate / TWELVE;

    // --- Phase 1: acquisition & renovation ---
    let acquisition = compute_acquisition(
        inputs,
        closing_cost_rate,
        renovation_months,
        monthly_taxes,
        monthly_insurance,
    );

    // --- Phase 2: refinance ---
    let refinance = compute_refinance(inputs, &acquisition, refinance_ltv);

    // --- Phase 3: stabilized rental ---
    let stabilized = compute_stabilized(
        inputs,
        &refinance,
        monthly_taxes,
        monthly_insurance,
        maintenance_rate + management_rate + vacancy_rate,
    );

    // --- Summary & timeline ---
    let summary = compute_summary(&acquisition, &refinance, &stabilized);
    let timeline = build_timeline(&acquisition, &refinance, &stabilized, renovation_months);

    if stabilized.monthly_cash_flow < Decimal::ZERO {
        warnings.push(format!(
            "Stabilized monthly cash flow is negative ({}); the refinanced debt service exceeds net rent",
            stabilized.monthly_cash_flow.round_dp(2)
        ));
    }
    if refinance.cash_returned < Decimal::ZERO {
        warnings.push(format!(
            "Refinance proceeds fall short of the payoff; investor brings {} to the refinance closing",
            (-refinance.cash_returned).round_dp(2)
        ));
    }
    if refinance.arv > Decimal::ZERO && stabilized.cap_rate_percent < dec!(4) {
        warnings.push(format!(
            "Cap rate of {}% is below 4%; the stabilized income is thin relative to ARV",
            stabilized.cap_rate_percent.round_dp(2)
        ));
    }

    let results = BrrrrResults {
        acquisition,
        refinance,
        stabilized,
        summary,
        timeline,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    with_metadata(
        "BRRRR Three-Phase Analysis (Acquisition, Refinance, Stabilized Rental)",
        inputs,
        warnings,
        elapsed,
        results,
    )
}

// ---------------------------------------------------------------------------
// Phase 1
// ---------------------------------------------------------------------------

fn compute_acquisition(
    inputs: &BrrrrInputs,
    closing_cost_rate: Rate,
    renovation_months: u32,
    monthly_taxes: Money,
    monthly_insurance: Money,
) -> AcquisitionPhase {
    let down_payment = inputs.purchase_price * inputs.down_payment_percent / HUNDRED;
    let initial_loan_amount = inputs.purchase_price - down_payment;
    let closing_costs = inputs.purchase_price * closing_cost_rate;

    let loan_carry = match inputs.initial_loan_type {
        InitialLoanType::HardMoney => {
            // Interest-only on the note plus interest on the financed
            // renovation draw
            interest_only_payment(initial_loan_amount, inputs.initial_interest_rate_percent)
                + interest_only_payment(
                    inputs.renovation_costs,
                    inputs.initial_interest_rate_percent,
                )
        }
        InitialLoanType::Conventional => monthly_payment(
            initial_loan_amount,
            inputs.initial_interest_rate_percent,
            CONVENTIONAL_CARRY_TERM_YEARS,
        ),
    };

    let monthly_holding_cost = loan_carry
        + monthly_taxes
        + monthly_insurance
        + VACANT_UTILITIES_MONTHLY
        + VACANT_MAINTENANCE_MONTHLY;
    let total_holding_costs = monthly_holding_cost * Decimal::from(renovation_months);

    // Hard money is assumed to finance the rehab draw, so that cash never
    // leaves the investor's pocket; it is repaid at refinance instead.
    let renovation_cash = match inputs.initial_loan_type {
        InitialLoanType::HardMoney => Decimal::ZERO,
        InitialLoanType::Conventional => inputs.renovation_costs,
    };

    let total_cash_invested =
        down_payment + renovation_cash + closing_costs + total_holding_costs;

    AcquisitionPhase {
        down_payment,
        initial_loan_amount,
        closing_costs,
        renovation_cash,
        monthly_holding_cost,
        total_holding_costs,
        total_cash_invested,
    }
}

// ---------------------------------------------------------------------------
// Phase 2
// ---------------------------------------------------------------------------

fn compute_refinance(
    inputs: &BrrrrInputs,
    acquisition: &AcquisitionPhase,
    refinance_ltv: Rate,
) -> RefinancePhase {
    let arv = inputs
        .arv
        .unwrap_or(inputs.purchase_price + inputs.renovation_costs * VALUE_ADD_MULTIPLIER);
    let refinance_amount = arv * refinance_ltv;

    let financed_renovation = match inputs.initial_loan_type {
        InitialLoanType::HardMoney => inputs.renovation_costs,
        InitialLoanType::Conventional => Decimal::ZERO,
    };
    let initial_loan_payoff = acquisition.initial_loan_amount + financed_renovation;

    let cash_returned = refinance_amount - initial_loan_payoff;
    let cash_left_in_deal = acquisition.total_cash_invested - cash_returned;

    let capital_recovery_percent = if acquisition.total_cash_invested.is_zero() {
        Decimal::ZERO
    } else {
        cash_returned / acquisition.total_cash_invested * HUNDRED
    };

    RefinancePhase {
        arv,
        refinance_ltv,
        refinance_amount,
        initial_loan_payoff,
        cash_returned,
        cash_left_in_deal,
        capital_recovery_percent,
    }
}

// ---------------------------------------------------------------------------
// Phase 3
// ---------------------------------------------------------------------------

fn compute_stabilized(
    inputs: &BrrrrInputs,
    refinance: &RefinancePhase,
    monthly_taxes: Money,
    monthly_insurance: Money,
    rent_expense_rate: Rate,
) -> StabilizedPhase {
    let new_loan_payment = monthly_payment(
        refinance.refinance_amount,
        inputs.refinance_interest_rate_percent,
        REFINANCE_TERM_YEARS,
    );

    let monthly_operating_expenses =
        monthly_taxes + monthly_insurance + inputs.monthly_rent * rent_expense_rate;
    let monthly_cash_flow = inputs.monthly_rent - new_loan_payment - monthly_operating_expenses;
    let annual_cash_flow = monthly_cash_flow * TWELVE;

    let cash_on_cash_return = if refinance.cash_left_in_deal > Decimal::ZERO {
        CashOnCash::Finite(annual_cash_flow / refinance.cash_left_in_deal * HUNDRED)
    } else if refinance.cash_left_in_deal.is_zero() {
        CashOnCash::Infinite
    } else {
        CashOnCash::NegativeInfinite
    };

    let annual_noi = (inputs.monthly_rent - monthly_operating_expenses) * TWELVE;
    let cap_rate_percent = if refinance.arv.is_zero() {
        Decimal::ZERO
    } else {
        annual_noi / refinance.arv * HUNDRED
    };

    StabilizedPhase {
        new_loan_payment,
        monthly_operating_expenses,
        monthly_cash_flow,
        annual_cash_flow,
        cash_on_cash_return,
        cap_rate_percent,
    }
}

// ---------------------------------------------------------------------------
// Summary & timeline
// ---------------------------------------------------------------------------

fn compute_summary(
    acquisition: &AcquisitionPhase,
    refinance: &RefinancePhase,
    stabilized: &StabilizedPhase,
) -> BrrrrSummary {
    let years = Decimal::from(SUMMARY_YEARS);

    let total_roi_5yr_percent = if acquisition.total_cash_invested.is_zero() {
        Decimal::ZERO
    } else {
        let appreciation = refinance.arv * SUMMARY_APPRECIATION_RATE * years;
        (stabilized.annual_cash_flow * years + appreciation + refinance.cash_returned)
            / acquisition.total_cash_invested
            * HUNDRED
    };

    let (rating, recommendation) = rate_capital_recovery(refinance.capital_recovery_percent);

    BrrrrSummary {
        total_roi_5yr_percent,
        is_infinite_return: refinance.cash_left_in_deal <= Decimal::ZERO,
        rating,
        recommendation,
    }
}

/// Four-tier rating on the share of invested capital recovered at the
/// refinance. The thresholds are the business rules the dashboard's
/// colour coding depends on.
fn rate_capital_recovery(capital_recovery_percent: Percent) -> (BrrrrRating, String) {
    if capital_recovery_percent >= dec!(100) {
        (
            BrrrrRating::Excellent,
            "Exceptional deal: the refinance recovers ALL invested capital or more. \
             Repeat with the recovered cash."
                .to_string(),
        )
    } else if capital_recovery_percent >= dec!(80) {
        (
            BrrrrRating::Excellent,
            "Strong deal: most capital comes back at refinance and can fund the next \
             acquisition."
                .to_string(),
        )
    } else if capital_recovery_percent >= dec!(60) {
        (
            BrrrrRating::Good,
            "Solid deal: the majority of capital is recovered; acceptable for a \
             buy-and-hold portfolio."
                .to_string(),
        )
    } else if capital_recovery_percent >= dec!(40) {
        (
            BrrrrRating::Marginal,
            "Marginal deal: a significant share of capital stays trapped. Negotiate \
             the price or raise the ARV."
                .to_string(),
        )
    } else {
        (
            BrrrrRating::Poor,
            "Weak deal: most capital remains in the property. Look for a better basis \
             or a stronger ARV."
                .to_string(),
        )
    }
}

fn build_timeline(
    acquisition: &AcquisitionPhase,
    refinance: &RefinancePhase,
    stabilized: &StabilizedPhase,
    renovation_months: u32,
) -> Vec<TimelineYear> {
    let mut timeline = Vec::with_capacity(SUMMARY_YEARS as usize + 1);

    // Year 0: all cash goes out
    let mut cumulative = -acquisition.total_cash_invested;
    timeline.push(TimelineYear {
        year: 0,
        cash_flow: -acquisition.total_cash_invested,
        cumulative_return: cumulative,
    });

    // Year 1 blends the refinance payout with the rental months left
    // after renovation completes
    let rental_months = Decimal::from(12u32.saturating_sub(renovation_months));
    let year1 = refinance.cash_returned + stabilized.annual_cash_flow * rental_months / TWELVE;
    cumulative += year1;
    timeline.push(TimelineYear {
        year: 1,
        cash_flow: year1,
        cumulative_return: cumulative,
    });

    for year in 2..=SUMMARY_YEARS {
        cumulative += stabilized.annual_cash_flow;
        timeline.push(TimelineYear {
            year,
            cash_flow: stabilized.annual_cash_flow,
            cumulative_return: cumulative,
        });
    }

    timeline
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Textbook hard-money BRRRR: 150k purchase, 10% down, 40k rehab,
    /// 250k ARV at 75% LTV.
    fn textbook_inputs() -> BrrrrInputs {
        BrrrrInputs {
            purchase_price: dec!(150000),
            down_payment_percent: dec!(10),
            renovation_costs: dec!(40000),
            monthly_rent: dec!(1800),
            arv: Some(dec!(250000)),
            refinance_ltv: Some(dec!(0.75)),
            initial_loan_type: InitialLoanType::HardMoney,
            initial_interest_rate_percent: dec!(10.45),
            refinance_interest_rate_percent: dec!(7.0),
            renovation_months: None,
            closing_cost_rate: None,
            property_tax_rate: None,
            insurance_rate: None,
            maintenance_rate: None,
            management_rate: None,
            vacancy_rate: None,
        }
    }

    #[test]
    fn test_textbook_refinance_numbers() {
        let output = calculate_brrrr(&textbook_inputs());
        let r = &output.result;

        assert_eq!(r.acquisition.down_payment, dec!(15000));
        assert_eq!(r.acquisition.initial_loan_amount, dec!(135000));
        // Hard money finances the rehab draw
        assert_eq!(r.acquisition.renovation_cash, Decimal::ZERO);

        assert_eq!(r.refinance.refinance_amount, dec!(187500));
        assert_eq!(r.refinance.initial_loan_payoff, dec!(175000));
        assert_eq!(r.refinance.cash_returned, dec!(12500));
        assert_eq!(
            r.refinance.cash_left_in_deal,
            r.acquisition.total_cash_invested - dec!(12500)
        );
    }

    #[test]
    fn test_hard_money_holding_cost_build() {
        let output = calculate_brrrr(&textbook_inputs());
        let acq = &output.result.acquisition;

        // Interest-only carry on note + financed rehab:
        // (135000 + 40000) * 0.1045 / 12 = 1524.0625
        let carry = dec!(175000) * dec!(0.1045) / dec!(12);
        // Taxes 150000*0.012/12 = 150; insurance 150000*0.005/12 = 62.5;
        // vacancy utilities 200 + upkeep 150
        let expected_monthly = carry + dec!(150) + dec!(62.5) + dec!(200) + dec!(150);
        assert_eq!(acq.monthly_holding_cost, expected_monthly);
        assert_eq!(acq.total_holding_costs, expected_monthly * dec!(6));

        // Cash in: down + closing (3%) + holding, no renovation cash
        let expected_invested = dec!(15000) + dec!(4500) + acq.total_holding_costs;
        assert_eq!(acq.total_cash_invested, expected_invested);
    }

    #[test]
    fn test_conventional_carry_includes_renovation_cash() {
        let mut inputs = textbook_inputs();
        inputs.initial_loan_type = InitialLoanType::Conventional;
        inputs.initial_interest_rate_percent = dec!(7.5);

        let output = calculate_brrrr(&inputs);
        let r = &output.result;

        assert_eq!(r.acquisition.renovation_cash, dec!(40000));
        // Payoff excludes the renovation when it was paid in cash
        assert_eq!(r.refinance.initial_loan_payoff, dec!(135000));
        // Conventional carry amortises instead of paying interest only
        let amortized = monthly_payment(dec!(135000), dec!(7.5), 30);
        assert!(r.acquisition.monthly_holding_cost > amortized);
    }

    #[test]
    fn test_capital_recovery_zero_when_nothing_invested() {
        let inputs = BrrrrInputs {
            purchase_price: Decimal::ZERO,
            down_payment_percent: Decimal::ZERO,
            renovation_costs: Decimal::ZERO,
            monthly_rent: Decimal::ZERO,
            arv: Some(Decimal::ZERO),
            refinance_ltv: None,
            initial_loan_type: InitialLoanType::HardMoney,
            initial_interest_rate_percent: dec!(10.45),
            refinance_interest_rate_percent: dec!(7.0),
            renovation_months: Some(0),
            closing_cost_rate: None,
            property_tax_rate: None,
            insurance_rate: None,
            maintenance_rate: None,
            management_rate: None,
            vacancy_rate: None,
        };

        let output = calculate_brrrr(&inputs);
        let r = &output.result;

        assert_eq!(r.acquisition.total_cash_invested, Decimal::ZERO);
        assert_eq!(r.refinance.capital_recovery_percent, Decimal::ZERO);
        assert_eq!(r.summary.total_roi_5yr_percent, Decimal::ZERO);
    }

    /// With renovation_months = 0 holding costs vanish, which makes the
    /// cash-left arithmetic exact for sentinel tests.
    fn zero_holding_inputs(arv: Money) -> BrrrrInputs {
        BrrrrInputs {
            purchase_price: dec!(100000),
            down_payment_percent: dec!(10),
            renovation_costs: dec!(20000),
            monthly_rent: dec!(1500),
            arv: Some(arv),
            refinance_ltv: Some(dec!(0.75)),
            initial_loan_type: InitialLoanType::HardMoney,
            initial_interest_rate_percent: dec!(10.45),
            refinance_interest_rate_percent: dec!(7.0),
            renovation_months: Some(0),
            closing_cost_rate: None,
            property_tax_rate: None,
            insurance_rate: None,
            maintenance_rate: None,
            management_rate: None,
            vacancy_rate: None,
        }
    }

    #[test]
    fn test_infinite_return_sentinel_exact_zero() {
        // Invested = 10000 down + 3000 closing = 13000; payoff = 110000.
        // ARV 164000 * 0.75 = 123000 -> cash returned exactly 13000.
        let output = calculate_brrrr(&zero_holding_inputs(dec!(164000)));
        let r = &output.result;

        assert_eq!(r.refinance.cash_left_in_deal, Decimal::ZERO);
        assert_eq!(r.stabilized.cash_on_cash_return, CashOnCash::Infinite);
        assert!(r.summary.is_infinite_return);
    }

    #[test]
    fn test_negative_infinite_when_over_recovered() {
        // ARV 200000 -> refi 150000, returned 40000 > 13000 invested
        let output = calculate_brrrr(&zero_holding_inputs(dec!(200000)));
        let r = &output.result;

        assert!(r.refinance.cash_left_in_deal < Decimal::ZERO);
        assert_eq!(
            r.stabilized.cash_on_cash_return,
            CashOnCash::NegativeInfinite
        );
        assert!(r.summary.is_infinite_return);
    }

    #[test]
    fn test_finite_cash_on_cash() {
        // ARV 120000 -> refi 90000, returned -20000, left 33000
        let output = calculate_brrrr(&zero_holding_inputs(dec!(120000)));
        let r = &output.result;

        assert_eq!(r.refinance.cash_left_in_deal, dec!(33000));
        let coc = r.stabilized.cash_on_cash_return.as_finite().unwrap();
        assert_eq!(
            coc,
            r.stabilized.annual_cash_flow / dec!(33000) * dec!(100)
        );
        assert!(!r.summary.is_infinite_return);
        // Shortfall at refinance is surfaced as a warning
        assert!(output
            .warnings
            .iter()
            .any(|w| w.contains("brings 20000")));
    }

    #[test]
    fn test_arv_default_formula() {
        let mut inputs = textbook_inputs();
        inputs.arv = None;
        let output = calculate_brrrr(&inputs);

        // 150000 + 40000 * 1.5 = 210000
        assert_eq!(output.result.refinance.arv, dec!(210000));
        assert_eq!(output.result.refinance.refinance_amount, dec!(157500));
    }

    #[test]
    fn test_rating_monotonic_in_capital_recovery() {
        let grid = [
            dec!(-20),
            Decimal::ZERO,
            dec!(39.99),
            dec!(40),
            dec!(59.99),
            dec!(60),
            dec!(79.99),
            dec!(80),
            dec!(99.99),
            dec!(100),
            dec!(150),
        ];

        let mut previous = BrrrrRating::Poor;
        for recovery in grid {
            let (rating, _) = rate_capital_recovery(recovery);
            assert!(
                rating >= previous,
                "rating regressed at recovery {recovery}: {previous:?} -> {rating:?}"
            );
            previous = rating;
        }
    }

    #[test]
    fn test_rating_tiers_at_thresholds() {
        assert_eq!(rate_capital_recovery(dec!(100)).0, BrrrrRating::Excellent);
        assert_eq!(rate_capital_recovery(dec!(80)).0, BrrrrRating::Excellent);
        assert_eq!(rate_capital_recovery(dec!(60)).0, BrrrrRating::Good);
        assert_eq!(rate_capital_recovery(dec!(40)).0, BrrrrRating::Marginal);
        assert_eq!(rate_capital_recovery(dec!(39.99)).0, BrrrrRating::Poor);

        // The 100%+ tier carries its own message
        assert!(rate_capital_recovery(dec!(110)).1.contains("ALL"));
    }

    #[test]
    fn test_timeline_shape_and_cumulative_sums() {
        let output = calculate_brrrr(&textbook_inputs());
        let r = &output.result;

        assert_eq!(r.timeline.len(), 6);
        assert_eq!(r.timeline[0].year, 0);
        assert_eq!(
            r.timeline[0].cash_flow,
            -r.acquisition.total_cash_invested
        );

        // Year 1: refinance payout + 6 rental months out of 12
        let expected_year1 =
            r.refinance.cash_returned + r.stabilized.annual_cash_flow * dec!(6) / dec!(12);
        assert_eq!(r.timeline[1].cash_flow, expected_year1);

        // Years 2-5 are flat annual cash flow with a running total
        let mut cumulative = r.timeline[0].cash_flow + r.timeline[1].cash_flow;
        for row in &r.timeline[2..] {
            assert_eq!(row.cash_flow, r.stabilized.annual_cash_flow);
            cumulative += row.cash_flow;
            assert_eq!(row.cumulative_return, cumulative);
        }
    }

    #[test]
    fn test_renovation_longer_than_a_year_clamps_rental_months() {
        let mut inputs = textbook_inputs();
        inputs.renovation_months = Some(18);
        let output = calculate_brrrr(&inputs);
        let r = &output.result;

        // No rental income in year 1, just the refinance payout
        assert_eq!(r.timeline[1].cash_flow, r.refinance.cash_returned);
    }

    #[test]
    fn test_negative_cash_flow_warning() {
        let mut inputs = textbook_inputs();
        inputs.monthly_rent = dec!(600);
        let output = calculate_brrrr(&inputs);

        assert!(output.result.stabilized.monthly_cash_flow < Decimal::ZERO);
        assert!(output
            .warnings
            .iter()
            .any(|w| w.contains("negative")));
    }

    #[test]
    fn test_summary_roi_formula() {
        let output = calculate_brrrr(&textbook_inputs());
        let r = &output.result;

        let expected = (r.stabilized.annual_cash_flow * dec!(5)
            + r.refinance.arv * dec!(0.03) * dec!(5)
            + r.refinance.cash_returned)
            / r.acquisition.total_cash_invested
            * dec!(100);
        assert_eq!(r.summary.total_roi_5yr_percent, expected);
    }

    #[test]
    fn test_methodology_string() {
        let output = calculate_brrrr(&textbook_inputs());
        assert_eq!(
            output.methodology,
            "BRRRR Three-Phase Analysis (Acquisition, Refinance, Stabilized Rental)"
        );
    }
}
