use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::closing_costs::{calculate_closing_costs, ClosingCostBreakdown};
use crate::types::{Money, Percent, Rate};

/// Investment strategy selected by the analyst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Flip,
    Brrrr,
    Rental,
    HouseHack,
    Commercial,
    ShortTermRental,
}

/// Loan product backing a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinancingType {
    HardMoney,
    Conventional,
    Fha,
    Va,
    Portfolio,
    Cash,
}

/// A complete financing profile for one loan.
///
/// Closing costs are carried as the two percent legs; a currency
/// breakdown for a concrete purchase price comes from
/// [`FinancingDefaults::closing_costs`] so the sum-of-legs invariant is
/// established in exactly one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancingDefaults {
    pub financing_type: FinancingType,
    pub down_payment_percent: Percent,
    pub interest_rate_percent: Percent,
    pub loan_term_years: u32,
    pub lender_points_percent: Percent,
    pub other_closing_costs_percent: Percent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmi_required: Option<bool>,
    pub description: String,
}

impl FinancingDefaults {
    /// Price this profile's closing costs for a concrete purchase.
    pub fn closing_costs(&self, purchase_price: Money) -> ClosingCostBreakdown {
        calculate_closing_costs(
            purchase_price,
            self.lender_points_percent,
            self.other_closing_costs_percent,
        )
    }
}

/// BRRRR bundles two loans: the hard-money acquisition note and the
/// conventional cash-out refinance that retires it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrrrrFinancingDefaults {
    pub acquisition: FinancingDefaults,
    pub refinance: FinancingDefaults,
    /// Refinance loan-to-value against ARV, as a 0-1 fraction.
    pub refinance_ltv: Rate,
}

/// Strategy-discriminated financing lookup result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyFinancing {
    Standard(FinancingDefaults),
    Brrrr(BrrrrFinancingDefaults),
}

#[allow(clippy::too_many_arguments)]
fn profile(
    financing_type: FinancingType,
    down_payment_percent: Percent,
    interest_rate_percent: Percent,
    loan_term_years: u32,
    lender_points_percent: Percent,
    other_closing_costs_percent: Percent,
    pmi_required: Option<bool>,
    description: &str,
) -> FinancingDefaults {
    FinancingDefaults {
        financing_type,
        down_payment_percent,
        interest_rate_percent,
        loan_term_years,
        lender_points_percent,
        other_closing_costs_percent,
        pmi_required,
        description: description.to_string(),
    }
}

/// Industry-standard financing defaults per strategy.
///
/// Total over the strategy enum; there is no failure mode. Strategies
/// added later fall back to `conventional_fallback`.
pub fn financing_defaults(strategy: Strategy) -> StrategyFinancing {
    match strategy {
        Strategy::Flip => StrategyFinancing::Standard(profile(
            FinancingType::HardMoney,
            dec!(10),
            dec!(10.45),
            1,
            dec!(2.5),
            dec!(0.5),
            None,
            "Hard money purchase + rehab loan, repaid at resale",
        )),
        Strategy::Brrrr => StrategyFinancing::Brrrr(BrrrrFinancingDefaults {
            acquisition: profile(
                FinancingType::HardMoney,
                dec!(10),
                dec!(10.45),
                1,
                dec!(2.5),
                dec!(0.5),
                None,
                "Hard money acquisition note, rehab draws lender-financed",
            ),
            refinance: profile(
                FinancingType::Conventional,
                dec!(25),
                dec!(7.0),
                30,
                dec!(1.0),
                dec!(2.0),
                None,
                "Conventional cash-out refinance against ARV",
            ),
            refinance_ltv: dec!(0.75),
        }),
        Strategy::Rental => StrategyFinancing::Standard(profile(
            FinancingType::Conventional,
            dec!(25),
            dec!(7.5),
            30,
            dec!(1.0),
            dec!(2.0),
            None,
            "Conventional investment-property mortgage",
        )),
        Strategy::HouseHack => StrategyFinancing::Standard(profile(
            FinancingType::Fha,
            dec!(3.5),
            dec!(6.5),
            30,
            dec!(1.0),
            dec!(4.0),
            Some(true),
            "FHA owner-occupied loan, PMI required below 20% equity",
        )),
        Strategy::Commercial => StrategyFinancing::Standard(profile(
            FinancingType::Portfolio,
            dec!(25),
            dec!(8.25),
            25,
            dec!(1.5),
            dec!(2.5),
            None,
            "Portfolio lender commercial mortgage",
        )),
        Strategy::ShortTermRental => StrategyFinancing::Standard(profile(
            FinancingType::Conventional,
            dec!(20),
            dec!(7.75),
            30,
            dec!(1.0),
            dec!(2.0),
            None,
            "Conventional second-home / STR mortgage",
        )),
    }
}

/// Generic 20%-down conventional profile backing any unmapped strategy.
pub fn conventional_fallback() -> FinancingDefaults {
    profile(
        FinancingType::Conventional,
        dec!(20),
        dec!(7.25),
        30,
        dec!(1.0),
        dec!(2.0),
        None,
        "Generic conventional financing",
    )
}
