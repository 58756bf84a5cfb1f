use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::defaults::FinancingType;
use crate::types::{Money, Percent};

const HUNDRED: Decimal = dec!(100);

/// Closing costs split into the lender-points leg and everything else
/// (title, escrow, appraisal, recording).
///
/// The totals are stored as the sum of the two legs at construction.
/// There is no independently computed "total percent" anywhere in the
/// model; re-deriving the total from a third percentage is exactly how
/// closing costs end up double-counted downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosingCostBreakdown {
    pub lender_points: Money,
    pub lender_points_percent: Percent,
    pub other_closing_costs: Money,
    pub other_closing_costs_percent: Percent,
    pub total_closing_costs: Money,
    pub total_closing_costs_percent: Percent,
}

/// Break purchase-price closing costs into lender points and other costs.
///
/// Both legs are rounded to whole currency units; the totals are the leg
/// sums, never a separate computation.
pub fn calculate_closing_costs(
    purchase_price: Money,
    lender_points_percent: Percent,
    other_closing_costs_percent: Percent,
) -> ClosingCostBreakdown {
    let lender_points = (purchase_price * lender_points_percent / HUNDRED).round_dp(0);
    let other_closing_costs = (purchase_price * other_closing_costs_percent / HUNDRED).round_dp(0);

    ClosingCostBreakdown {
        lender_points,
        lender_points_percent,
        other_closing_costs,
        other_closing_costs_percent,
        total_closing_costs: lender_points + other_closing_costs,
        total_closing_costs_percent: lender_points_percent + other_closing_costs_percent,
    }
}

/// Industry-standard (lender points %, other costs %) per financing type.
fn closing_cost_percents(financing_type: FinancingType) -> (Percent, Percent) {
    match financing_type {
        FinancingType::HardMoney => (dec!(2.5), dec!(0.5)),
        FinancingType::Conventional => (dec!(1.0), dec!(2.0)),
        FinancingType::Fha => (dec!(1.0), dec!(4.0)),
        FinancingType::Va => (dec!(0.5), dec!(2.0)),
        FinancingType::Portfolio => (dec!(1.5), dec!(2.5)),
        FinancingType::Cash => (Decimal::ZERO, dec!(1.5)),
    }
}

/// Closing-cost breakdown for a financing type, with the lender-points
/// leg optionally overridden (negotiated points, rate buy-downs).
pub fn closing_costs_for_financing_type(
    purchase_price: Money,
    financing_type: FinancingType,
    custom_lender_points_percent: Option<Percent>,
) -> ClosingCostBreakdown {
    let (lender_points_percent, other_percent) = closing_cost_percents(financing_type);
    calculate_closing_costs(
        purchase_price,
        custom_lender_points_percent.unwrap_or(lender_points_percent),
        other_percent,
    )
}
