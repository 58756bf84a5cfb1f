use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Percent};

/// Heuristic deal inputs, discriminated by strategy family. Flips are
/// judged on exit profit and speed; rentals (long-term, BRRRR
/// stabilized, house hack, STR) on yield and monthly cash flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "kebab-case")]
pub enum ScoreInput {
    Flip {
        roi_percent: Percent,
        net_profit: Money,
        timeline_months: u32,
    },
    Rental {
        roi_percent: Percent,
        monthly_cash_flow: Money,
        cap_rate_percent: Percent,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// 0-100 score plus a risk tier. The dashboard colour-codes deals off
/// both fields, so the band cutoffs and comparison operators here are
/// load-bearing business rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentScore {
    pub score: u8,
    pub risk: RiskLevel,
}

/// Score a deal from its headline metrics. Base 50, banded additions,
/// clamped to [0, 100].
pub fn investment_score(input: &ScoreInput) -> InvestmentScore {
    let mut score: i32 = 50;

    let risk = match input {
        ScoreInput::Flip {
            roi_percent,
            net_profit,
            timeline_months,
        } => {
            score += flip_roi_points(*roi_percent);
            score += flip_profit_points(*net_profit);
            score += flip_timeline_points(*timeline_months);
            flip_risk(*roi_percent, *timeline_months)
        }
        ScoreInput::Rental {
            roi_percent,
            monthly_cash_flow,
            cap_rate_percent,
        } => {
            score += rental_roi_points(*roi_percent);
            score += rental_cap_rate_points(*cap_rate_percent);
            score += rental_cash_flow_points(*monthly_cash_flow);
            rental_risk(*roi_percent, *monthly_cash_flow)
        }
    };

    InvestmentScore {
        score: score.clamp(0, 100) as u8,
        risk,
    }
}

// ---------------------------------------------------------------------------
// Flip bands
// ---------------------------------------------------------------------------

fn flip_roi_points(roi: Percent) -> i32 {
    if roi > dec!(30) {
        35
    } else if roi > dec!(25) {
        30
    } else if roi > dec!(20) {
        25
    } else if roi > dec!(15) {
        20
    } else if roi > dec!(10) {
        15
    } else if roi > dec!(5) {
        10
    } else {
        0
    }
}

fn flip_profit_points(net_profit: Money) -> i32 {
    if net_profit > dec!(100000) {
        10
    } else if net_profit > dec!(50000) {
        7
    } else if net_profit > dec!(25000) {
        4
    } else if net_profit > dec!(10000) {
        2
    } else {
        0
    }
}

fn flip_timeline_points(timeline_months: u32) -> i32 {
    if timeline_months <= 6 {
        5
    } else if timeline_months <= 9 {
        3
    } else if timeline_months <= 12 {
        1
    } else {
        0
    }
}

fn flip_risk(roi: Percent, timeline_months: u32) -> RiskLevel {
    if roi < dec!(15) || timeline_months > 12 {
        RiskLevel::High
    } else if roi < dec!(25) || timeline_months > 9 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

// ---------------------------------------------------------------------------
// Rental bands
// ---------------------------------------------------------------------------

fn rental_roi_points(roi: Percent) -> i32 {
    if roi > dec!(20) {
        25
    } else if roi > dec!(15) {
        18
    } else if roi > dec!(12) {
        14
    } else if roi > dec!(10) {
        12
    } else if roi > dec!(8) {
        8
    } else if roi > dec!(5) {
        4
    } else {
        0
    }
}

fn rental_cap_rate_points(cap_rate: Percent) -> i32 {
    if cap_rate > dec!(8) {
        15
    } else if cap_rate > dec!(7) {
        12
    } else if cap_rate > dec!(6) {
        10
    } else if cap_rate > dec!(5) {
        7
    } else if cap_rate > dec!(4) {
        4
    } else {
        0
    }
}

fn rental_cash_flow_points(monthly_cash_flow: Money) -> i32 {
    if monthly_cash_flow > dec!(500) {
        10
    } else if monthly_cash_flow > dec!(300) {
        7
    } else if monthly_cash_flow > dec!(200) {
        5
    } else if monthly_cash_flow > dec!(100) {
        3
    } else if monthly_cash_flow > Decimal::ZERO {
        1
    } else {
        0
    }
}

fn rental_risk(roi: Percent, monthly_cash_flow: Money) -> RiskLevel {
    if roi < dec!(10) || monthly_cash_flow < Decimal::ZERO {
        RiskLevel::High
    } else if roi < dec!(15) || monthly_cash_flow < dec!(200) {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
