use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::defaults::Strategy;
use crate::types::Percent;

/// Advisory check result. Warnings annotate the analysis for the UI;
/// they never block or alter a computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancingValidation {
    pub is_valid: bool,
    pub warnings: Vec<String>,
}

/// Sanity-check financing parameters against the selected strategy.
pub fn validate_financing_params(
    down_payment_percent: Percent,
    interest_rate_percent: Percent,
    loan_term_years: u32,
    strategy: Strategy,
) -> FinancingValidation {
    let mut warnings = Vec::new();

    if down_payment_percent < Decimal::ZERO {
        warnings.push("Down payment percent is negative".to_string());
    } else if down_payment_percent.is_zero() && strategy != Strategy::HouseHack {
        // VA is the only true zero-down product; flag it everywhere else
        warnings.push(
            "0% down payment is only available on VA loans; verify eligibility".to_string(),
        );
    }

    if strategy == Strategy::HouseHack && down_payment_percent < dec!(3.5) {
        warnings.push(format!(
            "House hack down payment of {down_payment_percent}% is below the FHA minimum of 3.5%"
        ));
    }

    if strategy == Strategy::Flip && loan_term_years > 2 {
        warnings.push(format!(
            "Flip loan term of {loan_term_years} years is unusually long; hard money runs 6-24 months"
        ));
    }

    if interest_rate_percent > dec!(15) {
        warnings.push(format!(
            "Interest rate of {interest_rate_percent}% exceeds 15%; verify the quote"
        ));
    } else if interest_rate_percent < dec!(2) {
        warnings.push(format!(
            "Interest rate of {interest_rate_percent}% is below 2%; likely a data-entry error"
        ));
    }

    FinancingValidation {
        is_valid: warnings.is_empty(),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_rental_params() {
        let v = validate_financing_params(dec!(25), dec!(7.5), 30, Strategy::Rental);
        assert!(v.is_valid);
        assert!(v.warnings.is_empty());
    }

    #[test]
    fn test_house_hack_below_fha_minimum() {
        let v = validate_financing_params(dec!(3), dec!(6.5), 30, Strategy::HouseHack);
        assert!(!v.is_valid);
        assert!(v.warnings.iter().any(|w| w.contains("FHA minimum")));
    }

    #[test]
    fn test_flip_term_too_long() {
        let v = validate_financing_params(dec!(10), dec!(10.45), 5, Strategy::Flip);
        assert!(!v.is_valid);
        assert!(v.warnings.iter().any(|w| w.contains("unusually long")));
    }

    #[test]
    fn test_rate_above_15_percent() {
        let v = validate_financing_params(dec!(20), dec!(16.5), 30, Strategy::Rental);
        assert!(v.warnings.iter().any(|w| w.contains("exceeds 15%")));
    }

    #[test]
    fn test_rate_below_2_percent() {
        let v = validate_financing_params(dec!(20), dec!(0.5), 30, Strategy::Rental);
        assert!(v.warnings.iter().any(|w| w.contains("below 2%")));
    }

    #[test]
    fn test_advisory_only_multiple_warnings() {
        // Every rule can fire at once; nothing panics, nothing blocks
        let v = validate_financing_params(dec!(-5), dec!(20), 10, Strategy::Flip);
        assert!(!v.is_valid);
        assert!(v.warnings.len() >= 3);
    }
}
