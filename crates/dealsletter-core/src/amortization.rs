use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::DealModelError;
use crate::types::{Money, Percent};
use crate::DealModelResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const HUNDRED: Decimal = dec!(100);

/// Standard fixed-rate mortgage payment: P * r(1+r)^n / ((1+r)^n - 1)
///
/// `annual_rate_percent` is on the 0-100 scale. Zero rate falls back to
/// straight-line `P / n`. Degenerate inputs (zero term, non-positive
/// principal) yield zero rather than an error; downstream cash-flow math
/// treats "no loan" as "no payment".
pub fn monthly_payment(principal: Money, annual_rate_percent: Percent, years: u32) -> Money {
    if principal <= Decimal::ZERO || years == 0 {
        return Decimal::ZERO;
    }

    let total_months = years * 12;
    let monthly_rate = annual_rate_percent / HUNDRED / MONTHS_PER_YEAR;

    if monthly_rate.is_zero() {
        return principal / Decimal::from(total_months);
    }

    // (1 + r)^n via iterative multiplication
    let mut compound = Decimal::ONE;
    for _ in 0..total_months {
        compound *= Decimal::ONE + monthly_rate;
    }

    let numerator = principal * monthly_rate * compound;
    let denominator = compound - Decimal::ONE;

    if denominator.is_zero() {
        return principal / Decimal::from(total_months);
    }

    numerator / denominator
}

/// Interest-only monthly carry: principal * annual rate / 12.
pub fn interest_only_payment(principal: Money, annual_rate_percent: Percent) -> Money {
    if principal <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    principal * annual_rate_percent / HUNDRED / MONTHS_PER_YEAR
}

/// Interest/principal decomposition of a single payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSplit {
    /// 1-based payment number.
    pub period: u32,
    pub interest: Money,
    pub principal: Money,
    /// Outstanding balance after this payment.
    pub balance_after: Money,
}

/// Interest/principal split for the `period`-th payment (1-based), found
/// by walking the schedule from origination.
pub fn payment_split(
    principal: Money,
    annual_rate_percent: Percent,
    years: u32,
    period: u32,
) -> PaymentSplit {
    let payment = monthly_payment(principal, annual_rate_percent, years);
    let monthly_rate = annual_rate_percent / HUNDRED / MONTHS_PER_YEAR;

    let mut balance = principal.max(Decimal::ZERO);
    let mut interest = Decimal::ZERO;
    let mut principal_part = Decimal::ZERO;

    for _ in 0..period.min(years * 12) {
        interest = balance * monthly_rate;
        principal_part = payment - interest;
        balance -= principal_part;
        if balance < Decimal::ZERO {
            principal_part += balance;
            balance = Decimal::ZERO;
        }
    }

    PaymentSplit {
        period,
        interest,
        principal: principal_part,
        balance_after: balance,
    }
}

/// Outstanding balance after `months_paid` payments, clamped at zero.
pub fn remaining_balance(
    principal: Money,
    annual_rate_percent: Percent,
    years: u32,
    months_paid: u32,
) -> Money {
    let total_months = years * 12;
    if principal <= Decimal::ZERO || total_months == 0 {
        return Decimal::ZERO;
    }

    let monthly_rate = annual_rate_percent / HUNDRED / MONTHS_PER_YEAR;

    if monthly_rate.is_zero() {
        let paid = principal * Decimal::from(months_paid.min(total_months))
            / Decimal::from(total_months);
        return principal - paid;
    }

    let payment = monthly_payment(principal, annual_rate_percent, years);
    let mut balance = principal;
    for _ in 0..months_paid.min(total_months) {
        let interest = balance * monthly_rate;
        balance -= payment - interest;
        if balance < Decimal::ZERO {
            return Decimal::ZERO;
        }
    }

    balance
}

/// A fixed-rate loan, validated at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    pub annual_rate_percent: Percent,
    pub term_years: u32,
    /// Interest-only loans (hard money) carry no principal amortisation.
    #[serde(default)]
    pub interest_only: bool,
}

impl LoanTerms {
    pub fn new(
        principal: Money,
        annual_rate_percent: Percent,
        term_years: u32,
        interest_only: bool,
    ) -> DealModelResult<Self> {
        if principal < Decimal::ZERO {
            return Err(DealModelError::InvalidInput {
                field: "principal".into(),
                reason: "Principal must be non-negative".into(),
            });
        }
        if annual_rate_percent < Decimal::ZERO {
            return Err(DealModelError::InvalidInput {
                field: "annual_rate_percent".into(),
                reason: "Interest rate must be non-negative".into(),
            });
        }
        if term_years == 0 {
            return Err(DealModelError::InvalidInput {
                field: "term_years".into(),
                reason: "Loan term must be at least 1 year".into(),
            });
        }

        Ok(LoanTerms {
            principal,
            annual_rate_percent,
            term_years,
            interest_only,
        })
    }

    /// Monthly payment under these terms.
    pub fn monthly_payment(&self) -> Money {
        if self.interest_only {
            interest_only_payment(self.principal, self.annual_rate_percent)
        } else {
            monthly_payment(self.principal, self.annual_rate_percent, self.term_years)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_monthly_payment_30yr_conventional() {
        // $750k at 6.5% over 30 years, expected ~$4,740/mo
        let payment = monthly_payment(dec!(750000), dec!(6.5), 30);
        assert!(
            payment > dec!(4700) && payment < dec!(4800),
            "Monthly payment {} outside expected range",
            payment
        );
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        // $360k / 360 months = $1000/mo
        let payment = monthly_payment(dec!(360000), Decimal::ZERO, 30);
        assert_eq!(payment, dec!(1000));
    }

    #[test]
    fn test_zero_term_yields_zero() {
        assert_eq!(monthly_payment(dec!(100000), dec!(7.5), 0), Decimal::ZERO);
    }

    #[test]
    fn test_zero_principal_yields_zero() {
        assert_eq!(monthly_payment(Decimal::ZERO, dec!(7.5), 30), Decimal::ZERO);
    }

    #[test]
    fn test_payment_positive_for_positive_rate() {
        let payment = monthly_payment(dec!(200000), dec!(10.45), 1);
        assert!(payment > Decimal::ZERO);
        // A 1-year note repays more than principal/12 when interest accrues
        assert!(payment > dec!(200000) / dec!(12));
    }

    #[test]
    fn test_interest_only_payment() {
        // $135k at 10.45%: 135000 * 0.1045 / 12 = 1175.625
        let carry = interest_only_payment(dec!(135000), dec!(10.45));
        assert_eq!(carry, dec!(1175.625));
    }

    #[test]
    fn test_payment_split_first_period() {
        let split = payment_split(dec!(200000), dec!(6.0), 30, 1);

        // First month interest = 200000 * 0.005 = 1000
        assert_eq!(split.interest, dec!(1000));

        let payment = monthly_payment(dec!(200000), dec!(6.0), 30);
        assert_eq!(split.principal, payment - dec!(1000));
        assert_eq!(split.balance_after, dec!(200000) - split.principal);
    }

    #[test]
    fn test_payment_split_shifts_toward_principal() {
        let early = payment_split(dec!(200000), dec!(6.0), 30, 1);
        let late = payment_split(dec!(200000), dec!(6.0), 30, 300);

        assert!(late.interest < early.interest);
        assert!(late.principal > early.principal);
    }

    #[test]
    fn test_remaining_balance_decreases() {
        let b0 = remaining_balance(dec!(200000), dec!(6.0), 30, 0);
        let b60 = remaining_balance(dec!(200000), dec!(6.0), 30, 60);
        let b360 = remaining_balance(dec!(200000), dec!(6.0), 30, 360);

        assert_eq!(b0, dec!(200000));
        assert!(b60 < b0 && b60 > Decimal::ZERO);
        // Fully paid at maturity (within a rounding whisker)
        assert!(b360.abs() < dec!(0.01), "terminal balance {}", b360);
    }

    #[test]
    fn test_remaining_balance_zero_rate() {
        // Straight-line: half paid after half the term
        let balance = remaining_balance(dec!(120000), Decimal::ZERO, 10, 60);
        assert_eq!(balance, dec!(60000));
    }

    #[test]
    fn test_loan_terms_validation() {
        assert!(LoanTerms::new(dec!(100000), dec!(7.5), 30, false).is_ok());
        assert!(LoanTerms::new(dec!(-1), dec!(7.5), 30, false).is_err());
        assert!(LoanTerms::new(dec!(100000), dec!(-0.5), 30, false).is_err());
        assert!(LoanTerms::new(dec!(100000), dec!(7.5), 0, false).is_err());
    }

    #[test]
    fn test_loan_terms_interest_only_flag() {
        let hard_money = LoanTerms::new(dec!(135000), dec!(10.45), 1, true).unwrap();
        assert_eq!(hard_money.monthly_payment(), dec!(1175.625));

        let conventional = LoanTerms::new(dec!(135000), dec!(10.45), 1, false).unwrap();
        assert!(conventional.monthly_payment() > hard_money.monthly_payment());
    }
}
