use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use dealsletter_core::amortization::{payment_split, LoanTerms};

#[derive(Args)]
pub struct AmortizeArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Decimal,

    /// Annual interest rate (0-100)
    #[arg(long)]
    pub rate: Decimal,

    /// Term in years
    #[arg(long)]
    pub years: u32,

    /// Interest-only loan (hard money)
    #[arg(long, default_value_t = false)]
    pub interest_only: bool,

    /// Also show the split for this payment number (1-based)
    #[arg(long)]
    pub month: Option<u32>,
}

pub fn run_amortize(args: AmortizeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = LoanTerms::new(args.principal, args.rate, args.years, args.interest_only)?;
    let payment = terms.monthly_payment();

    let mut result = json!({
        "monthly_payment": payment,
        "annual_debt_service": payment * Decimal::from(12u32),
    });

    if let Some(month) = args.month {
        if !args.interest_only {
            let split = payment_split(args.principal, args.rate, args.years, month);
            result["split"] = serde_json::to_value(split)?;
        }
    }

    Ok(result)
}
