use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use dealsletter_core::financing::{
    closing_costs_for_financing_type, financing_defaults, validate_financing_params,
    FinancingType, Strategy,
};

use super::parse_kebab;

#[derive(Args)]
pub struct FinancingDefaultsArgs {
    /// Strategy: flip | brrrr | rental | house-hack | commercial | short-term-rental
    #[arg(long)]
    pub strategy: String,
}

#[derive(Args)]
pub struct ClosingCostsArgs {
    /// Purchase price
    #[arg(long)]
    pub price: Decimal,

    /// Financing type: hard-money | conventional | fha | va | portfolio | cash
    #[arg(long)]
    pub financing_type: String,

    /// Override the lender-points leg (percent of price)
    #[arg(long)]
    pub lender_points: Option<Decimal>,
}

#[derive(Args)]
pub struct ValidateFinancingArgs {
    /// Down payment as a percent of price (0-100)
    #[arg(long)]
    pub down_payment: Decimal,

    /// Annual interest rate (0-100)
    #[arg(long)]
    pub rate: Decimal,

    /// Loan term in years
    #[arg(long)]
    pub term: u32,

    /// Strategy the parameters are meant for
    #[arg(long)]
    pub strategy: String,
}

pub fn run_financing_defaults(
    args: FinancingDefaultsArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let strategy: Strategy = parse_kebab("strategy", &args.strategy)?;
    Ok(serde_json::to_value(financing_defaults(strategy))?)
}

pub fn run_closing_costs(args: ClosingCostsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let financing_type: FinancingType = parse_kebab("financing type", &args.financing_type)?;
    let breakdown =
        closing_costs_for_financing_type(args.price, financing_type, args.lender_points);
    Ok(serde_json::to_value(breakdown)?)
}

pub fn run_validate_financing(
    args: ValidateFinancingArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let strategy: Strategy = parse_kebab("strategy", &args.strategy)?;
    let report = validate_financing_params(args.down_payment, args.rate, args.term, strategy);
    Ok(serde_json::to_value(report)?)
}
