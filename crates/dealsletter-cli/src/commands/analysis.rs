use clap::Args;
use serde_json::Value;

use dealsletter_core::brrrr::{self, BrrrrInputs};
use dealsletter_core::projection::{self, ProjectionInput};
use dealsletter_core::scoring::{self, ScoreInput};

use crate::input;

#[derive(Args)]
pub struct BrrrrArgs {
    /// JSON input file (falls back to piped stdin)
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Args)]
pub struct ProjectArgs {
    /// JSON input file (falls back to piped stdin)
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Args)]
pub struct ScoreArgs {
    /// JSON input file (falls back to piped stdin)
    #[arg(long)]
    pub input: Option<String>,
}

fn read_input<T: serde::de::DeserializeOwned>(
    path: &Option<String>,
    what: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        input::file::read_json(path)
    } else if let Some(data) = input::stdin::read_stdin()? {
        Ok(serde_json::from_value(data)?)
    } else {
        Err(format!("--input <file.json> or stdin required for {what}").into())
    }
}

pub fn run_brrrr(args: BrrrrArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs: BrrrrInputs = read_input(&args.input, "BRRRR analysis")?;
    let output = brrrr::calculate_brrrr(&inputs);
    Ok(serde_json::to_value(output)?)
}

pub fn run_project(args: ProjectArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs: ProjectionInput = read_input(&args.input, "hold projection")?;
    let output = projection::project_years(&inputs);
    Ok(serde_json::to_value(output)?)
}

pub fn run_score(args: ScoreArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs: ScoreInput = read_input(&args.input, "deal scoring")?;
    let score = scoring::investment_score(&inputs);
    Ok(serde_json::to_value(score)?)
}
