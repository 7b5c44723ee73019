use clap::Args;
use serde_json::Value;
use std::path::Path;

use sentinel_risk_core::assessment::{self, AssessmentInput};
use sentinel_risk_core::ReferenceData;

use crate::input;

/// Arguments for transaction risk assessment
#[derive(Args)]
pub struct AssessArgs {
    /// Path to JSON input file with transaction and customer
    #[arg(long)]
    pub input: Option<String>,

    /// Path to a JSON file with custom reference tables
    #[arg(long)]
    pub reference: Option<String>,
}

pub fn run_assess(args: AssessArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let assess_input: AssessmentInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required for assessment".into());
    };

    let result = match args.reference {
        Some(ref path) => {
            let reference = ReferenceData::from_json_file(Path::new(path))?;
            assessment::evaluate_with_reference(&assess_input, &reference)?
        }
        None => assessment::evaluate(&assess_input)?,
    };

    Ok(serde_json::to_value(result)?)
}
