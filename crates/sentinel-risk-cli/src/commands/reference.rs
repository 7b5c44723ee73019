use clap::Args;
use serde_json::Value;
use std::path::Path;

use sentinel_risk_core::ReferenceData;

/// Arguments for printing reference tables
#[derive(Args)]
pub struct ReferenceArgs {
    /// Path to a JSON file with custom reference tables; builtin
    /// tables are shown when omitted
    #[arg(long)]
    pub reference: Option<String>,
}

pub fn run_reference(args: ReferenceArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let tables = match args.reference {
        Some(ref path) => ReferenceData::from_json_file(Path::new(path))?,
        None => ReferenceData::builtin().clone(),
    };
    Ok(serde_json::to_value(tables)?)
}
