//! `analyze` command: import a CSV and print the financial analysis

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use tracing::warn;

use crate::display::format_analysis;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{CurrencyFormat, Period};
use crate::services::{AnalysisService, ImportService};
use crate::storage::Storage;

/// Output format for the analysis
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Arguments for `analyze`
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// CSV file with a `date,description,amount,type` header
    pub file: PathBuf,

    /// First day to include (YYYY-MM-DD); needs --end
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD); needs --start
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Handle the analyze command
pub fn handle_analyze_command(
    storage: &Storage,
    currency: &CurrencyFormat,
    args: AnalyzeArgs,
) -> SpendwiseResult<()> {
    let result = ImportService::new(storage).import_file(&args.file)?;

    for (row, message) in &result.errors {
        eprintln!("Row {}: {}", row, message);
    }

    let (start, end) = match (args.start, args.end) {
        (Some(start), Some(end)) => {
            let period = Period::from_dates(start, end)?;
            (Some(period.start()), Some(period.end()))
        }
        (None, None) => (None, None),
        _ => {
            warn!("Both --start and --end are needed to filter; analyzing everything");
            (None, None)
        }
    };

    let analysis = AnalysisService::new(storage).analysis(start, end)?;

    match args.format {
        OutputFormat::Text => {
            println!(
                "Imported {} transaction(s), {} row(s) skipped\n",
                result.imported,
                result.error_count()
            );
            print!("{}", format_analysis(&analysis, currency));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&analysis)
                .map_err(|e| SpendwiseError::Json(e.to_string()))?;
            println!("{}", json);
        }
    }

    Ok(())
}
