//! Run one scenario non-interactively
//!
//! Every value is checked with the same rules as the interactive prompts, but
//! a bad value is reported as a usage error instead of being re-asked.
//! Output is the console table (default), CSV or JSON.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use investment_calculator::{
    input::{DEFAULT_MAX_AMOUNT, MAX_INTEREST_RATE_PERCENT, MAX_YEARS, MIN_YEARS},
    parse_amount, parse_integer, report, run_scenario, ScenarioParameters,
};
use log::info;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "project_scenario")]
#[command(about = "Project a single compound interest scenario")]
struct Args {
    /// Initial investment amount
    #[arg(long, value_parser = amount_arg)]
    initial_investment: f64,

    /// Amount deposited at the start of every month
    #[arg(long, default_value = "0", value_parser = amount_arg)]
    monthly_deposit: f64,

    /// Annual nominal interest rate in percent (5 means 5%)
    #[arg(long, value_parser = rate_arg)]
    annual_rate: f64,

    /// Projection horizon in whole years
    #[arg(long, value_parser = years_arg)]
    years: u32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(long, short, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn amount_arg(text: &str) -> Result<f64, String> {
    parse_amount(text, DEFAULT_MAX_AMOUNT).map_err(|e| e.to_string())
}

fn rate_arg(text: &str) -> Result<f64, String> {
    parse_amount(text, MAX_INTEREST_RATE_PERCENT).map_err(|e| e.to_string())
}

fn years_arg(text: &str) -> Result<u32, String> {
    parse_integer(text, MIN_YEARS, MAX_YEARS).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let parameters = ScenarioParameters::new(
        args.initial_investment,
        args.monthly_deposit,
        args.annual_rate,
        args.years,
    )?;
    let scenario = run_scenario(&parameters);

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        OutputFormat::Table => {
            report::write_input_summary(&mut out, &parameters)?;
            report::write_scenario_report(&mut out, &scenario)?;
        }
        OutputFormat::Csv => report::write_csv(&mut out, &scenario)?,
        OutputFormat::Json => writeln!(out, "{}", report::to_json(&scenario)?)?,
    }
    out.flush()?;

    if let Some(path) = &args.output {
        info!("Report written to {}", path.display());
    }
    Ok(())
}
