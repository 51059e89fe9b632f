//! Investment Calculator CLI
//!
//! Interactive loop: read a scenario, echo it, print both yearly reports,
//! then offer to run another.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use investment_calculator::{
    input::{InputValidator, PROMPT_PRESS_ENTER},
    report::{self, ScenarioCsvWriter, GOODBYE, RUN_AGAIN_PROMPT},
    run_scenario, CalculatorError,
};
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "investment_calculator")]
#[command(about = "Project compound interest growth with and without monthly deposits")]
struct Args {
    /// Run a single scenario without asking to run another
    #[arg(long)]
    once: bool,

    /// Skip the "Press Enter to continue" pause before the reports
    #[arg(long)]
    no_pause: bool,

    /// Also write every scenario's yearly rows to this CSV file, tagged by run
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stdin = io::stdin();
    let mut validator = InputValidator::new(stdin.lock(), io::stdout());

    let mut csv_export = match &args.csv {
        Some(path) => Some(
            ScenarioCsvWriter::create(path)
                .with_context(|| format!("creating CSV file {}", path.display()))?,
        ),
        None => None,
    };

    loop {
        report::write_title(validator.writer_mut())?;

        let parameters = match validator.read_scenario() {
            Ok(parameters) => parameters,
            Err(CalculatorError::EndOfInput { prompt }) => {
                warn!("Input ended at prompt {:?}", prompt);
                writeln!(validator.writer_mut())?;
                anyhow::bail!("input ended before a complete scenario was entered");
            }
            Err(e) => return Err(e.into()),
        };
        info!("Scenario accepted: {:?}", parameters);

        report::write_input_summary(validator.writer_mut(), &parameters)?;
        if !args.no_pause {
            validator.wait_for_enter(PROMPT_PRESS_ENTER)?;
        }

        let scenario = run_scenario(&parameters);
        report::write_scenario_report(validator.writer_mut(), &scenario)?;

        if let (Some(export), Some(path)) = (csv_export.as_mut(), &args.csv) {
            let run = export
                .write_scenario(&scenario)
                .with_context(|| format!("writing CSV to {}", path.display()))?;
            info!("Run {} rows appended to {}", run, path.display());
        }

        if args.once || !validator.confirm(RUN_AGAIN_PROMPT)? {
            break;
        }
    }

    writeln!(validator.writer_mut(), "{}", GOODBYE)?;
    Ok(())
}
