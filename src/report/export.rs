//! CSV and JSON export of scenario reports

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{CalculatorError, Result};
use crate::projection::YearRow;
use crate::scenario::ScenarioReport;

/// One CSV record: a year row tagged with its run number and deposit variant
#[derive(Debug, Serialize)]
pub struct ExportRecord {
    pub run: u32,
    pub variant: &'static str,
    pub year: u32,
    pub year_end_balance: f64,
    pub year_end_interest: f64,
}

impl ExportRecord {
    fn new(run: u32, variant: &'static str, row: &YearRow) -> Self {
        Self {
            run,
            variant,
            year: row.year,
            year_end_balance: row.year_end_balance,
            year_end_interest: row.year_end_interest,
        }
    }
}

/// CSV sink that stays open across scenarios
///
/// The header is written once; each `write_scenario` call appends its rows
/// under the next run number, starting at 1.
pub struct ScenarioCsvWriter<W: Write> {
    writer: csv::Writer<W>,
    runs: u32,
}

impl ScenarioCsvWriter<File> {
    /// Create (or truncate) `path` once for the whole session
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> ScenarioCsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
            runs: 0,
        }
    }

    /// Append both variants of one scenario, no-deposit rows first.
    /// Returns the run number the rows were tagged with.
    pub fn write_scenario(&mut self, scenario: &ScenarioReport) -> Result<u32> {
        self.runs += 1;

        for report in scenario.reports() {
            let label = report.variant.label();
            for row in &report.rows {
                self.writer.serialize(ExportRecord::new(self.runs, label, row))?;
            }
        }

        self.writer.flush()?;
        Ok(self.runs)
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| CalculatorError::Io(e.into_error()))
    }
}

/// Write a single scenario as CSV
pub fn write_csv<W: Write>(writer: W, scenario: &ScenarioReport) -> Result<()> {
    ScenarioCsvWriter::new(writer).write_scenario(scenario)?;
    Ok(())
}

#[derive(Serialize)]
struct JsonExport<'a> {
    generated_at: DateTime<Utc>,
    total_contributions: f64,
    #[serde(flatten)]
    scenario: &'a ScenarioReport,
}

/// Pretty-printed JSON document with a generation timestamp
pub fn to_json(scenario: &ScenarioReport) -> Result<String> {
    let export = JsonExport {
        generated_at: Utc::now(),
        total_contributions: scenario.total_contributions(),
        scenario,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}
