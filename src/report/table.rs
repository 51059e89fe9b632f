//! Fixed-width console rendering

use std::io::Write;

use crate::error::Result;
use crate::projection::{DepositVariant, ProjectionReport, YearRow};
use crate::scenario::{ScenarioParameters, ScenarioReport};

const YEAR_WIDTH: usize = 6;
const BALANCE_WIDTH: usize = 22;
const INTEREST_WIDTH: usize = 28;

/// Total width of the yearly table
pub const TABLE_WIDTH: usize = YEAR_WIDTH + BALANCE_WIDTH + INTEREST_WIDTH;

pub const RUN_AGAIN_PROMPT: &str = "\n\nWould you like to run another scenario? (Y/N): ";
pub const GOODBYE: &str = "\nThank you for using Airgead Banking Investment Calculator. Goodbye!";

pub fn write_title<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n=== Airgead Banking Investment Calculator ===")?;
    writeln!(
        out,
        "This program demonstrates compound interest growth with and without monthly deposits."
    )?;
    Ok(())
}

/// Echo the validated inputs back before the reports
pub fn write_input_summary<W: Write>(out: &mut W, parameters: &ScenarioParameters) -> Result<()> {
    writeln!(out, "\n-------------------- Input Summary --------------------")?;
    writeln!(out, " Initial Investment : ${:.2}", parameters.initial_investment())?;
    writeln!(out, " Monthly Deposit    : ${:.2}", parameters.monthly_deposit())?;
    writeln!(out, " Annual Interest    :  {:.2}%", parameters.annual_interest_rate_percent())?;
    writeln!(out, " Number of Years    :  {}", parameters.number_of_years())?;
    writeln!(out, "{}", "-".repeat(55))?;
    Ok(())
}

pub fn report_banner(variant: DepositVariant) -> &'static str {
    match variant {
        DepositVariant::NoMonthlyDeposits => {
            "================== Yearly Report (No Monthly Deposits) =================="
        }
        DepositVariant::WithMonthlyDeposits => {
            "================== Yearly Report (With Monthly Deposits) ================="
        }
    }
}

pub fn write_report_header<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "{:<yw$}{:>bw$}{:>iw$}",
        "Year",
        "Year End Balance",
        "Year End Earned Interest",
        yw = YEAR_WIDTH,
        bw = BALANCE_WIDTH,
        iw = INTEREST_WIDTH,
    )?;
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;
    Ok(())
}

pub fn format_year_row(row: &YearRow) -> String {
    format!(
        "{:<yw$}{:>bw$.2}{:>iw$.2}",
        row.year,
        row.year_end_balance,
        row.year_end_interest,
        yw = YEAR_WIDTH,
        bw = BALANCE_WIDTH,
        iw = INTEREST_WIDTH,
    )
}

/// Banner, header and one line per year
pub fn write_report<W: Write>(out: &mut W, report: &ProjectionReport) -> Result<()> {
    writeln!(out, "\n\n{}", report_banner(report.variant))?;
    write_report_header(out)?;
    for row in &report.rows {
        writeln!(out, "{}", format_year_row(row))?;
    }
    Ok(())
}

/// Both variants, no-deposit first
pub fn write_scenario_report<W: Write>(out: &mut W, scenario: &ScenarioReport) -> Result<()> {
    for report in scenario.reports() {
        write_report(out, report)?;
    }
    Ok(())
}
