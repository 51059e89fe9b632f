//! Scenario parameters and the paired no-deposit / with-deposit run
//!
//! A `ScenarioParameters` value can only be built through `new`, which applies
//! the same bounds as the interactive validator, so the projection engine never
//! sees an out-of-range input.

use serde::Serialize;

use crate::error::{CalculatorError, Result};
use crate::input::{
    Rejection, DEFAULT_MAX_AMOUNT, MAX_INTEREST_RATE_PERCENT, MAX_YEARS, MIN_YEARS,
};
use crate::projection::{
    DepositVariant, ProjectionEngine, ProjectionReport, MONTHS_PER_YEAR,
};

/// Validated inputs for one projection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioParameters {
    initial_investment: f64,
    monthly_deposit: f64,
    annual_interest_rate_percent: f64,
    number_of_years: u32,
}

impl ScenarioParameters {
    /// Build parameters, rejecting any value outside its allowed range
    pub fn new(
        initial_investment: f64,
        monthly_deposit: f64,
        annual_interest_rate_percent: f64,
        number_of_years: u32,
    ) -> Result<Self> {
        check_amount("initial investment", initial_investment, DEFAULT_MAX_AMOUNT)?;
        check_amount("monthly deposit", monthly_deposit, DEFAULT_MAX_AMOUNT)?;
        check_amount(
            "annual interest rate",
            annual_interest_rate_percent,
            MAX_INTEREST_RATE_PERCENT,
        )?;

        if !(MIN_YEARS..=MAX_YEARS).contains(&number_of_years) {
            return Err(CalculatorError::InvalidParameter {
                field: "number of years",
                reason: Rejection::OutOfRange { min: MIN_YEARS, max: MAX_YEARS },
            });
        }

        Ok(Self {
            initial_investment,
            monthly_deposit,
            annual_interest_rate_percent,
            number_of_years,
        })
    }

    pub fn initial_investment(&self) -> f64 {
        self.initial_investment
    }

    pub fn monthly_deposit(&self) -> f64 {
        self.monthly_deposit
    }

    /// Annual nominal rate in percent units (5.0 means 5%)
    pub fn annual_interest_rate_percent(&self) -> f64 {
        self.annual_interest_rate_percent
    }

    pub fn number_of_years(&self) -> u32 {
        self.number_of_years
    }

    /// Rate applied each month: (annual percent / 100) / 12
    pub fn monthly_rate(&self) -> f64 {
        (self.annual_interest_rate_percent / 100.0) / f64::from(MONTHS_PER_YEAR)
    }
}

fn check_amount(field: &'static str, value: f64, max: f64) -> Result<()> {
    let reason = if value.is_nan() {
        Rejection::NotANumber
    } else if value < 0.0 {
        Rejection::Negative
    } else if value > max {
        Rejection::TooLarge { max }
    } else {
        return Ok(());
    };

    Err(CalculatorError::InvalidParameter { field, reason })
}

/// Both yearly reports for one set of parameters
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub parameters: ScenarioParameters,
    pub no_deposits: ProjectionReport,
    pub with_deposits: ProjectionReport,
}

impl ScenarioReport {
    /// Reports in display order: no-deposit first
    pub fn reports(&self) -> [&ProjectionReport; 2] {
        [&self.no_deposits, &self.with_deposits]
    }

    /// Money put in by the saver over the whole horizon (initial + all deposits)
    pub fn total_contributions(&self) -> f64 {
        let months = f64::from(self.parameters.number_of_years) * f64::from(MONTHS_PER_YEAR);
        self.parameters.initial_investment + months * self.parameters.monthly_deposit
    }
}

/// Project both variants for one scenario
pub fn run_scenario(parameters: &ScenarioParameters) -> ScenarioReport {
    let engine = ProjectionEngine::new(*parameters);

    ScenarioReport {
        parameters: *parameters,
        no_deposits: engine.project(DepositVariant::NoMonthlyDeposits),
        with_deposits: engine.project(DepositVariant::WithMonthlyDeposits),
    }
}

/// Project several scenarios, one report per input, in input order
pub fn run_scenarios(parameters: &[ScenarioParameters]) -> Vec<ScenarioReport> {
    parameters.iter().map(run_scenario).collect()
}
