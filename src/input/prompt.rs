//! Interactive prompt loop over a line-oriented text source

use std::io::{BufRead, Write};

use log::debug;

use super::parse::{
    parse_amount, parse_integer, Rejection, DEFAULT_MAX_AMOUNT, MAX_INTEREST_RATE_PERCENT,
    MAX_YEARS, MIN_YEARS,
};
use crate::error::{CalculatorError, Result};
use crate::scenario::ScenarioParameters;

pub const PROMPT_INITIAL_INVESTMENT: &str = "Enter Initial Investment Amount (e.g., 1000.00): $";
pub const PROMPT_MONTHLY_DEPOSIT: &str = "Enter Monthly Deposit Amount (e.g., 50.00): $";
pub const PROMPT_ANNUAL_RATE: &str = "Enter Annual Interest Rate (percent, e.g., 5): ";
pub const PROMPT_NUMBER_OF_YEARS: &str = "Enter Number of Years (whole number, e.g., 5): ";
pub const PROMPT_PRESS_ENTER: &str = "Press Enter to continue...";

/// Reads typed values from `reader`, echoing prompts and corrections to `writer`
///
/// Malformed or out-of-range text is absorbed as a retry. Running out of
/// input while a value is still required is reported as
/// `CalculatorError::EndOfInput` rather than retried.
pub struct InputValidator<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> InputValidator<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the validator, handing back the underlying reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Mutable access to the output side, for callers that interleave reports
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Prompt until a non-negative amount no greater than `max` is entered
    pub fn read_amount(&mut self, prompt: &str, max: f64) -> Result<f64> {
        self.read_until_valid(prompt, |line| parse_amount(line, max))
    }

    /// Prompt until a whole number within `[min, max]` is entered
    pub fn read_integer(&mut self, prompt: &str, min: u32, max: u32) -> Result<u32> {
        self.read_until_valid(prompt, |line| parse_integer(line, min, max))
    }

    /// Read all four scenario parameters in order
    pub fn read_scenario(&mut self) -> Result<ScenarioParameters> {
        let initial_investment = self.read_amount(PROMPT_INITIAL_INVESTMENT, DEFAULT_MAX_AMOUNT)?;
        let monthly_deposit = self.read_amount(PROMPT_MONTHLY_DEPOSIT, DEFAULT_MAX_AMOUNT)?;
        let annual_rate = self.read_amount(PROMPT_ANNUAL_RATE, MAX_INTEREST_RATE_PERCENT)?;
        let years = self.read_integer(PROMPT_NUMBER_OF_YEARS, MIN_YEARS, MAX_YEARS)?;

        ScenarioParameters::new(initial_investment, monthly_deposit, annual_rate, years)
    }

    /// Show `prompt` and swallow one line. End of input is not an error here.
    pub fn wait_for_enter(&mut self, prompt: &str) -> Result<()> {
        self.read_line(prompt)?;
        Ok(())
    }

    /// Yes/no question. Only a reply starting with `Y` or `y` counts as yes;
    /// end of input counts as no.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let reply = self.read_line(prompt)?;
        Ok(matches!(
            reply.as_deref().and_then(|r| r.chars().next()),
            Some('Y' | 'y')
        ))
    }

    fn read_until_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> std::result::Result<T, Rejection>,
    ) -> Result<T> {
        loop {
            let line = self
                .read_line(prompt)?
                .ok_or_else(|| CalculatorError::EndOfInput {
                    prompt: prompt.trim_end().to_string(),
                })?;

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(rejection) => {
                    debug!("Rejected {:?}: {:?}", line, rejection);
                    writeln!(self.writer, "{}", rejection)?;
                }
            }
        }
    }

    /// Write the prompt and read one line without its terminator.
    /// Returns `None` once the source is exhausted. Bytes that are not valid
    /// UTF-8 become U+FFFD, so such a line fails parsing and is re-asked.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
