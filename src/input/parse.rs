//! Pure parse-and-validate functions for amounts and whole numbers

use thiserror::Error;

/// Upper bound for currency amounts (initial investment, monthly deposit)
pub const DEFAULT_MAX_AMOUNT: f64 = 1.0e12;

/// Upper bound for the annual interest rate, in percent
pub const MAX_INTEREST_RATE_PERCENT: f64 = 10_000.0;

/// Bounds for the projection horizon in years
pub const MIN_YEARS: u32 = 1;
pub const MAX_YEARS: u32 = 10_000;

/// Reason a piece of text was refused
///
/// The display text is the corrective message shown to the user before
/// re-prompting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("Invalid input. Please enter a numeric value.")]
    NotANumber,

    #[error("Please enter a non-negative number.")]
    Negative,

    #[error("Value too large. Please enter a number <= {max}.")]
    TooLarge { max: f64 },

    #[error("Invalid input. Please enter a whole number.")]
    NotAWholeNumber,

    #[error("Please enter a whole number between {min} and {max}.")]
    OutOfRange { min: u32, max: u32 },
}

/// Parse a non-negative real number no greater than `max`
///
/// Surrounding whitespace is ignored. A leading sign, decimal point and
/// exponent are accepted; any other trailing character makes the text invalid.
pub fn parse_amount(text: &str, max: f64) -> Result<f64, Rejection> {
    let value: f64 = trim_c_whitespace(text)
        .parse()
        .map_err(|_| Rejection::NotANumber)?;

    if value.is_nan() {
        return Err(Rejection::NotANumber);
    }
    if value < 0.0 {
        return Err(Rejection::Negative);
    }
    if value > max {
        return Err(Rejection::TooLarge { max });
    }

    // abs() folds -0.0 into 0.0
    Ok(value.abs())
}

/// Parse a whole number within `[min, max]`
pub fn parse_integer(text: &str, min: u32, max: u32) -> Result<u32, Rejection> {
    let value: i64 = trim_c_whitespace(text)
        .parse()
        .map_err(|_| Rejection::NotAWholeNumber)?;

    if value < i64::from(min) || value > i64::from(max) {
        return Err(Rejection::OutOfRange { min, max });
    }

    u32::try_from(value).map_err(|_| Rejection::OutOfRange { min, max })
}

/// Strip the ASCII whitespace set of C's `isspace`; other Unicode spaces are kept
fn trim_c_whitespace(text: &str) -> &str {
    text.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
}
