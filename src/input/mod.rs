//! Parsing and bounds-checking of user-supplied scenario values
//!
//! Two layers:
//! - `parse_amount` / `parse_integer`: pure checks that either return a value
//!   or a `Rejection` explaining why the text was refused
//! - `InputValidator`: a line-oriented prompt loop that re-asks until the pure
//!   check accepts, writing each rejection back to the user

mod parse;
mod prompt;

pub use parse::{
    parse_amount, parse_integer, Rejection, DEFAULT_MAX_AMOUNT, MAX_INTEREST_RATE_PERCENT,
    MAX_YEARS, MIN_YEARS,
};
pub use prompt::{
    InputValidator, PROMPT_ANNUAL_RATE, PROMPT_INITIAL_INVESTMENT, PROMPT_MONTHLY_DEPOSIT,
    PROMPT_NUMBER_OF_YEARS, PROMPT_PRESS_ENTER,
};
