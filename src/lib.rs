//! Investment Calculator - compound interest projections with and without monthly deposits
//!
//! This library provides:
//! - Validation of raw text into scenario parameters (amounts, rate, horizon)
//! - Year-by-year monthly-compounding projections for two deposit variants
//! - Fixed-width console reports and CSV/JSON export

pub mod error;
pub mod input;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{CalculatorError, Result};
pub use input::{parse_amount, parse_integer, InputValidator, Rejection};
pub use projection::{DepositVariant, ProjectionEngine, ProjectionReport, YearRow};
pub use scenario::{run_scenario, run_scenarios, ScenarioParameters, ScenarioReport};
