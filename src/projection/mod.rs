//! Year-by-year compound interest projection

mod state;
mod engine;
mod rows;

pub use state::AccountState;
pub use engine::{DepositVariant, ProjectionEngine, YearIter, MONTHS_PER_YEAR};
pub use rows::{ProjectionReport, ProjectionSummary, YearRow};
