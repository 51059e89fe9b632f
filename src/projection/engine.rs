//! Core projection engine for yearly compound interest projections
//!
//! Interest is quoted as an annual nominal rate and compounded monthly at
//! `rate / 12`. In the with-deposit variant each month's deposit is credited
//! at the start of the month and earns that month's interest. No rounding is
//! applied between months.

use log::debug;
use serde::{Deserialize, Serialize};

use super::rows::{ProjectionReport, YearRow};
use super::state::AccountState;
use crate::scenario::ScenarioParameters;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Which of the two projections to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepositVariant {
    /// Initial investment only
    NoMonthlyDeposits,
    /// Initial investment plus the monthly deposit every month
    WithMonthlyDeposits,
}

impl DepositVariant {
    pub const ALL: [DepositVariant; 2] = [
        DepositVariant::NoMonthlyDeposits,
        DepositVariant::WithMonthlyDeposits,
    ];

    /// Human-readable name used in report banners
    pub fn title(self) -> &'static str {
        match self {
            DepositVariant::NoMonthlyDeposits => "No Monthly Deposits",
            DepositVariant::WithMonthlyDeposits => "With Monthly Deposits",
        }
    }

    /// Short machine-friendly label used in exports
    pub fn label(self) -> &'static str {
        match self {
            DepositVariant::NoMonthlyDeposits => "no_deposits",
            DepositVariant::WithMonthlyDeposits => "with_deposits",
        }
    }

    /// Deposit credited each month under this variant
    pub fn monthly_deposit(self, parameters: &ScenarioParameters) -> f64 {
        match self {
            DepositVariant::NoMonthlyDeposits => 0.0,
            DepositVariant::WithMonthlyDeposits => parameters.monthly_deposit(),
        }
    }
}

/// Main projection engine
pub struct ProjectionEngine {
    parameters: ScenarioParameters,
}

impl ProjectionEngine {
    pub fn new(parameters: ScenarioParameters) -> Self {
        Self { parameters }
    }

    /// Run the full projection for one variant
    pub fn project(&self, variant: DepositVariant) -> ProjectionReport {
        debug!(
            "Projecting {} over {} years at {}%",
            variant.title(),
            self.parameters.number_of_years(),
            self.parameters.annual_interest_rate_percent()
        );

        let mut report =
            ProjectionReport::with_capacity(variant, self.parameters.number_of_years() as usize);
        for row in self.years(variant) {
            report.add_row(row);
        }

        if let Some(last) = report.rows.last() {
            debug!("{} final balance: {:.2}", variant.title(), last.year_end_balance);
        }
        report
    }

    pub fn project_no_deposits(&self) -> ProjectionReport {
        self.project(DepositVariant::NoMonthlyDeposits)
    }

    pub fn project_with_deposits(&self) -> ProjectionReport {
        self.project(DepositVariant::WithMonthlyDeposits)
    }

    /// Lazily yield one row per year, in ascending order
    pub fn years(&self, variant: DepositVariant) -> YearIter {
        YearIter {
            state: AccountState::new(self.parameters.initial_investment()),
            monthly_deposit: variant.monthly_deposit(&self.parameters),
            monthly_rate: self.parameters.monthly_rate(),
            next_year: 1,
            last_year: self.parameters.number_of_years(),
        }
    }
}

/// Iterator over projection years; each step folds twelve months into the state
#[derive(Debug, Clone)]
pub struct YearIter {
    state: AccountState,
    monthly_deposit: f64,
    monthly_rate: f64,
    next_year: u32,
    last_year: u32,
}

impl Iterator for YearIter {
    type Item = YearRow;

    fn next(&mut self) -> Option<YearRow> {
        if self.next_year > self.last_year {
            return None;
        }

        let (state, yearly_interest) = self
            .state
            .accrue_year(self.monthly_deposit, self.monthly_rate);
        self.state = state;

        let row = YearRow {
            year: self.next_year,
            year_end_balance: state.balance,
            year_end_interest: yearly_interest,
        };
        self.next_year += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last_year + 1).saturating_sub(self.next_year) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for YearIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn engine(initial: f64, deposit: f64, rate: f64, years: u32) -> ProjectionEngine {
        ProjectionEngine::new(ScenarioParameters::new(initial, deposit, rate, years).unwrap())
    }

    #[test]
    fn test_single_year_reference_values() {
        let engine = engine(1000.0, 50.0, 5.0, 1);

        let no_deposits = engine.project_no_deposits();
        assert_eq!(no_deposits.rows.len(), 1);
        assert_abs_diff_eq!(no_deposits.rows[0].year_end_balance, 1051.16, epsilon = 0.005);
        assert_abs_diff_eq!(no_deposits.rows[0].year_end_interest, 51.16, epsilon = 0.005);

        let with_deposits = engine.project_with_deposits();
        assert_abs_diff_eq!(with_deposits.rows[0].year_end_balance, 1667.66, epsilon = 0.005);
        assert_abs_diff_eq!(with_deposits.rows[0].year_end_interest, 67.66, epsilon = 0.005);
    }

    #[test]
    fn test_five_year_reference_values() {
        let engine = engine(1000.0, 50.0, 5.0, 5);

        let expected_no_deposits = [
            (1051.16, 51.16),
            (1104.94, 53.78),
            (1161.47, 56.53),
            (1220.90, 59.42),
            (1283.36, 62.46),
        ];
        for (row, (balance, interest)) in engine.project_no_deposits().rows.iter().zip(expected_no_deposits) {
            assert_abs_diff_eq!(row.year_end_balance, balance, epsilon = 0.005);
            assert_abs_diff_eq!(row.year_end_interest, interest, epsilon = 0.005);
        }

        let expected_with_deposits = [
            (1667.66, 67.66),
            (2369.48, 101.82),
            (3107.21, 137.73),
            (3882.68, 175.47),
            (4697.83, 215.15),
        ];
        for (row, (balance, interest)) in engine.project_with_deposits().rows.iter().zip(expected_with_deposits) {
            assert_abs_diff_eq!(row.year_end_balance, balance, epsilon = 0.005);
            assert_abs_diff_eq!(row.year_end_interest, interest, epsilon = 0.005);
        }
    }

    #[test]
    fn test_interest_is_per_year_not_cumulative() {
        let report = engine(1000.0, 0.0, 5.0, 5).project_no_deposits();
        let total: f64 = report.rows.iter().map(|r| r.year_end_interest).sum();
        let last = report.rows.last().unwrap();
        assert_abs_diff_eq!(total, last.year_end_balance - 1000.0, epsilon = 1e-9);
        assert!(last.year_end_interest < total);
    }

    #[test]
    fn test_all_zero_scenario() {
        let engine = engine(0.0, 0.0, 0.0, 5);
        for variant in DepositVariant::ALL {
            let report = engine.project(variant);
            assert_eq!(report.rows.len(), 5);
            for row in &report.rows {
                assert_eq!(row.year_end_balance, 0.0);
                assert_eq!(row.year_end_interest, 0.0);
            }
        }
    }

    #[test]
    fn test_zero_deposit_variants_agree() {
        let engine = engine(2500.0, 0.0, 3.25, 20);
        assert_eq!(engine.project_no_deposits().rows, engine.project_with_deposits().rows);
    }

    #[test]
    fn test_no_deposit_variant_ignores_deposit() {
        let with = engine(1000.0, 500.0, 4.0, 3).project_no_deposits();
        let without = engine(1000.0, 0.0, 4.0, 3).project_no_deposits();
        assert_eq!(with.rows, without.rows);
    }

    #[test]
    fn test_year_iter_is_exact_size() {
        let engine = engine(100.0, 1.0, 1.0, 7);
        let mut years = engine.years(DepositVariant::WithMonthlyDeposits);
        assert_eq!(years.len(), 7);
        years.next();
        assert_eq!(years.len(), 6);
        assert_eq!(years.last().map(|r| r.year), Some(7));
    }

    #[test]
    fn test_maximum_horizon_terminates() {
        let report = engine(1000.0, 50.0, 5.0, 10_000).project_with_deposits();
        assert_eq!(report.rows.len(), 10_000);
        assert_eq!(report.rows.last().unwrap().year, 10_000);
    }

    #[test]
    fn test_upper_bounds_stay_ordered_without_nan() {
        let engine = engine(1.0e12, 1.0e12, 10_000.0, 10_000);
        for variant in DepositVariant::ALL {
            let report = engine.project(variant);
            assert_eq!(report.rows.len(), 10_000);

            let mut previous = 1.0e12;
            for row in &report.rows {
                assert!(!row.year_end_balance.is_nan(), "NaN balance in year {}", row.year);
                assert!(!row.year_end_interest.is_nan(), "NaN interest in year {}", row.year);
                assert!(row.year_end_balance >= previous);
                previous = row.year_end_balance;
            }
            assert_eq!(report.rows.last().unwrap().year_end_balance, f64::INFINITY);
        }
    }

    #[test]
    fn test_variant_labels() {
        assert_eq!(DepositVariant::NoMonthlyDeposits.title(), "No Monthly Deposits");
        assert_eq!(DepositVariant::WithMonthlyDeposits.label(), "with_deposits");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_rows_are_numbered_consecutively(
            initial in 0.0..=1.0e12f64,
            deposit in 0.0..=1.0e12f64,
            rate in 0.0..=10_000.0f64,
            years in 1u32..=10_000,
        ) {
            let engine = engine(initial, deposit, rate, years);
            for variant in DepositVariant::ALL {
                let report = engine.project(variant);
                prop_assert_eq!(report.rows.len(), years as usize);
                for (i, row) in report.rows.iter().enumerate() {
                    prop_assert_eq!(row.year, i as u32 + 1);
                }
            }
        }

        #[test]
        fn prop_balance_never_decreases(
            initial in 0.0..=1.0e12f64,
            deposit in 0.0..=1.0e12f64,
            rate in 0.0..=10_000.0f64,
            years in 1u32..=10_000,
        ) {
            let engine = engine(initial, deposit, rate, years);
            for variant in DepositVariant::ALL {
                let report = engine.project(variant);
                let mut previous = initial;
                for row in &report.rows {
                    prop_assert!(!row.year_end_balance.is_nan());
                    prop_assert!(row.year_end_balance >= previous);
                    prop_assert!(row.year_end_interest >= 0.0);
                    previous = row.year_end_balance;
                }
            }
        }

        #[test]
        fn prop_zero_rate_accumulates_deposits_only(
            initial in 0.0..=1.0e12f64,
            deposit in 0.0..=1.0e12f64,
            years in 1u32..=10_000,
        ) {
            let engine = engine(initial, deposit, 0.0, years);

            for row in engine.project_no_deposits().rows {
                prop_assert_eq!(row.year_end_balance, initial);
                prop_assert_eq!(row.year_end_interest, 0.0);
            }

            for row in engine.project_with_deposits().rows {
                let expected = initial + 12.0 * f64::from(row.year) * deposit;
                prop_assert!((row.year_end_balance - expected).abs() <= 1e-9 * expected.max(1.0));
                prop_assert_eq!(row.year_end_interest, 0.0);
            }
        }
    }
}
