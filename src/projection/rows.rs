//! Output structures for yearly projections

use serde::{Deserialize, Serialize};

use super::engine::DepositVariant;

/// Year-end figures for one projection year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    /// 1-indexed projection year
    pub year: u32,

    /// Balance after the 12th month of the year
    pub year_end_balance: f64,

    /// Interest accrued during this year only
    pub year_end_interest: f64,
}

/// Ordered yearly rows for one deposit variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub variant: DepositVariant,
    pub rows: Vec<YearRow>,
}

impl ProjectionReport {
    pub fn new(variant: DepositVariant) -> Self {
        Self {
            variant,
            rows: Vec::new(),
        }
    }

    pub fn with_capacity(variant: DepositVariant, years: usize) -> Self {
        Self {
            variant,
            rows: Vec::with_capacity(years),
        }
    }

    /// Add a year row
    pub fn add_row(&mut self, row: YearRow) {
        self.rows.push(row);
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_interest: f64 = self.rows.iter().map(|r| r.year_end_interest).sum();
        let final_balance = self.rows.last().map(|r| r.year_end_balance).unwrap_or(0.0);

        ProjectionSummary {
            total_years: self.rows.len() as u32,
            final_balance,
            total_interest,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_years: u32,
    pub final_balance: f64,
    pub total_interest: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_empty_report() {
        let report = ProjectionReport::new(DepositVariant::NoMonthlyDeposits);
        let summary = report.summary();
        assert_eq!(summary.total_years, 0);
        assert_eq!(summary.final_balance, 0.0);
        assert_eq!(summary.total_interest, 0.0);
    }

    #[test]
    fn test_summary_sums_yearly_interest() {
        let mut report = ProjectionReport::new(DepositVariant::WithMonthlyDeposits);
        report.add_row(YearRow { year: 1, year_end_balance: 110.0, year_end_interest: 10.0 });
        report.add_row(YearRow { year: 2, year_end_balance: 121.0, year_end_interest: 11.0 });

        let summary = report.summary();
        assert_eq!(summary.total_years, 2);
        assert_eq!(summary.final_balance, 121.0);
        assert_eq!(summary.total_interest, 21.0);
    }

    #[test]
    fn test_report_json_round_trip() {
        let mut report = ProjectionReport::new(DepositVariant::NoMonthlyDeposits);
        report.add_row(YearRow { year: 1, year_end_balance: 1051.161897881733, year_end_interest: 51.161897881733 });

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"variant\":\"no_deposits\""));

        let parsed: ProjectionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.variant, report.variant);
        assert_eq!(parsed.rows, report.rows);

        let summary: ProjectionSummary =
            serde_json::from_str(&serde_json::to_string(&report.summary()).unwrap()).unwrap();
        assert_eq!(summary, report.summary());
    }
}
