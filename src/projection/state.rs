//! Account balance threaded through the monthly compounding fold

use super::engine::MONTHS_PER_YEAR;

/// Balance carried from one month (or year) to the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountState {
    pub balance: f64,
}

impl AccountState {
    pub fn new(balance: f64) -> Self {
        Self { balance }
    }

    /// One month: the deposit lands first, then interest accrues on the
    /// post-deposit balance. Returns the next state and the month's interest.
    pub fn accrue_month(self, deposit: f64, monthly_rate: f64) -> (Self, f64) {
        let funded = self.balance + deposit;
        let interest = funded * monthly_rate;
        (Self::new(funded + interest), interest)
    }

    /// Twelve months of `accrue_month`. The interest returned covers this
    /// year only, not prior years.
    pub fn accrue_year(self, deposit: f64, monthly_rate: f64) -> (Self, f64) {
        (0..MONTHS_PER_YEAR).fold((self, 0.0), |(state, yearly_interest), _| {
            let (next, interest) = state.accrue_month(deposit, monthly_rate);
            (next, yearly_interest + interest)
        })
    }
}
