//! Period filtering and history statistics

use chrono::{Days, NaiveDate};

use super::bot_state::{OpResult, Operation};

/// History window selected from the period dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Today,
    Week,
    Month,
    All,
}

impl Period {
    /// Menu order, top to bottom
    pub const ORDER: [Period; 4] = [Period::Today, Period::Week, Period::Month, Period::All];

    pub fn label(self) -> &'static str {
        match self {
            Period::Today => "Hoy",
            Period::Week => "Esta Semana",
            Period::Month => "Este Mes",
            Period::All => "Todo",
        }
    }

    /// Row of this period in the dropdown menu
    pub fn index(self) -> usize {
        Self::ORDER.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Period> {
        Self::ORDER.get(index).copied()
    }

    /// Whether an operation dated `date` falls in this window as of `today`
    ///
    /// Week and month are rolling windows of 7 and 30 calendar days, cutoff
    /// included.
    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Period::Today => date == today,
            Period::Week => within_days(date, today, 7),
            Period::Month => within_days(date, today, 30),
            Period::All => true,
        }
    }
}

fn within_days(date: NaiveDate, today: NaiveDate, days: u64) -> bool {
    today
        .checked_sub_days(Days::new(days))
        .map(|cutoff| date >= cutoff)
        .unwrap_or(true)
}

/// Operations visible for the period, preserving newest-first order
pub fn filter_history<'a>(
    history: &'a [Operation],
    period: Period,
    today: NaiveDate,
) -> Vec<&'a Operation> {
    history
        .iter()
        .filter(|op| period.contains(op.date, today))
        .collect()
}

/// Aggregate figures for a filtered history slice
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryStats {
    pub total_operations: usize,
    pub total_wins: usize,
    pub total_losses: usize,
    pub net_profit: f64,
}

impl HistoryStats {
    pub fn for_operations(operations: &[&Operation]) -> Self {
        let total_wins = operations
            .iter()
            .filter(|op| op.result == OpResult::Win)
            .count();
        Self {
            total_operations: operations.len(),
            total_wins,
            total_losses: operations.len() - total_wins,
            // On current Rust an empty f64 sum yields -0.0; normalize so
            // break-even displays with the documented "+" sign.
            net_profit: operations.iter().map(|op| op.profit).sum::<f64>() + 0.0,
        }
    }

    /// Signed display form, "+" for break-even or better
    pub fn net_profit_display(&self) -> String {
        format!("{:+.2}", self.net_profit)
    }

    /// Win percentage as a whole number, 0 when there are no operations
    pub fn success_rate(&self) -> u32 {
        if self.total_operations == 0 {
            0
        } else {
            ((self.total_wins as f64 / self.total_operations as f64) * 100.0).round() as u32
        }
    }
}
