//! Trading bot simulation state
//!
//! Owns the balance, the activation flag, and the operation history. The
//! win draw happens in `execute_entry`; everything below it is
//! deterministic so tests can pin outcomes.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;

use crate::config::EntryKind;

/// Chance that a simulated entry wins
const WIN_PROBABILITY: f64 = 0.75;

/// Payout applied to the stake on a win
const PAYOUT_RATE: f64 = 0.75;

/// Counter behind the seeded history; the first manual entry becomes OP501
const SEED_ID_COUNTER: u32 = 500;

/// Outcome of a finished operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpResult {
    Win,
    Loss,
}

impl OpResult {
    pub fn label(&self) -> &'static str {
        match self {
            OpResult::Win => "WIN",
            OpResult::Loss => "LOSS",
        }
    }
}

/// A finished simulated operation
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub pair: String,
    pub kind: EntryKind,
    pub amount: f64,
    pub duration: String,
    pub result: OpResult,
    pub profit: f64,
}

/// What a manual entry reports back to the UI
///
/// The tag travels as a plain string; the notification layer applies its
/// own tag-to-style mapping, the bot never picks toast styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReceipt {
    pub message: String,
    pub tag: &'static str,
}

/// The simulated bot
pub struct TradingBot {
    pub active: bool,
    pub balance: f64,
    pub default_amount: f64,
    op_id_counter: u32,
    history: Vec<Operation>,
}

impl TradingBot {
    /// Fresh bot with the sample history seeded relative to `today`
    pub fn new(initial_balance: f64, default_amount: f64, today: NaiveDate) -> Self {
        let mut bot = Self {
            active: false,
            balance: initial_balance,
            default_amount,
            op_id_counter: SEED_ID_COUNTER,
            history: Vec::new(),
        };
        bot.seed_history(today);
        bot
    }

    /// Sample operations so the dashboard never starts empty
    ///
    /// Offsets are chosen so every period filter has something to show:
    /// today, yesterday, inside the week window, inside the month window.
    fn seed_history(&mut self, today: NaiveDate) {
        let seeds: [(u32, u64, (u32, u32, u32), &str, EntryKind, OpResult, f64); 4] = [
            (500, 0, (9, 10, 0), "EUR/USD", EntryKind::Call, OpResult::Win, 37.50),
            (499, 1, (16, 5, 0), "GBP/USD", EntryKind::Put, OpResult::Loss, -50.0),
            (498, 6, (11, 50, 0), "USD/JPY", EntryKind::Call, OpResult::Win, 38.75),
            (497, 25, (13, 40, 0), "EUR/USD", EntryKind::Put, OpResult::Win, 42.0),
        ];

        // Newest first, matching how manual entries are prepended
        for (id, days_back, (h, m, s), pair, kind, result, profit) in seeds {
            self.history.push(Operation {
                id: format!("OP{}", id),
                date: today.checked_sub_days(Days::new(days_back)).unwrap_or(today),
                time: NaiveTime::from_hms_opt(h, m, s).unwrap_or(NaiveTime::MIN),
                pair: pair.to_string(),
                kind,
                amount: 50.0,
                duration: "5m".to_string(),
                result,
                profit,
            });
        }
    }

    /// Flip the activation flag, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        log::debug!("Bot toggled, active = {}", self.active);
        self.active
    }

    /// Run a manual entry end to end
    ///
    /// Refused while the bot is inactive. The win draw happens here;
    /// `record_entry` applies a known outcome.
    pub fn execute_entry(
        &mut self,
        pair: &str,
        kind: EntryKind,
        amount: f64,
        duration: &str,
        now: NaiveDateTime,
    ) -> EntryReceipt {
        if !self.active {
            return EntryReceipt {
                message: "Bot desactivado. No se puede ejecutar la entrada.".to_string(),
                tag: "error",
            };
        }

        let is_win = rand::thread_rng().gen_bool(WIN_PROBABILITY);
        self.record_entry(pair, kind, amount, duration, is_win, now);

        EntryReceipt {
            message: "Entrada ejecutada con éxito.".to_string(),
            tag: "success",
        }
    }

    /// Apply a finished entry to the balance and history
    ///
    /// The stake leaves the balance up front; a win returns the stake plus
    /// profit at the payout rate, a loss returns nothing. The stored profit
    /// is rounded to cents, the balance is not.
    pub fn record_entry(
        &mut self,
        pair: &str,
        kind: EntryKind,
        amount: f64,
        duration: &str,
        is_win: bool,
        now: NaiveDateTime,
    ) -> &Operation {
        self.balance -= amount;

        let (result, profit) = if is_win {
            let profit = amount * PAYOUT_RATE;
            self.balance += amount + profit;
            (OpResult::Win, profit)
        } else {
            (OpResult::Loss, -amount)
        };

        self.op_id_counter += 1;

        let operation = Operation {
            id: format!("OP{}", self.op_id_counter),
            date: now.date(),
            time: now.time(),
            pair: pair.to_string(),
            kind,
            amount,
            duration: duration.to_string(),
            result,
            profit: round2(profit),
        };

        self.history.insert(0, operation);
        &self.history[0]
    }

    /// Operations, newest first
    pub fn history(&self) -> &[Operation] {
        &self.history
    }

    /// Status caption shown under the balance
    pub fn status_line(&self) -> &'static str {
        if self.active {
            "Actualmente ejecutando operaciones"
        } else {
            "Inactivo, esperando comando."
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "bot_state_tests.rs"]
mod bot_state_tests;
