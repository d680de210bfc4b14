//! Trading bot state machine and operation history

mod bot_state;
mod period;

pub use bot_state::{EntryReceipt, OpResult, Operation, TradingBot};
pub use period::{HistoryStats, Period, filter_history};
