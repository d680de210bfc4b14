use std::time::Instant;

use chrono::NaiveDate;

use crate::bot::{HistoryStats, Operation, Period, TradingBot, filter_history};
use crate::config::{Config, EntryConfig};
use crate::dropdown::DropdownState;
use crate::layout::LayoutRegions;
use crate::notification::{NotificationState, Severity};
use crate::poller::PollerState;
use crate::scroll::ScrollState;

pub struct App {
    pub bot: TradingBot,
    pub entry: EntryConfig,
    pub dropdown: DropdownState,
    pub notification: NotificationState,
    pub poller: PollerState,
    pub history_scroll: ScrollState,
    pub layout_regions: LayoutRegions,
    pub today: NaiveDate,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, status_url: Option<String>) -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            bot: TradingBot::new(config.bot.initial_balance, config.bot.default_amount, today),
            entry: config.entry.clone(),
            dropdown: DropdownState::new(),
            notification: NotificationState::new(),
            poller: PollerState::new(status_url),
            history_scroll: ScrollState::new(),
            layout_regions: LayoutRegions::new(),
            today,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Per-iteration upkeep: expire toasts, pull queued poller snapshots.
    pub fn tick(&mut self, now: Instant) {
        let removed = self.notification.sweep_expired(now);
        if removed > 0 {
            log::debug!("Swept {} expired notification(s)", removed);
        }
        self.poller.drain_updates();
    }

    /// Operations visible under the selected period, newest first.
    pub fn visible_history(&self) -> Vec<&Operation> {
        filter_history(self.bot.history(), self.dropdown.selected(), self.today)
    }

    /// Figures for the summary cards. Always today's view, whatever the
    /// dropdown says.
    pub fn today_stats(&self) -> HistoryStats {
        let today_ops = filter_history(self.bot.history(), Period::Today, self.today);
        HistoryStats::for_operations(&today_ops)
    }

    /// Flip the bot and toast the new state.
    pub fn toggle_bot(&mut self) {
        let active = self.bot.toggle();
        let message = if active {
            "Bot activado."
        } else {
            "Bot desactivado."
        };
        self.notification.show(message);
    }

    /// Run a manual entry with the configured defaults and toast the
    /// receipt, styled by its tag.
    pub fn execute_manual_entry(&mut self) {
        let receipt = self.bot.execute_entry(
            &self.entry.pair,
            self.entry.kind,
            self.bot.default_amount,
            &self.entry.duration,
            chrono::Local::now().naive_local(),
        );
        self.notification
            .show_with(&receipt.message, Severity::from_tag(receipt.tag));
    }
}
