// Configuration type definitions

use serde::Deserialize;

/// Direction of a simulated binary-options entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Call,
    Put,
}

impl EntryKind {
    /// Uppercase form shown in the history table
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Call => "CALL",
            EntryKind::Put => "PUT",
        }
    }
}

/// Bot simulation section
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_initial_balance")]
    pub initial_balance: f64,
    #[serde(default = "default_amount")]
    pub default_amount: f64,
}

fn default_initial_balance() -> f64 {
    1000.0
}

fn default_amount() -> f64 {
    50.0
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            initial_balance: default_initial_balance(),
            default_amount: default_amount(),
        }
    }
}

/// Defaults applied to manual entries
#[derive(Debug, Clone, Deserialize)]
pub struct EntryConfig {
    #[serde(default = "default_pair")]
    pub pair: String,
    #[serde(default)]
    pub kind: EntryKind,
    #[serde(default = "default_duration")]
    pub duration: String,
}

fn default_pair() -> String {
    "EUR/USD".to_string()
}

fn default_duration() -> String {
    "5m".to_string()
}

impl Default for EntryConfig {
    fn default() -> Self {
        EntryConfig {
            pair: default_pair(),
            kind: EntryKind::default(),
            duration: default_duration(),
        }
    }
}

/// Remote status polling section
///
/// Polling stays off unless `enabled` is set and a URL is present.
/// There is no default URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PollerConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub url: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub entry: EntryConfig,
    #[serde(default)]
    pub poller: PollerConfig,
}
