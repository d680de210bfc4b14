// Configuration module for botdash
// This module handles loading and parsing configuration from ~/.config/botdash/config.toml

mod types;

pub use types::{BotConfig, Config, EntryConfig, EntryKind, PollerConfig};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/botdash/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

fn load_config_from(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    // Try to read the file
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => {
            #[cfg(debug_assertions)]
            log::debug!("Config file read successfully, {} bytes", contents.len());
            contents
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    // Try to parse TOML
    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            #[cfg(debug_assertions)]
            log::debug!("Config parsed successfully: poller enabled = {}", config.poller.enabled);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/botdash/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("botdash")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    // Any invalid entry kind makes the whole file fall back to defaults,
    // surfaced to the user as a warning
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_invalid_entry_kind_fallback(
            invalid_kind in "[a-z]{3,10}".prop_filter(
                "not valid",
                |s| !["call", "put"].contains(&s.as_str())
            )
        ) {
            let toml_content = format!(r#"
[entry]
kind = "{}"
"#, invalid_kind);

            let config: Result<Config, _> = toml::from_str(&toml_content);

            // Serde rejects unknown enum values
            prop_assert!(config.is_err(), "Invalid kind should fail to parse");

            let default_config = Config::default();
            prop_assert_eq!(
                default_config.entry.kind,
                EntryKind::Call,
                "Default config should use call entries"
            );
        }
    }

    // Malformed TOML never panics, always falls back to defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_malformed_toml_fallback(
            malformed in prop::sample::select(vec![
                "[bot\ninitial_balance = 1000.0",     // Missing closing bracket
                "[bot]\ninitial_balance = balance",   // Bare word value
                "[bot]\n initial_balance",            // Missing value
                "bot]\ninitial_balance = 1000.0",     // Missing opening bracket
                "[entry]\npair = \"EUR/USD",          // Unterminated string
            ])
        ) {
            let config: Result<Config, _> = toml::from_str(malformed);

            prop_assert!(config.is_err(), "Malformed TOML should fail to parse");

            let default_config = Config::default();
            prop_assert_eq!(default_config.bot.initial_balance, 1000.0);
        }
    }

    // Every call resolves the same path
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_config_path_consistency(_iteration in 0..10u32) {
            let path1 = get_config_path();
            let path2 = get_config_path();

            prop_assert_eq!(&path1, &path2, "Config path should be consistent");

            let path_str = path1.to_string_lossy();
            prop_assert!(
                path_str.ends_with("botdash/config.toml")
                    || path_str.ends_with("botdash\\config.toml"),
                "Config path should end with botdash/config.toml, got: {}",
                path_str
            );
        }
    }

    #[test]
    fn test_missing_file_returns_defaults_without_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");

        let result = load_config_from(&path);

        assert!(result.warning.is_none());
        assert_eq!(result.config.bot.initial_balance, 1000.0);
        assert_eq!(result.config.entry.pair, "EUR/USD");
        assert!(!result.config.poller.enabled);
    }

    #[test]
    fn test_valid_file_loads_without_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
[bot]
initial_balance = 750.0

[poller]
enabled = true
url = "http://localhost:5000/api/status"
"#,
        );

        let result = load_config_from(&path);

        assert!(result.warning.is_none());
        assert_eq!(result.config.bot.initial_balance, 750.0);
        assert!(result.config.poller.enabled);
    }

    #[test]
    fn test_malformed_file_returns_defaults_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[bot\ninitial_balance = 750.0");

        let result = load_config_from(&path);

        let warning = result.warning.unwrap();
        assert!(warning.starts_with("Invalid config:"));
        assert_eq!(result.config.bot.initial_balance, 1000.0);
    }

    #[test]
    fn test_unknown_kind_returns_defaults_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[entry]\nkind = \"hedge\"\n");

        let result = load_config_from(&path);

        assert!(result.warning.is_some());
        assert_eq!(result.config.entry.kind, EntryKind::Call);
    }
}
