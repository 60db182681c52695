use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub countdown: CountdownConfig,
    #[serde(default)]
    pub shopping: ShoppingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Countdown ticker settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountdownConfig {
    /// Value the countdown restarts from (default: 10).
    #[serde(default = "default_start_from")]
    pub start_from: u32,
    /// Tick period in milliseconds (default: 1000).
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

/// Shopping list settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingConfig {
    /// Seed the list with the bundled sample items (default: true).
    #[serde(default = "default_seed_sample_items")]
    pub seed_sample_items: bool,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_start_from() -> u32 {
    10
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_seed_sample_items() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            start_from: default_start_from(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            seed_sample_items: default_seed_sample_items(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
