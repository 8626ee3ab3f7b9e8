use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where products come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON fixture to load. The built-in demo catalog is used when unset.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// Artificial delay applied to every fetch, in milliseconds (default: 0).
    #[serde(default)]
    pub latency_ms: u64,
}

/// Terminal rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Suffix printed after prices (default: "₽").
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Color name → `#rrggbb` used to draw swatches.
    #[serde(default = "default_swatches")]
    pub swatches: BTreeMap<String, String>,
    /// Swatch for names missing from `swatches` (default: "#808080").
    #[serde(default = "default_fallback_swatch")]
    pub fallback_swatch: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file path. Logging is off when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_currency() -> String {
    "₽".to_string()
}

fn default_fallback_swatch() -> String {
    "#808080".to_string()
}

fn default_swatches() -> BTreeMap<String, String> {
    [
        ("черный", "#000000"),
        ("белый", "#ffffff"),
        ("серый", "#808080"),
        ("желтый", "#ffff00"),
        ("синий", "#0000ff"),
    ]
    .into_iter()
    .map(|(name, hex)| (name.to_string(), hex.to_string()))
    .collect()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            currency: default_currency(),
            swatches: default_swatches(),
            fallback_swatch: default_fallback_swatch(),
        }
    }
}
