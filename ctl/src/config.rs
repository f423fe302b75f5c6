//! CLI configuration with TOML file support.

use serde::{Deserialize, Serialize};

/// Configuration for `omegactl`.
///
/// Can be loaded from a TOML file or built from CLI flags; flags and
/// environment variables override file values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CtlConfig {
    /// Base URL of the governance gateway.
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,

    /// The voter's account address (0x-hex).
    #[serde(default)]
    pub voter: Option<String>,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CtlConfig {
    fn default() -> Self {
        Self {
            gateway_url: default_gateway_url(),
            voter: None,
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_gateway_url() -> String {
    "http://127.0.0.1:8545".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
