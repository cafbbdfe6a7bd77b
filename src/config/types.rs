use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path the router starts at. Must be a declared route.
    #[serde(default = "default_start_path")]
    pub start_path: String,
    /// UI tick interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Pre-seed for the player name. The name is still editable on the
    /// home screen; nothing is written back to this file.
    #[serde(default)]
    pub player_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_path: default_start_path(),
            tick_rate_ms: default_tick_rate_ms(),
            player_name: None,
        }
    }
}

fn default_start_path() -> String {
    "/".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}
