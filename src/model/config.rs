use std::collections::HashMap;

use serde::Deserialize;

/// Per-user configuration, read from `~/.tally/config.toml`. Every field
/// is optional; a missing or malformed file falls back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides keyed by theme slot name, e.g.
    /// `background = "#0C001B"` under `[ui.colors]`.
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Start in light mode instead of dark.
    #[serde(default)]
    pub light: bool,
}
