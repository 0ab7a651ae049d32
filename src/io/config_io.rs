use std::fs;
use std::path::Path;

use crate::model::config::Config;

/// Read the config file, falling back to defaults when the file is
/// missing or unparsable. Configuration is never required.
pub fn read_config(path: &Path) -> Config {
    let Ok(text) = fs::read_to_string(path) else {
        return Config::default();
    };
    toml::from_str(&text).unwrap_or_default()
}
