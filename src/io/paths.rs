use std::path::PathBuf;

/// The fixed per-user storage directory, `~/.tally`. `None` only when the
/// home directory cannot be determined.
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tally"))
}

/// The task data file, `~/.tally/data.json`.
pub fn data_file() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("data.json"))
}

/// The optional config file, `~/.tally/config.toml`.
pub fn config_file() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("config.toml"))
}
