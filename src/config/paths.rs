use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "nba_rest";

/// Platform config directory for this application (e.g. `~/.config/nba_rest` on Linux).
/// Falls back to the current directory if no config directory is available.
fn app_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR_NAME)
}

/// Returns the platform-specific path for the config file.
pub fn get_config_path() -> String {
    app_config_dir()
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    app_config_dir().join("logs").to_string_lossy().to_string()
}
