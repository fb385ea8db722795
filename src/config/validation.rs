use crate::config::Config;
use crate::error::AppError;
use chrono::Month;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Source URL template cannot be empty and must contain a `{month}` placeholder
/// - Season month list cannot be empty and every entry must be an English month name
/// - Cache and output paths cannot be empty
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty and its parent must be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    let template = config.source_url_template.trim();
    if template.is_empty() {
        return Err(AppError::config_error("Source URL template cannot be empty"));
    }
    if !template.contains("{month}") {
        return Err(AppError::config_error(
            "Source URL template must contain a {month} placeholder",
        ));
    }
    if !template.starts_with("http://") && !template.starts_with("https://") {
        return Err(AppError::config_error(
            "Source URL template must start with http:// or https://",
        ));
    }

    if config.season_months.is_empty() {
        return Err(AppError::config_error("Season months cannot be empty"));
    }
    for month in &config.season_months {
        month.parse::<Month>().map_err(|_| {
            AppError::config_error(format!("Unknown month name in season_months: '{month}'"))
        })?;
    }

    if config.cache_path.trim().is_empty() {
        return Err(AppError::config_error("Cache path cannot be empty"));
    }
    if config.output_path.trim().is_empty() {
        return Err(AppError::config_error("Output path cannot be empty"));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
