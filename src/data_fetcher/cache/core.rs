use std::path::{Path, PathBuf};

use crate::data_fetcher::models::RawTable;
use crate::error::AppError;

/// Storage for the raw schedule table between runs.
///
/// `load` returning `Ok(None)` means nothing is cached yet and the table
/// must be fetched; `save` stores the freshly fetched table.
pub trait CacheProvider {
    fn load(&self) -> Result<Option<RawTable>, AppError>;

    fn save(&self, table: &RawTable) -> Result<(), AppError>;

    /// Human-readable location for logging.
    fn describe(&self) -> String;
}

/// Cache file for a dataset variant, derived from the configured path:
/// `<stem>-<season>.<ext>` for a full season and `<stem>-<season>-<month>.<ext>`
/// for a single month, so different seasons never share a cache file.
///
/// # Example
/// ```
/// use nba_rest::data_fetcher::cache::dataset_cache_path;
/// use std::path::PathBuf;
///
/// assert_eq!(
///     dataset_cache_path("data-raw/nba.csv", 2016, None),
///     PathBuf::from("data-raw/nba-2016.csv")
/// );
/// assert_eq!(
///     dataset_cache_path("data-raw/nba.csv", 2016, Some("November")),
///     PathBuf::from("data-raw/nba-2016-november.csv")
/// );
/// ```
pub fn dataset_cache_path(cache_path: &str, season: i32, month: Option<&str>) -> PathBuf {
    let base = Path::new(cache_path);
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut variant = format!("{stem}-{season}");
    if let Some(month) = month {
        variant.push('-');
        variant.push_str(&month.trim().to_lowercase());
    }
    let file_name = match base.extension() {
        Some(ext) => format!("{variant}.{}", ext.to_string_lossy()),
        None => variant,
    };
    base.with_file_name(file_name)
}
