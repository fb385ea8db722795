use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use super::core::CacheProvider;
use crate::data_fetcher::models::RawTable;
use crate::error::AppError;

/// Raw table cached as a delimited text file with a header row.
#[derive(Debug, Clone)]
pub struct CsvFileCache {
    path: PathBuf,
}

impl CsvFileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the cache file if present. Returns whether a file was removed.
    pub fn clear(&self) -> Result<bool, AppError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            info!("Removed cache file {}", self.path.display());
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl CacheProvider for CsvFileCache {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<RawTable>, AppError> {
        if !self.path.exists() {
            debug!("No cache file");
            return Ok(None);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let rows = reader
            .records()
            .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
            .collect::<Result<Vec<Vec<String>>, csv::Error>>()?;

        debug!("Loaded {} cached rows", rows.len());
        // Blank headers (a stored row index) come back as "Unnamed: <i>"
        Ok(Some(RawTable::with_raw_headers(headers, rows)))
    }

    #[instrument(skip(self, table), fields(path = %self.path.display(), rows = table.len()))]
    fn save(&self, table: &RawTable) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(&table.headers)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        info!("Cached {} rows", table.len());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
