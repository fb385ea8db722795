use std::sync::RwLock;

use super::core::CacheProvider;
use crate::data_fetcher::models::RawTable;
use crate::error::AppError;

/// In-process cache, used to run the pipeline without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryCache {
    table: RwLock<Option<RawTable>>,
    saves: RwLock<usize>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache that already holds `table`.
    pub fn with_table(table: RawTable) -> Self {
        Self {
            table: RwLock::new(Some(table)),
            saves: RwLock::new(0),
        }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        *self.saves.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl CacheProvider for MemoryCache {
    fn load(&self) -> Result<Option<RawTable>, AppError> {
        Ok(self.table.read().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save(&self, table: &RawTable) -> Result<(), AppError> {
        *self.table.write().unwrap_or_else(|e| e.into_inner()) = Some(table.clone());
        *self.saves.write().unwrap_or_else(|e| e.into_inner()) += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory cache".to_string()
    }
}
