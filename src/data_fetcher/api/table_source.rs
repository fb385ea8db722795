//! Sources of raw schedule tables

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch_page_text;
use crate::data_fetcher::models::RawTable;
use crate::data_fetcher::processors::extract_schedule_table;
use crate::error::AppError;

/// Anything that can turn a URL into a raw table with the columns as
/// published by the source site.
#[async_trait]
pub trait TableSource: Send + Sync {
    async fn fetch_table(&self, url: &str) -> Result<RawTable, AppError>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}

/// Fetches schedule pages over HTTP and extracts their schedule table.
#[derive(Debug, Clone)]
pub struct HttpTableSource {
    client: Client,
}

impl HttpTableSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TableSource for HttpTableSource {
    #[instrument(skip(self))]
    async fn fetch_table(&self, url: &str) -> Result<RawTable, AppError> {
        let html = fetch_page_text(&self.client, url).await?;
        let table = extract_schedule_table(&html).ok_or_else(|| AppError::table_not_found(url))?;
        info!(
            "Fetched table with {} rows and {} columns",
            table.len(),
            table.headers.len()
        );
        Ok(table)
    }

    fn name(&self) -> &str {
        "basketball-reference"
    }
}
