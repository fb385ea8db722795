//! Dataset assembly: cache check, sequential month fetches, cache write

use tracing::{debug, info, instrument, warn};

use super::table_source::TableSource;
use crate::data_fetcher::cache::CacheProvider;
use crate::data_fetcher::models::RawTable;
use crate::data_fetcher::processors::drop_separator_rows;
use crate::error::AppError;

/// Fetches every URL in order and concatenates the tables.
///
/// Separator rows are dropped from each page before it is appended. All pages
/// must share the first page's headers. Any failure aborts the whole fetch.
#[instrument(skip(source, urls), fields(source = source.name(), pages = urls.len()))]
pub async fn fetch_dataset(source: &dyn TableSource, urls: &[String]) -> Result<RawTable, AppError> {
    let mut dataset = RawTable::default();

    for url in urls {
        let mut page = source.fetch_table(url).await?;
        let dropped = drop_separator_rows(&mut page);
        if dropped > 0 {
            debug!("Dropped {dropped} separator rows from {url}");
        }
        if page.is_empty() {
            warn!("No games in {url}");
        }
        dataset.append(page)?;
    }

    info!("Assembled dataset with {} rows", dataset.len());
    Ok(dataset)
}

/// Returns the cached dataset if present, otherwise fetches it and writes it
/// to the cache. With `refresh` the cache is not read but is still rewritten.
#[instrument(skip(cache, source, urls), fields(cache = %cache.describe()))]
pub async fn load_or_fetch(
    cache: &dyn CacheProvider,
    source: &dyn TableSource,
    urls: &[String],
    refresh: bool,
) -> Result<RawTable, AppError> {
    if refresh {
        info!("Refresh requested, ignoring cache");
    } else if let Some(table) = cache.load()? {
        info!("Using cached dataset ({} rows)", table.len());
        return Ok(table);
    }

    let table = fetch_dataset(source, urls).await?;
    cache.save(&table)?;
    Ok(table)
}
