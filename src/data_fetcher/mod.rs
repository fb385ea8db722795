pub mod api;
pub mod cache;
pub mod models;
pub mod processors;

pub use api::{HttpTableSource, TableSource, load_or_fetch};
pub use cache::{CacheProvider, CsvFileCache, MemoryCache};
pub use models::{GameRecord, Location, RawTable, RestSummary, TeamGame};
