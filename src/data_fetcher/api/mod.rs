pub mod fetch_utils;
pub mod http_client;
pub mod orchestrator;
pub mod table_source;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export fetching entry points
pub use fetch_utils::fetch_page_text;
pub use orchestrator::{fetch_dataset, load_or_fetch};
pub use table_source::{HttpTableSource, TableSource};
