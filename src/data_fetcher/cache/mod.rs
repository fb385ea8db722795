pub mod file_cache;
pub mod memory_cache;
mod core;

// Re-export cache types
pub use file_cache::CsvFileCache;
pub use memory_cache::MemoryCache;
// Re-export the provider trait and path helpers
pub use core::*;
