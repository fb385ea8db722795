//! NBA rest-day summary library
//!
//! Fetches NBA schedule tables from basketball-reference.com, normalizes them
//! into typed game records, derives how many full days each team rested
//! before every game, and aggregates rest days per team and home/away
//! location.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nba_rest::app::{RunOptions, run};
//! use nba_rest::config::Config;
//! use nba_rest::error::AppError;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let options = RunOptions {
//!         month: Some("November".to_string()),
//!         ..RunOptions::default()
//!     };
//!
//!     let report = run(&config, &options).await?;
//!     for summary in &report.summaries {
//!         println!("{} {}: {:.2}", summary.team, summary.location, summary.mean_rest);
//!     }
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod output;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{GameRecord, Location, RawTable, RestSummary, TeamGame};
pub use error::AppError;
pub use output::OutputFormat;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
