use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::config::Config;
use crate::data_fetcher::processors::NullRestPolicy;
use crate::error::AppError;
use crate::output::OutputFormat;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// NBA rest-day summary
///
/// Fetches the season schedule from basketball-reference.com (or reuses the
/// local cache), works out how many full days each team rested before every
/// game, and writes the mean and standard deviation of rest days per team for
/// home and away games.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Process a single month (e.g. "November") instead of the whole season.
    /// The month gets its own cache file next to the season cache.
    #[arg(long, short = 'm', value_name = "MONTH", help_heading = "Data")]
    pub month: Option<String>,

    /// Season to fetch, identified by the year it ends in (2016 = 2015-16).
    #[arg(long, short = 's', help_heading = "Data")]
    pub season: Option<i32>,

    /// Path of the raw schedule cache.
    #[arg(long = "cache", value_name = "PATH", help_heading = "Data")]
    pub cache_path: Option<String>,

    /// Ignore an existing cache, fetch again and overwrite it.
    #[arg(long, short = 'r', help_heading = "Data")]
    pub refresh: bool,

    /// Path of the rest summary.
    #[arg(long = "output", short = 'o', value_name = "PATH", help_heading = "Output")]
    pub output_path: Option<String>,

    /// Format of the rest summary.
    #[arg(long = "format", short = 'f', value_enum, help_heading = "Output")]
    pub output_format: Option<OutputFormat>,

    /// Keep team-games without a preceding game in the aggregation input.
    #[arg(long = "keep-null-rest", help_heading = "Output")]
    pub keep_null_rest: bool,

    /// Also write the normalized games table as CSV.
    #[arg(long = "export-games", value_name = "PATH", help_heading = "Output")]
    pub export_games: Option<String>,

    /// Also write the per-team games table with rest days as CSV.
    #[arg(long = "export-team-games", value_name = "PATH", help_heading = "Output")]
    pub export_team_games: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Save the effective configuration (including any flags given) to the config file.
    #[arg(long = "write-config", help_heading = "Configuration")]
    pub write_config: bool,

    /// Log at debug level.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Do not log to the terminal; the log file is still written.
    #[arg(long = "quiet", short = 'q', help_heading = "Debug")]
    pub quiet: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Applies the flags to a loaded configuration and validates the result.
    /// Validation runs only here, so a flag can replace an invalid file value.
    pub fn resolve_config(&self, mut config: Config) -> Result<Config, AppError> {
        self.apply_to_config(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Overrides configuration values with the flags that were given.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(season) = self.season {
            config.season = season;
        }
        if let Some(cache_path) = &self.cache_path {
            config.cache_path = cache_path.clone();
        }
        if let Some(output_path) = &self.output_path {
            config.output_path = output_path.clone();
        }
        if let Some(format) = self.output_format {
            config.output_format = format;
        }
        if self.keep_null_rest {
            config.null_rest_policy = NullRestPolicy::Retain;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file_path = Some(log_file.clone());
        }
    }
}
