//! Application-wide constants and default configuration values
//!
//! Source column names, default URLs and paths live here so the normalizer,
//! the fetch layer and the config share a single definition.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// User agent sent with every schedule request
pub const USER_AGENT: &str = concat!("nba_rest/", env!("CARGO_PKG_VERSION"));

/// Defaults for the configuration file
pub mod defaults {
    /// Page URL template; `{season}` and `{month}` are substituted per request
    pub const SOURCE_URL_TEMPLATE: &str =
        "https://www.basketball-reference.com/leagues/NBA_{season}_games-{month}.html";

    /// Season identified by the year it ends in (2015-16 is 2016)
    pub const SEASON: i32 = 2016;

    /// Months making up a regular season plus playoffs, in fetch order
    pub const SEASON_MONTHS: [&str; 9] = [
        "October", "November", "December", "January", "February", "March", "April", "May", "June",
    ];

    pub const CACHE_PATH: &str = "data-raw/nba.csv";

    pub const OUTPUT_PATH: &str = "data/rest.csv";

    pub const LOG_FILE_NAME: &str = "nba_rest.log";
}

/// Source column headers as published by basketball-reference.com,
/// after duplicate and blank header disambiguation.
pub mod source_columns {
    /// Row index column written by caches that stored a dataframe index
    pub const ROW_INDEX: &str = "Unnamed: 0";
    pub const DATE: &str = "Date";
    pub const START: &str = "Start (ET)";
    pub const VISITOR: &str = "Visitor/Neutral";
    pub const VISITOR_POINTS: &str = "PTS";
    pub const HOME: &str = "Home/Neutral";
    pub const HOME_POINTS: &str = "PTS.1";
    pub const BOX_SCORE: &str = "Unnamed: 6";
    pub const OVERTIME: &str = "Unnamed: 7";
    pub const ATTENDANCE: &str = "Attend.";
    pub const ARENA: &str = "Arena";
    pub const NOTES: &str = "Notes";

    /// Date cell value of the separator row between regular season and playoffs
    pub const PLAYOFFS_MARKER: &str = "Playoffs";
}

/// Source date and time formats (chrono strftime syntax)
pub mod formats {
    /// e.g. "Tue, Oct 27, 2015"
    pub const GAME_DATE: &str = "%a, %b %d, %Y";

    /// Date part of `GAME_DATE` once the weekday prefix is removed
    pub const GAME_DATE_WITHOUT_WEEKDAY: &str = "%b %d, %Y";

    /// e.g. "8:00PM", after the meridiem suffix has been expanded
    pub const START_TIME: &str = "%I:%M%p";
}
