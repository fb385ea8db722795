use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the matchup a team played on.
///
/// Ordered `Away` before `Home` so summaries sort alphabetically by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Away,
    Home,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Away => "away",
            Location::Home => "home",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One team's appearance in one game (long form).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamGame {
    pub date: NaiveDate,
    pub date_game_id: u32,
    pub location: Location,
    pub team: String,
    /// Full days off since the team's previous game; `None` on its first appearance.
    /// `-1` marks a second game on the same date.
    pub rest: Option<i64>,
}

/// Mean and sample standard deviation of rest days for one team at one location.
/// NaN marks a statistic that is undefined for the observed sample size.
#[derive(Debug, Clone, PartialEq)]
pub struct RestSummary {
    pub team: String,
    pub location: Location,
    pub mean_rest: f64,
    pub std_rest: f64,
}
