use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One played (or scheduled) game after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub date: NaiveDate,
    /// Tip-off time of day, Eastern time as published
    pub start: NaiveTime,
    /// Zero-based position of this game among the games on `date`, by start time
    pub date_game_id: u32,
    pub away_team: String,
    pub away_points: u32,
    pub home_team: String,
    pub home_points: u32,
    pub box_score: String,
    /// Number of overtime periods played
    pub n_ot: u32,
    pub attendance: Option<u32>,
    pub arena: String,
    pub notes: String,
}
