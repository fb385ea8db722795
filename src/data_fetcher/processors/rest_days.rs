use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::data_fetcher::models::{GameRecord, Location, TeamGame};

/// What happens to team-games that have no preceding game (`rest == None`)
/// before aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullRestPolicy {
    /// Drop them. A (team, location) pair seen only on a first appearance
    /// produces no summary row.
    #[default]
    Exclude,
    /// Keep them. They add no observation but still yield a summary row.
    Retain,
}

/// Reshapes games into one row per team per game.
///
/// All away rows come first (in game order), followed by all home rows.
/// Each row inherits its game's date and `date_game_id`; `rest` is unset.
pub fn reshape_team_games(games: &[GameRecord]) -> Vec<TeamGame> {
    one_side(games, Location::Away)
        .chain(one_side(games, Location::Home))
        .collect()
}

fn one_side(games: &[GameRecord], location: Location) -> impl Iterator<Item = TeamGame> + '_ {
    games.iter().map(move |game| TeamGame {
        date: game.date,
        date_game_id: game.date_game_id,
        location,
        team: match location {
            Location::Away => game.away_team.clone(),
            Location::Home => game.home_team.clone(),
        },
        rest: None,
    })
}

/// Fills in `rest` for every row: days since the same team's previous game,
/// minus one. Rows are visited in date order (ties keep their current order);
/// a team's first row gets `None`.
pub fn assign_rest_days(team_games: &mut [TeamGame]) {
    let mut order: Vec<usize> = (0..team_games.len()).collect();
    order.sort_by_key(|&i| team_games[i].date);

    let mut last_played: HashMap<String, NaiveDate> = HashMap::new();
    for i in order {
        let row = &mut team_games[i];
        row.rest = last_played
            .get(&row.team)
            .map(|previous| (row.date - *previous).num_days() - 1);
        last_played.insert(row.team.clone(), row.date);
    }
}

/// Reshapes games to long form and computes rest days per team.
#[instrument(skip(games), fields(games = games.len()))]
pub fn derive_rest_days(games: &[GameRecord]) -> Vec<TeamGame> {
    let mut team_games = reshape_team_games(games);
    assign_rest_days(&mut team_games);

    let back_to_back = team_games.iter().filter(|tg| tg.rest == Some(0)).count();
    let same_day = team_games.iter().filter(|tg| tg.rest == Some(-1)).count();
    debug!(
        "Derived {} team-games ({} back-to-backs, {} same-day repeats)",
        team_games.len(),
        back_to_back,
        same_day
    );
    team_games
}

/// Applies the null-rest policy ahead of aggregation.
pub fn apply_null_policy(team_games: Vec<TeamGame>, policy: NullRestPolicy) -> Vec<TeamGame> {
    match policy {
        NullRestPolicy::Retain => team_games,
        NullRestPolicy::Exclude => team_games
            .into_iter()
            .filter(|tg| tg.rest.is_some())
            .collect(),
    }
}
