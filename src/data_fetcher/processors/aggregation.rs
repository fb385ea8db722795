use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::data_fetcher::models::{Location, RestSummary, TeamGame};

/// Arithmetic mean; NaN for an empty sample.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator); NaN for fewer than two values.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Summarizes rest days per (team, location).
///
/// Null rest values are excluded from both statistics but a group made only
/// of nulls still yields a row (with NaN statistics). Output is sorted by team,
/// then location (`away` before `home`).
#[instrument(skip(team_games), fields(rows = team_games.len()))]
pub fn summarize_rest(team_games: &[TeamGame]) -> Vec<RestSummary> {
    // Groups in first-appearance order
    let mut group_index: HashMap<(&str, Location), usize> = HashMap::new();
    let mut groups: Vec<((&str, Location), Vec<f64>)> = Vec::new();

    for row in team_games {
        let key = (row.team.as_str(), row.location);
        let index = *group_index.entry(key).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        if let Some(rest) = row.rest {
            groups[index].1.push(rest as f64);
        }
    }

    let mut summaries: Vec<RestSummary> = groups
        .into_iter()
        .map(|((team, location), values)| RestSummary {
            team: team.to_string(),
            location,
            mean_rest: mean(&values),
            std_rest: sample_std(&values),
        })
        .collect();

    summaries.sort_by(|a, b| (&a.team, a.location).cmp(&(&b.team, b.location)));
    debug!("Summarized {} (team, location) groups", summaries.len());
    summaries
}
