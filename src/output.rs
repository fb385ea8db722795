//! Writing the rest summary and the intermediate tables to disk.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::data_fetcher::models::{GameRecord, Location, RestSummary, TeamGame};
use crate::error::AppError;

/// File format of the rest summary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Output record: undefined statistics become `None`, which is an empty CSV
/// field and a JSON `null`.
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    team: &'a str,
    location: Location,
    mean: Option<f64>,
    std: Option<f64>,
}

impl<'a> From<&'a RestSummary> for SummaryRow<'a> {
    fn from(summary: &'a RestSummary) -> Self {
        SummaryRow {
            team: &summary.team,
            location: summary.location,
            mean: defined(summary.mean_rest),
            std: defined(summary.std_rest),
        }
    }
}

const SUMMARY_COLUMNS: [&str; 4] = ["team", "location", "mean", "std"];

/// Column order of the games export, matching `GameRecord`'s fields.
const GAME_COLUMNS: [&str; 12] = [
    "date",
    "start",
    "date_game_id",
    "away_team",
    "away_points",
    "home_team",
    "home_points",
    "box_score",
    "n_ot",
    "attendance",
    "arena",
    "notes",
];

/// Column order of the team-games export, matching `TeamGame`'s fields.
const TEAM_GAME_COLUMNS: [&str; 5] = ["date", "date_game_id", "location", "team", "rest"];

fn defined(value: f64) -> Option<f64> {
    (!value.is_nan()).then_some(value)
}

fn create_parent_dir(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Writes one record per (team, location) with the columns `team`,
/// `location`, `mean` and `std`.
#[instrument(skip(summaries), fields(records = summaries.len()))]
pub fn write_summary(
    summaries: &[RestSummary],
    path: &Path,
    format: OutputFormat,
) -> Result<(), AppError> {
    create_parent_dir(path)?;
    let rows: Vec<SummaryRow<'_>> = summaries.iter().map(SummaryRow::from).collect();

    match format {
        OutputFormat::Csv => write_records_csv(&rows, &SUMMARY_COLUMNS, path)?,
        OutputFormat::Json => {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, &rows)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
    }

    info!("Wrote {} summary records to {}", rows.len(), path.display());
    for summary in summaries {
        debug!(
            "{} {}: mean={:.3} std={:.3}",
            summary.team, summary.location, summary.mean_rest, summary.std_rest
        );
    }
    Ok(())
}

/// Exports the normalized games table as CSV.
pub fn write_games_csv(games: &[GameRecord], path: &Path) -> Result<(), AppError> {
    write_records_csv(games, &GAME_COLUMNS, path)?;
    info!("Exported {} games to {}", games.len(), path.display());
    Ok(())
}

/// Exports the long-form team-games table as CSV. Missing rest is an empty field.
pub fn write_team_games_csv(team_games: &[TeamGame], path: &Path) -> Result<(), AppError> {
    write_records_csv(team_games, &TEAM_GAME_COLUMNS, path)?;
    info!(
        "Exported {} team-games to {}",
        team_games.len(),
        path.display()
    );
    Ok(())
}

/// Writes serde records as CSV. `serialize` only emits the header alongside the
/// first record, so an empty table gets `columns` written explicitly.
fn write_records_csv<T: Serialize>(
    records: &[T],
    columns: &[&str],
    path: &Path,
) -> Result<(), AppError> {
    create_parent_dir(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    if records.is_empty() {
        writer.write_record(columns)?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
