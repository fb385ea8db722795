//! Turns the raw schedule table into typed, chronologically ordered game records.

use tracing::{debug, instrument};

use crate::constants::source_columns as src;
use crate::data_fetcher::models::{GameRecord, RawTable};
use crate::error::AppError;

use super::time_formatting::{parse_game_date, parse_start_time};

/// Source header → canonical field name. `None` marks a source column that is
/// known but intentionally dropped (the row index older caches carry).
pub const COLUMN_MAPPING: [(&str, Option<&str>); 12] = [
    (src::ROW_INDEX, None),
    (src::DATE, Some("date")),
    (src::START, Some("start")),
    (src::VISITOR, Some("away_team")),
    (src::VISITOR_POINTS, Some("away_points")),
    (src::HOME, Some("home_team")),
    (src::HOME_POINTS, Some("home_points")),
    (src::BOX_SCORE, Some("box_score")),
    (src::OVERTIME, Some("n_ot")),
    (src::ATTENDANCE, Some("attendance")),
    (src::ARENA, Some("arena")),
    (src::NOTES, Some("notes")),
];

/// Canonical name for a source header, if the header is mapped to a field.
pub fn canonical_name(source_header: &str) -> Option<&'static str> {
    COLUMN_MAPPING
        .iter()
        .find(|(source, _)| *source == source_header)
        .and_then(|(_, canonical)| *canonical)
}

/// Resolved column positions; optional columns fall back to empty values.
struct Columns {
    date: usize,
    start: usize,
    away_team: usize,
    away_points: usize,
    home_team: usize,
    home_points: usize,
    box_score: Option<usize>,
    n_ot: Option<usize>,
    attendance: Option<usize>,
    arena: Option<usize>,
    notes: Option<usize>,
}

impl Columns {
    fn resolve(table: &RawTable) -> Result<Self, AppError> {
        Ok(Columns {
            date: table.require_column(src::DATE)?,
            start: table.require_column(src::START)?,
            away_team: table.require_column(src::VISITOR)?,
            away_points: table.require_column(src::VISITOR_POINTS)?,
            home_team: table.require_column(src::HOME)?,
            home_points: table.require_column(src::HOME_POINTS)?,
            box_score: table.column_index(src::BOX_SCORE),
            n_ot: table.column_index(src::OVERTIME),
            attendance: table.column_index(src::ATTENDANCE),
            arena: table.column_index(src::ARENA),
            notes: table.column_index(src::NOTES),
        })
    }
}

/// Normalizes a raw schedule table into game records.
///
/// - Renames source columns per [`COLUMN_MAPPING`]; unmapped columns are ignored
/// - Parses dates (`"Tue, Oct 27, 2015"`) and start times (`"8:00p"`)
/// - Coerces points, overtime and attendance to integers
/// - Sorts by (date, start) and numbers the games within each date from zero
///
/// Separator rows such as the "Playoffs" marker must be removed beforehand;
/// they fail numeric coercion here.
///
/// # Errors
/// * `AppError::MissingColumn` - a required source column is absent
/// * `AppError::Parse` - a date or start time does not match the expected format
/// * `AppError::Type` - a numeric column holds non-numeric text
#[instrument(skip(table), fields(rows = table.len()))]
pub fn normalize_games(table: &RawTable) -> Result<Vec<GameRecord>, AppError> {
    let columns = Columns::resolve(table)?;
    for header in &table.headers {
        if canonical_name(header).is_none() {
            debug!("Dropping source column '{header}'");
        }
    }

    let mut games = table
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| normalize_row(index + 1, row, &columns))
        .collect::<Result<Vec<_>, _>>()?;

    games.sort_by(|a, b| (a.date, a.start).cmp(&(b.date, b.start)));
    assign_date_game_ids(&mut games);

    debug!("Normalized {} games", games.len());
    Ok(games)
}

fn normalize_row(row_number: usize, row: &[String], columns: &Columns) -> Result<GameRecord, AppError> {
    let date_text = cell(row, columns.date);
    let date = parse_game_date(date_text)
        .map_err(|e| AppError::parse_error(row_number, "date", date_text, e.to_string()))?;

    let start_text = cell(row, columns.start);
    let start = parse_start_time(start_text)
        .map_err(|e| AppError::parse_error(row_number, "start", start_text, e.to_string()))?;

    Ok(GameRecord {
        date,
        start,
        date_game_id: 0,
        away_team: cell(row, columns.away_team).to_string(),
        away_points: parse_count(row_number, "away_points", cell(row, columns.away_points))?,
        home_team: cell(row, columns.home_team).to_string(),
        home_points: parse_count(row_number, "home_points", cell(row, columns.home_points))?,
        box_score: optional_cell(row, columns.box_score).to_string(),
        n_ot: parse_overtime(row_number, optional_cell(row, columns.n_ot))?,
        attendance: parse_attendance(row_number, optional_cell(row, columns.attendance))?,
        arena: optional_cell(row, columns.arena).to_string(),
        notes: optional_cell(row, columns.notes).to_string(),
    })
}

/// Cells missing from a short row read as empty.
fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map_or("", |c| c.trim())
}

fn optional_cell(row: &[String], index: Option<usize>) -> &str {
    index.map_or("", |i| cell(row, i))
}

/// Numbers games within each date from zero. Expects `games` sorted by date.
fn assign_date_game_ids(games: &mut [GameRecord]) {
    let mut current_date = None;
    let mut next_id = 0;
    for game in games.iter_mut() {
        if current_date != Some(game.date) {
            current_date = Some(game.date);
            next_id = 0;
        }
        game.date_game_id = next_id;
        next_id += 1;
    }
}

fn parse_count(row: usize, column: &str, value: &str) -> Result<u32, AppError> {
    value
        .parse::<u32>()
        .map_err(|_| AppError::type_error(row, column, value, "integer"))
}

/// Attendance is published with thousands separators ("18,624") and may be blank.
fn parse_attendance(row: usize, value: &str) -> Result<Option<u32>, AppError> {
    if value.is_empty() {
        return Ok(None);
    }
    let digits: String = value.chars().filter(|c| *c != ',').collect();
    digits
        .parse::<u32>()
        .map(Some)
        .map_err(|_| AppError::type_error(row, "attendance", value, "integer"))
}

/// Overtime marker: blank for regulation, "OT" for one period, "2OT", "3OT", ...
fn parse_overtime(row: usize, value: &str) -> Result<u32, AppError> {
    if value.is_empty() {
        return Ok(0);
    }
    let invalid = || AppError::type_error(row, "n_ot", value, "overtime count");
    let prefix = value
        .strip_suffix("OT")
        .or_else(|| value.strip_suffix("ot"))
        .ok_or_else(invalid)?;
    if prefix.is_empty() {
        Ok(1)
    } else {
        prefix.parse::<u32>().map_err(|_| invalid())
    }
}
