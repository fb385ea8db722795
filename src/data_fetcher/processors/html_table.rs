//! Extraction of the schedule table from a basketball-reference page.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::constants::source_columns;
use crate::data_fetcher::models::RawTable;

static SCHEDULE_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table#schedule").expect("valid selector"));
static ANY_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("valid selector"));
static HEADER_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("thead tr").expect("valid selector"));
static BODY_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tbody tr").expect("valid selector"));
static CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th, td").expect("valid selector"));

/// Extracts the schedule table from an HTML page.
///
/// Prefers `table#schedule`, falling back to the first table on the page.
/// Headers come from the last header row; body rows keep one string per cell
/// with whitespace collapsed. Rows repeating the header inside the body
/// (`tr.thead`) are skipped. Returns `None` if the page has no table.
pub fn extract_schedule_table(html: &str) -> Option<RawTable> {
    let document = Html::parse_document(html);
    let table = document
        .select(&SCHEDULE_TABLE)
        .next()
        .or_else(|| document.select(&ANY_TABLE).next())?;

    let headers: Vec<String> = table
        .select(&HEADER_ROW)
        .last()
        .map(|row| row.select(&CELL).map(cell_text).collect())
        .unwrap_or_default();

    let rows: Vec<Vec<String>> = table
        .select(&BODY_ROW)
        .filter(|row| !has_class(row, "thead"))
        .map(|row| row.select(&CELL).map(cell_text).collect())
        .collect();

    debug!(
        "Extracted table with {} columns and {} rows",
        headers.len(),
        rows.len()
    );
    Some(RawTable::with_raw_headers(headers, rows))
}

/// Removes rows that are not games: the "Playoffs" separator, header rows
/// repeated in the body, and blank rows. Returns how many rows were removed.
pub fn drop_separator_rows(table: &mut RawTable) -> usize {
    let Some(date_column) = table.column_index(source_columns::DATE) else {
        return 0;
    };
    let before = table.len();
    table.retain_rows(|row| {
        let date = row.get(date_column).map_or("", |c| c.trim());
        let keep = !(date.is_empty()
            || date == source_columns::PLAYOFFS_MARKER
            || date == source_columns::DATE);
        if !keep {
            trace!("Dropping separator row: {:?}", row);
        }
        keep
    });
    before - table.len()
}

fn has_class(element: &ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .flat_map(|chunk| chunk.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}
