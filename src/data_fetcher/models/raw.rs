use crate::error::AppError;

/// A table as published by the source site: disambiguated headers and
/// string cells, one row per table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Builds a table, padding short rows with empty cells and truncating long ones
    /// so every row has exactly `headers.len()` cells.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        RawTable { headers, rows }
    }

    /// Builds a table from raw header cells, disambiguating them the way the
    /// source's column names are referred to: a blank header at position `i`
    /// becomes `Unnamed: i`, and the n-th repeat of a header `H` becomes `H.n`.
    pub fn with_raw_headers(raw_headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self::new(disambiguate_headers(raw_headers), rows)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by its (disambiguated) header
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Position of a column that must exist
    pub fn require_column(&self, header: &str) -> Result<usize, AppError> {
        self.column_index(header)
            .ok_or_else(|| AppError::missing_column(header))
    }

    /// Keeps only rows for which `keep` returns true.
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[String]) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }

    /// Appends the rows of `other`. Both tables must share the same headers;
    /// an empty table adopts the headers of the first table appended to it.
    pub fn append(&mut self, other: RawTable) -> Result<(), AppError> {
        if self.headers.is_empty() && self.rows.is_empty() {
            *self = other;
            return Ok(());
        }
        if self.headers != other.headers {
            return Err(AppError::header_mismatch(format!(
                "expected [{}], got [{}]",
                self.headers.join(", "),
                other.headers.join(", ")
            )));
        }
        self.rows.extend(other.rows);
        Ok(())
    }
}

fn disambiguate_headers(raw_headers: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(raw_headers.len());
    for (index, header) in raw_headers.into_iter().enumerate() {
        let header = header.trim();
        let name = if header.is_empty() {
            format!("Unnamed: {index}")
        } else {
            let repeats = seen
                .iter()
                .filter(|h| h.as_str() == header || is_repeat_of(h, header))
                .count();
            if repeats == 0 {
                header.to_string()
            } else {
                format!("{header}.{repeats}")
            }
        };
        seen.push(name);
    }
    seen
}

/// True if `candidate` is `base.<n>` for some number n
fn is_repeat_of(candidate: &str, base: &str) -> bool {
    candidate
        .strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('.'))
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}
