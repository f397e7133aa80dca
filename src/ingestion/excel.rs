//! Workbook reading: opens an `.xlsx` file and extracts the first sheet's header and data rows.

use std::collections::HashSet;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::error::{InspectError, InspectResult};

/// Raw cells of one worksheet, split into a header row and data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetData {
    /// Worksheet name.
    pub name: String,
    /// Column names derived from the first row (see [`header_names`]).
    pub headers: Vec<String>,
    /// Data rows, each padded to `headers.len()` cells.
    pub rows: Vec<Vec<Data>>,
}

impl SheetData {
    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate the cells of column `idx` in row order. Short rows yield [`Data::Empty`].
    pub fn column_cells(&self, idx: usize) -> impl Iterator<Item = &Data> {
        self.rows
            .iter()
            .map(move |row| row.get(idx).unwrap_or(&Data::Empty))
    }
}

/// Read the first worksheet of the workbook at `path`.
///
/// Behavior:
/// - Uses the first sheet in workbook order; other sheets are never read
/// - The first row of the used range is the header row
/// - An empty sheet yields no headers and no rows
pub fn read_first_sheet(path: impl AsRef<Path>) -> InspectResult<SheetData> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(InspectError::NoSheets)?;
    let range = workbook.worksheet_range(&sheet)?;

    Ok(sheet_from_range(sheet, &range))
}

/// Split a cell range into header names and padded data rows.
pub fn sheet_from_range(name: impl Into<String>, range: &Range<Data>) -> SheetData {
    let mut rows = range.rows();
    let headers = rows.next().map(header_names).unwrap_or_default();

    let width = headers.len();
    let rows = rows
        .map(|row| {
            let mut out = row.to_vec();
            out.resize(width, Data::Empty);
            out
        })
        .collect();

    SheetData {
        name: name.into(),
        headers,
        rows,
    }
}

/// Derive column names from a header row.
///
/// Empty cells become `Unnamed: {idx}`; repeated names get `.1`, `.2`, ... suffixes.
pub fn header_names(cells: &[Data]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(cells.len());
    let mut out = Vec::with_capacity(cells.len());

    for (idx, cell) in cells.iter().enumerate() {
        let raw = cell_to_header_string(cell);
        let base = if raw.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            raw
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while seen.contains(&name) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        seen.insert(name.clone());
        out.push(name);
    }

    out
}

fn cell_to_header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(f) => f.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
        Data::Empty => "".to_string(),
    }
}
