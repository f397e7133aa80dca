//! Column type inference and cell conversion.
//!
//! Each column is scanned once. Every cell is classified into a [`CellKind`], and the set of
//! kinds seen decides the column's [`ColumnType`]: integers promote to floats when a value is
//! missing or fractional, and any text or mix of scalar kinds falls back to `Object`.

use calamine::Data;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::types::{ColumnType, Value};

/// Text values read as missing, in addition to empty cells.
const NA_SENTINELS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Scalar kind of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Missing,
    Int,
    Float,
    Bool,
    DateTime,
    Duration,
    Text,
}

/// Returns `true` if `s` is one of the recognized missing-value sentinels.
pub fn is_na_sentinel(s: &str) -> bool {
    NA_SENTINELS.contains(&s)
}

/// Parse an ISO 8601 date/time cell (`t="d"` in xlsx).
///
/// Accepts a full RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS[.f]`, or a bare date.
pub fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Classify a cell.
pub fn classify(c: &Data) -> CellKind {
    match c {
        Data::Empty | Data::Error(_) => CellKind::Missing,
        Data::String(s) if is_na_sentinel(s) => CellKind::Missing,
        Data::DateTimeIso(s) if parse_iso_datetime(s).is_some() => CellKind::DateTime,
        Data::String(_) | Data::DateTimeIso(_) | Data::DurationIso(_) => CellKind::Text,
        Data::Int(_) => CellKind::Int,
        Data::Float(f) if is_integral(*f) => CellKind::Int,
        Data::Float(_) => CellKind::Float,
        Data::Bool(_) => CellKind::Bool,
        Data::DateTime(dt) if dt.is_duration() => CellKind::Duration,
        Data::DateTime(_) => CellKind::DateTime,
    }
}

fn is_integral(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64
}

/// Infer the type of a column from its cells (header excluded).
///
/// A column with no cells at all is `Object`; a column whose cells are all missing is
/// `Float64`.
pub fn infer_column_type<'a, I>(cells: I) -> ColumnType
where
    I: IntoIterator<Item = &'a Data>,
{
    let mut any_cell = false;
    let mut missing = false;
    let mut int = false;
    let mut float = false;
    let mut boolean = false;
    let mut datetime = false;
    let mut duration = false;
    let mut text = false;

    for cell in cells {
        any_cell = true;
        match classify(cell) {
            CellKind::Missing => missing = true,
            CellKind::Int => int = true,
            CellKind::Float => float = true,
            CellKind::Bool => boolean = true,
            CellKind::DateTime => datetime = true,
            CellKind::Duration => duration = true,
            CellKind::Text => text = true,
        }
    }

    if !any_cell {
        return ColumnType::Object;
    }
    if text {
        return ColumnType::Object;
    }

    let numeric = int || float;
    let kinds = [numeric, boolean, datetime, duration]
        .iter()
        .filter(|&&seen| seen)
        .count();

    match kinds {
        0 => ColumnType::Float64,
        1 if numeric => {
            if float || missing {
                ColumnType::Float64
            } else {
                ColumnType::Int64
            }
        }
        1 if boolean => {
            if missing {
                ColumnType::Object
            } else {
                ColumnType::Bool
            }
        }
        1 if datetime => ColumnType::DateTime,
        1 => ColumnType::Duration,
        _ => ColumnType::Object,
    }
}

/// Convert a cell into a [`Value`] of the column's inferred type.
///
/// Missing cells and cells that do not fit the column type become [`Value::Null`].
pub fn convert_cell(column_type: ColumnType, c: &Data) -> Value {
    if classify(c) == CellKind::Missing {
        return Value::Null;
    }

    match column_type {
        ColumnType::Int64 => match c {
            Data::Int(i) => Value::Int64(*i),
            Data::Float(f) if is_integral(*f) => Value::Int64(*f as i64),
            _ => Value::Null,
        },
        ColumnType::Float64 => match c {
            Data::Int(i) => Value::Float64(*i as f64),
            Data::Float(f) => Value::Float64(*f),
            _ => Value::Null,
        },
        ColumnType::Bool => match c {
            Data::Bool(b) => Value::Bool(*b),
            _ => Value::Null,
        },
        ColumnType::DateTime => match c {
            Data::DateTime(dt) => dt
                .as_datetime()
                .map_or(Value::Null, |ndt| Value::DateTime(ndt.and_utc().timestamp_millis())),
            Data::DateTimeIso(s) => parse_iso_datetime(s)
                .map_or(Value::Null, |ndt| Value::DateTime(ndt.and_utc().timestamp_millis())),
            _ => Value::Null,
        },
        ColumnType::Duration => match c {
            Data::DateTime(dt) => dt
                .as_duration()
                .map_or(Value::Null, |d| Value::Duration(d.num_milliseconds())),
            _ => Value::Null,
        },
        ColumnType::Object => Value::Utf8(cell_text(c)),
    }
}

fn cell_text(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Float(f) if is_integral(*f) => (*f as i64).to_string(),
        _ => c.to_string(),
    }
}
