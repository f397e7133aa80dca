//! Tabular frame construction.
//!
//! Turns a [`SheetData`] into a polars [`DataFrame`]: one typed [`Series`] per column, in
//! sheet column order, with rows in on-disk order.

use polars::prelude::*;

use crate::error::InspectResult;
use crate::types::{ColumnType, Field, Schema, Value};

use super::excel::SheetData;
use super::infer::{convert_cell, infer_column_type};

/// One sheet loaded into memory.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Column names and inferred types.
    pub schema: Schema,
    /// Typed column data.
    pub data: DataFrame,
}

impl Frame {
    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.data.height()
    }

    /// The first `n` rows (fewer if the frame is shorter).
    pub fn head(&self, n: usize) -> DataFrame {
        self.data.head(Some(n))
    }
}

/// Infer column types and build the frame for a sheet.
pub fn build_frame(sheet: &SheetData) -> InspectResult<Frame> {
    let mut fields = Vec::with_capacity(sheet.headers.len());
    let mut columns = Vec::with_capacity(sheet.headers.len());

    for (idx, name) in sheet.headers.iter().enumerate() {
        let column_type = infer_column_type(sheet.column_cells(idx));
        let values: Vec<Value> = sheet
            .column_cells(idx)
            .map(|c| convert_cell(column_type, c))
            .collect();

        columns.push(series_from_values(name, column_type, &values)?);
        fields.push(Field::new(name.clone(), column_type));
    }

    let data = DataFrame::new(
        sheet.row_count(),
        columns.into_iter().map(Column::from).collect(),
    )?;
    Ok(Frame {
        schema: Schema::new(fields),
        data,
    })
}

fn series_from_values(
    name: &str,
    column_type: ColumnType,
    values: &[Value],
) -> PolarsResult<Series> {
    let name = PlSmallStr::from(name);

    let series = match column_type {
        ColumnType::Int64 => {
            let vals: Vec<Option<i64>> = values
                .iter()
                .map(|v| match v {
                    Value::Int64(i) => Some(*i),
                    _ => None,
                })
                .collect();
            Series::new(name, vals)
        }
        ColumnType::Float64 => {
            let vals: Vec<Option<f64>> = values
                .iter()
                .map(|v| match v {
                    Value::Float64(f) => Some(*f),
                    _ => None,
                })
                .collect();
            Series::new(name, vals)
        }
        ColumnType::Bool => {
            let vals: Vec<Option<bool>> = values
                .iter()
                .map(|v| match v {
                    Value::Bool(b) => Some(*b),
                    _ => None,
                })
                .collect();
            Series::new(name, vals)
        }
        ColumnType::DateTime => {
            let vals: Vec<Option<i64>> = values
                .iter()
                .map(|v| match v {
                    Value::DateTime(ms) => Some(*ms),
                    _ => None,
                })
                .collect();
            Series::new(name, vals).cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
        }
        ColumnType::Duration => {
            let vals: Vec<Option<i64>> = values
                .iter()
                .map(|v| match v {
                    Value::Duration(ms) => Some(*ms),
                    _ => None,
                })
                .collect();
            Series::new(name, vals).cast(&DataType::Duration(TimeUnit::Milliseconds))?
        }
        ColumnType::Object => {
            let vals: Vec<Option<String>> = values
                .iter()
                .map(|v| match v {
                    Value::Utf8(s) => Some(s.clone()),
                    _ => None,
                })
                .collect();
            Series::new(name, vals)
        }
    };

    Ok(series)
}
