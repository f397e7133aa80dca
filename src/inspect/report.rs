//! Fixed-format text rendering of inspection results.

use std::fmt;
use std::path::Path;

use polars::prelude::DataFrame;

use crate::ingestion::frame::Frame;
use crate::types::Schema;

use super::FileOutcome;

const BANNER_WIDTH: usize = 60;

/// What is kept of a sheet after its frame is dropped.
#[derive(Debug, Clone)]
pub struct SheetReport {
    /// Column names and inferred types, in sheet order.
    pub schema: Schema,
    /// Total number of data rows.
    pub row_count: usize,
    /// Requested preview size.
    pub preview_rows: usize,
    /// The first `preview_rows` rows (fewer if the sheet is shorter).
    pub preview: DataFrame,
}

impl SheetReport {
    /// Capture the reportable parts of `frame`.
    pub fn from_frame(frame: &Frame, preview_rows: usize) -> Self {
        Self {
            schema: frame.schema.clone(),
            row_count: frame.row_count(),
            preview_rows,
            preview: frame.head(preview_rows),
        }
    }

    /// Column names in sheet order.
    pub fn column_names(&self) -> Vec<&str> {
        self.schema.field_names().collect()
    }

    /// `name    dtype` lines, names left-aligned and dtypes right-aligned.
    pub fn dtypes_table(&self) -> String {
        let name_w = self
            .schema
            .fields
            .iter()
            .map(|f| f.name.chars().count())
            .max()
            .unwrap_or(0);
        let type_w = self
            .schema
            .fields
            .iter()
            .map(|f| f.column_type.as_str().len())
            .max()
            .unwrap_or(0);

        self.schema
            .fields
            .iter()
            .map(|f| {
                format!(
                    "{:<name_w$}    {:>type_w$}",
                    f.name,
                    f.column_type.as_str()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for SheetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nColumns:")?;
        for (i, name) in self.schema.field_names().enumerate() {
            writeln!(f, "  {}. {}", i + 1, name)?;
        }

        writeln!(f, "\nRows: {}", self.row_count)?;

        writeln!(f, "\nFirst {} rows:", self.preview_rows)?;
        writeln!(f, "{}", self.preview)?;

        writeln!(f, "\nData types:")?;
        if !self.schema.fields.is_empty() {
            writeln!(f, "{}", self.dtypes_table())?;
        }
        Ok(())
    }
}

/// The per-file header: a blank line, then the file name between two rules.
pub fn banner(path: &Path) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("\n{rule}\nFile: {}\n{rule}\n", display_name(path))
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&banner(&self.path))?;
        match &self.result {
            Ok(report) => write!(f, "{report}"),
            Err(e) => writeln!(f, "Error: {e}"),
        }
    }
}
