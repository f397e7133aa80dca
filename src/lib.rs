//! `sheet-inspect` walks a directory of `.xlsx` workbooks and, for each one, prints the column
//! names, the row count, a preview of the first rows, and the inferred type of every column.
//!
//! The primary entrypoint is [`inspect::Inspector`]. Files are processed one at a time; a file
//! that cannot be read produces a single `Error:` line and the pass moves on.
//!
//! ## What gets read
//!
//! - Only file names matching `*.xlsx`, non-recursively, in directory-listing order (unsorted)
//! - Only the first sheet of each workbook
//! - The first row is the header; empty header cells become `Unnamed: {idx}` and repeated names
//!   get `.1`, `.2`, ... suffixes
//!
//! ## Column types
//!
//! Each column is tagged with a [`types::ColumnType`]:
//!
//! - [`types::ColumnType::Int64`]: integers only, none missing
//! - [`types::ColumnType::Float64`]: numbers with a fractional or missing value
//! - [`types::ColumnType::Bool`]: booleans only, none missing
//! - [`types::ColumnType::DateTime`] / [`types::ColumnType::Duration`]: date or duration cells
//! - [`types::ColumnType::Object`]: text, or any mix of scalar kinds
//!
//! Empty cells, error cells, and text such as `NA`, `N/A`, `NULL` or `nan` count as missing.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use sheet_inspect::ingestion::StdErrObserver;
//! use sheet_inspect::inspect::{InspectOptions, Inspector};
//!
//! # fn main() -> std::io::Result<()> {
//! let opts = InspectOptions {
//!     observer: Some(Arc::new(StdErrObserver)),
//!     ..Default::default()
//! };
//! let inspector = Inspector::new("Excel_data", opts);
//! for outcome in inspector.inspect_all()? {
//!     match &outcome.result {
//!         Ok(report) => println!("{}: {} rows", outcome.file_name(), report.row_count),
//!         Err(e) => println!("{}: {e}", outcome.file_name()),
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`inspect`]: discovery, per-file inspection, and report rendering
//! - [`ingestion`]: workbook reading, type inference, frame construction, observers
//! - [`types`]: column type tags, schema, and cell values
//! - [`error`]: error type for per-file failures

pub mod error;
pub mod ingestion;
pub mod inspect;
pub mod types;

pub use error::{InspectError, InspectResult};
