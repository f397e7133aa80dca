use thiserror::Error;

/// Convenience result type for inspection operations.
pub type InspectResult<T> = Result<T, InspectError>;

/// Error type returned when a single workbook cannot be inspected.
///
/// The inspector only ever surfaces the `Display` text of these errors; the variant is kept so
/// observers can classify severity.
#[derive(Debug, Error)]
pub enum InspectError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The workbook could not be opened or the sheet could not be read.
    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// The tabular frame could not be assembled from the sheet cells.
    #[error("dataframe error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// The workbook opened but contains no worksheets.
    #[error("workbook has no sheets")]
    NoSheets,
}
