use std::path::PathBuf;

use crate::error::InspectError;

/// Severity classification used for observer callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// The workbook could not be parsed (corrupt, wrong format, no sheets).
    Error,
    /// I/O failure while reading the workbook.
    Critical,
}

impl Severity {
    /// Classify an inspection error.
    pub fn of(error: &InspectError) -> Self {
        match error {
            InspectError::Io(_) => Self::Critical,
            _ => Self::Error,
        }
    }
}

/// Context about a single workbook inspection.
#[derive(Debug, Clone)]
pub struct InspectionContext {
    /// The workbook path.
    pub path: PathBuf,
}

/// Minimal stats reported on a successful inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectionStats {
    /// Number of data rows in the first sheet.
    pub rows: usize,
    /// Number of columns in the first sheet.
    pub columns: usize,
}

/// Observer interface for inspection outcomes.
///
/// Implementors can record metrics or logs. Report text never goes through observers.
pub trait InspectionObserver: Send + Sync {
    /// Called when a workbook was inspected successfully.
    fn on_success(&self, _ctx: &InspectionContext, _stats: InspectionStats) {}

    /// Called when a workbook could not be inspected.
    fn on_failure(&self, _ctx: &InspectionContext, _severity: Severity, _error: &InspectError) {}
}

/// Logs inspection events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl InspectionObserver for StdErrObserver {
    fn on_success(&self, ctx: &InspectionContext, stats: InspectionStats) {
        eprintln!(
            "[inspect][ok] path={} rows={} columns={}",
            ctx.path.display(),
            stats.rows,
            stats.columns
        );
    }

    fn on_failure(&self, ctx: &InspectionContext, severity: Severity, error: &InspectError) {
        eprintln!(
            "[inspect][{:?}] path={} err={}",
            severity,
            ctx.path.display(),
            error
        );
    }
}
