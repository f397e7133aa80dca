//! Directory inspection.
//!
//! [`Inspector`] lists the workbooks in one directory and inspects them one at a time:
//!
//! - [`discover`] finds matching files (non-recursive, in directory-listing order)
//! - [`inspect`] loads the first sheet of one file into a frame and builds a [`SheetReport`]
//! - [`Inspector::run`] writes every report, turning per-file failures into an `Error:` line
//!
//! ```no_run
//! use sheet_inspect::inspect::{InspectOptions, Inspector};
//!
//! # fn main() -> std::io::Result<()> {
//! let inspector = Inspector::new("Excel_data", InspectOptions::default());
//! let mut out = std::io::stdout().lock();
//! let files = inspector.run(&mut out)?;
//! eprintln!("inspected {files} file(s)");
//! # Ok(())
//! # }
//! ```

pub mod report;

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glob::Pattern;

use crate::error::InspectResult;
use crate::ingestion::excel::read_first_sheet;
use crate::ingestion::frame::build_frame;
use crate::ingestion::observability::{
    InspectionContext, InspectionObserver, InspectionStats, Severity,
};

pub use report::SheetReport;

/// File-name pattern of the workbooks to inspect.
pub const DEFAULT_PATTERN: &str = "*.xlsx";

/// Number of rows shown in each preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Options controlling an inspection pass.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct InspectOptions {
    /// Glob pattern matched against file names (not paths).
    pub pattern: String,
    /// Rows to include in each preview.
    pub preview_rows: usize,
    /// Optional observer for logging.
    pub observer: Option<Arc<dyn InspectionObserver>>,
}

impl fmt::Debug for InspectOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InspectOptions")
            .field("pattern", &self.pattern)
            .field("preview_rows", &self.preview_rows)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            observer: None,
        }
    }
}

/// Result of inspecting one file.
#[derive(Debug)]
pub struct FileOutcome {
    /// The workbook path.
    pub path: PathBuf,
    /// The report, or the reason the file could not be read.
    pub result: InspectResult<SheetReport>,
}

impl FileOutcome {
    /// File name as shown in the report banner.
    pub fn file_name(&self) -> String {
        report::display_name(&self.path)
    }
}

/// List `directory` entries whose file name matches [`DEFAULT_PATTERN`].
pub fn discover(directory: impl AsRef<Path>) -> io::Result<Vec<PathBuf>> {
    discover_matching(directory, DEFAULT_PATTERN)
}

/// List `directory` entries whose file name matches `pattern`.
///
/// Non-recursive. Entries come back in directory-listing order, which is platform dependent
/// and not sorted. Names that are not valid UTF-8 never match.
pub fn discover_matching(directory: impl AsRef<Path>, pattern: &str) -> io::Result<Vec<PathBuf>> {
    let pattern =
        Pattern::new(pattern).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut out = Vec::new();
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_str().is_some_and(|n| pattern.matches(n)) {
            out.push(entry.path());
        }
    }
    Ok(out)
}

/// Inspect the first sheet of the workbook at `path`.
///
/// The full frame is dropped before returning; only the first `preview_rows` rows are kept.
pub fn inspect(path: impl AsRef<Path>, preview_rows: usize) -> InspectResult<SheetReport> {
    let sheet = read_first_sheet(path)?;
    let frame = build_frame(&sheet)?;
    Ok(SheetReport::from_frame(&frame, preview_rows))
}

/// Inspects every matching workbook in one directory.
#[derive(Debug, Clone)]
pub struct Inspector {
    directory: PathBuf,
    opts: InspectOptions,
}

impl Inspector {
    /// Create an inspector for `directory`.
    pub fn new(directory: impl AsRef<Path>, opts: InspectOptions) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            opts,
        }
    }

    /// Matching files, in directory-listing order.
    pub fn discover(&self) -> io::Result<Vec<PathBuf>> {
        discover_matching(&self.directory, &self.opts.pattern)
    }

    /// Inspect one file and report the outcome to the observer, if any.
    pub fn inspect_file(&self, path: &Path) -> FileOutcome {
        let result = inspect(path, self.opts.preview_rows);

        if let Some(observer) = &self.opts.observer {
            let ctx = InspectionContext {
                path: path.to_path_buf(),
            };
            match &result {
                Ok(report) => observer.on_success(
                    &ctx,
                    InspectionStats {
                        rows: report.row_count,
                        columns: report.schema.fields.len(),
                    },
                ),
                Err(e) => observer.on_failure(&ctx, Severity::of(e), e),
            }
        }

        FileOutcome {
            path: path.to_path_buf(),
            result,
        }
    }

    /// Inspect every matching file, collecting the outcomes in discovery order.
    ///
    /// Only a failure to list the directory is returned as an error.
    pub fn inspect_all(&self) -> io::Result<Vec<FileOutcome>> {
        Ok(self
            .discover()?
            .iter()
            .map(|path| self.inspect_file(path))
            .collect())
    }

    /// Inspect every matching file, writing each report to `out` before reading the next file.
    ///
    /// Returns the number of files processed. Per-file failures are written as an `Error:` line
    /// and do not stop the pass.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<usize> {
        let paths = self.discover()?;
        for path in &paths {
            let outcome = self.inspect_file(path);
            write!(out, "{outcome}")?;
        }
        out.flush()?;
        Ok(paths.len())
    }
}
