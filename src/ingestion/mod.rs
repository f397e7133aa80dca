//! Workbook loading.
//!
//! - [`excel`]: open an `.xlsx` workbook and read the first sheet's header and data rows
//! - [`infer`]: per-column type inference and cell conversion
//! - [`frame`]: build the polars frame for a sheet
//! - [`observability`]: observer hooks for logging inspection outcomes

pub mod excel;
pub mod frame;
pub mod infer;
pub mod observability;

pub use excel::{read_first_sheet, SheetData};
pub use frame::{build_frame, Frame};
pub use observability::{
    InspectionContext, InspectionObserver, InspectionStats, Severity, StdErrObserver,
};
