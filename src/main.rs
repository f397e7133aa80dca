use std::io;
use std::sync::Arc;

use sheet_inspect::ingestion::StdErrObserver;
use sheet_inspect::inspect::{InspectOptions, Inspector};

/// Directory scanned on every run, relative to the working directory.
const EXCEL_DIR: &str = "Excel_data";

fn main() -> io::Result<()> {
    let opts = InspectOptions {
        observer: Some(Arc::new(StdErrObserver)),
        ..Default::default()
    };
    let inspector = Inspector::new(EXCEL_DIR, opts);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    inspector.run(&mut out)?;
    Ok(())
}
