use std::fs::File;
use std::path::Path;

use traceprep_core::model::record::TraceRecord;
use traceprep_core::{Result, TraceprepError};

/// Write the records as a YAML sequence. serde_yaml emits mapping keys in
/// struct declaration order, which is the order the load tester expects.
pub fn write_yaml(path: &Path, records: &[TraceRecord]) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| TraceprepError::Io(format!("failed creating {}: {e}", path.display())))?;
    serde_yaml::to_writer(file, records)
        .map_err(|e| TraceprepError::Io(format!("failed writing {}: {e}", path.display())))
}
