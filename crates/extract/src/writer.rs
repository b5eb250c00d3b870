use std::fs::File;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use traceprep_core::{Result, TraceprepError};

/// Write the rows as a JSON array indented by four spaces, the layout the
/// downstream load tester reads.
pub fn write_json(path: &Path, rows: &[Map<String, Value>]) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| TraceprepError::Io(format!("failed creating {}: {e}", path.display())))?;
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(file, formatter);
    rows.serialize(&mut ser)
        .map_err(|e| TraceprepError::Io(format!("failed writing {}: {e}", path.display())))
}
