//! Output: serialize records as an indented JSON array and write it out.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

use crate::error::{WriteError, WriteResult};
use crate::loader::Record;

/// Indentation of the output document.
pub const INDENT: &[u8] = b"    ";

/// Serialize records as a JSON array indented by four spaces.
pub fn to_pretty_vec(records: &[Record]) -> WriteResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    Ok(buf)
}

/// Write records to `path`, replacing any existing file.
pub fn write_records<P: AsRef<Path>>(records: &[Record], path: P) -> WriteResult<()> {
    let path = path.as_ref();
    let json = to_pretty_vec(records)?;
    std::fs::write(path, json).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })
}
