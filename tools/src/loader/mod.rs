//! Input loading: the replacement ID list and the collection document.
//!
//! Both loaders read the whole file into memory. Any failure is fatal and
//! carries the path of the offending file.

use serde_json::{Map, Value};
use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::validation::validate_record_set;

/// One catalog entry. Unknown fields are kept as-is, in their original order.
pub type Record = Map<String, Value>;

/// Ordered replacement identifiers, one per non-blank line.
pub type IdList = Vec<String>;

/// Split text into trimmed, non-blank lines.
///
/// # Example
/// ```ignore
/// let ids = parse_ids("a1\n\n  b2  \n");
/// assert_eq!(ids, vec!["a1", "b2"]);
/// ```
pub fn parse_ids(text: &str) -> IdList {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Read an ID list file (UTF-8, one ID per line, blank lines ignored).
pub fn read_ids<P: AsRef<Path>>(path: P) -> LoadResult<IdList> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::from_io(path, e))?;
    Ok(parse_ids(&text))
}

/// Parse a collection document that must be a JSON array of objects.
///
/// `path` is only used for error reporting.
pub fn parse_records(text: &str, path: &Path) -> LoadResult<Vec<Record>> {
    let document: Value = serde_json::from_str(text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    validate_record_set(&document).map_err(|problems| LoadError::Shape {
        path: path.to_path_buf(),
        problems,
    })?;

    // The schema check above is the shape authority; this only moves the
    // already-validated objects out of the document.
    serde_json::from_value(document).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a collection document.
pub fn read_records<P: AsRef<Path>>(path: P) -> LoadResult<Vec<Record>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::from_io(path, e))?;
    parse_records(&text, path)
}
