//! JSON Schema shape check for collection documents.
//!
//! A collection document must be an array of objects. The schema is
//! embedded at compile time from `schemas/record-set.json` and checked with
//! JSON Schema Draft 7. Nothing below the top level is validated: records
//! are otherwise schema-free.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use atlas_tools::validation::validate_record_set;
//!
//! assert!(validate_record_set(&json!([{ "id": 1 }])).is_ok());
//! assert!(validate_record_set(&json!({ "not": "a list" })).is_err());
//! ```

use once_cell::sync::Lazy;
use serde_json::Value;

static RECORD_SET_SCHEMA: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../schemas/record-set.json"))
        .expect("Invalid embedded schema")
});

/// Check that `data` is a list of objects.
///
/// Schema error messages echo the offending instance, which for a whole
/// collection can be megabytes long, so problems are described by position
/// and JSON type instead.
pub fn validate_record_set(data: &Value) -> Result<(), Vec<String>> {
    if is_valid_record_set(data) {
        return Ok(());
    }

    let problems = match data {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_object())
            .map(|(i, item)| format!("entry #{} is {}", i + 1, json_type(item)))
            .collect(),
        other => vec![format!("top-level value is {}", json_type(other))],
    };

    Err(problems)
}

/// Quick check against the record set schema.
pub fn is_valid_record_set(data: &Value) -> bool {
    jsonschema::draft7::is_valid(&RECORD_SET_SCHEMA, data)
}

/// Human-readable JSON type name with article.
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_record_set() {
        let data = json!([
            { "id": 1, "meta": { "image": "https://example.org/Atlas0.png" } },
            { "id": "2" }
        ]);
        assert!(is_valid_record_set(&data));
        assert!(validate_record_set(&data).is_ok());
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(validate_record_set(&json!([])).is_ok());
    }

    #[test]
    fn test_top_level_object_rejected() {
        let errors = validate_record_set(&json!({ "not": "a list" })).unwrap_err();
        assert_eq!(errors, vec!["top-level value is an object"]);
    }

    #[test]
    fn test_top_level_scalar_rejected() {
        let errors = validate_record_set(&json!(42)).unwrap_err();
        assert_eq!(errors, vec!["top-level value is a number"]);
    }

    #[test]
    fn test_non_object_entries_reported_by_position() {
        let errors = validate_record_set(&json!([{ "id": 1 }, "two", { "id": 3 }, null]))
            .unwrap_err();
        assert_eq!(errors, vec!["entry #2 is a string", "entry #4 is null"]);
    }
}
