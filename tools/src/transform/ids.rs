//! Positional ID replacement.
//!
//! Record `i` receives ID `i`. Both sequences must have the same length,
//! checked before anything is touched.

use serde::Serialize;
use serde_json::Value;

use crate::error::{TransformError, TransformResult};
use crate::loader::Record;
use crate::report::Warning;

/// Outcome of [`replace_ids`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdReplacement {
    /// Records whose `id` was overwritten
    pub replaced: usize,
    /// Records without an `id`, left untouched
    pub warnings: Vec<Warning>,
}

/// Replace the `id` of each record with the ID at the same position.
///
/// A record with no `id` (or a `null` one) keeps its shape: no field is
/// added and a [`Warning::MissingId`] is recorded. On a length mismatch
/// nothing is modified.
pub fn replace_ids(records: &mut [Record], ids: &[String]) -> TransformResult<IdReplacement> {
    if records.len() != ids.len() {
        return Err(TransformError::CountMismatch {
            ids: ids.len(),
            records: records.len(),
        });
    }

    let mut outcome = IdReplacement::default();

    for (i, (record, new_id)) in records.iter_mut().zip(ids).enumerate() {
        match record.get_mut("id") {
            Some(slot) if !slot.is_null() => {
                *slot = Value::String(new_id.clone());
                outcome.replaced += 1;
            }
            _ => outcome.warnings.push(Warning::MissingId { index: i + 1 }),
        }
    }

    Ok(outcome)
}
