//! High-level pipelines behind the two binaries.
//!
//! Each run is load → transform → write. Any fatal error returns before the
//! writer runs, so a failed run never produces an output file.
//!
//! # Example
//!
//! ```rust,ignore
//! use atlas_tools::pipeline::{run_update_image_urls, UpdateImageUrlsOptions};
//!
//! let options = UpdateImageUrlsOptions {
//!     json_file: "atlas_collection.json".into(),
//!     ..Default::default()
//! };
//! let summary = run_update_image_urls(&options)?;
//! println!("Updated {} URLs", summary.updated);
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ToolResult;
use crate::loader::{read_ids, read_records};
use crate::report::{LogEntry, Warning};
use crate::transform::{replace_ids, rewrite_image_urls, ImageUrlRewriter, ImageUrlRule};
use crate::writer::write_records;

/// Default output of `replace-ids`.
pub const DEFAULT_IDS_OUTPUT: &str = "atlas_collection_updated.json";

/// Default output of `update-image-urls`.
pub const DEFAULT_URLS_OUTPUT: &str = "updated_atlas_collection_urls.json";

// =============================================================================
// replace-ids
// =============================================================================

/// Options for the ID replacement run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceIdsOptions {
    /// Collection document to update
    pub json_file: PathBuf,
    /// Replacement IDs, one per line
    pub ids_file: PathBuf,
    /// Where to write the updated document
    pub output: PathBuf,
}

impl Default for ReplaceIdsOptions {
    fn default() -> Self {
        Self {
            json_file: PathBuf::new(),
            ids_file: PathBuf::new(),
            output: PathBuf::from(DEFAULT_IDS_OUTPUT),
        }
    }
}

/// Result of a successful ID replacement run
#[derive(Debug, Clone, Serialize)]
pub struct ReplaceIdsSummary {
    pub ids_read: usize,
    pub records_read: usize,
    pub replaced: usize,
    pub warnings: Vec<Warning>,
    pub output: PathBuf,
}

impl ReplaceIdsSummary {
    /// Console lines for this run, in display order.
    pub fn log_entries(&self) -> Vec<LogEntry> {
        let mut entries = vec![
            LogEntry::info(format!("Number of new IDs read: {}", self.ids_read)),
            LogEntry::info(format!("Number of JSON entries read: {}", self.records_read)),
        ];
        entries.extend(self.warnings.iter().map(LogEntry::from));
        entries.push(written(&self.output));
        entries
    }
}

/// Replace every record's `id` with the ID on the matching line.
///
/// IDs are read first, then the collection; a length mismatch aborts the
/// run before any mutation or write.
pub fn run_replace_ids(options: &ReplaceIdsOptions) -> ToolResult<ReplaceIdsSummary> {
    let ids = read_ids(&options.ids_file)?;
    let mut records = read_records(&options.json_file)?;

    let outcome = replace_ids(&mut records, &ids)?;
    write_records(&records, &options.output)?;

    Ok(ReplaceIdsSummary {
        ids_read: ids.len(),
        records_read: records.len(),
        replaced: outcome.replaced,
        warnings: outcome.warnings,
        output: options.output.clone(),
    })
}

// =============================================================================
// update-image-urls
// =============================================================================

/// Options for the image URL run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateImageUrlsOptions {
    /// Collection document to update
    pub json_file: PathBuf,
    /// Where to write the updated document
    pub output: PathBuf,
    /// Rewrite literals
    pub rule: ImageUrlRule,
}

impl Default for UpdateImageUrlsOptions {
    fn default() -> Self {
        Self {
            json_file: PathBuf::new(),
            output: PathBuf::from(DEFAULT_URLS_OUTPUT),
            rule: ImageUrlRule::default(),
        }
    }
}

/// Result of a successful image URL run
#[derive(Debug, Clone, Serialize)]
pub struct UpdateImageUrlsSummary {
    pub records_read: usize,
    pub updated: usize,
    pub warnings: Vec<Warning>,
    pub output: PathBuf,
}

impl UpdateImageUrlsSummary {
    /// Console lines for this run, in display order.
    pub fn log_entries(&self) -> Vec<LogEntry> {
        let mut entries = vec![LogEntry::info(format!(
            "Number of JSON entries read: {}",
            self.records_read
        ))];
        entries.extend(self.warnings.iter().map(LogEntry::from));
        entries.push(LogEntry::info(format!(
            "Number of image URLs updated: {}",
            self.updated
        )));
        entries.push(written(&self.output));
        entries
    }
}

/// Rewrite `meta.image` on every record of the collection.
pub fn run_update_image_urls(options: &UpdateImageUrlsOptions) -> ToolResult<UpdateImageUrlsSummary> {
    let rewriter = ImageUrlRewriter::new(options.rule.clone())?;
    let mut records = read_records(&options.json_file)?;

    let outcome = rewrite_image_urls(&mut records, &rewriter);
    write_records(&records, &options.output)?;

    Ok(UpdateImageUrlsSummary {
        records_read: records.len(),
        updated: outcome.updated,
        warnings: outcome.warnings,
        output: options.output.clone(),
    })
}

fn written(path: &std::path::Path) -> LogEntry {
    LogEntry::success(format!(
        "Successfully wrote updated JSON to '{}'.",
        path.display()
    ))
}
