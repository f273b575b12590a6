//! # Atlas tools - bulk field edits on collection JSON files
//!
//! Two command-line utilities share this library:
//!
//! - `replace-ids` replaces the `id` of every record with the ID on the
//!   matching line of a text file.
//! - `update-image-urls` renames the image folder in `meta.image` and
//!   hyphenates the `Atlas<seed>.png` filename.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  JSON file  │────▶│   Loader    │────▶│ Transformer │────▶│   Writer    │
//! │ (+ ID list) │     │ (shape chk) │     │ (ids / url) │     │ (indent 4)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per stage
//! - [`loader`] - ID list and collection loading
//! - [`validation`] - Record set shape check
//! - [`transform`] - ID replacement and image URL rewriting
//! - [`writer`] - Indented JSON output
//! - [`report`] - Warnings and console log entries
//! - [`pipeline`] - One function per tool

// Core modules
pub mod error;
pub mod report;

// Stages
pub mod loader;
pub mod validation;
pub mod transform;
pub mod writer;

// Orchestration
pub mod pipeline;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{LoadError, ToolError, ToolResult, TransformError, WriteError};

pub use loader::{parse_ids, parse_records, read_ids, read_records, IdList, Record};

pub use validation::{is_valid_record_set, validate_record_set};

pub use transform::{
    replace_ids,
    rewrite_image_urls,
    IdReplacement,
    ImageUrlRewriter,
    ImageUrlRule,
    ImageUrlUpdate,
    UrlRewrite,
};

pub use writer::{to_pretty_vec, write_records};

pub use report::{emit, emit_all, LogEntry, LogLevel, Warning};

pub use pipeline::{
    run_replace_ids,
    run_update_image_urls,
    ReplaceIdsOptions,
    ReplaceIdsSummary,
    UpdateImageUrlsOptions,
    UpdateImageUrlsSummary,
};
