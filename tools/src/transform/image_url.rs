//! Image URL rewriting.
//!
//! Two steps, in order:
//!
//! 1. every occurrence of the old folder name is replaced by the new one;
//! 2. a filename ending in `<prefix><digits><extension>` gets a hyphen
//!    between the prefix and the digits.
//!
//! ```text
//! https://harto-atelier.github.io/atlas-offchain-images/images/Atlas0.png
//!                                 ^^^^^^^^^^^^^^^^^^^^^        ^^^^^
//! https://harto-atelier.github.io/atlas-images-offchain/images/Atlas-0.png
//! ```
//!
//! Once applied, neither step matches again, so the rewrite is idempotent.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

use crate::error::{TransformError, TransformResult};
use crate::loader::Record;
use crate::report::Warning;

/// Folder name replaced by default.
pub const DEFAULT_FOLDER_FROM: &str = "atlas-offchain-images";

/// Replacement folder name used by default.
pub const DEFAULT_FOLDER_TO: &str = "atlas-images-offchain";

/// Filename token before the seed number.
pub const DEFAULT_FILE_PREFIX: &str = "Atlas";

/// Extension ending the image URL.
pub const DEFAULT_FILE_EXTENSION: &str = ".png";

/// Literals driving the rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrlRule {
    /// Folder name to replace
    pub folder_from: String,
    /// Replacement folder name
    pub folder_to: String,
    /// Token directly before the seed number in the filename
    pub file_prefix: String,
    /// Extension ending the URL, dot included
    pub file_extension: String,
}

impl Default for ImageUrlRule {
    fn default() -> Self {
        Self {
            folder_from: DEFAULT_FOLDER_FROM.to_string(),
            folder_to: DEFAULT_FOLDER_TO.to_string(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
        }
    }
}

/// Result of rewriting a single URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRewrite {
    pub url: String,
    /// Whether the filename step applied
    pub filename_matched: bool,
}

/// A compiled [`ImageUrlRule`].
#[derive(Debug, Clone)]
pub struct ImageUrlRewriter {
    rule: ImageUrlRule,
    filename: Regex,
}

impl ImageUrlRewriter {
    pub fn new(rule: ImageUrlRule) -> TransformResult<Self> {
        if rule.folder_from.is_empty() {
            return Err(TransformError::InvalidRule(
                "folder name to replace must not be empty".to_string(),
            ));
        }
        if rule.file_prefix.is_empty() {
            return Err(TransformError::InvalidRule(
                "filename prefix must not be empty".to_string(),
            ));
        }

        // a single trailing newline may follow the extension
        let pattern = format!(
            r"({})(\d+)({})(\n?)$",
            regex::escape(&rule.file_prefix),
            regex::escape(&rule.file_extension)
        );
        let filename = Regex::new(&pattern)?;

        Ok(Self { rule, filename })
    }

    pub fn rule(&self) -> &ImageUrlRule {
        &self.rule
    }

    /// Apply both steps to `url`.
    pub fn rewrite(&self, url: &str) -> UrlRewrite {
        let renamed = url.replace(&self.rule.folder_from, &self.rule.folder_to);

        // no match leaves the haystack borrowed
        let hyphenated = match self.filename.replace(&renamed, "${1}-${2}${3}${4}") {
            Cow::Owned(url) => Some(url),
            Cow::Borrowed(_) => None,
        };

        match hyphenated {
            Some(url) => UrlRewrite { url, filename_matched: true },
            None => UrlRewrite { url: renamed, filename_matched: false },
        }
    }
}

/// Outcome of [`rewrite_image_urls`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageUrlUpdate {
    /// Records whose `meta.image` changed
    pub updated: usize,
    pub warnings: Vec<Warning>,
}

/// Rewrite `meta.image` on every record.
///
/// Records without a non-empty string `meta.image` are skipped with a
/// warning. A URL whose filename does not match still gets the folder
/// substitution. The field is written back only when the URL changed.
pub fn rewrite_image_urls(records: &mut [Record], rewriter: &ImageUrlRewriter) -> ImageUrlUpdate {
    let mut outcome = ImageUrlUpdate::default();

    for (i, record) in records.iter_mut().enumerate() {
        let index = i + 1;

        let Some(url) = image_url(record).map(str::to_owned) else {
            outcome.warnings.push(Warning::MissingImage { index });
            continue;
        };

        let rewritten = rewriter.rewrite(&url);
        if !rewritten.filename_matched {
            outcome.warnings.push(Warning::FilenamePattern { index, url: url.clone() });
        }

        if rewritten.url != url {
            if let Some(Value::Object(meta)) = record.get_mut("meta") {
                meta.insert("image".to_string(), Value::String(rewritten.url));
                outcome.updated += 1;
            }
        }
    }

    outcome
}

fn image_url(record: &Record) -> Option<&str> {
    record
        .get("meta")
        .and_then(|meta| meta.get("image"))
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BEFORE: &str = "https://harto-atelier.github.io/atlas-offchain-images/images/Atlas0.png";
    const AFTER: &str = "https://harto-atelier.github.io/atlas-images-offchain/images/Atlas-0.png";

    fn rewriter() -> ImageUrlRewriter {
        ImageUrlRewriter::new(ImageUrlRule::default()).unwrap()
    }

    fn records(value: Value) -> Vec<Record> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_object().unwrap().clone())
            .collect()
    }

    #[test]
    fn test_rewrite_known_url() {
        let result = rewriter().rewrite(BEFORE);
        assert_eq!(result.url, AFTER);
        assert!(result.filename_matched);
    }

    #[test]
    fn test_rewrite_multi_digit_seed() {
        let result = rewriter().rewrite("https://x/atlas-offchain-images/images/Atlas1234.png");
        assert_eq!(result.url, "https://x/atlas-images-offchain/images/Atlas-1234.png");
    }

    #[test]
    fn test_folder_replaced_everywhere() {
        let result = rewriter()
            .rewrite("https://atlas-offchain-images.io/atlas-offchain-images/Atlas7.png");
        assert_eq!(result.url, "https://atlas-images-offchain.io/atlas-images-offchain/Atlas-7.png");
    }

    #[test]
    fn test_filename_must_end_the_url() {
        let result = rewriter().rewrite("https://x/atlas-offchain-images/Atlas3.png?v=2");
        assert_eq!(result.url, "https://x/atlas-images-offchain/Atlas3.png?v=2");
        assert!(!result.filename_matched);
    }

    #[test]
    fn test_trailing_newline_after_filename() {
        let result = rewriter().rewrite(&format!("{}\n", BEFORE));
        assert!(result.filename_matched);
        assert_eq!(result.url, format!("{}\n", AFTER));
    }

    #[test]
    fn test_only_one_trailing_newline_allowed() {
        let result = rewriter().rewrite("https://x/Atlas3.png\n\n");
        assert!(!result.filename_matched);
    }

    #[test]
    fn test_extension_is_literal() {
        // the dot must not match any character
        let result = rewriter().rewrite("https://x/Atlas3xpng");
        assert!(!result.filename_matched);
        assert_eq!(result.url, "https://x/Atlas3xpng");
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let once = rewriter().rewrite(BEFORE);
        let twice = rewriter().rewrite(&once.url);
        assert_eq!(twice.url, once.url);
        assert!(!twice.filename_matched);
    }

    #[test]
    fn test_custom_rule() {
        let rule = ImageUrlRule {
            folder_from: "old".into(),
            folder_to: "new".into(),
            file_prefix: "Seed".into(),
            file_extension: ".jpg".into(),
        };
        let rewriter = ImageUrlRewriter::new(rule).unwrap();
        assert_eq!(rewriter.rewrite("https://h/old/Seed42.jpg").url, "https://h/new/Seed-42.jpg");
    }

    #[test]
    fn test_empty_folder_rejected() {
        let rule = ImageUrlRule { folder_from: String::new(), ..ImageUrlRule::default() };
        assert!(matches!(
            ImageUrlRewriter::new(rule),
            Err(TransformError::InvalidRule(_))
        ));
    }

    #[test]
    fn test_records_updated_and_counted() {
        let mut recs = records(json!([
            { "id": 1, "meta": { "image": BEFORE, "name": "Atlas #0" } },
            { "id": 2, "meta": { "image": AFTER } }
        ]));

        let outcome = rewrite_image_urls(&mut recs, &rewriter());

        assert_eq!(outcome.updated, 1);
        assert_eq!(recs[0]["meta"]["image"], AFTER);
        assert_eq!(recs[0]["meta"]["name"], "Atlas #0");
        assert_eq!(recs[1]["meta"]["image"], AFTER);
        // the already-migrated URL no longer matches the filename pattern
        assert_eq!(
            outcome.warnings,
            vec![Warning::FilenamePattern { index: 2, url: AFTER.to_string() }]
        );
    }

    #[test]
    fn test_record_without_image_is_skipped() {
        let mut recs = records(json!([{ "id": 5, "meta": {} }]));
        let original = recs.clone();

        let outcome = rewrite_image_urls(&mut recs, &rewriter());

        assert_eq!(outcome.updated, 0);
        assert_eq!(outcome.warnings, vec![Warning::MissingImage { index: 1 }]);
        assert_eq!(recs, original);
    }

    #[test]
    fn test_missing_meta_or_non_string_image_skipped() {
        let mut recs = records(json!([
            { "id": 1 },
            { "id": 2, "meta": { "image": 12 } },
            { "id": 3, "meta": { "image": "" } },
            { "id": 4, "meta": { "image": BEFORE } }
        ]));

        let outcome = rewrite_image_urls(&mut recs, &rewriter());

        assert_eq!(outcome.updated, 1);
        let indices: Vec<usize> = outcome.warnings.iter().map(Warning::index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert!(recs[0].get("meta").is_none());
        assert_eq!(recs[3]["meta"]["image"], AFTER);
    }

    #[test]
    fn test_folder_only_change_still_counted() {
        let mut recs = records(json!([
            { "meta": { "image": "https://x/atlas-offchain-images/cover.jpg" } }
        ]));

        let outcome = rewrite_image_urls(&mut recs, &rewriter());

        assert_eq!(outcome.updated, 1);
        assert_eq!(recs[0]["meta"]["image"], "https://x/atlas-images-offchain/cover.jpg");
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn test_image_key_keeps_its_position() {
        let mut recs = records(json!([
            { "meta": { "name": "n", "image": BEFORE, "seed": 0 } }
        ]));

        rewrite_image_urls(&mut recs, &rewriter());

        let keys: Vec<&str> = recs[0]["meta"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["name", "image", "seed"]);
    }
}
