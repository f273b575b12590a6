//! Record transformers.
//!
//! - ids: positional `id` replacement
//! - image_url: `meta.image` folder rename and filename hyphenation

pub mod ids;
pub mod image_url;

pub use ids::{replace_ids, IdReplacement};
pub use image_url::{rewrite_image_urls, ImageUrlRewriter, ImageUrlRule, ImageUrlUpdate, UrlRewrite};
