//! update-image-urls - rename the image folder and hyphenate filenames
//!
//! ```bash
//! update-image-urls updated_atlas_collection.json
//! update-image-urls updated_atlas_collection.json -o urls.json
//! update-image-urls in.json --folder-from old-dir --folder-to new-dir
//! ```

use atlas_tools::pipeline::DEFAULT_URLS_OUTPUT;
use atlas_tools::transform::image_url::{
    DEFAULT_FILE_EXTENSION, DEFAULT_FILE_PREFIX, DEFAULT_FOLDER_FROM, DEFAULT_FOLDER_TO,
};
use atlas_tools::{
    emit, emit_all, run_update_image_urls, ImageUrlRule, LogEntry, UpdateImageUrlsOptions,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "update-image-urls")]
#[command(about = "Update 'image' URLs in a JSON file by replacing folder name and inserting hyphens in filenames.", long_about = None)]
struct Cli {
    /// Path to the input JSON file (e.g., updated_atlas_collection.json)
    json_file: PathBuf,

    /// Path to the output JSON file
    #[arg(short, long, default_value = DEFAULT_URLS_OUTPUT)]
    output: PathBuf,

    /// Folder name to replace in every URL
    #[arg(long, default_value = DEFAULT_FOLDER_FROM)]
    folder_from: String,

    /// Replacement folder name
    #[arg(long, default_value = DEFAULT_FOLDER_TO)]
    folder_to: String,

    /// Filename token followed by the seed number
    #[arg(long, default_value = DEFAULT_FILE_PREFIX)]
    file_prefix: String,

    /// Extension ending the image URL
    #[arg(long, default_value = DEFAULT_FILE_EXTENSION)]
    file_extension: String,
}

impl From<Cli> for UpdateImageUrlsOptions {
    fn from(cli: Cli) -> Self {
        Self {
            json_file: cli.json_file,
            output: cli.output,
            rule: ImageUrlRule {
                folder_from: cli.folder_from,
                folder_to: cli.folder_to,
                file_prefix: cli.file_prefix,
                file_extension: cli.file_extension,
            },
        }
    }
}

fn main() {
    let options = UpdateImageUrlsOptions::from(Cli::parse());

    match run_update_image_urls(&options) {
        Ok(summary) => emit_all(&summary.log_entries()),
        Err(e) => {
            emit(&LogEntry::error(e.to_string()));
            std::process::exit(1);
        }
    }
}
