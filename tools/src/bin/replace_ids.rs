//! replace-ids - replace the `id` of every record with IDs from a text file
//!
//! ```bash
//! replace-ids atlas_collection.json ids.txt
//! replace-ids atlas_collection.json ids.txt -o out.json
//! ```

use atlas_tools::pipeline::DEFAULT_IDS_OUTPUT;
use atlas_tools::{emit, emit_all, run_replace_ids, LogEntry, ReplaceIdsOptions};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "replace-ids")]
#[command(about = "Replace 'id' fields in a JSON file with new IDs from a text file.", long_about = None)]
struct Cli {
    /// Path to the input JSON file (e.g., atlas_collection.json)
    json_file: PathBuf,

    /// Path to the text file containing new IDs (one per line)
    ids_file: PathBuf,

    /// Path to the output JSON file
    #[arg(short, long, default_value = DEFAULT_IDS_OUTPUT)]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let options = ReplaceIdsOptions {
        json_file: cli.json_file,
        ids_file: cli.ids_file,
        output: cli.output,
    };

    match run_replace_ids(&options) {
        Ok(summary) => emit_all(&summary.log_entries()),
        Err(e) => {
            emit(&LogEntry::error(e.to_string()));
            std::process::exit(1);
        }
    }
}
