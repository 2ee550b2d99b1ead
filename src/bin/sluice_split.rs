//! sluice-split: Split a categorized JSON document into one CSV file per category
//!
//! Usage:
//!   # Convert ./data.json into ./data_<Category>.csv files
//!   sluice-split
//!
//!   # Convert a specific file into a chosen directory
//!   sluice-split records.json --output-dir ./tables
//!
//!   # Control the output file naming
//!   sluice-split records.json --prefix export- --suffix .txt

// Use MiMalloc allocator for better performance
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use sluice::{split_json_file, SplitConfig};

#[derive(Parser, Debug)]
#[command(name = "sluice-split")]
#[command(about = "Split a categorized JSON document into one CSV file per category", long_about = None)]
struct Args {
    /// Input JSON file (default: data.json)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Directory for the output files, created if missing (default: current directory)
    #[arg(long, short = 'o')]
    output_dir: Option<String>,

    /// Prefix for output file names (default: "data_")
    #[arg(long)]
    prefix: Option<String>,

    /// Suffix for output file names (default: ".csv")
    #[arg(long)]
    suffix: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Build config
    let mut config = SplitConfig::default();
    if let Some(input) = args.input {
        config.input_path = input.into();
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir.into();
    }
    if let Some(prefix) = args.prefix {
        config.output_prefix = prefix;
    }
    if let Some(suffix) = args.suffix {
        config.output_suffix = suffix;
    }

    std::fs::create_dir_all(&config.output_dir)?;

    let written = split_json_file(&config)?;
    for path in written {
        println!("{}", path.display());
    }

    Ok(())
}
