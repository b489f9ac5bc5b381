use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::DEFAULT_STATION_ID;

#[derive(Parser)]
#[command(name = "ghcnd-processor")]
#[command(about = "GHCN-Daily station record processor with color-encoded CSV output")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a .dly station file into per-variable CSV tables
    Process {
        #[arg(short, long, help = "Input .dly station file")]
        input_file: PathBuf,

        #[arg(short, long, default_value = "results", help = "Output directory for the CSV tables")]
        output_dir: PathBuf,

        #[arg(short, long, default_value = DEFAULT_STATION_ID)]
        station_id: String,

        #[arg(long, help = "Process only the last N records of the file")]
        last: Option<usize>,

        #[arg(long, default_value = "false", help = "Read the input with a memory map")]
        use_mmap: bool,

        #[arg(short, long, default_value = "false", help = "Suppress progress output")]
        quiet: bool,
    },

    /// Display summary statistics for a written CSV table
    Info {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long, default_value = "10")]
        sample: usize,

        #[arg(
            long,
            default_value = "0",
            help = "Maximum rows to analyze (0 = all rows)"
        )]
        analysis_limit: usize,
    },
}
