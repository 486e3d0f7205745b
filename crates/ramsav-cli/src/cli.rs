//! Command line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ramsav_core::FilenameRule;

#[derive(Parser)]
#[command(name = "ram2sav")]
#[command(about = "Rebuild Gen 6 save files from ramsav.bin RAM dumps", version)]
pub struct Cli {
    /// How the input file name is checked before reconstruction
    #[arg(
        long,
        global = true,
        env = "RAM2SAV_FILENAME_RULE",
        default_value = "contains"
    )]
    pub filename_rule: FilenameRule,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconstruct the save image and write it to disk
    Convert {
        /// RAM dump to read
        input: PathBuf,

        /// Output path (default: <input stem>_main.bin next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show which blocks were found in a dump
    Inspect {
        /// RAM dump to read
        input: PathBuf,

        /// Write the report as JSON instead of printing a table
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Search a dump for a single marker word
    Locate {
        /// File to search
        input: PathBuf,

        /// Marker word in hex (e.g. 0x0059E418)
        #[arg(short, long)]
        magic: String,

        /// Number of earlier matches to skip
        #[arg(long, default_value_t = 0)]
        occurrence: u32,

        /// Search start offset in hex
        #[arg(long, default_value = "0")]
        start: String,

        /// List every match instead of a single one
        #[arg(long)]
        all: bool,

        /// Maximum number of matches listed with --all
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },
}
