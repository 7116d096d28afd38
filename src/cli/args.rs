//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Merge KML tracks, downsampling each input independently.
#[derive(Debug, Parser)]
#[command(name = "kml-merge")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "An input file named 'config' is read as the config subcommand; pass it as './config'."
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Input KML files, comma separated. Their order is kept in the merged track.
    /// A file named `config` must be given as `./config`.
    #[arg(value_name = "INPUTS")]
    pub inputs: Option<String>,

    /// Sample rate for each input, comma separated. At most 1: fraction of
    /// points to keep. Above 1: number of points to keep.
    #[arg(value_name = "RATES")]
    pub rates: Option<String>,

    /// Common options for merging.
    #[command(flatten)]
    pub merge: MergeArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for a merge run.
#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Write the merged document to this file instead of stdout.
    #[arg(short, long, env = "KML_MERGE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Configuration file (default: platform config directory).
    #[arg(long, env = "KML_MERGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write elements without added indentation.
    #[arg(long)]
    pub no_indent: bool,

    /// Start the output with an XML declaration.
    #[arg(long)]
    pub xml_declaration: bool,

    /// Only log warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
