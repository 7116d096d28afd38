//! kml-merge - KML track merging CLI tool.
//!
//! Merges several KML tracks into one document. Each input's coordinate
//! sequence is downsampled on its own before the sequences are concatenated
//! into the first input's document.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod kml;
pub mod merge;

use clap::Parser;
use cli::{Cli, Command, ConfigAction, MergeArgs};
use cli::validators::{parse_input_list, parse_rate_list};
use config::{
    Config, config_file_path, load_config_file, load_default_config, save_default_config, to_toml,
};
use kml::WriteOptions;
use merge::{TrackInput, merge_tracks, pair_inputs};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

pub use error::{Error, Result};
pub use kml::{SampleRate, TrackDocument};
pub use merge::combine;

/// Main entry point for kml-merge CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.merge.verbose, cli.merge.quiet);

    if let Some(command) = cli.command {
        let config = load_config(cli.merge.config.as_deref())?;
        return handle_command(command, &config);
    }

    let (Some(inputs), Some(rates)) = (cli.inputs.as_deref(), cli.rates.as_deref()) else {
        return Err(Error::Configuration {
            message: "expected INPUTS and RATES arguments (see --help)".to_string(),
        });
    };

    // Argument errors are reported before the config file is read.
    let tracks = pair_inputs(&parse_input_list(inputs)?, &parse_rate_list(rates)?)?;
    let config = load_config(cli.merge.config.as_deref())?;

    merge_files(&tracks, &cli.merge, &config)
}

/// Merge the paired inputs and write the result to the configured sink.
fn merge_files(tracks: &[TrackInput], args: &MergeArgs, config: &Config) -> Result<()> {
    let mut options = WriteOptions::from(&config.output);
    if args.no_indent {
        options.indent = false;
    }
    if args.xml_declaration {
        options.xml_declaration = true;
    }
    debug!("Write options: {options:?}");

    info!("Merging {} track(s)", tracks.len());
    let merged = merge_tracks(tracks)?;
    debug!("Merged {} points", merged.point_count());
    let document = merged.to_bytes(&options)?;

    write_output(&document, args.output.as_deref())
}

/// Write the serialized document to `path`, or stdout when no path is given.
fn write_output(document: &[u8], path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, document).map_err(|e| Error::OutputWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!("Wrote merged track to {}", path.display());
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(document)?;
    stdout.flush()?;
    Ok(())
}

/// Load the explicitly requested config file, or the platform default.
///
/// An explicit path must exist; the platform default may be absent.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return load_default_config();
    };
    std::fs::metadata(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    load_config_file(path)
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // stdout carries the merged document
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_command(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action, config),
    }
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            print!("{}", to_toml(config)?);
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
