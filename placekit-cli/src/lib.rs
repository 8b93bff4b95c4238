//! Command-line tools for placekit: static map URLs and record normalization.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod normalize;
mod static_map;

pub use error::CliError;

use normalize::{NormalizeArgs, run_normalize};
use static_map::{StaticMapArgs, run_static_map};

const ARG_LATITUDE: &str = "latitude";
const ARG_LONGITUDE: &str = "longitude";
const ARG_WIDTH: &str = "width";
const ARG_HEIGHT: &str = "height";
const ARG_CONFIG: &str = "config";
const ARG_KEY: &str = "key";
const ARG_PLATFORM: &str = "platform";
const ARG_RECORD: &str = "record";
const ENV_LATITUDE: &str = "PLACEKIT_CMDS_STATIC_MAP_LATITUDE";
const ENV_LONGITUDE: &str = "PLACEKIT_CMDS_STATIC_MAP_LONGITUDE";
const ENV_PLATFORM: &str = "PLACEKIT_CMDS_NORMALIZE_PLATFORM";
const ENV_RECORD: &str = "PLACEKIT_CMDS_NORMALIZE_RECORD";

/// Run the placekit CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments are invalid, inputs cannot be read, or
/// output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::StaticMap(args) => run_static_map(args, &mut stdout),
        Command::Normalize(args) => run_normalize(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "placekit",
    about = "Utilities for the placekit places bridge",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a static map image URL for a coordinate.
    StaticMap(StaticMapArgs),
    /// Print the canonical place for a captured native record.
    Normalize(NormalizeArgs),
}

#[cfg(test)]
mod tests;
