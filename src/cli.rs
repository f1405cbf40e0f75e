//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Download series from German public broadcasts via MediathekViewWeb.
///
/// Reads a YAML configuration listing programs to search for, discovers
/// newly published episodes, and downloads them into a season-organized
/// folder tree under the output folder.
#[derive(Parser, Debug)]
#[command(name = "mediathek-dl")]
#[command(author, version, about)]
pub struct Args {
    /// Output folder where series will be downloaded
    #[arg(short, long)]
    pub out: PathBuf,

    /// Disable the download speed limit configured in the config file
    #[arg(long)]
    pub unlimited: bool,

    /// Path to the YAML configuration file
    #[arg(long, default_value = "config.yaml")]
    pub config: PathBuf,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}
