use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "parklot", bin_name = "parklot", version)]
#[command(about = "Parking lot registry: arrivals, departures, fees and history", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json (defaults to the user config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Maximum number of stays the registry accepts
    #[arg(long, global = true, value_name = "N", conflicts_with = "unbounded")]
    pub capacity: Option<usize>,

    /// Accept arrivals without any capacity limit
    #[arg(long, global = true)]
    pub unbounded: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive menu (default)
    #[command(alias = "m")]
    Menu,

    /// Show the effective configuration
    Config {
        /// Configuration key (e.g. capacity, later-rate)
        key: Option<String>,
    },

    /// Write the effective configuration to the config directory
    Init,
}
