//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Students API server.
#[derive(Debug, Parser)]
#[command(name = "students-api", version, about)]
pub struct Cli {
    /// Path to a YAML configuration file. Environment variables override it.
    #[arg(long, env = "CONFIG_PATH")]
    pub config: Option<PathBuf>,
}
