//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// A personal portfolio for the terminal.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for the particle field, for a reproducible background.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Start without the particle background.
    #[arg(long)]
    pub no_particles: bool,

    /// Write the portfolio as plain text to PATH and exit.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Column width used by --export.
    #[arg(long, default_value_t = 80, requires = "export")]
    pub width: u16,
}
