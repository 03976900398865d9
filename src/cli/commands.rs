//! CLI definition using clap.
//!
//! Mirrors the options of the original lando task: an optional tool and an
//! optional service, both falling back to configuration/catalog defaults.

use clap::Parser;
use std::path::PathBuf;

/// Connects to the database using a GUI tool of your choice
#[derive(Parser, Debug)]
#[command(name = "dbgui")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// DB GUI tool to open [default: read from .lando.yml]
    #[arg(short, long)]
    pub tool: Option<String>,

    /// Service to act upon [default: first database service found]
    #[arg(short, long)]
    pub service: Option<String>,

    /// Print the launch command without executing it
    #[arg(long)]
    pub dry_run: bool,

    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}
