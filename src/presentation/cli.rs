//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--project, --config, --json, --color, --verbose) are
//! inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// sitemode - switch a hosted site between maintenance page and live app
#[derive(Parser, Debug)]
#[command(name = "sitemode")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root (bundle, publish dir and commands resolve against it)
    #[arg(short, long, global = true, default_value = ".")]
    pub project: PathBuf,

    /// Config file (defaults to <project>/sitemode.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace the published site with the maintenance page
    Maintenance {
        /// Show what would be copied without writing
        #[arg(long)]
        dry_run: bool,

        /// Run the deploy command once the page is in place
        #[arg(long)]
        deploy: bool,
    },

    /// Rebuild and redeploy the application, ending maintenance mode
    Restore {
        /// Show the commands without running them
        #[arg(long)]
        dry_run: bool,

        /// Exit 0 even when build or deploy fails (legacy behaviour)
        #[arg(long)]
        soft_fail: bool,
    },

    /// Show whether the publish directory serves the maintenance page
    Status,
}

impl Commands {
    /// Command name used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Maintenance { .. } => "maintenance",
            Commands::Restore { .. } => "restore",
            Commands::Status => "status",
        }
    }
}
