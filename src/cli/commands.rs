//! CLI commands and argument parsing

use crate::pagination::PageWindow;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Page-number pagination calculator
#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pager configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show page count, boundaries and neighbours of a page
    Info {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Show the page navigation sequence
    Pages {
        #[command(flatten)]
        page: PageArgs,

        #[command(flatten)]
        window: WindowArgs,
    },

    /// Build the response envelope for a request URL
    Envelope {
        /// Absolute URL of the current request
        #[arg(long)]
        url: String,

        /// Total number of items
        #[arg(long)]
        total: u64,

        /// Page number (overrides the URL)
        #[arg(long)]
        page: Option<u64>,

        /// Page size (overrides the URL)
        #[arg(long)]
        page_size: Option<u64>,
    },

    /// Show the effective configuration
    Config,
}

/// Page selection shared by several commands
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Current page (1-based)
    #[arg(long, default_value = "1")]
    pub page: u64,

    /// Items per page, 0 for unbounded (default from config)
    #[arg(long)]
    pub page_size: Option<u64>,

    /// Total number of items
    #[arg(long)]
    pub total: u64,
}

/// Navigation window overrides
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct WindowArgs {
    /// Pages always shown at the start
    #[arg(long)]
    pub left_edge: Option<u64>,

    /// Pages shown before the current one
    #[arg(long)]
    pub left_current: Option<u64>,

    /// Bound of the pages shown after the current one
    #[arg(long)]
    pub right_current: Option<u64>,

    /// Pages always shown at the end
    #[arg(long)]
    pub right_edge: Option<u64>,
}

impl WindowArgs {
    /// Apply the overrides on top of `base`
    pub fn apply(&self, base: PageWindow) -> PageWindow {
        PageWindow {
            left_edge: self.left_edge.unwrap_or(base.left_edge),
            left_current: self.left_current.unwrap_or(base.left_current),
            right_current: self.right_current.unwrap_or(base.right_current),
            right_edge: self.right_edge.unwrap_or(base.right_edge),
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
