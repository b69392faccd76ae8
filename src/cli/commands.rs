//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Periodic table explorer CLI
#[derive(Parser, Debug)]
#[command(name = "periodic-explorer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dataset file (JSON); overrides the config file
    #[arg(short, long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Configuration file (YAML)
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
    /// Render the periodic grid with highlight and search overlays
    Grid {
        /// Search text matched against name, symbol and atomic mass
        #[arg(short, long)]
        query: Option<String>,

        /// Classification token to highlight (e.g. noble-gas)
        #[arg(short = 'c', long)]
        classification: Option<String>,
    },

    /// Show one element
    Element {
        /// Lower-cased element name
        slug: String,
    },

    /// List an element's compounds, one page at a time
    Compounds {
        /// Lower-cased element name
        slug: String,

        /// URL query string holding page, rows and q
        #[arg(long)]
        query_string: Option<String>,

        /// Search text; overrides q from the query string
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Compute a page window
    Window {
        /// Current page (1-based)
        current: u32,

        /// Total pages
        total: u32,

        /// Pages shown on each side of the current page
        #[arg(long)]
        siblings: Option<u32>,
    },

    /// Page to land on after changing rows per page
    Resize {
        /// Current page (1-based)
        page: u32,

        /// Current rows per page (5, 10 or 25)
        old: u32,

        /// New rows per page (5, 10 or 25)
        new: u32,

        /// Total items in the list
        total: u64,
    },

    /// Resolve a dataset category code to its classification
    Classify {
        /// Category code, e.g. reactive_nonmetal_diatomic
        code: String,
    },

    /// Decode a URL query string into explorer state
    Decode {
        /// Query string, with or without the leading '?'
        query_string: String,
    },

    /// List classifications with their tokens and colors
    Classifications,
}

impl Commands {
    /// Subcommand name, for error context
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Grid { .. } => "grid",
            Commands::Element { .. } => "element",
            Commands::Compounds { .. } => "compounds",
            Commands::Window { .. } => "window",
            Commands::Resize { .. } => "resize",
            Commands::Classify { .. } => "classify",
            Commands::Decode { .. } => "decode",
            Commands::Classifications => "classifications",
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
