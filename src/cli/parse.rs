//! CLI parse: clap types for the dummy store tool. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Dummy store CLI - generate and inspect synthetic file-backed stores
#[derive(Parser)]
#[command(name = "dummy-store")]
#[command(about = "Generate and inspect synthetic file-backed stores")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Store generation root directory (overrides configuration)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate a store: categories, sub-categories, then items with attributes
    Generate {
        /// Store name, e.g. www.spec-store.com
        store: String,
        /// Top-level categories
        #[arg(long, default_value = "3")]
        categories: usize,
        /// Sub-categories per category
        #[arg(long, default_value = "3")]
        sub_categories: usize,
        /// Items per sub-category
        #[arg(long, default_value = "3")]
        items: usize,
        /// Seed for random names and attributes
        #[arg(long)]
        seed: Option<u64>,
        /// Use "Category #n" / "Item #n" sequences
        #[arg(long)]
        sequential: bool,
        /// Wipe the store before generating
        #[arg(long)]
        wipe: bool,
    },
    /// Print the file:// URI of a store
    Uri {
        store: String,
    },
    /// Walk a store and print its tree
    Show {
        store: String,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: ShowFormat,
    },
    /// Wipe one store, or the whole root when no store is given
    Wipe {
        store: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFormat {
    Text,
    Json,
}
