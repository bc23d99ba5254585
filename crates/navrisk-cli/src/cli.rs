//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AnalyzeArgs, CompareArgs, ConfigArgs, ScreenArgs, SearchArgs};

/// NavRisk - Mutual fund risk analytics from NAV history
#[derive(Parser)]
#[command(name = "navrisk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding `<scheme>.json` / `<scheme>.csv` NAV files and `schemes.csv`
    #[arg(long, env = "NAVRISK_DATA_DIR", default_value = "data", global = true)]
    pub data_dir: PathBuf,

    /// TOML file overriding the engine configuration
    #[arg(long, env = "NAVRISK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute risk metrics for a single fund
    Analyze(AnalyzeArgs),

    /// Compare two funds head to head and recommend one
    Compare(CompareArgs),

    /// Rank a category of funds by efficiency score
    Screen(ScreenArgs),

    /// Search the scheme directory by name or code
    Search(SearchArgs),

    /// List the fund categories available for screening
    Categories,

    /// Inspect the engine configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline value)
    Minimal,
}
