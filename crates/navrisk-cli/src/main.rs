//! NavRisk CLI - Command-line interface for mutual fund risk analytics.
//!
//! # Usage
//!
//! ```bash
//! # Metrics for one fund over the last 3 years
//! navrisk --data-dir ./data analyze 120503 --years 3
//!
//! # Head-to-head comparison
//! navrisk compare 120503 118989 --years 5
//!
//! # Top 5 large cap growth funds
//! navrisk screen --category 1 --plan growth
//!
//! # Find a scheme code
//! navrisk search "flexi cap"
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so table / JSON output stays clean. Skipped
    // screening candidates are reported by the command itself.
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("navrisk=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("navrisk=error"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;
    let ctx = Context {
        config: commands::load_config(cli.config.as_deref())?,
        data_dir: cli.data_dir,
        quiet: cli.quiet,
    };

    // Execute command
    match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, &ctx, format)?,
        Commands::Compare(args) => commands::compare::execute(args, &ctx, format)?,
        Commands::Screen(args) => commands::screen::execute(args, &ctx, format)?,
        Commands::Search(args) => commands::search::execute(args, &ctx, format)?,
        Commands::Categories => commands::categories::execute(&ctx, format)?,
        Commands::Config(args) => commands::config::execute(args, &ctx, format)?,
    }

    Ok(())
}
