//! Config command implementation.
//!
//! Shows the effective engine configuration.

use anyhow::Result;
use clap::{Args, Subcommand};

use navrisk_analytics::EngineConfig;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration (defaults plus any --config file)
    Show,

    /// Print the built-in defaults as TOML, ready to edit
    Defaults,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context, format: OutputFormat) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(&ctx.config, format),
        ConfigCommand::Defaults => {
            print!("{}", toml::to_string_pretty(&EngineConfig::default())?);
            Ok(())
        }
    }
}

fn execute_show(config: &EngineConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Minimal => {
            print!("{}", toml::to_string_pretty(config)?);
        }
        OutputFormat::Table | OutputFormat::Csv => {
            if format == OutputFormat::Table {
                print_header("Engine Configuration");
            }
            print_output(&settings(config), format)?;
        }
    }
    Ok(())
}

fn settings(config: &EngineConfig) -> Vec<KeyValue> {
    let window = config
        .analysis_years
        .map_or_else(|| "full history".to_string(), |y| format!("{y} years"));
    vec![
        KeyValue::new("risk_free_rate", format!("{:.2}%", config.risk_free_rate * 100.0)),
        KeyValue::new("analysis_years", window),
        KeyValue::new("screening_years", config.screening_years.to_string()),
        KeyValue::new("top_n", config.top_n.to_string()),
        KeyValue::new("min_months_per_year", config.min_months_per_year.to_string()),
        KeyValue::new("parallel", config.parallel.to_string()),
        KeyValue::new("categories", config.categories.len().to_string()),
        KeyValue::new("growth keywords", config.plan_keywords.growth.join(", ")),
        KeyValue::new("idcw keywords", config.plan_keywords.idcw.join(", ")),
    ]
}
