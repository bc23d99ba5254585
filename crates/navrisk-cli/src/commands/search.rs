//! Search command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use navrisk_analytics::prelude::PlanType;
use navrisk_traits::SchemeDirectory;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::print_output;

/// Arguments for the search command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Name fragment or exact scheme code
    pub term: String,

    /// Only list this plan type
    #[arg(short, long, default_value = "both")]
    pub plan: PlanType,
}

#[derive(Debug, Serialize, Tabled)]
struct SchemeRow {
    #[tabled(rename = "Code")]
    scheme_code: String,
    #[tabled(rename = "Scheme")]
    scheme_name: String,
}

/// Execute the search command.
pub fn execute(args: SearchArgs, ctx: &Context, format: OutputFormat) -> Result<()> {
    let source = ctx.open_source()?;
    let keywords = &ctx.config.plan_keywords;

    let rows: Vec<SchemeRow> = source
        .search(&args.term)?
        .into_iter()
        .filter(|s| keywords.matches(args.plan, &s.scheme_name))
        .map(|s| SchemeRow {
            scheme_code: s.scheme_code.to_string(),
            scheme_name: s.scheme_name,
        })
        .collect();

    print_output(&rows, format)
}
