//! Screen command implementation.
//!
//! Ranks the funds of a category (or an ad hoc search) by efficiency score.

use anyhow::Result;
use clap::{ArgGroup, Args};
use serde::Serialize;
use tabled::Tabled;

use navrisk_analytics::prelude::*;

use crate::cli::OutputFormat;
use crate::commands::{validate_years, Context};
use crate::error::CliError;
use crate::output::{print_header, print_info, print_output, print_single, print_warning};

/// Arguments for the screen command.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("selection").required(true).multiple(true).args(["category", "query"])))]
pub struct ScreenArgs {
    /// Category id from `navrisk categories`
    #[arg(short, long)]
    pub category: Option<u32>,

    /// Search term; overrides the category's own term
    #[arg(short = 'Q', long)]
    pub query: Option<String>,

    /// Trailing window in years. Defaults to the configured screening window.
    #[arg(short, long)]
    pub years: Option<u32>,

    /// Number of funds to return
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Minimum months of data per year of the window
    #[arg(long)]
    pub min_months: Option<u32>,

    /// Plan type: growth, idcw or both
    #[arg(short, long, default_value = "both")]
    pub plan: PlanType,
}

/// Ranked row.
#[derive(Debug, Serialize, Tabled)]
struct ScreenRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Code")]
    scheme_code: String,
    #[tabled(rename = "Scheme")]
    scheme_name: String,
    #[tabled(rename = "Score")]
    efficiency_score: f64,
    #[tabled(rename = "Return %")]
    annual_return: f64,
    #[tabled(rename = "Sharpe")]
    sharpe_ratio: f64,
    #[tabled(rename = "Sortino")]
    sortino_ratio: f64,
    #[tabled(rename = "Calmar")]
    calmar_ratio: f64,
    #[tabled(rename = "Max DD %")]
    max_drawdown: f64,
    #[tabled(rename = "Vol %")]
    volatility: f64,
    #[tabled(rename = "Months")]
    months: usize,
}

impl ScreenRow {
    fn new(rank: usize, c: &ScreeningCandidate) -> Self {
        Self {
            rank,
            scheme_code: c.scheme_code.to_string(),
            scheme_name: c.scheme_name.clone(),
            efficiency_score: c.efficiency_score,
            annual_return: c.metrics.annual_return,
            sharpe_ratio: c.metrics.sharpe_ratio,
            sortino_ratio: c.metrics.sortino_ratio,
            calmar_ratio: c.metrics.calmar_ratio,
            max_drawdown: c.metrics.max_drawdown,
            volatility: c.metrics.volatility,
            months: c.metrics.months_analyzed,
        }
    }
}

/// Resolves the directory search term and a label for it.
fn search_term(args: &ScreenArgs, config: &EngineConfig) -> Result<(String, String)> {
    if let Some(query) = args.query.as_deref() {
        let label = match args.category.and_then(|id| config.category(id)) {
            Some(category) => format!("{} ({query})", category.name),
            None => query.to_string(),
        };
        return Ok((query.to_string(), label));
    }
    // The group guarantees a category when there is no query.
    let id = args.category.unwrap_or_default();
    let category = config
        .category(id)
        .ok_or(CliError::UnknownCategory(id))?;
    let term = category
        .search
        .clone()
        .ok_or_else(|| CliError::MissingQuery(category.name.clone()))?;
    Ok((term, category.name.clone()))
}

/// Execute the screen command.
pub fn execute(args: ScreenArgs, ctx: &Context, format: OutputFormat) -> Result<()> {
    let years = match args.years {
        Some(y) => validate_years(y)?,
        None => ctx.config.screening_years,
    };
    let top = args.top.unwrap_or(ctx.config.top_n);
    if top == 0 {
        return Err(CliError::InvalidTop(top).into());
    }
    let min_months = args.min_months.unwrap_or(ctx.config.min_months_per_year);
    let (term, label) = search_term(&args, &ctx.config)?;

    let config = ctx.config.clone().with_top_n(top);
    let screener = FundScreener::new(ctx.open_source()?, config);
    let report = screener.screen_query(&term, years, min_months, args.plan)?;

    if !ctx.quiet && format == OutputFormat::Table {
        for skipped in &report.skipped {
            print_warning(&format!("{}: {}", skipped.scheme_name, skipped.reason));
        }
    }

    let rows: Vec<ScreenRow> = report
        .ranked
        .iter()
        .enumerate()
        .map(|(i, c)| ScreenRow::new(i + 1, c))
        .collect();

    match format {
        OutputFormat::Table => {
            print_header(&format!("Top {top} - {label} ({years}Y, {} plans)", args.plan));
            print_output(&rows, format)?;
            if !ctx.quiet {
                print_info(&format!(
                    "{} found, {} filtered by plan, {} analysed, {} skipped",
                    report.considered,
                    report.filtered_out,
                    report.analysed,
                    report.skipped.len()
                ));
            }
            Ok(())
        }
        OutputFormat::Json => print_single(&report, format),
        OutputFormat::Csv => print_output(&rows, format),
        OutputFormat::Minimal => {
            for c in &report.ranked {
                println!("{}", c.scheme_code);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(category: Option<u32>, query: Option<&str>) -> ScreenArgs {
        ScreenArgs {
            category,
            query: query.map(str::to_string),
            years: None,
            top: None,
            min_months: None,
            plan: PlanType::Both,
        }
    }

    #[test]
    fn test_search_term_from_category() {
        let config = EngineConfig::default();
        let (term, label) = search_term(&args(Some(2), None), &config).unwrap();
        assert_eq!(term, "Mid Cap");
        assert_eq!(label, "Mid Cap");
    }

    #[test]
    fn test_custom_category_needs_query() {
        let config = EngineConfig::default();
        assert!(search_term(&args(Some(29), None), &config).is_err());
        assert!(search_term(&args(Some(99), None), &config).is_err());

        let (term, label) = search_term(&args(Some(29), Some("Gold")), &config).unwrap();
        assert_eq!(term, "Gold");
        assert_eq!(label, "Custom Search (Gold)");
    }
}
