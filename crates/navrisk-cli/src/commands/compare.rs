//! Compare command implementation.
//!
//! Runs two funds through the metrics calculator and the comparator.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use navrisk_analytics::prelude::*;
use navrisk_core::SchemeCode;
use navrisk_traits::NavSource;

use crate::cli::OutputFormat;
use crate::commands::{scheme_name, validate_years, Context};
use crate::output::{
    format_metric, format_signed, print_divider, print_header, print_output, print_single,
    KeyValue,
};

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Scheme code of fund A
    pub scheme_a: String,

    /// Scheme code of fund B
    pub scheme_b: String,

    /// Trailing window in years. Defaults to the configured window or full history.
    #[arg(short, long)]
    pub years: Option<u32>,
}

/// Per-metric row.
#[derive(Debug, Serialize, Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Fund A")]
    fund_a: String,
    #[tabled(rename = "Fund B")]
    fund_b: String,
    #[tabled(rename = "Difference")]
    difference: String,
    #[tabled(rename = "Winner")]
    winner: String,
}

/// Execute the compare command.
pub fn execute(args: CompareArgs, ctx: &Context, format: OutputFormat) -> Result<()> {
    let years = args.years.map(validate_years).transpose()?;
    let window = years.or(ctx.config.analysis_years);

    let source = ctx.open_source()?;
    let calculator = MetricsCalculator::new(ctx.config.clone());

    let code_a = SchemeCode::new(&args.scheme_a);
    let code_b = SchemeCode::new(&args.scheme_b);
    let metrics_a = calculator.compute(&source.nav_history(&code_a)?, window)?;
    let metrics_b = calculator.compute(&source.nav_history(&code_b)?, window)?;
    let name_a = scheme_name(&source, &code_a);
    let name_b = scheme_name(&source, &code_b);

    let result = FundComparator::new().compare(&metrics_a, &metrics_b, &name_a, &name_b);

    match format {
        OutputFormat::Table => print_table(&result),
        OutputFormat::Json => print_single(&result, format),
        OutputFormat::Csv => print_output(&rows(&result, false), format),
        OutputFormat::Minimal => {
            println!("{}", result.recommendation.recommended_fund);
            Ok(())
        }
    }
}

fn winner_label(result: &ComparisonResult, winner: Winner) -> String {
    match winner {
        Winner::A => result.fund_a_name.clone(),
        Winner::B => result.fund_b_name.clone(),
        Winner::Tie => "Tie".to_string(),
    }
}

fn rows(result: &ComparisonResult, coloured: bool) -> Vec<ComparisonRow> {
    result
        .details
        .iter()
        .map(|d| ComparisonRow {
            metric: d.metric.label().to_string(),
            fund_a: format_metric(d.metric, d.value_a),
            fund_b: format_metric(d.metric, d.value_b),
            difference: if coloured {
                format_signed(d.difference)
            } else {
                format!("{:+.2}", d.difference)
            },
            winner: winner_label(result, d.winner),
        })
        .collect()
}

fn print_table(result: &ComparisonResult) -> Result<()> {
    print_header(&format!("{} vs {}", result.fund_a_name, result.fund_b_name));
    println!(
        "A: {}  |  B: {}  |  Period: {}",
        result.fund_a_name, result.fund_b_name, result.metrics_a.analysis_period
    );
    print_output(&rows(result, true), OutputFormat::Table)?;

    let scores = &result.scores;
    print_header(&scores.methodology);
    print_output(
        &[
            KeyValue::new("Efficiency A", format!("{:.2}", scores.efficiency_a)),
            KeyValue::new("Efficiency B", format!("{:.2}", scores.efficiency_b)),
            KeyValue::new("Score A", format!("{:.2}", scores.score_a)),
            KeyValue::new("Score B", format!("{:.2}", scores.score_b)),
            KeyValue::new("Overall Winner", winner_label(result, scores.winner)),
        ],
        OutputFormat::Table,
    )?;

    let rec = &result.recommendation;
    let strengths = join_metrics(&rec.key_strengths);
    let weaknesses = join_metrics(&rec.key_weaknesses);

    print_header("Recommendation");
    print_output(
        &[
            KeyValue::new("Recommended", rec.recommended_fund.clone()),
            KeyValue::new("Confidence", rec.confidence.label()),
            KeyValue::new("Reason", rec.reason.clone()),
            KeyValue::new("Risk Profile", rec.risk_profile.label()),
            KeyValue::new("Horizon", rec.suggested_investment_horizon.label()),
            KeyValue::new("Key Strengths", strengths),
            KeyValue::new("Key Weaknesses", weaknesses),
            KeyValue::new(
                "Score Difference",
                format!("{:.2}", rec.overall_score_difference),
            ),
        ],
        OutputFormat::Table,
    )?;
    print_divider();
    println!("{}", rec.trade_off_analysis);
    Ok(())
}

fn join_metrics(keys: &[MetricKey]) -> String {
    if keys.is_empty() {
        return "-".to_string();
    }
    keys.iter()
        .map(|k| k.label())
        .collect::<Vec<_>>()
        .join(", ")
}
