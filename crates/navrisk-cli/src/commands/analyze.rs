//! Analyze command implementation.
//!
//! Computes the full metrics record for one fund.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use navrisk_analytics::metrics::round2;
use navrisk_analytics::prelude::*;
use navrisk_core::SchemeCode;
use navrisk_traits::NavSource;

use crate::cli::OutputFormat;
use crate::commands::{scheme_name, validate_rate, validate_years, Context};
use crate::output::{print_header, print_output, print_single, KeyValue};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Scheme code
    pub scheme: String,

    /// Trailing window in years. Defaults to the configured window or full history.
    #[arg(short, long)]
    pub years: Option<u32>,

    /// Annual risk-free rate in percent (e.g. 7.0). Defaults to the configured rate.
    #[arg(short, long)]
    pub risk_free: Option<f64>,
}

/// Single-fund report.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    /// Scheme code.
    pub scheme_code: SchemeCode,
    /// Scheme name.
    pub scheme_name: String,
    /// Efficiency score of the record.
    pub efficiency_score: f64,
    /// Metrics record.
    pub metrics: FundMetrics,
}

/// Execute the analyze command.
pub fn execute(args: AnalyzeArgs, ctx: &Context, format: OutputFormat) -> Result<()> {
    let years = args.years.map(validate_years).transpose()?;
    let rate = match args.risk_free {
        Some(pct) => validate_rate(pct)?,
        None => ctx.config.risk_free_rate,
    };

    let source = ctx.open_source()?;
    let code = SchemeCode::new(&args.scheme);
    let series = source.nav_history(&code)?;

    let calculator = MetricsCalculator::new(ctx.config.clone());
    let metrics =
        calculator.compute_with_rate(&series, rate, years.or(ctx.config.analysis_years))?;

    let report = AnalysisReport {
        scheme_name: scheme_name(&source, &code),
        scheme_code: code,
        efficiency_score: round2(efficiency_score(&EfficiencyInputs::from_metrics(&metrics))),
        metrics,
    };

    match format {
        OutputFormat::Table => print_table(&report),
        OutputFormat::Json => print_single(&report, format),
        OutputFormat::Csv => print_single(&report.metrics, format),
        OutputFormat::Minimal => {
            println!("{:.2}", report.efficiency_score);
            Ok(())
        }
    }
}

fn print_table(report: &AnalysisReport) -> Result<()> {
    let m = &report.metrics;
    print_header(&format!("{} ({})", report.scheme_name, report.scheme_code));

    let period = vec![
        KeyValue::new("Analysis Period", m.analysis_period.to_string()),
        KeyValue::new("Start Date", m.start_date.to_string()),
        KeyValue::new("End Date", m.end_date.to_string()),
        KeyValue::new("Total Days", m.total_days.to_string()),
        KeyValue::new("Total Months", m.total_months.to_string()),
        KeyValue::new("Risk-Free Rate", format!("{:.2}%", m.risk_free_rate)),
    ];
    print_output(&period, OutputFormat::Table)?;

    print_header("Metrics");
    let mut rows: Vec<KeyValue> = m
        .numeric()
        .map(|(key, value)| KeyValue::from_metric(key, value))
        .collect();
    rows.push(KeyValue::new(
        "Efficiency Score",
        format!("{:.2}", report.efficiency_score),
    ));
    print_output(&rows, OutputFormat::Table)
}
