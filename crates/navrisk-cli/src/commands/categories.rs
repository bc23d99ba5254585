//! Categories command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::print_output;

#[derive(Debug, Serialize, Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Search Term")]
    search: String,
}

/// Execute the categories command.
pub fn execute(ctx: &Context, format: OutputFormat) -> Result<()> {
    let rows: Vec<CategoryRow> = ctx
        .config
        .categories
        .iter()
        .map(|c| CategoryRow {
            id: c.id,
            name: c.name.clone(),
            search: c.search.clone().unwrap_or_else(|| "(--query)".to_string()),
        })
        .collect();
    print_output(&rows, format)
}
