//! Aggregate ticket statistics.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::Result;

/// A row in the priority breakdown table
#[derive(Tabled)]
struct PriorityRow {
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Tickets")]
    count: u64,
}

/// A row in the category breakdown table
#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Tickets")]
    count: u64,
}

/// Show aggregate statistics for the ticket collection
pub async fn cmd_stats(output_json: bool, api_url: Option<String>) -> Result<()> {
    let client = super::api_client(api_url)?;
    let stats = client.stats().await?;

    if output_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Total tickets: {}", stats.total_tickets);
    println!("Open tickets:  {}", stats.open_tickets);
    println!("Avg per day:   {:.1}", stats.avg_tickets_per_day);

    if !stats.priority_breakdown.is_empty() {
        let rows: Vec<PriorityRow> = stats
            .priority_breakdown
            .iter()
            .map(|(priority, count)| PriorityRow {
                priority: priority.clone(),
                count: *count,
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("\n{table}");
    }

    if !stats.category_breakdown.is_empty() {
        let rows: Vec<CategoryRow> = stats
            .category_breakdown
            .iter()
            .map(|(category, count)| CategoryRow {
                category: category.clone(),
                count: *count,
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("\n{table}");
    }

    Ok(())
}
