//! Category breakdown formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::services::CategoryBreakdown;

use super::{format_bar, format_percentage};

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Spending Category")]
    category: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format a month's breakdown with a title and total line
pub fn format_breakdown(breakdown: &CategoryBreakdown, settings: &Settings) -> String {
    let mut output = format!("{}\n\n", breakdown.title());

    if breakdown.is_empty() {
        output.push_str(&format!("No expenses recorded for {}.\n", breakdown.month));
        return output;
    }

    let rows = breakdown.entries.iter().map(|e| BreakdownRow {
        category: e.category.to_string(),
        count: e.count,
        total: settings.format_money(e.total),
        share: format_percentage(e.percentage),
        bar: format_bar(e.percentage, 100.0, BAR_WIDTH),
    });

    let table = Table::new(rows)
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()))
        .to_string();

    output.push_str(&table);
    output.push_str(&format!(
        "\n\nTotal: {} across {} expenses\n",
        settings.format_money(breakdown.total),
        breakdown.expense_count()
    ));
    output
}
