//! Display formatting for terminal output
//!
//! Renders expenses, balances and the category breakdown as text tables for
//! the CLI. The TUI draws the same data with ratatui widgets instead.

pub mod balance;
pub mod breakdown;
pub mod expense;

pub use balance::{format_balance_history, format_balance_summary};
pub use breakdown::format_breakdown;
pub use expense::format_expense_table;

/// Format a percentage the way the breakdown chart labels it
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(42.0), "42.0%");
        assert_eq!(format_percentage(33.333), "33.3%");
        assert_eq!(format_percentage(0.04), "0.0%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(format_bar(100.0, 100.0, 4), "████");
        assert_eq!(format_bar(0.0, 100.0, 3), "   ");
    }
}
