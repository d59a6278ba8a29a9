//! Expense table view
//!
//! Every expense in insertion order, scrollable, newest at the bottom

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::App;

/// Render the expense table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let expenses = &app.dashboard.expenses;
    let title = format!(" Expenses ({}) ", expenses.len());

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if expenses.is_empty() {
        let text = Paragraph::new("No expenses. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(6),  // Year
        Constraint::Length(12), // Date
        Constraint::Length(18), // Spending Category
        Constraint::Min(12),    // Amount Spent
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Year").style(bold),
        Cell::from("Date").style(bold),
        Cell::from("Spending Category").style(bold),
        Cell::from("Amount Spent").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = expenses
        .iter()
        .map(|expense| {
            let category_style = if expense.category.credits_savings() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };

            Row::new(vec![
                Cell::from(expense.year.to_string()),
                Cell::from(app.settings.format_date(expense.date)),
                Cell::from(expense.category.name()).style(category_style),
                Cell::from(app.settings.format_money(expense.amount)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_expense_index));

    frame.render_stateful_widget(table, area, &mut state);
}
