//! Dashboard header
//!
//! Title plus the latest account and savings balances

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;

fn balance_color(amount: Money) -> Color {
    if amount.is_negative() {
        Color::Red
    } else {
        Color::Green
    }
}

/// Render the header
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Budget Tracker ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = match app.dashboard.current_balance() {
        Some(current) => Line::from(vec![
            Span::styled("Current Account Balance: ", Style::default().fg(Color::White)),
            Span::styled(
                app.settings.format_money(current.account_balance),
                Style::default()
                    .fg(balance_color(current.account_balance))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Current Savings Balance: ", Style::default().fg(Color::White)),
            Span::styled(
                app.settings.format_money(current.savings_balance),
                Style::default()
                    .fg(balance_color(current.savings_balance))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("    as of {}", app.settings.format_date(current.date)),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => Line::from(Span::styled(
            "No balance history",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let paragraph = Paragraph::new(line)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
