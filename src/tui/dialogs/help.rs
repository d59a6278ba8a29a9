//! Help dialog
//!
//! Lists the dashboard and form keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(50, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        heading("Dashboard"),
        Line::from(""),
        key_line("a", "Add an expense"),
        key_line("j/k ↓/↑", "Scroll the expense table"),
        key_line("PgDn/PgUp", "Scroll a page"),
        key_line("g/G", "First / last expense"),
        key_line("r", "Reload from disk"),
        key_line("?", "Show/hide help"),
        key_line("q", "Quit"),
        Line::from(""),
        heading("Add Expense"),
        Line::from(""),
        key_line("Tab/S-Tab", "Next / previous field"),
        key_line("←/→ Space", "Change category"),
        key_line("Enter", "Save"),
        key_line("Esc", "Cancel"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ]
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
