//! Status bar view
//!
//! Shows the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} expenses ", app.dashboard.expenses.len()),
        Style::default().fg(Color::Cyan),
    )];

    if let Some(ref message) = app.status_message {
        let color = if app.status_is_error {
            Color::Red
        } else {
            Color::Green
        };
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(message.as_str(), Style::default().fg(color)));
    }

    let hints = " a:Add  j/k:Scroll  r:Reload  ?:Help  q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
