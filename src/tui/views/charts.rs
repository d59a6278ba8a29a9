//! Balance history and breakdown charts
//!
//! The point series are built here from the ledger so the widgets only
//! draw; the x axis is days since the first snapshot.

use chrono::NaiveDate;
use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::models::{Ledger, Money};
use crate::services::CategoryBreakdown;
use crate::tui::app::App;

/// Plot points for both balance lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceSeries {
    pub account: Vec<(f64, f64)>,
    pub savings: Vec<(f64, f64)>,
    /// First and last snapshot dates
    pub span: Option<(NaiveDate, NaiveDate)>,
}

impl BalanceSeries {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let Some((first, last)) = ledger.date_range() else {
            return Self::default();
        };

        let mut account = Vec::with_capacity(ledger.len());
        let mut savings = Vec::with_capacity(ledger.len());
        for snapshot in ledger.snapshots() {
            let x = (snapshot.date - first).num_days() as f64;
            account.push((x, snapshot.account_balance.to_f64()));
            savings.push((x, snapshot.savings_balance.to_f64()));
        }

        Self {
            account,
            savings,
            span: Some((first, last)),
        }
    }

    /// Extent of the x axis; never zero-width
    pub fn x_bounds(&self) -> [f64; 2] {
        let max = self.account.last().map(|(x, _)| *x).unwrap_or(0.0);
        [0.0, max.max(1.0)]
    }
}

/// Y axis extent for a series, padded so a flat line is still visible
pub fn y_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let (min, max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, y)| {
            (lo.min(*y), hi.max(*y))
        });

    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }

    let pad = ((max - min) * 0.05).max(1.0);
    [min - pad, max + pad]
}

/// Render the account and savings history charts
pub fn render_balance_charts(frame: &mut Frame, app: &App, account_area: Rect, savings_area: Rect) {
    let series = BalanceSeries::from_ledger(&app.dashboard.ledger);

    render_line_chart(
        frame,
        app,
        account_area,
        " Account Balance ",
        &series,
        &series.account,
        Color::Cyan,
    );
    render_line_chart(
        frame,
        app,
        savings_area,
        " Savings Balance ",
        &series,
        &series.savings,
        Color::Green,
    );
}

fn render_line_chart(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    series: &BalanceSeries,
    points: &[(f64, f64)],
    color: Color,
) {
    let block = Block::default()
        .title(title.to_string())
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some((first, last)) = series.span else {
        let empty = Paragraph::new("No balance history")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    };

    let x_bounds = series.x_bounds();
    let y_bounds = y_bounds(points);

    let x_labels = vec![
        Span::raw(app.settings.format_date(first)),
        Span::raw(app.settings.format_date(last)),
    ];
    let y_labels = vec![
        Span::raw(app.settings.format_money(Money::from_f64(y_bounds[0]))),
        Span::raw(app.settings.format_money(Money::from_f64(y_bounds[1]))),
    ];

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Bars for the breakdown; values are tenths of a percent
pub fn breakdown_bars(breakdown: &CategoryBreakdown) -> Vec<Bar<'static>> {
    breakdown
        .entries
        .iter()
        .map(|entry| {
            Bar::default()
                .label(Line::from(entry.category.name()))
                .value((entry.percentage * 10.0).round() as u64)
                .text_value(format!("{:.1}%", entry.percentage))
                .style(Style::default().fg(if entry.category.credits_savings() {
                    Color::Green
                } else {
                    Color::Yellow
                }))
                .value_style(Style::default().fg(Color::Black).bg(Color::Yellow))
        })
        .collect()
}

/// Render this month's spending by category
pub fn render_breakdown(frame: &mut Frame, app: &App, area: Rect) {
    let breakdown = &app.dashboard.breakdown;

    let block = Block::default()
        .title(format!(" {} ", breakdown.title()))
        .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if breakdown.is_empty() {
        let empty = Paragraph::new(format!("No expenses recorded for {}.", breakdown.month))
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let bars = breakdown_bars(breakdown);
    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(1000)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BalanceSnapshot, Expense, MonthKey, SpendingCategory};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_series_from_ledger() {
        let ledger = Ledger::new(vec![
            BalanceSnapshot::new(date(2024, 3, 1), Money::from_cents(100_000), Money::from_cents(50_000)),
            BalanceSnapshot::new(date(2024, 3, 2), Money::from_cents(95_050), Money::from_cents(50_000)),
            BalanceSnapshot::new(date(2024, 3, 5), Money::from_cents(90_000), Money::from_cents(55_000)),
        ]);

        let series = BalanceSeries::from_ledger(&ledger);

        assert_eq!(series.account, vec![(0.0, 1000.0), (1.0, 950.5), (4.0, 900.0)]);
        assert_eq!(series.savings, vec![(0.0, 500.0), (1.0, 500.0), (4.0, 550.0)]);
        assert_eq!(series.span, Some((date(2024, 3, 1), date(2024, 3, 5))));
        assert_eq!(series.x_bounds(), [0.0, 4.0]);
    }

    #[test]
    fn test_series_from_empty_ledger() {
        let series = BalanceSeries::from_ledger(&Ledger::default());
        assert!(series.account.is_empty());
        assert_eq!(series.span, None);
        assert_eq!(series.x_bounds(), [0.0, 1.0]);
    }

    #[test]
    fn test_y_bounds_pads_flat_series() {
        assert_eq!(y_bounds(&[(0.0, 500.0), (1.0, 500.0)]), [499.0, 501.0]);
        assert_eq!(y_bounds(&[]), [0.0, 1.0]);

        let [lo, hi] = y_bounds(&[(0.0, 0.0), (1.0, 1000.0)]);
        assert_eq!(lo, -50.0);
        assert_eq!(hi, 1050.0);
    }

    #[test]
    fn test_breakdown_bars_label_percentages() {
        let month = MonthKey::new(2024, 3).unwrap();
        let expenses = vec![
            Expense::new(2024, date(2024, 3, 1), SpendingCategory::Food, Money::from_cents(7_500)),
            Expense::new(2024, date(2024, 3, 2), SpendingCategory::Housing, Money::from_cents(2_500)),
        ];
        let breakdown = CategoryBreakdown::generate(&expenses, month);

        let bars = breakdown_bars(&breakdown);
        assert_eq!(bars.len(), 2);
    }
}
