use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
};

use crate::ui::{components::card::Card, theme::Theme};

/// Inputs for the proportional income/expense chart.
///
/// `data` is the `[total_income, total_expense]` pair from the ledger's own
/// summary; the chart derives its percentages from that and nothing else.
pub struct ProportionChart<'a> {
    pub data: [u64; 2],
    pub income: &'a str,
    pub expense: &'a str,
    pub balance_label: &'a str,
}

pub fn render(frame: &mut Frame<'_>, area: Rect, chart: &ProportionChart<'_>, theme: &Theme) {
    let card = Card::new("Income vs Expense", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let [income, expense] = chart.data;
    let total = income + expense;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Income share
            Constraint::Length(1), // Expense share
            Constraint::Length(1), // Divider
            Constraint::Length(1), // Balance center label
        ])
        .split(inner);

    render_share_row(
        frame,
        rows[0],
        "Income",
        chart.income,
        share(income, total),
        theme.positive,
        theme,
    );
    render_share_row(
        frame,
        rows[1],
        "Expense",
        chart.expense,
        share(expense, total),
        theme.negative,
        theme,
    );

    let divider = "─".repeat(rows[2].width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(divider, Style::default().fg(theme.border))),
        rows[2],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            chart.balance_label.to_string(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        rows[3],
    );
}

fn render_share_row(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    amount: &str,
    percentage: u16,
    color: Color,
    theme: &Theme,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),  // Label
            Constraint::Length(12), // Amount
            Constraint::Min(10),    // Gauge
            Constraint::Length(5),  // Percentage
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(label, Style::default().fg(theme.dim))),
        cols[0],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            amount.to_string(),
            Style::default().fg(color),
        )),
        cols[1],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .percent(percentage.min(100))
        .label("");
    frame.render_widget(gauge, cols[2]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{percentage:>3}%"),
            Style::default().fg(theme.dim),
        ))
        .alignment(Alignment::Right),
        cols[3],
    );
}

/// Computes the percentage of `part` relative to `total`.
fn share(part: u64, total: u64) -> u16 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round().min(100.0) as u16
}
