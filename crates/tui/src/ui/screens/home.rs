use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    app::{AppState, Focus},
    ui::{
        components::{
            card::{Card, StatCard},
            chart::{self, ProportionChart},
            money,
        },
        theme::Theme,
    },
    view,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Add form
            Constraint::Length(3), // Summary cards
            Constraint::Length(6), // Proportion chart
            Constraint::Min(0),
        ])
        .split(columns[0]);

    render_form(frame, left[0], state, theme);
    render_summary(frame, left[1], state, theme);
    render_chart(frame, left[2], state, theme);
    render_list(frame, columns[1], state, theme);
}

fn render_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focus != Focus::List;
    let card = Card::new("Add Transaction", theme).focused(focused);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let kind_value = format!("{} (Space toggles)", state.form.kind.as_str());
    let lines = vec![
        field_line(
            "Description",
            &state.form.description,
            state.focus == Focus::Description,
            theme,
        ),
        field_line("Amount", &state.form.amount, state.focus == Focus::Amount, theme),
        field_line("Type", &kind_value, state.focus == Focus::Kind, theme),
        field_line("Date", &state.form.date, state.focus == Focus::Date, theme),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool, theme: &Theme) -> Line<'a> {
    let value_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    let mut spans = vec![
        Span::styled(format!("{label:<12}"), Style::default().fg(theme.dim)),
        Span::styled(value, value_style),
    ];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
    }
    Line::from(spans)
}

fn render_summary(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    StatCard::new("Income", state.summary_view.income.clone(), theme)
        .value_color(theme.positive)
        .render(frame, cells[0]);
    StatCard::new("Expense", state.summary_view.expense.clone(), theme)
        .value_color(theme.negative)
        .render(frame, cells[1]);

    let balance_color = if state.summary.balance.is_negative() {
        theme.negative
    } else {
        theme.positive
    };
    StatCard::new("Balance", state.summary_view.balance.clone(), theme)
        .value_color(balance_color)
        .render(frame, cells[2]);
}

fn render_chart(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let balance_label = view::balance_label(&state.summary);
    let proportion = ProportionChart {
        data: view::chart_data(&state.summary),
        income: &state.summary_view.income,
        expense: &state.summary_view.expense,
        balance_label: &balance_label,
    };
    chart::render(frame, area, &proportion, theme);
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Transactions", theme).focused(state.focus == Focus::List);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    if state.rows.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No transactions yet. Press a to add one.",
                Style::default().fg(theme.dim),
            ))
            .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let width = inner.width as usize;
    let items: Vec<ListItem> = state
        .rows
        .iter()
        .map(|row| {
            let description_width = width.saturating_sub(28).max(8);
            let line = Line::from(vec![
                Span::styled(format!("{:<11}", row.date), Style::default().fg(theme.dim)),
                Span::styled(
                    format!(
                        "{:<dw$}",
                        truncate(&row.description, description_width),
                        dw = description_width
                    ),
                    Style::default().fg(theme.text),
                ),
                money::row_amount_span(&format!("{:>12}", row.amount), row.kind, theme),
            ]);
            ListItem::new(line)
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, inner, &mut list_state);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
