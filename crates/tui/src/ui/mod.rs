pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::{AppState, Focus};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::for_mode(state.dark_mode);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    screens::home::render(frame, layout[1], state, &theme);
    render_bottom_bar(frame, layout[2], state, &theme);
    components::toast::render(frame, area, state.notice.as_ref(), &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mode = if state.dark_mode { "dark" } else { "light" };
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let line = Line::from(vec![
        Span::styled(
            "Tally",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" — personal finance tracker  ", Style::default().fg(theme.dim)),
        Span::styled("Today", Style::default().fg(theme.dim)),
        Span::raw(format!(": {today}  ")),
        Span::styled("Mode", Style::default().fg(theme.dim)),
        Span::raw(format!(": {mode}")),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = vec![
        Span::styled("Ctrl+D", Style::default().fg(theme.accent)),
        Span::raw(" theme  "),
        Span::styled("Ctrl+E", Style::default().fg(theme.accent)),
        Span::raw(" csv  "),
        Span::styled("Ctrl+P", Style::default().fg(theme.accent)),
        Span::raw(" pdf"),
    ];

    parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
    parts.extend(context_hints(state, theme));

    let bar = Paragraph::new(Line::from(parts)).alignment(Alignment::Left);
    frame.render_widget(bar, area);
}

/// Returns context-specific keyboard hints based on current focus.
fn context_hints(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    match state.focus {
        Focus::List => vec![
            Span::styled("j/k", Style::default().fg(theme.accent)),
            Span::raw(" move  "),
            Span::styled("x", Style::default().fg(theme.accent)),
            Span::raw(" delete  "),
            Span::styled("a", Style::default().fg(theme.accent)),
            Span::raw(" add  "),
            Span::styled("q", Style::default().fg(theme.accent)),
            Span::raw(" quit"),
        ],
        Focus::Kind => vec![
            Span::styled("Space", Style::default().fg(theme.accent)),
            Span::raw(" toggle  "),
            Span::styled("Tab", Style::default().fg(theme.accent)),
            Span::raw(" next  "),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" add"),
        ],
        _ => vec![
            Span::styled("Tab", Style::default().fg(theme.accent)),
            Span::raw(" next  "),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" add  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" list"),
        ],
    }
}
