use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::{Notice, NoticeLevel},
    ui::theme::Theme,
};

/// Renders the blocking notice overlay.
///
/// While a notice is shown the next key press only dismisses it, so the box
/// carries its own hint line.
pub fn render(frame: &mut Frame<'_>, area: Rect, notice: Option<&Notice>, theme: &Theme) {
    let Some(notice) = notice else {
        return;
    };

    let hint = "press any key";
    let width = (notice.message.len().max(hint.len()) + 4).min(area.width as usize) as u16;
    let height = 4u16;
    let x = area.x + area.width.saturating_sub(width);
    let y = area.y.saturating_add(area.height.saturating_sub(height + 1));
    let rect = Rect {
        x,
        y,
        width,
        height,
    };

    let style = match notice.level {
        NoticeLevel::Success => Style::default().fg(theme.positive),
        NoticeLevel::Error => Style::default().fg(theme.error),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .style(Style::default().bg(theme.surface));
    let content = Paragraph::new(vec![
        Line::from(notice.message.as_str()).style(style),
        Line::from(hint).style(Style::default().fg(theme.dim)),
    ]);
    frame.render_widget(content.block(block), rect);
}
