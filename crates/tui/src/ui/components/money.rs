use engine::TransactionKind;
use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// Colors an already-formatted row amount by its transaction kind.
///
/// The sign is part of the formatted string; this only picks the semantic
/// color (income green, expense red).
#[must_use]
pub fn row_amount_span(amount: &str, kind: TransactionKind, theme: &Theme) -> Span<'static> {
    let color = match kind {
        TransactionKind::Income => theme.positive,
        TransactionKind::Expense => theme.negative,
    };
    Span::styled(amount.to_string(), Style::default().fg(color))
}
