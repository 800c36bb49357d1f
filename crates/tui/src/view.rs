//! Read-side projection of ledger state.
//!
//! Pure translation of [`Ledger::transactions`] and [`Ledger::summarize`]
//! output into renderable rows, aggregate display strings, and the chart
//! proportion. Nothing here can mutate the ledger, and every figure is
//! derived from the ledger's own summary, never from a widget's internals.
//!
//! [`Ledger::transactions`]: engine::Ledger::transactions
//! [`Ledger::summarize`]: engine::Ledger::summarize

use engine::{Summary, Transaction, TransactionKind};

/// One renderable list row; `id` is the binding the delete handler uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub id: u64,
    pub description: String,
    pub date: String,
    pub amount: String,
    pub kind: TransactionKind,
}

/// The three aggregate display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub income: String,
    pub expense: String,
    pub balance: String,
}

pub fn rows(transactions: &[Transaction]) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(|tx| {
            let sign = match tx.kind {
                TransactionKind::Income => "+",
                TransactionKind::Expense => "-",
            };
            TransactionRow {
                id: tx.id,
                description: tx.description.clone(),
                date: tx.date.to_string(),
                amount: format!("{sign}{}", tx.amount),
                kind: tx.kind,
            }
        })
        .collect()
}

pub fn summary_view(summary: &Summary) -> SummaryView {
    SummaryView {
        income: summary.total_income.to_string(),
        expense: summary.total_expense.to_string(),
        balance: summary.balance.to_string(),
    }
}

/// The two-element proportion the chart consumes: `[income, expense]`.
pub fn chart_data(summary: &Summary) -> [u64; 2] {
    [
        summary.total_income.cents().unsigned_abs(),
        summary.total_expense.cents().unsigned_abs(),
    ]
}

/// The chart's center-overlay text.
pub fn balance_label(summary: &Summary) -> String {
    format!("Balance: {}", summary.balance)
}
