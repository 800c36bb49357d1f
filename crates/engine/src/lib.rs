use chrono::{NaiveDate, Utc};
use unicode_normalization::UnicodeNormalization;

pub use error::{ExportError, LedgerError, StoreError, ValidationError};
pub use exports::{CSV_FILENAME, PDF_FILENAME, csv_export, pdf_export};
pub use money::MoneyCents;
pub use store::{FileStore, KvStore, MemoryStore, StorageAdapter};
pub use transactions::{Transaction, TransactionKind};

mod error;
mod exports;
mod money;
mod store;
mod transactions;

type ResultLedger<T> = Result<T, LedgerError>;

/// Raw form input for [`Ledger::add`].
///
/// Fields arrive as the user typed them; `add` owns all validation so no
/// caller can insert an unchecked transaction.
#[derive(Clone, Copy, Debug)]
pub struct TransactionDraft<'a> {
    pub description: &'a str,
    pub amount: &'a str,
    pub kind: &'a str,
    pub date: &'a str,
}

/// Aggregate totals over the current list.
///
/// Recomputed fresh on every call; `balance` may be negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_income: MoneyCents,
    pub total_expense: MoneyCents,
    pub balance: MoneyCents,
}

/// The authoritative, sorted, validated list of transactions.
///
/// Owns the persistence handle exclusively; rendering code only ever sees
/// the read views ([`transactions`](Ledger::transactions) and
/// [`summarize`](Ledger::summarize)).
#[derive(Debug)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: u64,
    storage: StorageAdapter,
}

impl Ledger {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    /// Validates a draft and inserts the resulting transaction.
    ///
    /// On success the list is re-sorted by date descending, the full
    /// snapshot is persisted, and the created transaction is returned. On
    /// failure nothing is mutated and nothing is written.
    pub fn add(&mut self, draft: TransactionDraft<'_>) -> ResultLedger<Transaction> {
        let description = validate_description(draft.description)?;
        let amount: MoneyCents = draft.amount.parse()?;
        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount.into());
        }
        let date = parse_date(draft.date)?;
        let kind = TransactionKind::try_from(draft.kind)?;

        let tx = Transaction {
            id: self.allocate_id(),
            description,
            amount,
            kind,
            date,
        };

        // Persist the candidate snapshot first; the in-memory list only
        // changes once the write has landed.
        let mut next = self.transactions.clone();
        next.push(tx.clone());
        next.sort_by(|a, b| b.date.cmp(&a.date));
        self.storage.save(&next)?;
        self.transactions = next;

        tracing::debug!(id = tx.id, kind = tx.kind.as_str(), "transaction added");
        Ok(tx)
    }

    /// Removes the transaction with the matching id.
    ///
    /// Idempotent: returns `Ok(false)` without touching the store when the
    /// id is absent.
    pub fn delete(&mut self, id: u64) -> ResultLedger<bool> {
        if !self.transactions.iter().any(|tx| tx.id == id) {
            return Ok(false);
        }

        let next: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|tx| tx.id != id)
            .cloned()
            .collect();
        self.storage.save(&next)?;
        self.transactions = next;

        tracing::debug!(id, "transaction deleted");
        Ok(true)
    }

    /// Returns the income/expense totals and their difference.
    pub fn summarize(&self) -> Summary {
        let mut summary = Summary::default();
        for tx in &self.transactions {
            match tx.kind {
                TransactionKind::Income => summary.total_income += tx.amount,
                TransactionKind::Expense => summary.total_expense += tx.amount,
            }
        }
        summary.balance = summary.total_income - summary.total_expense;
        summary
    }

    /// Read-only view of the list, most recent date first.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The persisted dark-mode preference (defaults to off).
    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.storage.dark_mode()
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> ResultLedger<()> {
        self.storage.set_dark_mode(enabled)?;
        Ok(())
    }

    // Ids are milliseconds at creation, bumped past the last issued id so
    // rapid inserts stay distinct and monotonic.
    fn allocate_id(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let id = now.max(self.next_id);
        self.next_id = id + 1;
        id
    }
}

fn validate_description(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(trimmed.nfc().collect())
}

fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingDate);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| ValidationError::MissingDate)
}

/// The builder for `Ledger`
#[derive(Debug, Default)]
pub struct LedgerBuilder {
    store: Option<Box<dyn KvStore>>,
}

impl LedgerBuilder {
    /// Pass the backing store.
    pub fn store(mut self, store: Box<dyn KvStore>) -> LedgerBuilder {
        self.store = Some(store);
        self
    }

    /// Construct `Ledger`, loading the persisted snapshot.
    ///
    /// The load is fail-soft: a missing or malformed snapshot yields an
    /// empty ledger. The list is re-sorted on the way in so the ordering
    /// invariant holds even for a hand-edited blob.
    pub fn build(self) -> Ledger {
        let storage = StorageAdapter::new(
            self.store
                .unwrap_or_else(|| Box::new(MemoryStore::new())),
        );

        let mut transactions = storage.load();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        let next_id = transactions.iter().map(|tx| tx.id).max().map_or(0, |id| id + 1);

        Ledger {
            transactions,
            next_id,
            storage,
        }
    }
}
