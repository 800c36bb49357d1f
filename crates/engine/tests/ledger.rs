use std::{fs, path::PathBuf};

use engine::{
    FileStore, Ledger, LedgerError, MemoryStore, MoneyCents, TransactionDraft, TransactionKind,
    ValidationError, csv_export,
};
use uuid::Uuid;

fn ledger_in_memory() -> Ledger {
    Ledger::builder()
        .store(Box::new(MemoryStore::new()))
        .build()
}

fn store_path() -> PathBuf {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_stores");
    fs::create_dir_all(&root).unwrap();
    root.join(format!("ledger_{}.json", Uuid::new_v4()))
}

fn draft<'a>(
    description: &'a str,
    amount: &'a str,
    kind: &'a str,
    date: &'a str,
) -> TransactionDraft<'a> {
    TransactionDraft {
        description,
        amount,
        kind,
        date,
    }
}

#[test]
fn add_valid_grows_list_and_echoes_fields() {
    let mut ledger = ledger_in_memory();

    let tx = ledger
        .add(draft("Salary", "1000", "income", "2024-01-01"))
        .unwrap();

    assert_eq!(ledger.len(), 1);
    assert_eq!(tx.description, "Salary");
    assert_eq!(tx.amount, MoneyCents::new(100_000));
    assert_eq!(tx.kind, TransactionKind::Income);
    assert_eq!(tx.date.to_string(), "2024-01-01");
    assert_eq!(ledger.transactions()[0], tx);
}

#[test]
fn salary_then_rent_orders_most_recent_first() {
    let mut ledger = ledger_in_memory();
    ledger
        .add(draft("Salary", "1000", "income", "2024-01-01"))
        .unwrap();
    ledger
        .add(draft("Rent", "400", "expense", "2024-01-02"))
        .unwrap();

    let descriptions: Vec<&str> = ledger
        .transactions()
        .iter()
        .map(|tx| tx.description.as_str())
        .collect();
    assert_eq!(descriptions, ["Rent", "Salary"]);

    let summary = ledger.summarize();
    assert_eq!(summary.total_income, MoneyCents::new(100_000));
    assert_eq!(summary.total_expense, MoneyCents::new(40_000));
    assert_eq!(summary.balance, MoneyCents::new(60_000));
}

#[test]
fn add_rejects_negative_amount() {
    let mut ledger = ledger_in_memory();

    let err = ledger
        .add(draft("Rent", "-5", "expense", "2024-01-02"))
        .unwrap_err();

    assert!(matches!(
        err,
        LedgerError::Validation(ValidationError::NonPositiveAmount)
    ));
    assert!(ledger.is_empty());
}

#[test]
fn add_rejects_zero_and_non_numeric_amounts() {
    let mut ledger = ledger_in_memory();

    let err = ledger
        .add(draft("Rent", "0", "expense", "2024-01-02"))
        .unwrap_err();
    assert!(matches!(
        err,
        LedgerError::Validation(ValidationError::NonPositiveAmount)
    ));

    let err = ledger
        .add(draft("Rent", "abc", "expense", "2024-01-02"))
        .unwrap_err();
    assert!(matches!(
        err,
        LedgerError::Validation(ValidationError::InvalidAmount(_))
    ));

    assert!(ledger.is_empty());
}

#[test]
fn add_rejects_blank_description() {
    let mut ledger = ledger_in_memory();

    let err = ledger
        .add(draft("   ", "10", "income", "2024-01-01"))
        .unwrap_err();

    assert!(matches!(
        err,
        LedgerError::Validation(ValidationError::EmptyDescription)
    ));
    assert!(ledger.is_empty());
}

#[test]
fn add_rejects_missing_or_malformed_date() {
    let mut ledger = ledger_in_memory();

    for date in ["", "  ", "01/02/2024", "2024-13-40"] {
        let err = ledger.add(draft("Rent", "10", "expense", date)).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::MissingDate)
        ));
    }
    assert!(ledger.is_empty());
}

#[test]
fn add_rejects_unknown_kind() {
    let mut ledger = ledger_in_memory();

    let err = ledger
        .add(draft("Rent", "10", "transfer", "2024-01-02"))
        .unwrap_err();

    assert!(matches!(
        err,
        LedgerError::Validation(ValidationError::InvalidKind(_))
    ));
    assert!(ledger.is_empty());
}

#[test]
fn ids_are_distinct_and_increasing() {
    let mut ledger = ledger_in_memory();
    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(
            ledger
                .add(draft("Coffee", "3.50", "expense", "2024-02-01"))
                .unwrap()
                .id,
        );
    }

    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn delete_present_id_empties_ledger_and_zeroes_summary() {
    let mut ledger = ledger_in_memory();
    let tx = ledger
        .add(draft("Salary", "1000", "income", "2024-01-01"))
        .unwrap();

    assert!(ledger.delete(tx.id).unwrap());
    assert!(ledger.is_empty());

    let summary = ledger.summarize();
    assert_eq!(summary.total_income, MoneyCents::ZERO);
    assert_eq!(summary.total_expense, MoneyCents::ZERO);
    assert_eq!(summary.balance, MoneyCents::ZERO);
}

#[test]
fn delete_absent_id_is_a_noop() {
    let mut ledger = ledger_in_memory();
    ledger
        .add(draft("Salary", "1000", "income", "2024-01-01"))
        .unwrap();

    assert!(!ledger.delete(42).unwrap());
    assert_eq!(ledger.len(), 1);
}

#[test]
fn summary_matches_independent_recomputation() {
    let mut ledger = ledger_in_memory();
    ledger
        .add(draft("Salary", "1000", "income", "2024-01-01"))
        .unwrap();
    ledger
        .add(draft("Rent", "400", "expense", "2024-01-02"))
        .unwrap();
    let groceries = ledger
        .add(draft("Groceries", "52.30", "expense", "2024-01-03"))
        .unwrap();
    ledger
        .add(draft("Refund", "20", "income", "2024-01-04"))
        .unwrap();
    ledger.delete(groceries.id).unwrap();

    let mut income = MoneyCents::ZERO;
    let mut expense = MoneyCents::ZERO;
    for tx in ledger.transactions() {
        match tx.kind {
            TransactionKind::Income => income += tx.amount,
            TransactionKind::Expense => expense += tx.amount,
        }
    }

    let summary = ledger.summarize();
    assert_eq!(summary.total_income, income);
    assert_eq!(summary.total_expense, expense);
    assert_eq!(summary.balance, income - expense);
}

#[test]
fn list_stays_sorted_by_date_descending() {
    let mut ledger = ledger_in_memory();
    for (description, date) in [
        ("Mid", "2024-03-10"),
        ("Old", "2024-01-05"),
        ("New", "2024-06-01"),
        ("Also mid", "2024-03-10"),
    ] {
        ledger.add(draft(description, "10", "expense", date)).unwrap();
    }
    let victim = ledger.transactions()[0].id;
    ledger.delete(victim).unwrap();

    let dates: Vec<_> = ledger.transactions().iter().map(|tx| tx.date).collect();
    assert!(dates.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn snapshot_round_trips_through_the_file_store() {
    let path = store_path();

    let mut ledger = Ledger::builder()
        .store(Box::new(FileStore::open(&path)))
        .build();
    ledger
        .add(draft("Salary", "1000", "income", "2024-01-01"))
        .unwrap();
    ledger
        .add(draft("Rent", "400", "expense", "2024-01-02"))
        .unwrap();
    let before: Vec<_> = ledger.transactions().to_vec();
    drop(ledger);

    let reloaded = Ledger::builder()
        .store(Box::new(FileStore::open(&path)))
        .build();
    assert_eq!(reloaded.transactions(), before.as_slice());
}

#[test]
fn delete_is_persisted() {
    let path = store_path();

    let mut ledger = Ledger::builder()
        .store(Box::new(FileStore::open(&path)))
        .build();
    let tx = ledger
        .add(draft("Salary", "1000", "income", "2024-01-01"))
        .unwrap();
    ledger.delete(tx.id).unwrap();
    drop(ledger);

    let reloaded = Ledger::builder()
        .store(Box::new(FileStore::open(&path)))
        .build();
    assert!(reloaded.is_empty());
}

#[test]
fn corrupt_store_file_degrades_to_empty() {
    let path = store_path();
    fs::write(&path, "definitely not json").unwrap();

    let mut ledger = Ledger::builder()
        .store(Box::new(FileStore::open(&path)))
        .build();
    assert!(ledger.is_empty());

    // The next write replaces the corrupt blob entirely.
    ledger
        .add(draft("Salary", "1000", "income", "2024-01-01"))
        .unwrap();
    let reloaded = Ledger::builder()
        .store(Box::new(FileStore::open(&path)))
        .build();
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn validation_failure_leaves_the_snapshot_untouched() {
    let path = store_path();

    let mut ledger = Ledger::builder()
        .store(Box::new(FileStore::open(&path)))
        .build();
    ledger
        .add(draft("Salary", "1000", "income", "2024-01-01"))
        .unwrap();
    let snapshot = fs::read(&path).unwrap();

    ledger
        .add(draft("", "1000", "income", "2024-01-01"))
        .unwrap_err();
    ledger
        .add(draft("Rent", "-5", "expense", "2024-01-02"))
        .unwrap_err();

    assert_eq!(fs::read(&path).unwrap(), snapshot);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn dark_mode_survives_a_rebuild() {
    let path = store_path();

    let mut ledger = Ledger::builder()
        .store(Box::new(FileStore::open(&path)))
        .build();
    assert!(!ledger.dark_mode());
    ledger.set_dark_mode(true).unwrap();
    drop(ledger);

    let reloaded = Ledger::builder()
        .store(Box::new(FileStore::open(&path)))
        .build();
    assert!(reloaded.dark_mode());
}

#[test]
fn export_on_empty_ledger_is_aborted() {
    let ledger = ledger_in_memory();
    assert!(matches!(
        csv_export(ledger.transactions()),
        Err(engine::ExportError::EmptyLedger)
    ));
}

#[test]
fn descriptions_are_trimmed_before_storage() {
    let mut ledger = ledger_in_memory();
    let tx = ledger
        .add(draft("  Salary  ", "1000", "income", "2024-01-01"))
        .unwrap();
    assert_eq!(tx.description, "Salary");
}
