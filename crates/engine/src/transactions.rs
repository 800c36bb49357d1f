//! Transaction primitives.
//!
//! A `Transaction` is one recorded income or expense event. It is created
//! only by [`Ledger::add`] and never mutated afterwards.
//!
//! [`Ledger::add`]: crate::Ledger::add

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{MoneyCents, ValidationError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(ValidationError::InvalidKind(other.to_string())),
        }
    }
}

/// One ledger entry.
///
/// Serializes to the persisted record layout: `amount` is the raw cent
/// count, `kind` is `"income"`/`"expense"`, `date` is `YYYY-MM-DD`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub description: String,
    pub amount: MoneyCents,
    pub kind: TransactionKind,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        assert_eq!(
            TransactionKind::try_from("income").unwrap(),
            TransactionKind::Income
        );
        assert_eq!(
            TransactionKind::try_from("expense").unwrap(),
            TransactionKind::Expense
        );
        assert_eq!(TransactionKind::Income.as_str(), "income");
        assert_eq!(TransactionKind::Expense.as_str(), "expense");
    }

    #[test]
    fn kind_rejects_unknown_labels() {
        assert_eq!(
            TransactionKind::try_from("transfer"),
            Err(ValidationError::InvalidKind("transfer".to_string()))
        );
    }

    #[test]
    fn transaction_serializes_to_record_layout() {
        let tx = Transaction {
            id: 17,
            description: "Rent".to_string(),
            amount: MoneyCents::new(40_000),
            kind: TransactionKind::Expense,
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        };

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 17,
                "description": "Rent",
                "amount": 40_000,
                "kind": "expense",
                "date": "2024-01-02",
            })
        );
    }
}
