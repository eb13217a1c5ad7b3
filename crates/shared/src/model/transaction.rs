use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Append-only ledger entry. Rows are never updated or deleted; the current
/// balance on `users.points` must equal the signed sum of these deltas.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PointTransaction {
    pub transaction_id: i32,
    pub user_id: i32,
    pub points: i64,
    pub transaction_type: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Ledger row joined with the owning user's display name.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct TransactionWithUser {
    pub transaction_id: i32,
    pub user_id: i32,
    pub points: i64,
    pub transaction_type: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Credit,
    Debit,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Credit => "credit",
            TransactionType::Debit => "debit",
        }
    }

    /// Signed multiplier applied to the balance column.
    pub fn signum(&self) -> i64 {
        match self {
            TransactionType::Credit => 1,
            TransactionType::Debit => -1,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
