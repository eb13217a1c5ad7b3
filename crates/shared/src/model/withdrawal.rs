use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Withdrawal {
    pub withdrawal_id: i32,
    pub user_id: i32,
    pub amount: Decimal,
    pub pix_type: String,
    pub pix_key: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Withdrawal row joined with the owning user's name and email.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct WithdrawalWithUser {
    pub withdrawal_id: i32,
    pub user_id: i32,
    pub amount: Decimal,
    pub pix_type: String,
    pub pix_key: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

/// `pending` is the only state an operator action can leave; `completed`
/// exists in the schema but is set by the payout rail, not this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl WithdrawalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawalStatus::Pending => "pending",
            WithdrawalStatus::Approved => "approved",
            WithdrawalStatus::Rejected => "rejected",
            WithdrawalStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for WithdrawalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WithdrawalStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(WithdrawalStatus::Pending),
            "approved" => Ok(WithdrawalStatus::Approved),
            "rejected" => Ok(WithdrawalStatus::Rejected),
            "completed" => Ok(WithdrawalStatus::Completed),
            other => Err(format!("unknown withdrawal status '{other}'")),
        }
    }
}
