use crate::model::withdrawal::{Withdrawal, WithdrawalWithUser};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
pub struct WithdrawalResponse {
    pub withdrawal_id: i32,
    pub user_id: i32,
    pub amount: Decimal,
    pub pix_type: String,
    pub pix_key: String,
    pub status: String,
    #[schema(format = "date-time")]
    pub created_at: DateTime<Utc>,
    #[schema(format = "date-time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Withdrawal> for WithdrawalResponse {
    fn from(value: Withdrawal) -> Self {
        WithdrawalResponse {
            withdrawal_id: value.withdrawal_id,
            user_id: value.user_id,
            amount: value.amount,
            pix_type: value.pix_type,
            pix_key: value.pix_key,
            status: value.status,
            created_at: DateTime::from_naive_utc_and_offset(value.created_at, Utc),
            updated_at: DateTime::from_naive_utc_and_offset(value.updated_at, Utc),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
pub struct WithdrawalWithUserResponse {
    pub withdrawal_id: i32,
    pub user_id: i32,
    pub amount: Decimal,
    pub pix_type: String,
    pub pix_key: String,
    pub status: String,
    #[schema(format = "date-time")]
    pub created_at: DateTime<Utc>,
    #[schema(format = "date-time")]
    pub updated_at: DateTime<Utc>,
    pub user_name: String,
    pub user_email: String,
}

impl From<WithdrawalWithUser> for WithdrawalWithUserResponse {
    fn from(value: WithdrawalWithUser) -> Self {
        let user_name = value
            .user_name
            .unwrap_or_else(|| format!("Usuário #{}", value.user_id));

        WithdrawalWithUserResponse {
            withdrawal_id: value.withdrawal_id,
            user_id: value.user_id,
            amount: value.amount,
            pix_type: value.pix_type,
            pix_key: value.pix_key,
            status: value.status,
            created_at: DateTime::from_naive_utc_and_offset(value.created_at, Utc),
            updated_at: DateTime::from_naive_utc_and_offset(value.updated_at, Utc),
            user_name,
            user_email: value.user_email.unwrap_or_default(),
        }
    }
}
