use crate::model::transaction::{PointTransaction, TransactionWithUser};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
pub struct TransactionResponse {
    pub transaction_id: i32,
    pub user_id: i32,
    pub points: i64,
    pub transaction_type: String,
    pub description: Option<String>,
    #[schema(format = "date-time")]
    pub created_at: DateTime<Utc>,
}

impl From<PointTransaction> for TransactionResponse {
    fn from(value: PointTransaction) -> Self {
        TransactionResponse {
            transaction_id: value.transaction_id,
            user_id: value.user_id,
            points: value.points,
            transaction_type: value.transaction_type,
            description: value.description,
            created_at: DateTime::from_naive_utc_and_offset(value.created_at, Utc),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
pub struct TransactionWithUserResponse {
    pub transaction_id: i32,
    pub user_id: i32,
    pub points: i64,
    pub transaction_type: String,
    pub description: Option<String>,
    #[schema(format = "date-time")]
    pub created_at: DateTime<Utc>,
    pub user_name: String,
}

impl From<TransactionWithUser> for TransactionWithUserResponse {
    fn from(value: TransactionWithUser) -> Self {
        let user_name = value
            .user_name
            .unwrap_or_else(|| format!("Usuário #{}", value.user_id));

        TransactionWithUserResponse {
            transaction_id: value.transaction_id,
            user_id: value.user_id,
            points: value.points,
            transaction_type: value.transaction_type,
            description: value.description,
            created_at: DateTime::from_naive_utc_and_offset(value.created_at, Utc),
            user_name,
        }
    }
}
