use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Invite {
    pub invite_id: i32,
    pub inviter_id: i32,
    pub invited_id: i32,
    pub created_at: NaiveDateTime,
}
