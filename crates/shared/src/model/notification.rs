use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A NULL `user_id` marks a broadcast addressed to every user.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Notification {
    pub notification_id: i32,
    pub user_id: Option<i32>,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}
