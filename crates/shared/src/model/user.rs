use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// App user row. Auth artifacts (password, session salt, device token) are
/// never selected by the admin queries, so they do not appear here.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct User {
    pub user_id: i32,
    pub username: Option<String>,
    pub email: String,
    pub name: Option<String>,
    pub profile_picture: Option<String>,
    pub points: i64,
    pub invite_code: Option<String>,
    pub created_at: NaiveDateTime,
    pub last_login: Option<NaiveDateTime>,
    pub updated_at: NaiveDateTime,
}
