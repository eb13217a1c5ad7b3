use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Cached projection over `users.points`; recomputed by the configured
/// update strategy, never derived on read.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct RankingEntry {
    pub ranking_id: i32,
    pub user_id: i32,
    pub daily_rank: Option<i32>,
    pub total_rank: Option<i32>,
    pub last_updated: NaiveDateTime,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct RankingWithUser {
    pub ranking_id: i32,
    pub user_id: i32,
    pub daily_rank: Option<i32>,
    pub total_rank: Option<i32>,
    pub last_updated: NaiveDateTime,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_points: Option<i64>,
}
