use crate::model::ranking::RankingWithUser;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
pub struct RankingResponse {
    pub ranking_id: i32,
    pub user_id: i32,
    pub daily_rank: Option<i32>,
    pub total_rank: Option<i32>,
    #[schema(format = "date-time")]
    pub last_updated: DateTime<Utc>,
    pub user_name: String,
    pub user_email: String,
    pub user_points: i64,
}

impl From<RankingWithUser> for RankingResponse {
    fn from(value: RankingWithUser) -> Self {
        let user_name = value
            .user_name
            .unwrap_or_else(|| format!("Usuário #{}", value.user_id));

        RankingResponse {
            ranking_id: value.ranking_id,
            user_id: value.user_id,
            daily_rank: value.daily_rank,
            total_rank: value.total_rank,
            last_updated: DateTime::from_naive_utc_and_offset(value.last_updated, Utc),
            user_name,
            user_email: value.user_email.unwrap_or_default(),
            user_points: value.user_points.unwrap_or(0),
        }
    }
}
