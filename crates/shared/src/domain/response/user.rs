use crate::model::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
pub struct UserResponse {
    pub user_id: i32,
    pub username: Option<String>,
    pub email: String,
    pub name: Option<String>,
    pub profile_picture: Option<String>,
    pub points: i64,
    pub invite_code: Option<String>,
    #[schema(format = "date-time")]
    pub created_at: DateTime<Utc>,
    #[schema(format = "date-time")]
    pub last_login: Option<DateTime<Utc>>,
    #[schema(format = "date-time")]
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        UserResponse {
            user_id: value.user_id,
            username: value.username,
            email: value.email,
            name: value.name,
            profile_picture: value.profile_picture,
            points: value.points,
            invite_code: value.invite_code,
            created_at: DateTime::from_naive_utc_and_offset(value.created_at, Utc),
            last_login: value
                .last_login
                .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc)),
            updated_at: DateTime::from_naive_utc_and_offset(value.updated_at, Utc),
        }
    }
}
