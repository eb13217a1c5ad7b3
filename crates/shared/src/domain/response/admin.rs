use crate::model::admin_user::AdminUser;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
pub struct AdminUserResponse {
    pub admin_id: i32,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    #[schema(format = "date-time")]
    pub last_sign_in: Option<DateTime<Utc>>,
}

impl From<AdminUser> for AdminUserResponse {
    fn from(value: AdminUser) -> Self {
        AdminUserResponse {
            admin_id: value.admin_id,
            email: value.email,
            name: value.name,
            role: value.role,
            last_sign_in: value
                .last_sign_in
                .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc)),
        }
    }
}
