use crate::model::notification::Notification;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
pub struct NotificationResponse {
    pub notification_id: i32,
    /// Absent for broadcast notifications.
    pub user_id: Option<i32>,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    #[schema(format = "date-time")]
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(value: Notification) -> Self {
        NotificationResponse {
            notification_id: value.notification_id,
            user_id: value.user_id,
            title: value.title,
            message: value.message,
            is_read: value.is_read,
            created_at: DateTime::from_naive_utc_and_offset(value.created_at, Utc),
        }
    }
}
