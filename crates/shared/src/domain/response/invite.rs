use crate::model::invite::Invite;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
pub struct InviteResponse {
    pub invite_id: i32,
    pub inviter_id: i32,
    pub invited_id: i32,
    #[schema(format = "date-time")]
    pub created_at: DateTime<Utc>,
}

impl From<Invite> for InviteResponse {
    fn from(value: Invite) -> Self {
        InviteResponse {
            invite_id: value.invite_id,
            inviter_id: value.inviter_id,
            invited_id: value.invited_id,
            created_at: DateTime::from_naive_utc_and_offset(value.created_at, Utc),
        }
    }
}
