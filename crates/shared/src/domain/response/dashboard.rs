use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
pub struct DashboardStatsResponse {
    pub total_users: i64,
    /// Signed sum over every user balance; negative balances subtract.
    pub total_points: i64,
    pub pending_withdrawals: i64,
    /// Floor of the summed amount of completed withdrawals.
    pub total_withdrawn: i64,
}
