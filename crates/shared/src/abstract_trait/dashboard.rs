use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::response::{ApiResponse, ErrorResponse, dashboard::DashboardStatsResponse};

pub type DynDashboardService = Arc<dyn DashboardServiceTrait + Send + Sync>;

#[async_trait]
pub trait DashboardServiceTrait {
    async fn get_stats(&self) -> Result<ApiResponse<DashboardStatsResponse>, ErrorResponse>;
}
