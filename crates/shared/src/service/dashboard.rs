use async_trait::async_trait;
use prometheus_client::registry::Registry;
use rust_decimal::prelude::ToPrimitive;
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::error;

use crate::{
    abstract_trait::{DashboardServiceTrait, DynUserRepository, DynWithdrawalRepository},
    domain::response::{ApiResponse, ErrorResponse, dashboard::DashboardStatsResponse},
    model::withdrawal::WithdrawalStatus,
    utils::{AppError, Method, Metrics, Status as StatusUtils},
};

#[derive(Clone)]
pub struct DashboardService {
    user_repository: DynUserRepository,
    withdrawal_repository: DynWithdrawalRepository,
    metrics: Arc<Mutex<Metrics>>,
}

impl std::fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardService")
            .field("user_repository", &"DynUserRepository")
            .field("withdrawal_repository", &"DynWithdrawalRepository")
            .finish()
    }
}

impl DashboardService {
    pub async fn new(
        user_repository: DynUserRepository,
        withdrawal_repository: DynWithdrawalRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: &mut Registry,
    ) -> Self {
        registry.register(
            "dashboard_service_request_counter",
            "Total number of requests to the DashboardService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.register(
            "dashboard_service_request_duration",
            "Histogram of request durations for the DashboardService",
            metrics.lock().await.request_duration.clone(),
        );

        Self {
            user_repository,
            withdrawal_repository,
            metrics,
        }
    }

    async fn record(&self, method: Method, status: StatusUtils, start: Instant) {
        self.metrics
            .lock()
            .await
            .record(method, status, start.elapsed().as_secs_f64());
    }

    async fn collect_stats(&self) -> Result<DashboardStatsResponse, AppError> {
        let total_users = self.user_repository.count_all().await?;
        let total_points = self.user_repository.sum_points().await?;
        let pending_withdrawals = self
            .withdrawal_repository
            .count_by_status(WithdrawalStatus::Pending)
            .await?;
        let withdrawn = self
            .withdrawal_repository
            .sum_amount_by_status(WithdrawalStatus::Completed)
            .await?;

        let total_withdrawn = withdrawn.floor().to_i64().ok_or_else(|| {
            AppError::InternalError("Total withdrawn amount out of range".to_string())
        })?;

        Ok(DashboardStatsResponse {
            total_users,
            total_points,
            pending_withdrawals,
            total_withdrawn,
        })
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn get_stats(&self) -> Result<ApiResponse<DashboardStatsResponse>, ErrorResponse> {
        let method = Method::Get;
        let start = Instant::now();

        match self.collect_stats().await {
            Ok(stats) => {
                self.record(method, StatusUtils::Success, start).await;

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Dashboard stats retrieved successfully".to_string(),
                    data: stats,
                })
            }
            Err(err) => {
                error!("Failed to collect dashboard stats: {err}");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(err))
            }
        }
    }
}
