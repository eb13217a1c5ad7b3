use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::str::FromStr;
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info};

use crate::{
    abstract_trait::{DynWithdrawalRepository, WithdrawalServiceTrait},
    domain::{
        request::FindAllWithdrawalRequest,
        response::{
            ApiResponse, ApiResponsePagination, ErrorResponse, pagination::Pagination,
            withdrawal::{WithdrawalResponse, WithdrawalWithUserResponse},
        },
    },
    model::withdrawal::WithdrawalStatus,
    utils::{AppError, Method, Metrics, Status as StatusUtils},
};

#[derive(Clone)]
pub struct WithdrawalService {
    repository: DynWithdrawalRepository,
    metrics: Arc<Mutex<Metrics>>,
    /// Points credited back per unit of currency when a withdrawal is
    /// rejected. The refund itself happens in the repository transaction;
    /// this is only plumbed through from configuration.
    refund_points_per_unit: i64,
}

impl std::fmt::Debug for WithdrawalService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WithdrawalService")
            .field("repository", &"DynWithdrawalRepository")
            .field("refund_points_per_unit", &self.refund_points_per_unit)
            .finish()
    }
}

impl WithdrawalService {
    pub async fn new(
        repository: DynWithdrawalRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: &mut Registry,
        refund_points_per_unit: i64,
    ) -> Self {
        registry.register(
            "withdrawal_service_request_counter",
            "Total number of requests to the WithdrawalService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.register(
            "withdrawal_service_request_duration",
            "Histogram of request durations for the WithdrawalService",
            metrics.lock().await.request_duration.clone(),
        );

        Self {
            repository,
            metrics,
            refund_points_per_unit,
        }
    }

    async fn record(&self, method: Method, status: StatusUtils, start: Instant) {
        self.metrics
            .lock()
            .await
            .record(method, status, start.elapsed().as_secs_f64());
    }

    async fn list_withdrawals(
        &self,
        page: i32,
        page_size: i32,
        status: Option<WithdrawalStatus>,
    ) -> Result<ApiResponsePagination<Vec<WithdrawalWithUserResponse>>, ErrorResponse> {
        let method = Method::Get;
        let start = Instant::now();

        match self.repository.find_all(page, page_size, status).await {
            Ok((withdrawals, total_items)) => {
                let total_pages = (total_items as f64 / page_size as f64).ceil() as i32;

                self.record(method, StatusUtils::Success, start).await;

                Ok(ApiResponsePagination {
                    status: "success".to_string(),
                    message: "Withdrawals retrieved successfully".to_string(),
                    data: withdrawals
                        .into_iter()
                        .map(WithdrawalWithUserResponse::from)
                        .collect(),
                    pagination: Pagination {
                        page,
                        page_size,
                        total_items,
                        total_pages,
                    },
                })
            }
            Err(err) => {
                error!("Failed to retrieve withdrawals: {err}");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(err))
            }
        }
    }
}

#[async_trait]
impl WithdrawalServiceTrait for WithdrawalService {
    async fn get_withdrawals(
        &self,
        req: &FindAllWithdrawalRequest,
    ) -> Result<ApiResponsePagination<Vec<WithdrawalWithUserResponse>>, ErrorResponse> {
        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.page_size > 0 { req.page_size } else { 10 };

        let status = match req.status.as_deref() {
            Some(raw) => match WithdrawalStatus::from_str(raw) {
                Ok(status) => Some(status),
                Err(msg) => {
                    return Err(ErrorResponse::from(AppError::Custom(msg)));
                }
            },
            None => None,
        };

        self.list_withdrawals(page, page_size, status).await
    }

    async fn get_pending_withdrawals(
        &self,
        req: &FindAllWithdrawalRequest,
    ) -> Result<ApiResponsePagination<Vec<WithdrawalWithUserResponse>>, ErrorResponse> {
        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.page_size > 0 { req.page_size } else { 10 };

        self.list_withdrawals(page, page_size, Some(WithdrawalStatus::Pending))
            .await
    }

    async fn approve_withdrawal(
        &self,
        id: i32,
    ) -> Result<ApiResponse<WithdrawalResponse>, ErrorResponse> {
        let method = Method::Put;
        let start = Instant::now();

        match self.repository.approve(id).await {
            Ok(withdrawal) => {
                info!("Withdrawal {id} approved");
                self.record(method, StatusUtils::Success, start).await;

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Withdrawal approved successfully".to_string(),
                    data: WithdrawalResponse::from(withdrawal),
                })
            }
            Err(err) => {
                error!("Failed to approve withdrawal {id}: {err}");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn reject_withdrawal(
        &self,
        id: i32,
    ) -> Result<ApiResponse<WithdrawalResponse>, ErrorResponse> {
        let method = Method::Put;
        let start = Instant::now();

        match self
            .repository
            .reject(id, self.refund_points_per_unit)
            .await
        {
            Ok((withdrawal, refund)) => {
                info!(
                    "Withdrawal {id} rejected, {} points refunded to user {}",
                    refund.points, withdrawal.user_id
                );
                self.record(method, StatusUtils::Success, start).await;

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Withdrawal rejected and points refunded".to_string(),
                    data: WithdrawalResponse::from(withdrawal),
                })
            }
            Err(err) => {
                error!("Failed to reject withdrawal {id}: {err}");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(err))
            }
        }
    }
}
