use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info};

use crate::{
    abstract_trait::{DynLedgerRepository, DynUserRepository, LedgerServiceTrait},
    domain::{
        request::{FindAllTransactionRequest, PointsMutationRequest},
        response::{
            ApiResponse, ApiResponsePagination, ErrorResponse, pagination::Pagination,
            transaction::{TransactionResponse, TransactionWithUserResponse},
        },
    },
    utils::{AppError, Method, Metrics, Status as StatusUtils},
};

#[derive(Clone)]
pub struct LedgerService {
    repository: DynLedgerRepository,
    user_repository: DynUserRepository,
    metrics: Arc<Mutex<Metrics>>,
}

impl std::fmt::Debug for LedgerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerService")
            .field("repository", &"DynLedgerRepository")
            .field("user_repository", &"DynUserRepository")
            .finish()
    }
}

impl LedgerService {
    pub async fn new(
        repository: DynLedgerRepository,
        user_repository: DynUserRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: &mut Registry,
    ) -> Self {
        registry.register(
            "ledger_service_request_counter",
            "Total number of requests to the LedgerService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.register(
            "ledger_service_request_duration",
            "Histogram of request durations for the LedgerService",
            metrics.lock().await.request_duration.clone(),
        );

        Self {
            repository,
            user_repository,
            metrics,
        }
    }

    async fn record(&self, method: Method, status: StatusUtils, start: Instant) {
        self.metrics
            .lock()
            .await
            .record(method, status, start.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl LedgerServiceTrait for LedgerService {
    async fn get_transactions(
        &self,
        req: &FindAllTransactionRequest,
    ) -> Result<ApiResponsePagination<Vec<TransactionResponse>>, ErrorResponse> {
        let method = Method::Get;
        let start = Instant::now();

        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.page_size > 0 { req.page_size } else { 10 };

        match self.repository.find_all(page, page_size, req.user_id).await {
            Ok((transactions, total_items)) => {
                let total_pages = (total_items as f64 / page_size as f64).ceil() as i32;

                self.record(method, StatusUtils::Success, start).await;

                Ok(ApiResponsePagination {
                    status: "success".to_string(),
                    message: "Transactions retrieved successfully".to_string(),
                    data: transactions
                        .into_iter()
                        .map(TransactionResponse::from)
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
                error!("Failed to retrieve transactions: {err}");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn get_user_transactions(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<TransactionResponse>>, ErrorResponse> {
        let method = Method::Get;
        let start = Instant::now();

        match self.user_repository.find_by_id(user_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                info!("User with id {user_id} not found");
                self.record(method, StatusUtils::Error, start).await;
                return Err(ErrorResponse::from(AppError::NotFound(format!(
                    "User with id {user_id} not found"
                ))));
            }
            Err(err) => {
                error!("Failed to check user {user_id}: {err}");
                self.record(method, StatusUtils::Error, start).await;
                return Err(ErrorResponse::from(err));
            }
        }

        match self.repository.find_by_user(user_id).await {
            Ok(transactions) => {
                self.record(method, StatusUtils::Success, start).await;

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Transactions retrieved successfully".to_string(),
                    data: transactions
                        .into_iter()
                        .map(TransactionResponse::from)
                        .collect(),
                })
            }
            Err(err) => {
                error!("Failed to retrieve transactions for user {user_id}: {err}");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn get_recent_transactions(
        &self,
        limit: i32,
    ) -> Result<ApiResponse<Vec<TransactionWithUserResponse>>, ErrorResponse> {
        let method = Method::Get;
        let start = Instant::now();

        match self.repository.find_recent(limit).await {
            Ok(transactions) => {
                self.record(method, StatusUtils::Success, start).await;

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Recent transactions retrieved successfully".to_string(),
                    data: transactions
                        .into_iter()
                        .map(TransactionWithUserResponse::from)
                        .collect(),
                })
            }
            Err(err) => {
                error!("Failed to retrieve recent transactions: {err}");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn add_points(
        &self,
        user_id: i32,
        input: &PointsMutationRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ErrorResponse> {
        let method = Method::Post;
        let start = Instant::now();

        match self
            .repository
            .credit(user_id, input.points, &input.description)
            .await
        {
            Ok(entry) => {
                info!(
                    "Credited {} points to user {user_id} (transaction {})",
                    input.points, entry.transaction_id
                );
                self.record(method, StatusUtils::Success, start).await;

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Points added successfully".to_string(),
                    data: TransactionResponse::from(entry),
                })
            }
            Err(err) => {
                error!("Failed to add points to user {user_id}: {err}");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn remove_points(
        &self,
        user_id: i32,
        input: &PointsMutationRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ErrorResponse> {
        let method = Method::Post;
        let start = Instant::now();

        match self
            .repository
            .debit(user_id, input.points, &input.description)
            .await
        {
            Ok(entry) => {
                info!(
                    "Debited {} points from user {user_id} (transaction {})",
                    input.points, entry.transaction_id
                );
                self.record(method, StatusUtils::Success, start).await;

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Points removed successfully".to_string(),
                    data: TransactionResponse::from(entry),
                })
            }
            Err(err) => {
                error!("Failed to remove points from user {user_id}: {err}");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(err))
            }
        }
    }
}
