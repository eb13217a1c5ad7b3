use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info};

use crate::{
    abstract_trait::{DynInviteRepository, DynUserRepository, UserServiceTrait},
    domain::{
        request::FindAllUserRequest,
        response::{
            ApiResponse, ApiResponsePagination, ErrorResponse, invite::InviteResponse,
            pagination::Pagination, user::UserResponse,
        },
    },
    utils::{AppError, Method, Metrics, Status as StatusUtils},
};

#[derive(Clone)]
pub struct UserService {
    repository: DynUserRepository,
    invite_repository: DynInviteRepository,
    metrics: Arc<Mutex<Metrics>>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService")
            .field("repository", &"DynUserRepository")
            .field("invite_repository", &"DynInviteRepository")
            .finish()
    }
}

impl UserService {
    pub async fn new(
        repository: DynUserRepository,
        invite_repository: DynInviteRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: &mut Registry,
    ) -> Self {
        registry.register(
            "user_service_request_counter",
            "Total number of requests to the UserService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.register(
            "user_service_request_duration",
            "Histogram of request durations for the UserService",
            metrics.lock().await.request_duration.clone(),
        );

        Self {
            repository,
            invite_repository,
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
impl UserServiceTrait for UserService {
    async fn get_users(
        &self,
        req: &FindAllUserRequest,
    ) -> Result<ApiResponsePagination<Vec<UserResponse>>, ErrorResponse> {
        let method = Method::Get;
        let start = Instant::now();

        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.page_size > 0 { req.page_size } else { 10 };
        let search = if req.search.is_empty() {
            None
        } else {
            Some(req.search.clone())
        };

        match self.repository.find_all(page, page_size, search).await {
            Ok((users, total_items)) => {
                let total_pages = (total_items as f64 / page_size as f64).ceil() as i32;

                self.record(method, StatusUtils::Success, start).await;

                Ok(ApiResponsePagination {
                    status: "success".to_string(),
                    message: "Users retrieved successfully".to_string(),
                    data: users.into_iter().map(UserResponse::from).collect(),
                    pagination: Pagination {
                        page,
                        page_size,
                        total_items,
                        total_pages,
                    },
                })
            }
            Err(err) => {
                error!("Failed to retrieve users: {err}");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn get_user(&self, id: i32) -> Result<ApiResponse<UserResponse>, ErrorResponse> {
        let method = Method::Get;
        let start = Instant::now();

        match self.repository.find_by_id(id).await {
            Ok(Some(user)) => {
                self.record(method, StatusUtils::Success, start).await;

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "User retrieved successfully".to_string(),
                    data: UserResponse::from(user),
                })
            }
            Ok(None) => {
                info!("User with id {id} not found");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(AppError::NotFound(format!(
                    "User with id {id} not found"
                ))))
            }
            Err(err) => {
                error!("Failed to retrieve user {id}: {err}");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn get_user_invites(
        &self,
        id: i32,
    ) -> Result<ApiResponse<Vec<InviteResponse>>, ErrorResponse> {
        let method = Method::Get;
        let start = Instant::now();

        match self.repository.find_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                info!("User with id {id} not found");
                self.record(method, StatusUtils::Error, start).await;
                return Err(ErrorResponse::from(AppError::NotFound(format!(
                    "User with id {id} not found"
                ))));
            }
            Err(err) => {
                error!("Failed to check user {id}: {err}");
                self.record(method, StatusUtils::Error, start).await;
                return Err(ErrorResponse::from(err));
            }
        }

        match self.invite_repository.find_by_inviter(id).await {
            Ok(invites) => {
                self.record(method, StatusUtils::Success, start).await;

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Invites retrieved successfully".to_string(),
                    data: invites.into_iter().map(InviteResponse::from).collect(),
                })
            }
            Err(err) => {
                error!("Failed to retrieve invites for user {id}: {err}");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(err))
            }
        }
    }
}
