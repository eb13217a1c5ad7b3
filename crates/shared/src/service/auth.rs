use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info};

use crate::{
    abstract_trait::{AuthServiceTrait, DynAdminUserRepository, DynHashing, DynJwtService},
    domain::{
        request::LoginRequest,
        response::{ApiResponse, ErrorResponse, admin::AdminUserResponse},
    },
    utils::{AppError, Method, Metrics, Status as StatusUtils},
};

#[derive(Clone)]
pub struct AuthService {
    repository: DynAdminUserRepository,
    hashing: DynHashing,
    jwt_service: DynJwtService,
    metrics: Arc<Mutex<Metrics>>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("repository", &"DynAdminUserRepository")
            .field("hashing", &"DynHashing")
            .field("jwt_service", &"DynJwtService")
            .finish()
    }
}

impl AuthService {
    pub async fn new(
        repository: DynAdminUserRepository,
        hashing: DynHashing,
        jwt_service: DynJwtService,
        metrics: Arc<Mutex<Metrics>>,
        registry: &mut Registry,
    ) -> Self {
        registry.register(
            "auth_service_request_counter",
            "Total number of requests to the AuthService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.register(
            "auth_service_request_duration",
            "Histogram of request durations for the AuthService",
            metrics.lock().await.request_duration.clone(),
        );

        Self {
            repository,
            hashing,
            jwt_service,
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
impl AuthServiceTrait for AuthService {
    async fn login_admin(
        &self,
        input: &LoginRequest,
    ) -> Result<ApiResponse<String>, ErrorResponse> {
        let method = Method::Post;
        let start = Instant::now();

        info!("Admin login attempt: {}", input.email);

        let admin = match self.repository.find_by_email(&input.email).await {
            Ok(Some(admin)) => admin,
            Ok(None) => {
                // Same error as a bad password, so the response does not
                // reveal which accounts exist.
                error!("Login failed, no admin account for {}", input.email);
                self.record(method, StatusUtils::Error, start).await;
                return Err(ErrorResponse::from(AppError::InvalidCredentials));
            }
            Err(err) => {
                error!("Login failed, lookup error: {err}");
                self.record(method, StatusUtils::Error, start).await;
                return Err(ErrorResponse::from(err));
            }
        };

        if let Err(err) = self
            .hashing
            .compare_password(&admin.password, &input.password)
            .await
        {
            error!("Login failed, password mismatch for {}", input.email);
            self.record(method, StatusUtils::Error, start).await;
            return Err(ErrorResponse::from(err));
        }

        let token = match self.jwt_service.generate_token(admin.admin_id as i64) {
            Ok(token) => token,
            Err(err) => {
                error!("Login failed, token generation error: {err}");
                self.record(method, StatusUtils::Error, start).await;
                return Err(ErrorResponse::from(err));
            }
        };

        if let Err(err) = self.repository.touch_last_sign_in(admin.admin_id).await {
            error!("Login failed, could not record sign-in time: {err}");
            self.record(method, StatusUtils::Error, start).await;
            return Err(ErrorResponse::from(err));
        }

        info!("Admin {} logged in", admin.admin_id);
        self.record(method, StatusUtils::Success, start).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Login successful".to_string(),
            data: token,
        })
    }

    async fn get_me(&self, admin_id: i64) -> Result<ApiResponse<AdminUserResponse>, ErrorResponse> {
        let method = Method::Get;
        let start = Instant::now();

        match self.repository.find_by_id(admin_id as i32).await {
            Ok(Some(admin)) => {
                self.record(method, StatusUtils::Success, start).await;

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Admin retrieved successfully".to_string(),
                    data: AdminUserResponse::from(admin),
                })
            }
            Ok(None) => {
                error!("Admin with id {admin_id} not found");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(AppError::NotFound(format!(
                    "Admin with id {admin_id} not found"
                ))))
            }
            Err(err) => {
                error!("Failed to fetch admin {admin_id}: {err}");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(err))
            }
        }
    }
}
