use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info};

use crate::{
    abstract_trait::{DynNotificationRepository, NotificationServiceTrait},
    domain::{
        request::{CreateNotificationRequest, FindAllNotificationRequest},
        response::{
            ApiResponse, ApiResponsePagination, ErrorResponse,
            notification::NotificationResponse, pagination::Pagination,
        },
    },
    utils::{Method, Metrics, Status as StatusUtils},
};

#[derive(Clone)]
pub struct NotificationService {
    repository: DynNotificationRepository,
    metrics: Arc<Mutex<Metrics>>,
}

impl std::fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationService")
            .field("repository", &"DynNotificationRepository")
            .finish()
    }
}

impl NotificationService {
    pub async fn new(
        repository: DynNotificationRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: &mut Registry,
    ) -> Self {
        registry.register(
            "notification_service_request_counter",
            "Total number of requests to the NotificationService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.register(
            "notification_service_request_duration",
            "Histogram of request durations for the NotificationService",
            metrics.lock().await.request_duration.clone(),
        );

        Self {
            repository,
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
impl NotificationServiceTrait for NotificationService {
    async fn get_notifications(
        &self,
        req: &FindAllNotificationRequest,
    ) -> Result<ApiResponsePagination<Vec<NotificationResponse>>, ErrorResponse> {
        let method = Method::Get;
        let start = Instant::now();

        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.page_size > 0 { req.page_size } else { 10 };

        match self.repository.find_all(page, page_size, req.user_id).await {
            Ok((notifications, total_items)) => {
                let total_pages = (total_items as f64 / page_size as f64).ceil() as i32;

                self.record(method, StatusUtils::Success, start).await;

                Ok(ApiResponsePagination {
                    status: "success".to_string(),
                    message: "Notifications retrieved successfully".to_string(),
                    data: notifications
                        .into_iter()
                        .map(NotificationResponse::from)
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
                error!("Failed to retrieve notifications: {err}");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn send_notification(
        &self,
        input: &CreateNotificationRequest,
    ) -> Result<ApiResponse<NotificationResponse>, ErrorResponse> {
        let method = Method::Post;
        let start = Instant::now();

        match self
            .repository
            .create(input.user_id, &input.title, &input.message)
            .await
        {
            Ok(notification) => {
                info!(
                    "Notification {} created ({})",
                    notification.notification_id,
                    if notification.user_id.is_some() {
                        "targeted"
                    } else {
                        "broadcast"
                    }
                );
                self.record(method, StatusUtils::Success, start).await;

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Notification sent successfully".to_string(),
                    data: NotificationResponse::from(notification),
                })
            }
            Err(err) => {
                error!("Failed to send notification: {err}");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(err))
            }
        }
    }
}
