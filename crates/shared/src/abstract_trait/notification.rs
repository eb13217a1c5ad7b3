use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        request::{CreateNotificationRequest, FindAllNotificationRequest},
        response::{
            ApiResponse, ApiResponsePagination, ErrorResponse,
            notification::NotificationResponse,
        },
    },
    model::notification::Notification,
    utils::AppError,
};

pub type DynNotificationRepository = Arc<dyn NotificationRepositoryTrait + Send + Sync>;
pub type DynNotificationService = Arc<dyn NotificationServiceTrait + Send + Sync>;

#[async_trait]
pub trait NotificationRepositoryTrait {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
        user_id: Option<i32>,
    ) -> Result<(Vec<Notification>, i64), AppError>;
    /// `user_id = None` persists a broadcast row.
    async fn create(
        &self,
        user_id: Option<i32>,
        title: &str,
        message: &str,
    ) -> Result<Notification, AppError>;
}

#[async_trait]
pub trait NotificationServiceTrait {
    async fn get_notifications(
        &self,
        req: &FindAllNotificationRequest,
    ) -> Result<ApiResponsePagination<Vec<NotificationResponse>>, ErrorResponse>;
    async fn send_notification(
        &self,
        input: &CreateNotificationRequest,
    ) -> Result<ApiResponse<NotificationResponse>, ErrorResponse>;
}
