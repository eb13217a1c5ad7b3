use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        request::LoginRequest,
        response::{ApiResponse, ErrorResponse, admin::AdminUserResponse},
    },
    model::admin_user::AdminUser,
    utils::AppError,
};

pub type DynAdminUserRepository = Arc<dyn AdminUserRepositoryTrait + Send + Sync>;
pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AdminUserRepositoryTrait {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<AdminUser>, AppError>;
    async fn touch_last_sign_in(&self, id: i32) -> Result<(), AppError>;
}

#[async_trait]
pub trait AuthServiceTrait {
    async fn login_admin(&self, input: &LoginRequest) -> Result<ApiResponse<String>, ErrorResponse>;
    async fn get_me(&self, admin_id: i64) -> Result<ApiResponse<AdminUserResponse>, ErrorResponse>;
}
