use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        request::FindAllUserRequest,
        response::{
            ApiResponse, ApiResponsePagination, ErrorResponse, invite::InviteResponse,
            user::UserResponse,
        },
    },
    model::user::User,
    utils::AppError,
};

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;
pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserRepositoryTrait {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
        search: Option<String>,
    ) -> Result<(Vec<User>, i64), AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError>;
    async fn count_all(&self) -> Result<i64, AppError>;
    async fn sum_points(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait UserServiceTrait {
    async fn get_users(
        &self,
        req: &FindAllUserRequest,
    ) -> Result<ApiResponsePagination<Vec<UserResponse>>, ErrorResponse>;
    async fn get_user(&self, id: i32) -> Result<ApiResponse<UserResponse>, ErrorResponse>;
    async fn get_user_invites(
        &self,
        id: i32,
    ) -> Result<ApiResponse<Vec<InviteResponse>>, ErrorResponse>;
}
