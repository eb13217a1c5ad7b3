use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        request::{PointsMutationRequest, transaction::FindAllTransactionRequest},
        response::{
            ApiResponse, ApiResponsePagination, ErrorResponse,
            transaction::{TransactionResponse, TransactionWithUserResponse},
        },
    },
    model::transaction::{PointTransaction, TransactionWithUser},
    utils::AppError,
};

pub type DynLedgerRepository = Arc<dyn LedgerRepositoryTrait + Send + Sync>;
pub type DynLedgerService = Arc<dyn LedgerServiceTrait + Send + Sync>;

/// The credit/debit mutations are atomic: ledger row, balance update and the
/// paired notification commit together or not at all.
#[async_trait]
pub trait LedgerRepositoryTrait {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
        user_id: Option<i32>,
    ) -> Result<(Vec<PointTransaction>, i64), AppError>;
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<PointTransaction>, AppError>;
    async fn find_recent(&self, limit: i32) -> Result<Vec<TransactionWithUser>, AppError>;
    async fn credit(
        &self,
        user_id: i32,
        points: i64,
        description: &str,
    ) -> Result<PointTransaction, AppError>;
    async fn debit(
        &self,
        user_id: i32,
        points: i64,
        description: &str,
    ) -> Result<PointTransaction, AppError>;
}

#[async_trait]
pub trait LedgerServiceTrait {
    async fn get_transactions(
        &self,
        req: &FindAllTransactionRequest,
    ) -> Result<ApiResponsePagination<Vec<TransactionResponse>>, ErrorResponse>;
    async fn get_user_transactions(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<TransactionResponse>>, ErrorResponse>;
    async fn get_recent_transactions(
        &self,
        limit: i32,
    ) -> Result<ApiResponse<Vec<TransactionWithUserResponse>>, ErrorResponse>;
    async fn add_points(
        &self,
        user_id: i32,
        input: &PointsMutationRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ErrorResponse>;
    async fn remove_points(
        &self,
        user_id: i32,
        input: &PointsMutationRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ErrorResponse>;
}
