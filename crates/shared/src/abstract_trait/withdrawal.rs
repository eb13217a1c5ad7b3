use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::{
    domain::{
        request::FindAllWithdrawalRequest,
        response::{
            ApiResponse, ApiResponsePagination, ErrorResponse,
            withdrawal::{WithdrawalResponse, WithdrawalWithUserResponse},
        },
    },
    model::{
        transaction::PointTransaction,
        withdrawal::{Withdrawal, WithdrawalStatus, WithdrawalWithUser},
    },
    utils::AppError,
};

pub type DynWithdrawalRepository = Arc<dyn WithdrawalRepositoryTrait + Send + Sync>;
pub type DynWithdrawalService = Arc<dyn WithdrawalServiceTrait + Send + Sync>;

/// approve/reject are compare-and-swap transitions out of `pending`; a row
/// already processed yields Conflict, a missing row NotFound. Rejection also
/// credits the refund through the ledger inside the same database transaction.
#[async_trait]
pub trait WithdrawalRepositoryTrait {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
        status: Option<WithdrawalStatus>,
    ) -> Result<(Vec<WithdrawalWithUser>, i64), AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Withdrawal>, AppError>;
    async fn approve(&self, id: i32) -> Result<Withdrawal, AppError>;
    async fn reject(
        &self,
        id: i32,
        refund_points_per_unit: i64,
    ) -> Result<(Withdrawal, PointTransaction), AppError>;
    async fn count_by_status(&self, status: WithdrawalStatus) -> Result<i64, AppError>;
    async fn sum_amount_by_status(&self, status: WithdrawalStatus) -> Result<Decimal, AppError>;
}

#[async_trait]
pub trait WithdrawalServiceTrait {
    async fn get_withdrawals(
        &self,
        req: &FindAllWithdrawalRequest,
    ) -> Result<ApiResponsePagination<Vec<WithdrawalWithUserResponse>>, ErrorResponse>;
    async fn get_pending_withdrawals(
        &self,
        req: &FindAllWithdrawalRequest,
    ) -> Result<ApiResponsePagination<Vec<WithdrawalWithUserResponse>>, ErrorResponse>;
    async fn approve_withdrawal(
        &self,
        id: i32,
    ) -> Result<ApiResponse<WithdrawalResponse>, ErrorResponse>;
    async fn reject_withdrawal(
        &self,
        id: i32,
    ) -> Result<ApiResponse<WithdrawalResponse>, ErrorResponse>;
}
