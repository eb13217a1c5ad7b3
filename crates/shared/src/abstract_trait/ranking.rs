use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::response::{ApiResponse, ErrorResponse, ranking::RankingResponse},
    model::ranking::RankingWithUser,
    utils::AppError,
};

pub type DynRankingRepository = Arc<dyn RankingRepositoryTrait + Send + Sync>;
pub type DynRankingService = Arc<dyn RankingServiceTrait + Send + Sync>;
pub type DynRankingUpdateStrategy = Arc<dyn RankingUpdateStrategyTrait + Send + Sync>;

#[async_trait]
pub trait RankingRepositoryTrait {
    /// Only rows present in the ranking table drive the result; users without
    /// a snapshot entry are absent even if their balance would place them.
    async fn find_top(&self, limit: i32) -> Result<Vec<RankingWithUser>, AppError>;
    /// Dense-rank every user by balance and upsert the snapshot. Returns the
    /// number of rows written.
    async fn recompute_total_ranks(&self) -> Result<u64, AppError>;
}

/// What ranking.update() actually does is deployment-dependent, so the
/// behavior is a named strategy selected by configuration.
#[async_trait]
pub trait RankingUpdateStrategyTrait: Send + Sync {
    fn name(&self) -> &'static str;
    async fn recompute(&self) -> Result<u64, AppError>;
}

#[async_trait]
pub trait RankingServiceTrait {
    async fn top_ranking(
        &self,
        limit: i32,
    ) -> Result<ApiResponse<Vec<RankingResponse>>, ErrorResponse>;
    async fn update_ranking(&self) -> Result<ApiResponse<u64>, ErrorResponse>;
}
