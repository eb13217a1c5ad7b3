use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info};

use crate::{
    abstract_trait::{
        DynRankingRepository, DynRankingUpdateStrategy, RankingServiceTrait,
        RankingUpdateStrategyTrait,
    },
    domain::response::{ApiResponse, ErrorResponse, ranking::RankingResponse},
    utils::{AppError, Method, Metrics, Status as StatusUtils},
};

/// Leaves the snapshot untouched. Matches deployments where ranks are
/// maintained by an external job and the update endpoint is a no-op trigger.
pub struct NoopRankingUpdate;

#[async_trait]
impl RankingUpdateStrategyTrait for NoopRankingUpdate {
    fn name(&self) -> &'static str {
        "noop"
    }

    async fn recompute(&self) -> Result<u64, AppError> {
        Ok(0)
    }
}

/// Dense-ranks every user by balance and rewrites the snapshot in place.
pub struct RecomputeRankingUpdate {
    repository: DynRankingRepository,
}

impl RecomputeRankingUpdate {
    pub fn new(repository: DynRankingRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RankingUpdateStrategyTrait for RecomputeRankingUpdate {
    fn name(&self) -> &'static str {
        "recompute"
    }

    async fn recompute(&self) -> Result<u64, AppError> {
        self.repository.recompute_total_ranks().await
    }
}

#[derive(Clone)]
pub struct RankingService {
    repository: DynRankingRepository,
    strategy: DynRankingUpdateStrategy,
    metrics: Arc<Mutex<Metrics>>,
}

impl std::fmt::Debug for RankingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankingService")
            .field("repository", &"DynRankingRepository")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

impl RankingService {
    pub async fn new(
        repository: DynRankingRepository,
        strategy: DynRankingUpdateStrategy,
        metrics: Arc<Mutex<Metrics>>,
        registry: &mut Registry,
    ) -> Self {
        registry.register(
            "ranking_service_request_counter",
            "Total number of requests to the RankingService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.register(
            "ranking_service_request_duration",
            "Histogram of request durations for the RankingService",
            metrics.lock().await.request_duration.clone(),
        );

        Self {
            repository,
            strategy,
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
impl RankingServiceTrait for RankingService {
    async fn top_ranking(
        &self,
        limit: i32,
    ) -> Result<ApiResponse<Vec<RankingResponse>>, ErrorResponse> {
        let method = Method::Get;
        let start = Instant::now();

        match self.repository.find_top(limit).await {
            Ok(entries) => {
                self.record(method, StatusUtils::Success, start).await;

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Ranking retrieved successfully".to_string(),
                    data: entries.into_iter().map(RankingResponse::from).collect(),
                })
            }
            Err(err) => {
                error!("Failed to retrieve ranking: {err}");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn update_ranking(&self) -> Result<ApiResponse<u64>, ErrorResponse> {
        let method = Method::Post;
        let start = Instant::now();

        match self.strategy.recompute().await {
            Ok(updated) => {
                info!(
                    "Ranking update ({}) touched {updated} rows",
                    self.strategy.name()
                );
                self.record(method, StatusUtils::Success, start).await;

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: format!("Ranking updated ({})", self.strategy.name()),
                    data: updated,
                })
            }
            Err(err) => {
                error!("Failed to update ranking: {err}");
                self.record(method, StatusUtils::Error, start).await;
                Err(ErrorResponse::from(err))
            }
        }
    }
}
