mod common;

use common::{MockRankingRepository, MockStore, test_user};
use prometheus_client::registry::Registry;
use shared::abstract_trait::{DynRankingUpdateStrategy, RankingServiceTrait};
use shared::service::{NoopRankingUpdate, RankingService, RecomputeRankingUpdate};
use shared::utils::Metrics;
use std::sync::Arc;
use tokio::sync::Mutex;

async fn ranking_service(store: &MockStore, strategy: DynRankingUpdateStrategy) -> RankingService {
    let mut registry = Registry::default();
    let metrics = Arc::new(Mutex::new(Metrics::default()));

    RankingService::new(
        Arc::new(MockRankingRepository(store.clone())),
        strategy,
        metrics,
        &mut registry,
    )
    .await
}

#[tokio::test]
async fn top_ranking_sorts_ascending_and_honors_the_limit() {
    let store = MockStore::new();
    store.insert_user(test_user(1, "Alice", 900));
    store.insert_user(test_user(2, "Bruno", 700));
    store.insert_user(test_user(3, "Carla", 500));
    store.insert_user(test_user(4, "Diego", 100));
    store.insert_ranking(2, 2);
    store.insert_ranking(4, 5);
    store.insert_ranking(1, 1);
    store.insert_ranking(3, 3);

    let service = ranking_service(&store, Arc::new(NoopRankingUpdate)).await;

    let response = service.top_ranking(3).await.unwrap();

    let ranks: Vec<Option<i32>> = response.data.iter().map(|r| r.total_rank).collect();
    assert_eq!(ranks, vec![Some(1), Some(2), Some(3)]);
    assert_eq!(response.data[0].user_name, "Alice");
    assert_eq!(response.data[0].user_points, 900);
}

#[tokio::test]
async fn noop_update_reports_zero_rows_and_changes_nothing() {
    let store = MockStore::new();
    store.insert_user(test_user(1, "Alice", 900));
    store.insert_ranking(1, 7);

    let service = ranking_service(&store, Arc::new(NoopRankingUpdate)).await;

    let response = service.update_ranking().await.unwrap();

    assert_eq!(response.data, 0);
    assert_eq!(store.ranking_of(1), Some(Some(7)));
}

#[tokio::test]
async fn recompute_dense_ranks_users_by_balance() {
    let store = MockStore::new();
    store.insert_user(test_user(1, "Alice", 100));
    store.insert_user(test_user(2, "Bruno", 100));
    store.insert_user(test_user(3, "Carla", 50));

    let strategy = Arc::new(RecomputeRankingUpdate::new(Arc::new(
        MockRankingRepository(store.clone()),
    )));
    let service = ranking_service(&store, strategy).await;

    let response = service.update_ranking().await.unwrap();

    assert_eq!(response.data, 3);
    // Tied balances share a rank, the next distinct balance takes rank + 1.
    assert_eq!(store.ranking_of(1), Some(Some(1)));
    assert_eq!(store.ranking_of(2), Some(Some(1)));
    assert_eq!(store.ranking_of(3), Some(Some(2)));
}
