mod common;

use common::{MockStore, MockUserRepository, MockWithdrawalRepository, test_user, test_withdrawal};
use prometheus_client::registry::Registry;
use rust_decimal::Decimal;
use shared::abstract_trait::DashboardServiceTrait;
use shared::service::DashboardService;
use shared::utils::Metrics;
use std::sync::Arc;
use tokio::sync::Mutex;

async fn dashboard_service(store: &MockStore) -> DashboardService {
    let mut registry = Registry::default();
    let metrics = Arc::new(Mutex::new(Metrics::default()));

    DashboardService::new(
        Arc::new(MockUserRepository(store.clone())),
        Arc::new(MockWithdrawalRepository(store.clone())),
        metrics,
        &mut registry,
    )
    .await
}

#[tokio::test]
async fn stats_aggregate_users_and_withdrawals() {
    let store = MockStore::new();
    store.insert_user(test_user(1, "Alice", 100));
    store.insert_user(test_user(2, "Bruno", 200));
    store.insert_user(test_user(3, "Carla", -50));
    store.insert_withdrawal(test_withdrawal(1, 1, Decimal::new(1000, 2), "pending"));
    store.insert_withdrawal(test_withdrawal(2, 2, Decimal::new(2000, 2), "pending"));
    store.insert_withdrawal(test_withdrawal(3, 2, Decimal::new(9999, 2), "completed"));
    store.insert_withdrawal(test_withdrawal(4, 3, Decimal::new(50, 2), "completed"));

    let service = dashboard_service(&store).await;

    let response = service.get_stats().await.unwrap();
    let stats = response.data;

    assert_eq!(stats.total_users, 3);
    // Negative balances subtract from the signed total.
    assert_eq!(stats.total_points, 250);
    assert_eq!(stats.pending_withdrawals, 2);
    // floor(99.99 + 0.50)
    assert_eq!(stats.total_withdrawn, 100);
}

#[tokio::test]
async fn stats_on_an_empty_store_are_zero() {
    let store = MockStore::new();

    let service = dashboard_service(&store).await;

    let stats = service.get_stats().await.unwrap().data;

    assert_eq!(stats.total_users, 0);
    assert_eq!(stats.total_points, 0);
    assert_eq!(stats.pending_withdrawals, 0);
    assert_eq!(stats.total_withdrawn, 0);
}
