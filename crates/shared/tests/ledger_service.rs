mod common;

use common::{MockLedgerRepository, MockStore, MockUserRepository, test_user};
use prometheus_client::registry::Registry;
use shared::abstract_trait::LedgerServiceTrait;
use shared::domain::request::PointsMutationRequest;
use shared::service::LedgerService;
use shared::utils::Metrics;
use std::sync::Arc;
use tokio::sync::Mutex;

async fn ledger_service(store: &MockStore) -> LedgerService {
    let mut registry = Registry::default();
    let metrics = Arc::new(Mutex::new(Metrics::default()));

    LedgerService::new(
        Arc::new(MockLedgerRepository(store.clone())),
        Arc::new(MockUserRepository(store.clone())),
        metrics,
        &mut registry,
    )
    .await
}

fn mutation(points: i64, description: &str) -> PointsMutationRequest {
    PointsMutationRequest {
        points,
        description: description.to_string(),
    }
}

#[tokio::test]
async fn credits_and_debits_accumulate_into_the_balance() {
    let store = MockStore::new();
    store.insert_user(test_user(1, "Alice", 0));

    let service = ledger_service(&store).await;

    service
        .add_points(1, &mutation(500, "Bônus de boas-vindas"))
        .await
        .unwrap();
    service
        .remove_points(1, &mutation(200, "Ajuste manual"))
        .await
        .unwrap();
    service
        .add_points(1, &mutation(50, "Missão diária"))
        .await
        .unwrap();

    assert_eq!(store.user_points(1), Some(350));
    assert_eq!(store.transaction_count(), 3);
    assert_eq!(store.notification_count(), 3);
}

#[tokio::test]
async fn debit_may_push_the_balance_negative() {
    let store = MockStore::new();
    store.insert_user(test_user(1, "Alice", 100));

    let service = ledger_service(&store).await;

    let response = service
        .remove_points(1, &mutation(1000, "Estorno de fraude"))
        .await
        .unwrap();

    assert_eq!(response.data.points, 1000);
    assert_eq!(response.data.transaction_type, "debit");
    assert_eq!(store.user_points(1), Some(-900));
}

#[tokio::test]
async fn mutating_an_unknown_user_is_not_found() {
    let store = MockStore::new();

    let service = ledger_service(&store).await;

    let err = service
        .add_points(42, &mutation(100, "Bônus"))
        .await
        .unwrap_err();

    assert_eq!(err.status, "not_found");
    assert_eq!(store.transaction_count(), 0);
    assert_eq!(store.notification_count(), 0);
}

#[tokio::test]
async fn every_mutation_writes_one_paired_notification() {
    let store = MockStore::new();
    store.insert_user(test_user(7, "Bruno", 0));

    let service = ledger_service(&store).await;

    service
        .add_points(7, &mutation(120, "Convite aceito"))
        .await
        .unwrap();

    let credit_note = store.last_notification().unwrap();
    assert_eq!(credit_note.user_id, Some(7));
    assert_eq!(credit_note.title, "Pontos Adicionados! 🎉");
    assert!(credit_note.message.contains("120"));
    assert!(credit_note.message.contains("Convite aceito"));

    service
        .remove_points(7, &mutation(20, "Correção"))
        .await
        .unwrap();

    let debit_note = store.last_notification().unwrap();
    assert_eq!(debit_note.title, "Pontos Removidos");
    assert!(debit_note.message.contains("20"));
    assert_eq!(store.notification_count(), 2);
}

#[tokio::test]
async fn user_history_requires_an_existing_user() {
    let store = MockStore::new();

    let service = ledger_service(&store).await;

    let err = service.get_user_transactions(99).await.unwrap_err();
    assert_eq!(err.status, "not_found");
}

#[tokio::test]
async fn recent_transactions_resolve_user_names() {
    let store = MockStore::new();
    store.insert_user(test_user(1, "Alice", 0));

    let service = ledger_service(&store).await;

    service
        .add_points(1, &mutation(10, "Check-in"))
        .await
        .unwrap();

    let response = service.get_recent_transactions(5).await.unwrap();
    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].user_name, "Alice");
}

#[tokio::test]
async fn transaction_listing_paginates() {
    let store = MockStore::new();
    store.insert_user(test_user(1, "Alice", 0));

    let service = ledger_service(&store).await;

    for i in 0..5 {
        service
            .add_points(1, &mutation(10 + i, "Missão"))
            .await
            .unwrap();
    }

    let req = shared::domain::request::FindAllTransactionRequest {
        page: 2,
        page_size: 2,
        user_id: Some(1),
    };

    let response = service.get_transactions(&req).await.unwrap();
    assert_eq!(response.data.len(), 2);
    assert_eq!(response.pagination.total_items, 5);
    assert_eq!(response.pagination.total_pages, 3);
}
