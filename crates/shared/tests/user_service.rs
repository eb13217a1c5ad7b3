mod common;

use common::{MockInviteRepository, MockStore, MockUserRepository, test_user};
use prometheus_client::registry::Registry;
use shared::abstract_trait::UserServiceTrait;
use shared::domain::request::FindAllUserRequest;
use shared::service::UserService;
use shared::utils::Metrics;
use std::sync::Arc;
use tokio::sync::Mutex;

async fn user_service(store: &MockStore) -> UserService {
    let mut registry = Registry::default();
    let metrics = Arc::new(Mutex::new(Metrics::default()));

    UserService::new(
        Arc::new(MockUserRepository(store.clone())),
        Arc::new(MockInviteRepository(store.clone())),
        metrics,
        &mut registry,
    )
    .await
}

fn list_request(page: i32, page_size: i32, search: &str) -> FindAllUserRequest {
    FindAllUserRequest {
        page,
        page_size,
        search: search.to_string(),
    }
}

#[tokio::test]
async fn listing_paginates_and_counts_everything() {
    let store = MockStore::new();
    for i in 1..=5 {
        store.insert_user(test_user(i, &format!("User {i}"), i as i64 * 10));
    }

    let service = user_service(&store).await;

    let response = service.get_users(&list_request(2, 2, "")).await.unwrap();

    assert_eq!(response.data.len(), 2);
    assert_eq!(response.pagination.total_items, 5);
    assert_eq!(response.pagination.total_pages, 3);
}

#[tokio::test]
async fn search_matches_name_or_email() {
    let store = MockStore::new();
    store.insert_user(test_user(1, "Alice Silva", 10));
    store.insert_user(test_user(2, "Bruno Costa", 20));

    let service = user_service(&store).await;

    let response = service
        .get_users(&list_request(1, 10, "Silva"))
        .await
        .unwrap();

    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].user_id, 1);
}

#[tokio::test]
async fn missing_user_is_not_found() {
    let store = MockStore::new();

    let service = user_service(&store).await;

    let err = service.get_user(77).await.unwrap_err();
    assert_eq!(err.status, "not_found");
}

#[tokio::test]
async fn invites_require_an_existing_user() {
    let store = MockStore::new();

    let service = user_service(&store).await;

    let err = service.get_user_invites(77).await.unwrap_err();
    assert_eq!(err.status, "not_found");
}

#[tokio::test]
async fn invites_list_only_the_inviters_referrals() {
    let store = MockStore::new();
    store.insert_user(test_user(1, "Alice", 0));
    store.insert_invite(1, 1, 2);
    store.insert_invite(2, 1, 3);
    store.insert_invite(3, 9, 4);

    let service = user_service(&store).await;

    let response = service.get_user_invites(1).await.unwrap();

    assert_eq!(response.data.len(), 2);
    assert!(response.data.iter().all(|i| i.inviter_id == 1));
}
