mod common;

use common::{MockAdminUserRepository, MockStore};
use prometheus_client::registry::Registry;
use shared::abstract_trait::{AuthServiceTrait, DynHashing, DynJwtService, HashingTrait};
use shared::config::{Hashing, JwtConfig};
use shared::domain::request::LoginRequest;
use shared::service::AuthService;
use shared::utils::Metrics;
use std::sync::Arc;
use tokio::sync::Mutex;

const SECRET: &str = "test-secret";

async fn auth_service(store: &MockStore) -> (AuthService, DynJwtService) {
    let mut registry = Registry::default();
    let metrics = Arc::new(Mutex::new(Metrics::default()));
    let jwt = Arc::new(JwtConfig::new(SECRET)) as DynJwtService;

    let service = AuthService::new(
        Arc::new(MockAdminUserRepository(store.clone())),
        Arc::new(Hashing::new()) as DynHashing,
        jwt.clone(),
        metrics,
        &mut registry,
    )
    .await;

    (service, jwt)
}

async fn seed_admin(store: &MockStore, admin_id: i32, email: &str, password: &str) {
    let hash = Hashing::new().hash_password(password).await.unwrap();
    store.insert_admin(admin_id, email, &hash);
}

#[tokio::test]
async fn login_issues_a_verifiable_token() {
    let store = MockStore::new();
    seed_admin(&store, 1, "admin@youngmoney.app", "s3cret").await;

    let (service, jwt) = auth_service(&store).await;

    let request = LoginRequest {
        email: "admin@youngmoney.app".to_string(),
        password: "s3cret".to_string(),
    };

    let response = service.login_admin(&request).await.unwrap();

    assert_eq!(jwt.verify_token(&response.data).unwrap(), 1);

    let admin = store.db.lock().unwrap().admins.get(&1).cloned().unwrap();
    assert!(admin.last_sign_in.is_some());
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let store = MockStore::new();
    seed_admin(&store, 1, "admin@youngmoney.app", "s3cret").await;

    let (service, _) = auth_service(&store).await;

    let request = LoginRequest {
        email: "admin@youngmoney.app".to_string(),
        password: "wrong".to_string(),
    };

    let err = service.login_admin(&request).await.unwrap_err();
    assert_eq!(err.status, "unauthorized");
}

#[tokio::test]
async fn unknown_email_gets_the_same_unauthorized_answer() {
    let store = MockStore::new();

    let (service, _) = auth_service(&store).await;

    let request = LoginRequest {
        email: "nobody@youngmoney.app".to_string(),
        password: "whatever".to_string(),
    };

    let err = service.login_admin(&request).await.unwrap_err();
    assert_eq!(err.status, "unauthorized");
    assert_eq!(err.message, "Invalid credentials");
}

#[tokio::test]
async fn get_me_returns_the_account_without_secrets() {
    let store = MockStore::new();
    seed_admin(&store, 5, "ops@youngmoney.app", "s3cret").await;

    let (service, _) = auth_service(&store).await;

    let response = service.get_me(5).await.unwrap();
    assert_eq!(response.data.admin_id, 5);
    assert_eq!(response.data.email, "ops@youngmoney.app");
}

#[tokio::test]
async fn get_me_for_a_missing_account_is_not_found() {
    let store = MockStore::new();

    let (service, _) = auth_service(&store).await;

    let err = service.get_me(9).await.unwrap_err();
    assert_eq!(err.status, "not_found");
}
