mod common;

use common::{MockNotificationRepository, MockStore};
use prometheus_client::registry::Registry;
use shared::abstract_trait::NotificationServiceTrait;
use shared::domain::request::{CreateNotificationRequest, FindAllNotificationRequest};
use shared::service::NotificationService;
use shared::utils::Metrics;
use std::sync::Arc;
use tokio::sync::Mutex;

async fn notification_service(store: &MockStore) -> NotificationService {
    let mut registry = Registry::default();
    let metrics = Arc::new(Mutex::new(Metrics::default()));

    NotificationService::new(
        Arc::new(MockNotificationRepository(store.clone())),
        metrics,
        &mut registry,
    )
    .await
}

#[tokio::test]
async fn broadcast_is_a_single_row_without_user_id() {
    let store = MockStore::new();

    let service = notification_service(&store).await;

    let request = CreateNotificationRequest {
        user_id: None,
        title: "Manutenção".to_string(),
        message: "O app ficará indisponível hoje à noite.".to_string(),
    };

    let response = service.send_notification(&request).await.unwrap();

    assert_eq!(response.data.user_id, None);
    assert_eq!(store.notification_count(), 1);
    assert_eq!(store.last_notification().unwrap().user_id, None);
}

#[tokio::test]
async fn targeted_notification_keeps_its_recipient() {
    let store = MockStore::new();

    let service = notification_service(&store).await;

    let request = CreateNotificationRequest {
        user_id: Some(3),
        title: "Parabéns".to_string(),
        message: "Você subiu no ranking!".to_string(),
    };

    let response = service.send_notification(&request).await.unwrap();

    assert_eq!(response.data.user_id, Some(3));
    assert!(!response.data.is_read);
}

#[tokio::test]
async fn listing_can_filter_by_recipient() {
    let store = MockStore::new();

    let service = notification_service(&store).await;

    for (user_id, title) in [(Some(1), "a"), (Some(2), "b"), (Some(1), "c")] {
        let request = CreateNotificationRequest {
            user_id,
            title: title.to_string(),
            message: "m".to_string(),
        };
        service.send_notification(&request).await.unwrap();
    }

    let request = FindAllNotificationRequest {
        page: 1,
        page_size: 10,
        user_id: Some(1),
    };

    let response = service.get_notifications(&request).await.unwrap();

    assert_eq!(response.data.len(), 2);
    assert_eq!(response.pagination.total_items, 2);
    assert!(response.data.iter().all(|n| n.user_id == Some(1)));
}
