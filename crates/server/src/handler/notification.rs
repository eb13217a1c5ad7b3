use crate::{
    handler::error_reply,
    middleware::{jwt, validate::SimpleValidatedJson},
};
use axum::{
    Json,
    extract::{Extension, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use shared::{
    domain::{
        request::{CreateNotificationRequest, FindAllNotificationRequest},
        response::{ApiResponse, ApiResponsePagination, notification::NotificationResponse},
    },
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = "Notification",
    security(
        ("bearer_auth" = [])
    ),
    params(FindAllNotificationRequest),
    responses(
        (status = 200, description = "Paged list of notifications", body = ApiResponsePagination<Vec<NotificationResponse>>),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 500, description = "Internal server error", body = String),
    )
)]
pub async fn get_notifications(
    State(data): State<Arc<AppState>>,
    Query(params): Query<FindAllNotificationRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data
        .di_container
        .notification_service
        .get_notifications(&params)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err(error_reply(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/notifications",
    tag = "Notification",
    security(
        ("bearer_auth" = [])
    ),
    request_body = CreateNotificationRequest,
    responses(
        (status = 200, description = "Notification created; omitting user_id broadcasts", body = ApiResponse<NotificationResponse>),
        (status = 400, description = "Invalid payload", body = String),
        (status = 401, description = "Unauthorized access", body = String),
    )
)]
pub async fn send_notification(
    State(data): State<Arc<AppState>>,
    Extension(_admin_id): Extension<i64>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateNotificationRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data
        .di_container
        .notification_service
        .send_notification(&body)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err(error_reply(e)),
    }
}

pub fn notifications_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/notifications",
            get(get_notifications).post(send_notification),
        )
        .route_layer(middleware::from_fn_with_state(app_state.clone(), jwt::auth))
        .with_state(app_state)
}
