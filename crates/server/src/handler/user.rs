use crate::{handler::error_reply, middleware::jwt};
use axum::{
    Json,
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use serde_json::{Value, json};
use shared::{
    domain::{
        request::FindAllUserRequest,
        response::{ApiResponse, ApiResponsePagination, invite::InviteResponse, user::UserResponse},
    },
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "User",
    security(
        ("bearer_auth" = [])
    ),
    params(FindAllUserRequest),
    responses(
        (status = 200, description = "Paged list of app users", body = ApiResponsePagination<Vec<UserResponse>>),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 500, description = "Internal server error", body = String),
    )
)]
pub async fn get_users(
    State(data): State<Arc<AppState>>,
    Query(params): Query<FindAllUserRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data.di_container.user_service.get_users(&params).await {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err(error_reply(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "User",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserResponse>),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 404, description = "User not found", body = String),
    )
)]
pub async fn get_user(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Extension(_admin_id): Extension<i64>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data.di_container.user_service.get_user(id).await {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err(error_reply(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/invites",
    tag = "User",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Invites sent by the user", body = ApiResponse<Vec<InviteResponse>>),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 404, description = "User not found", body = String),
    )
)]
pub async fn get_user_invites(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Extension(_admin_id): Extension<i64>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data.di_container.user_service.get_user_invites(id).await {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err(error_reply(e)),
    }
}

pub fn users_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/users", get(get_users))
        .route("/api/users/{id}", get(get_user))
        .route("/api/users/{id}/invites", get(get_user_invites))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), jwt::auth))
        .with_state(app_state)
}
