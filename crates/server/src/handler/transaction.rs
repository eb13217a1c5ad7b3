use crate::{
    handler::error_reply,
    middleware::{jwt, validate::SimpleValidatedJson},
};
use axum::{
    Json,
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use shared::{
    domain::{
        request::{FindAllTransactionRequest, PointsMutationRequest},
        response::{
            ApiResponse, ApiResponsePagination,
            transaction::TransactionResponse,
        },
    },
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "Transaction",
    security(
        ("bearer_auth" = [])
    ),
    params(FindAllTransactionRequest),
    responses(
        (status = 200, description = "Paged list of point transactions", body = ApiResponsePagination<Vec<TransactionResponse>>),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 500, description = "Internal server error", body = String),
    )
)]
pub async fn get_transactions(
    State(data): State<Arc<AppState>>,
    Query(params): Query<FindAllTransactionRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data
        .di_container
        .ledger_service
        .get_transactions(&params)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err(error_reply(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/transactions",
    tag = "Transaction",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Full transaction history for one user", body = ApiResponse<Vec<TransactionResponse>>),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 404, description = "User not found", body = String),
    )
)]
pub async fn get_user_transactions(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Extension(_admin_id): Extension<i64>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data
        .di_container
        .ledger_service
        .get_user_transactions(id)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err(error_reply(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/users/{id}/points/add",
    tag = "Transaction",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = PointsMutationRequest,
    responses(
        (status = 200, description = "Points credited", body = ApiResponse<TransactionResponse>),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 404, description = "User not found", body = String),
    )
)]
pub async fn add_points(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Extension(_admin_id): Extension<i64>,
    SimpleValidatedJson(body): SimpleValidatedJson<PointsMutationRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data.di_container.ledger_service.add_points(id, &body).await {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err(error_reply(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/users/{id}/points/remove",
    tag = "Transaction",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = PointsMutationRequest,
    responses(
        (status = 200, description = "Points debited", body = ApiResponse<TransactionResponse>),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 404, description = "User not found", body = String),
    )
)]
pub async fn remove_points(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Extension(_admin_id): Extension<i64>,
    SimpleValidatedJson(body): SimpleValidatedJson<PointsMutationRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data
        .di_container
        .ledger_service
        .remove_points(id, &body)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err(error_reply(e)),
    }
}

pub fn transactions_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/transactions", get(get_transactions))
        .route("/api/users/{id}/transactions", get(get_user_transactions))
        .route("/api/users/{id}/points/add", post(add_points))
        .route("/api/users/{id}/points/remove", post(remove_points))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), jwt::auth))
        .with_state(app_state)
}
