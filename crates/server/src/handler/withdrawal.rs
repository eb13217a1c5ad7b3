use crate::{handler::error_reply, middleware::jwt};
use axum::{
    Json,
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, put},
};
use serde_json::{Value, json};
use shared::{
    domain::{
        request::FindAllWithdrawalRequest,
        response::{
            ApiResponse, ApiResponsePagination,
            withdrawal::{WithdrawalResponse, WithdrawalWithUserResponse},
        },
    },
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/withdrawals",
    tag = "Withdrawal",
    security(
        ("bearer_auth" = [])
    ),
    params(FindAllWithdrawalRequest),
    responses(
        (status = 200, description = "Paged list of withdrawal requests", body = ApiResponsePagination<Vec<WithdrawalWithUserResponse>>),
        (status = 400, description = "Unknown status filter", body = String),
        (status = 401, description = "Unauthorized access", body = String),
    )
)]
pub async fn get_withdrawals(
    State(data): State<Arc<AppState>>,
    Query(params): Query<FindAllWithdrawalRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data
        .di_container
        .withdrawal_service
        .get_withdrawals(&params)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err(error_reply(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/withdrawals/pending",
    tag = "Withdrawal",
    security(
        ("bearer_auth" = [])
    ),
    params(FindAllWithdrawalRequest),
    responses(
        (status = 200, description = "Pending withdrawal requests", body = ApiResponsePagination<Vec<WithdrawalWithUserResponse>>),
        (status = 401, description = "Unauthorized access", body = String),
    )
)]
pub async fn get_pending_withdrawals(
    State(data): State<Arc<AppState>>,
    Query(params): Query<FindAllWithdrawalRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data
        .di_container
        .withdrawal_service
        .get_pending_withdrawals(&params)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err(error_reply(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/withdrawals/{id}/approve",
    tag = "Withdrawal",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i32, Path, description = "Withdrawal ID")
    ),
    responses(
        (status = 200, description = "Withdrawal approved", body = ApiResponse<WithdrawalResponse>),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 404, description = "Withdrawal not found", body = String),
        (status = 409, description = "Withdrawal already processed", body = String),
    )
)]
pub async fn approve_withdrawal(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Extension(_admin_id): Extension<i64>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data
        .di_container
        .withdrawal_service
        .approve_withdrawal(id)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err(error_reply(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/withdrawals/{id}/reject",
    tag = "Withdrawal",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i32, Path, description = "Withdrawal ID")
    ),
    responses(
        (status = 200, description = "Withdrawal rejected and points refunded", body = ApiResponse<WithdrawalResponse>),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 404, description = "Withdrawal not found", body = String),
        (status = 409, description = "Withdrawal already processed", body = String),
    )
)]
pub async fn reject_withdrawal(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Extension(_admin_id): Extension<i64>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data
        .di_container
        .withdrawal_service
        .reject_withdrawal(id)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err(error_reply(e)),
    }
}

pub fn withdrawals_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/withdrawals", get(get_withdrawals))
        .route("/api/withdrawals/pending", get(get_pending_withdrawals))
        .route("/api/withdrawals/{id}/approve", put(approve_withdrawal))
        .route("/api/withdrawals/{id}/reject", put(reject_withdrawal))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), jwt::auth))
        .with_state(app_state)
}
