use crate::{handler::error_reply, middleware::jwt};
use axum::{
    Json,
    extract::{Extension, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};
use shared::{
    domain::response::{
        ApiResponse, dashboard::DashboardStatsResponse,
        transaction::TransactionWithUserResponse,
    },
    state::AppState,
};
use std::sync::Arc;
use utoipa::IntoParams;
use utoipa_axum::router::OpenApiRouter;

#[derive(Debug, Deserialize, IntoParams)]
pub struct RecentTransactionsParams {
    #[serde(default = "default_limit")]
    pub limit: i32,
}

fn default_limit() -> i32 {
    10
}

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Aggregate dashboard counters", body = ApiResponse<DashboardStatsResponse>),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 500, description = "Internal server error", body = String),
    )
)]
pub async fn get_dashboard_stats(
    State(data): State<Arc<AppState>>,
    Extension(_admin_id): Extension<i64>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data.di_container.dashboard_service.get_stats().await {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err(error_reply(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/dashboard/recent-transactions",
    tag = "Dashboard",
    security(
        ("bearer_auth" = [])
    ),
    params(RecentTransactionsParams),
    responses(
        (status = 200, description = "Most recent transactions with user names", body = ApiResponse<Vec<TransactionWithUserResponse>>),
        (status = 401, description = "Unauthorized access", body = String),
    )
)]
pub async fn get_recent_transactions(
    State(data): State<Arc<AppState>>,
    Query(params): Query<RecentTransactionsParams>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data
        .di_container
        .ledger_service
        .get_recent_transactions(params.limit)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err(error_reply(e)),
    }
}

pub fn dashboard_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/dashboard/stats", get(get_dashboard_stats))
        .route(
            "/api/dashboard/recent-transactions",
            get(get_recent_transactions),
        )
        .route_layer(middleware::from_fn_with_state(app_state.clone(), jwt::auth))
        .with_state(app_state)
}
