use crate::{handler::error_reply, middleware::jwt};
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
        request::TopRankingRequest,
        response::{ApiResponse, ranking::RankingResponse},
    },
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/ranking/top",
    tag = "Ranking",
    security(
        ("bearer_auth" = [])
    ),
    params(TopRankingRequest),
    responses(
        (status = 200, description = "Top ranked users by snapshot rank", body = ApiResponse<Vec<RankingResponse>>),
        (status = 401, description = "Unauthorized access", body = String),
    )
)]
pub async fn get_top_ranking(
    State(data): State<Arc<AppState>>,
    Query(params): Query<TopRankingRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data
        .di_container
        .ranking_service
        .top_ranking(params.limit)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err(error_reply(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/ranking/update",
    tag = "Ranking",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Ranking update ran; body carries the number of rows touched", body = ApiResponse<u64>),
        (status = 401, description = "Unauthorized access", body = String),
    )
)]
pub async fn update_ranking(
    State(data): State<Arc<AppState>>,
    Extension(_admin_id): Extension<i64>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data.di_container.ranking_service.update_ranking().await {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err(error_reply(e)),
    }
}

pub fn ranking_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/ranking/top", get(get_top_ranking))
        .route("/api/ranking/update", post(update_ranking))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), jwt::auth))
        .with_state(app_state)
}
