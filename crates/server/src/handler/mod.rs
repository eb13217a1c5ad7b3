mod auth;
mod dashboard;
mod notification;
mod ranking;
mod transaction;
mod user;
mod withdrawal;

use anyhow::Result;
use axum::Json;
use axum::body::Body;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use prometheus_client::encoding::text::encode;
use serde_json::{Value, json};
use shared::domain::response::ErrorResponse;
use shared::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;
use utoipa::openapi::security::SecurityScheme;
use utoipa::{Modify, OpenApi};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::dashboard::dashboard_routes;
pub use self::notification::notifications_routes;
pub use self::ranking::ranking_routes;
pub use self::transaction::transactions_routes;
pub use self::user::users_routes;
pub use self::withdrawal::withdrawals_routes;

/// Maps a service error onto its HTTP status via the response's status tag.
pub(crate) fn error_reply(e: ErrorResponse) -> (StatusCode, Json<Value>) {
    let code = match e.status.as_str() {
        "not_found" => StatusCode::NOT_FOUND,
        "conflict" => StatusCode::CONFLICT,
        "unauthorized" => StatusCode::UNAUTHORIZED,
        "bad_request" => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (code, Json(json!(e)))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login_admin_handler,
        auth::get_me_handler,
        user::get_users,
        user::get_user,
        user::get_user_invites,
        transaction::get_transactions,
        transaction::get_user_transactions,
        transaction::add_points,
        transaction::remove_points,
        notification::get_notifications,
        notification::send_notification,
        withdrawal::get_withdrawals,
        withdrawal::get_pending_withdrawals,
        withdrawal::approve_withdrawal,
        withdrawal::reject_withdrawal,
        ranking::get_top_ranking,
        ranking::update_ranking,
        dashboard::get_dashboard_stats,
        dashboard::get_recent_transactions
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Admin authentication endpoints"),
        (name = "User", description = "App user administration endpoints"),
        (name = "Transaction", description = "Points ledger endpoints"),
        (name = "Notification", description = "Notification endpoints"),
        (name = "Withdrawal", description = "Withdrawal approval workflow endpoints"),
        (name = "Ranking", description = "Ranking snapshot endpoints"),
        (name = "Dashboard", description = "Dashboard aggregate endpoints")
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(utoipa::openapi::security::Http::new(
                    utoipa::openapi::security::HttpAuthScheme::Bearer,
                )),
            );
        }
    }
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    match encode(&mut buffer, &registry) {
        Ok(()) => Response::builder()
            .status(StatusCode::OK)
            .header(
                CONTENT_TYPE,
                "application/openmetrics-text; version=1.0.0; charset=utf-8",
            )
            .body(Body::from(buffer))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
        Err(e) => Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body(Body::from(format!("Failed to encode metrics: {e}")))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
    }
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let mut router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone());

        router = router.merge(auth_routes(shared_state.clone()));
        router = router.merge(users_routes(shared_state.clone()));
        router = router.merge(transactions_routes(shared_state.clone()));
        router = router.merge(notifications_routes(shared_state.clone()));
        router = router.merge(withdrawals_routes(shared_state.clone()));
        router = router.merge(ranking_routes(shared_state.clone()));
        router = router.merge(dashboard_routes(shared_state.clone()));

        let router = router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        let (router, api) = router.split_for_parts();

        let app =
            router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("Server running on http://{}", listener.local_addr()?);
        println!("API Documentation available at:");
        println!("- Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
