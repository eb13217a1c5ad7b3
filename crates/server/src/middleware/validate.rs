use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::Validate;

/// Json extractor that runs the payload's `Validate` rules and rejects with a
/// 400 before the handler sees the body.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "status": "fail",
                    "message": format!("Invalid request body: {e}"),
                })),
            )
        })?;

        value.validate().map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "status": "fail",
                    "message": format!("Validation error: {e}"),
                })),
            )
        })?;

        Ok(SimpleValidatedJson(value))
    }
}
