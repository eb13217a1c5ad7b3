use crate::{domain::response::pagination::Pagination, utils::AppError};
use core::fmt;
use serde::{Deserialize, Serialize};
use std::fmt::Formatter;
use utoipa::ToSchema;

pub mod admin;
pub mod dashboard;
pub mod invite;
pub mod notification;
pub mod pagination;
pub mod ranking;
pub mod transaction;
pub mod user;
pub mod withdrawal;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: T,
}

impl<T: std::fmt::Debug> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ApiResponse {{ status: {}, message: {}, data: {:?} }}",
            self.status, self.message, self.data
        )
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ApiResponsePagination<T> {
    pub status: String,
    pub message: String,
    pub data: T,
    pub pagination: Pagination,
}

impl<T: Serialize> fmt::Display for ApiResponsePagination<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{json}"),
            Err(e) => write!(f, "Error serializing ApiResponse to JSON: {e}"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

/// The `status` field doubles as the HTTP mapping key for handlers:
/// `not_found`, `conflict`, `unauthorized` and `bad_request` carry their
/// obvious status codes, anything else is a 500.
impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        let (status, message) = match error {
            AppError::SqlxError(_) => ("error".to_string(), "Database error occurred".to_string()),
            AppError::HashingError(_) => (
                "error".to_string(),
                "Error during password verification".to_string(),
            ),
            AppError::NotFound(ref msg) => ("not_found".to_string(), msg.clone()),
            AppError::Conflict(ref msg) => ("conflict".to_string(), msg.clone()),
            AppError::TokenExpiredError => (
                "unauthorized".to_string(),
                "Token has expired".to_string(),
            ),
            AppError::TokenValidationError => (
                "unauthorized".to_string(),
                "Token validation failed".to_string(),
            ),
            AppError::TokenGenerationError(_) => {
                ("error".to_string(), "Token generation failed".to_string())
            }
            AppError::InvalidCredentials => (
                "unauthorized".to_string(),
                "Invalid credentials".to_string(),
            ),
            AppError::ValidationError(ref e) => {
                ("bad_request".to_string(), format!("Validation error: {e}"))
            }
            AppError::InternalError(ref msg) => ("error".to_string(), msg.clone()),
            AppError::Custom(ref msg) => ("bad_request".to_string(), msg.clone()),
        };
        ErrorResponse { status, message }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status: {}, Message: {}", self.status, self.message)
    }
}
