use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// This error type provides consistent error handling across all endpoints,
/// automatically mapping different error types to appropriate HTTP status codes
/// and formatting them as JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// Invalid ObjectId format in path parameter
    InvalidId(String),
    /// No recipe matches the given id
    RecipeNotFound,
    /// Like request did not supply a userId
    MissingUserId,
    /// Caller attempted to like their own recipe
    OwnRecipeLike,
    /// Request body is not a JSON object
    InvalidBody(String),
    /// Database operation error
    DatabaseError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidId(id) => (
                StatusCode::BAD_REQUEST,
                format!(
                    "Invalid recipe id: expected a 24-character hex ObjectId, got '{}'",
                    id
                ),
            ),
            ApiError::RecipeNotFound => {
                (StatusCode::NOT_FOUND, "Recipe not found".to_string())
            }
            ApiError::MissingUserId => {
                (StatusCode::BAD_REQUEST, "User ID is required".to_string())
            }
            ApiError::OwnRecipeLike => (
                StatusCode::FORBIDDEN,
                "You cannot like your own recipe".to_string(),
            ),
            ApiError::InvalidBody(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {}", msg),
            ),
            ApiError::DatabaseError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", err),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::DatabaseError(err)
    }
}
