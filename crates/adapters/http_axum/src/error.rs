//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use lokboard_domain::error::ValidationError;

/// JSON error body returned by the forwarding routes.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Failures of a forwarded request, mapped to an HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The date segment is missing or not `YYYY-MM-DD`.
    #[error(transparent)]
    InvalidDate(#[from] ValidationError),

    /// The path does not match any upstream route.
    #[error("no route for {0}")]
    NotFound(String),

    /// The upstream could not be reached or did not answer in time.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidDate(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(err) => {
                tracing::error!(error = %err, "upstream error");
                if err.is_timeout() {
                    StatusCode::GATEWAY_TIMEOUT
                } else {
                    StatusCode::BAD_GATEWAY
                }
            }
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_invalid_date_to_bad_request() {
        let response =
            ApiError::from(ValidationError::InvalidDate("2025-13-01".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_unknown_route_to_not_found() {
        let response = ApiError::NotFound("/land/a/b/c".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
