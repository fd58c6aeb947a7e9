//! Forwarding of `/land/...` requests to the upstream statistics service.

use axum::body::Bytes;
use axum::extract::{OriginalUri, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use lokboard_domain::error::ValidationError;
use lokboard_domain::time::ReportDate;

use crate::error::ApiError;
use crate::state::AppState;

/// Check that the still percent-encoded `path` (everything after `/land/`) has
/// the `{key}/{date}` shape every upstream route uses, and return its date.
///
/// An encoded `/` inside the key does not split it.
///
/// # Errors
///
/// [`ApiError::NotFound`] for any other shape, [`ApiError::InvalidDate`] when
/// the decoded last segment is not a `YYYY-MM-DD` calendar date.
pub fn validate_path(path: &str) -> Result<ReportDate, ApiError> {
    let mut segments = path.split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(key), Some(date), None) if !key.is_empty() && !date.is_empty() => {
            let decoded = urlencoding::decode(date)
                .map_err(|_| ValidationError::InvalidDate(date.to_string()))?;
            Ok(ReportDate::parse(&decoded)?)
        }
        _ => Err(ApiError::NotFound(format!("/land/{path}"))),
    }
}

/// `GET /land/{*path}`: forward verbatim, keeping upstream status, content type and body.
///
/// The path is taken from the raw request URI so percent-escapes reach the
/// upstream untouched.
///
/// # Errors
///
/// Returns [`ApiError`] for malformed paths and unreachable upstreams.
pub async fn forward(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Response, ApiError> {
    let path = uri.path().strip_prefix("/land/").unwrap_or_default();
    let date = validate_path(path)?;
    let mut url = state.upstream(path);
    if let Some(query) = uri.query() {
        url.push('?');
        url.push_str(query);
    }
    tracing::debug!(%url, %date, "forwarding request");

    let upstream = state.client.get(&url).send().await?;
    let status = upstream.status();
    if !status.is_success() {
        tracing::warn!(%url, %status, "upstream answered with an error status");
    }
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let body: Bytes = upstream.bytes().await?;

    let mut response = (status, body).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(header::CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(header::CONTENT_TYPE);
        }
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_every_upstream_route_shape() {
        for path in [
            "130045/2025-03-05",
            "contributionLeaderboard/2025-03-04",
            "landLeaderboard/2025-03-04",
        ] {
            assert!(validate_path(path).is_ok(), "{path}");
        }
    }

    #[test]
    fn should_reject_malformed_date() {
        assert!(matches!(
            validate_path("130045/2025-02-30"),
            Err(ApiError::InvalidDate(_))
        ));
        assert!(matches!(
            validate_path("landLeaderboard/yesterday"),
            Err(ApiError::InvalidDate(_))
        ));
    }

    #[test]
    fn should_keep_encoded_slash_inside_key() {
        assert!(validate_path("a%2Fb/2025-03-05").is_ok());
        assert!(validate_path("a%3Fb%23c/2025-03-05").is_ok());
    }

    #[test]
    fn should_decode_date_segment_before_parsing() {
        let date = validate_path("130045/2025%2D03%2D05").unwrap();
        assert_eq!(date.to_string(), "2025-03-05");
        assert!(matches!(
            validate_path("130045/%FF"),
            Err(ApiError::InvalidDate(_))
        ));
    }

    #[test]
    fn should_reject_unknown_shapes() {
        for path in ["", "landLeaderboard", "a/b/c", "/2025-03-04", "landLeaderboard/"] {
            assert!(
                matches!(validate_path(path), Err(ApiError::NotFound(_))),
                "{path}"
            );
        }
    }
}
