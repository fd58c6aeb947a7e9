//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::proxy;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// `/land/...` is forwarded upstream; every other path is served from
/// `assets_dir`, with `index.html` answering paths that match no file.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState, assets_dir: &Path) -> Router {
    let assets = ServeDir::new(assets_dir).fallback(ServeFile::new(assets_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .route("/land/{*path}", get(proxy::forward))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::body::Body;
    use axum::extract::Path as UrlPath;
    use axum::http::{Request, StatusCode, Uri, header};
    use http_body_util::BodyExt;
    use std::path::PathBuf;
    use tower::ServiceExt;

    async fn spawn_upstream() -> String {
        let upstream = Router::new()
            .route(
                "/land/landLeaderboard/{date}",
                get(|UrlPath(date): UrlPath<String>| async move {
                    Json(serde_json::json!({
                        "date": date,
                        "points": [{ "landId": "L1", "totalPoints": "42.5", "owner": "0xabc" }],
                    }))
                }),
            )
            .route(
                "/land/{land_id}/{date}",
                get(|| async { (StatusCode::NOT_FOUND, "no such land") }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, upstream).await.unwrap() });
        format!("http://{addr}")
    }

    async fn spawn_echo_upstream() -> String {
        let upstream = Router::new().fallback(|uri: Uri| async move { uri.to_string() });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, upstream).await.unwrap() });
        format!("http://{addr}")
    }

    async fn unreachable_upstream() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    fn app(upstream: &str) -> Router {
        let state = AppState::with_client(reqwest::Client::new(), upstream);
        build(state, &PathBuf::from("does-not-exist"))
    }

    async fn get_path(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_string());
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, _, body) = get_path(app("http://127.0.0.1:9"), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn should_reject_invalid_date_without_calling_upstream() {
        let (status, _, body) =
            get_path(app("http://127.0.0.1:9"), "/land/130045/2025-13-40").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(body["error"].as_str().unwrap().contains("2025-13-40"));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_land_route() {
        let (status, _, _) = get_path(app("http://127.0.0.1:9"), "/land/a/b/c").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_forward_upstream_body_and_content_type() {
        let upstream = spawn_upstream().await;
        let (status, content_type, body) =
            get_path(app(&upstream), "/land/landLeaderboard/2025-03-04").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["date"], "2025-03-04");
        assert_eq!(body["points"][0]["landId"], "L1");
    }

    #[tokio::test]
    async fn should_forward_upstream_error_status() {
        let upstream = spawn_upstream().await;
        let (status, _, body) = get_path(app(&upstream), "/land/999/2025-03-04").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "no such land");
    }

    #[tokio::test]
    async fn should_forward_percent_encoded_segments_untouched() {
        let upstream = spawn_echo_upstream().await;
        for path in [
            "/land/a%3Fb/2025-03-05",
            "/land/a%2Fb%23c/2025-03-05",
            "/land/landLeaderboard/2025-03-04?fresh=1",
        ] {
            let (status, _, body) = get_path(app(&upstream), path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body, path);
        }
    }

    #[tokio::test]
    async fn should_answer_bad_gateway_when_upstream_is_down() {
        let upstream = unreachable_upstream().await;
        let (status, _, body) = get_path(app(&upstream), "/land/130045/2025-03-05").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("upstream request failed"));
    }

    #[tokio::test]
    async fn should_serve_assets_and_fall_back_to_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("index.html"),
            "<title>Kingdom Contributions Dashboard</title>",
        )
        .unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('hi');").unwrap();
        let state = AppState::with_client(reqwest::Client::new(), "http://127.0.0.1:9");

        let (status, _, body) = get_path(build(state.clone(), dir.path()), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('hi');");

        let (status, _, body) = get_path(build(state, dir.path()), "/leaderboard").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Kingdom Contributions Dashboard"));
    }
}
