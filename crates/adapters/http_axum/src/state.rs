//! Shared application state for axum handlers.

use std::sync::Arc;
use std::time::Duration;

/// Application state shared across all axum handlers.
///
/// Cloning is cheap: the HTTP client is reference counted internally and the
/// upstream URL sits behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client used for every forwarded request.
    pub client: reqwest::Client,
    /// Upstream base URL without a trailing slash.
    pub upstream_url: Arc<str>,
}

impl AppState {
    /// Build the state with a client whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns the client builder error when the TLS backend cannot be initialised.
    pub fn new(upstream_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("lokboard/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(client, upstream_url))
    }

    /// Build the state around an existing client.
    pub fn with_client(client: reqwest::Client, upstream_url: &str) -> Self {
        Self {
            client,
            upstream_url: Arc::from(upstream_url.trim_end_matches('/')),
        }
    }

    /// Absolute upstream URL for a `/land/...` path.
    #[must_use]
    pub fn upstream(&self, path: &str) -> String {
        format!("{}/land/{path}", self.upstream_url)
    }
}
