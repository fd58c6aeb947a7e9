//! # lokboard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the compiled **dashboard** (wasm bundle, `index.html`, styles) from a
//!   directory, falling back to `index.html` for unknown paths
//! - **Forward** `GET /land/...` to the upstream statistics service so the
//!   dashboard can use same-origin relative paths
//! - Reject malformed dates before they reach the upstream
//! - Expose `GET /health` for liveness probes
//!
//! ## Dependency rule
//! Depends on `lokboard-domain` for date validation. Never leaks axum types
//! into the domain.

pub mod error;
pub mod proxy;
pub mod router;
pub mod state;
