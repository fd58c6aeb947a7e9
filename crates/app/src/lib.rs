//! # lokboard-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that data adapters implement (driven/outbound port):
//!   - `ContributionSource`: read contribution snapshots and leaderboards
//! - Define the **use-cases**:
//!   - `DashboardService`: validate inputs, fetch, normalize
//! - Model **view state** as explicit per-view records:
//!   - `FetchSlot`: idle → loading → loaded | failed, guarded by request tickets
//!   - `Dashboard`: the three tabs, their inputs, and which fetch each user action starts
//!
//! ## Dependency rule
//! Depends on `lokboard-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod dashboard;
pub mod fetch;
pub mod ports;
pub mod services;
