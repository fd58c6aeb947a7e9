//! # lokboard-domain
//!
//! Pure domain model for the kingdom contributions dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, report dates, error conventions
//! - Define the **contribution snapshots** served by the statistics backend
//!   (per-land contributions, kingdom leaderboard, land leaderboard)
//! - Normalize the loosely-typed land leaderboard payload into its internal shape
//! - Derive what the views display: top-N chart subsets, table pages,
//!   page-number controls, totals, shortened addresses, palette colors, pie slices
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod chart;
pub mod contribution;
pub mod format;
pub mod land;
pub mod pagination;
pub mod palette;
pub mod selection;
