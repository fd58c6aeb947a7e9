//! Common error types used across the workspace.
//!
//! Every failure a view can show falls into one of three kinds: a client-side
//! validation failure that blocks the request, a non-success HTTP status, or a
//! transport/decoding failure. Each layer converts into [`LokboardError`] via `#[from]`.

/// Top-level error for fetching and normalizing dashboard data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LokboardError {
    /// Required input missing or malformed; no request was issued.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The server answered with a non-success status.
    #[error("Error: {status}")]
    Fetch {
        /// HTTP status code.
        status: u16,
    },

    /// The request could not be sent or the body could not be decoded.
    #[error("{message}")]
    NetworkOrParse {
        /// Underlying error message.
        message: String,
    },
}

impl LokboardError {
    /// Build a [`LokboardError::NetworkOrParse`] from any displayable error.
    #[must_use]
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::NetworkOrParse {
            message: err.to_string(),
        }
    }

    /// Whether the error was raised before any request was issued.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Client-side input validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Land id left empty.
    #[error("Please enter a Land ID")]
    MissingLandId,

    /// Date selector left empty.
    #[error("Please select a date")]
    MissingDate,

    /// Kingdom view submitted with its land id or date blank.
    #[error("Please enter both Land ID and Date")]
    IncompleteLandQuery,

    /// Date present but not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Kingdom id left empty.
    #[error("kingdom id must not be empty")]
    MissingKingdomId,
}
