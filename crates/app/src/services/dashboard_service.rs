//! Dashboard service: fetch use-cases for the three views.

use lokboard_domain::contribution::{ContributionData, ContributionLeaderboard};
use lokboard_domain::error::LokboardError;
use lokboard_domain::id::LandId;
use lokboard_domain::land::{LandLeaderboard, normalize_land_leaderboard};
use lokboard_domain::time::ReportDate;

use crate::dashboard::{FetchOutcome, FetchRequest};
use crate::ports::ContributionSource;

/// Application service that reads from a [`ContributionSource`].
#[derive(Debug, Clone)]
pub struct DashboardService<S> {
    source: S,
}

impl<S: ContributionSource> DashboardService<S> {
    /// Create a new service backed by the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Contributions of every kingdom to one land on one day.
    ///
    /// # Errors
    ///
    /// Propagates [`LokboardError::Fetch`] or [`LokboardError::NetworkOrParse`]
    /// from the source.
    pub async fn land_contributions(
        &self,
        land_id: &LandId,
        date: ReportDate,
    ) -> Result<ContributionData, LokboardError> {
        let data = self.source.land_contributions(land_id, date).await?;
        tracing::debug!(
            land_id = %land_id,
            %date,
            kingdoms = data.kingdom_count(),
            "fetched land contributions"
        );
        Ok(data)
    }

    /// Kingdoms ranked by points summed over all lands.
    ///
    /// # Errors
    ///
    /// Propagates errors from the source.
    pub async fn contribution_leaderboard(
        &self,
        date: ReportDate,
    ) -> Result<ContributionLeaderboard, LokboardError> {
        let board = self.source.contribution_leaderboard(date).await?;
        tracing::debug!(%date, rows = board.contributions.len(), "fetched leaderboard");
        Ok(board)
    }

    /// Lands ranked by points, normalized from the server's wire shape.
    ///
    /// # Errors
    ///
    /// Propagates errors from the source.
    pub async fn land_leaderboard(&self, date: ReportDate) -> Result<LandLeaderboard, LokboardError> {
        let payload = self.source.land_leaderboard(date).await?;
        let zeroed = payload.zeroed_points();
        if zeroed > 0 {
            tracing::warn!(%date, zeroed, "land leaderboard rows with unreadable points set to zero");
        }
        let board = normalize_land_leaderboard(&payload);
        tracing::debug!(%date, rows = board.lands.len(), "fetched land leaderboard");
        Ok(board)
    }

    /// Execute a request produced by the dashboard and tag the result with its ticket.
    pub async fn run(&self, request: FetchRequest) -> FetchOutcome {
        let tab = request.tab();
        tracing::debug!(tab = tab.label(), "issuing request");
        let outcome = match request {
            FetchRequest::Kingdom { ticket, key } => FetchOutcome::Kingdom {
                ticket,
                result: self.land_contributions(&key.land_id, key.date).await,
            },
            FetchRequest::Leaderboard { ticket, date } => FetchOutcome::Leaderboard {
                ticket,
                result: self.contribution_leaderboard(date).await,
            },
            FetchRequest::LandLeaderboard { ticket, date } => FetchOutcome::LandLeaderboard {
                ticket,
                result: self.land_leaderboard(date).await,
            },
        };
        if let Some(err) = outcome.error() {
            tracing::warn!(tab = tab.label(), error = %err, "fetch failed");
        }
        outcome
    }
}
