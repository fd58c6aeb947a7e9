//! Contribution source port: read access to the statistics backend.

use std::future::Future;

use lokboard_domain::contribution::{ContributionData, ContributionLeaderboard};
use lokboard_domain::error::LokboardError;
use lokboard_domain::id::LandId;
use lokboard_domain::land::LandLeaderboardPayload;
use lokboard_domain::time::ReportDate;

/// Read-only access to pre-aggregated contribution statistics.
///
/// Futures are not required to be `Send`: in the browser they are polled on the
/// single UI thread.
pub trait ContributionSource {
    /// Contributions of every kingdom to `land_id` on `date`.
    fn land_contributions(
        &self,
        land_id: &LandId,
        date: ReportDate,
    ) -> impl Future<Output = Result<ContributionData, LokboardError>>;

    /// Kingdoms ranked by points summed over all lands on `date`.
    fn contribution_leaderboard(
        &self,
        date: ReportDate,
    ) -> impl Future<Output = Result<ContributionLeaderboard, LokboardError>>;

    /// Lands ranked by points on `date`, in the server's raw shape.
    fn land_leaderboard(
        &self,
        date: ReportDate,
    ) -> impl Future<Output = Result<LandLeaderboardPayload, LokboardError>>;
}
