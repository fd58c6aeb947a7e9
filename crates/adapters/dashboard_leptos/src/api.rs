//! HTTP client wrapping `gloo-net` for calls to `/land/*`.
//!
//! Paths are relative so the dashboard talks to whichever origin served it.

use gloo_net::http::{Request, Response};
use lokboard_app::ports::ContributionSource;
use lokboard_domain::contribution::{ContributionData, ContributionLeaderboard};
use lokboard_domain::error::LokboardError;
use lokboard_domain::id::LandId;
use lokboard_domain::land::LandLeaderboardPayload;
use lokboard_domain::time::ReportDate;
use serde::de::DeserializeOwned;

/// [`ContributionSource`] backed by the browser's `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpContributionSource;

/// Path of one land's contributions, with the land id percent-encoded.
fn land_contributions_path(land_id: &LandId, date: ReportDate) -> String {
    format!("/land/{}/{date}", urlencoding::encode(land_id.as_str()))
}

/// Reject non-2xx responses with their status code.
fn check_response(resp: Response) -> Result<Response, LokboardError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(LokboardError::Fetch {
            status: resp.status(),
        })
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, LokboardError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(LokboardError::network)?;
    check_response(resp)?
        .json()
        .await
        .map_err(LokboardError::network)
}

impl ContributionSource for HttpContributionSource {
    async fn land_contributions(
        &self,
        land_id: &LandId,
        date: ReportDate,
    ) -> Result<ContributionData, LokboardError> {
        get_json(&land_contributions_path(land_id, date)).await
    }

    async fn contribution_leaderboard(
        &self,
        date: ReportDate,
    ) -> Result<ContributionLeaderboard, LokboardError> {
        get_json(&format!("/land/contributionLeaderboard/{date}")).await
    }

    async fn land_leaderboard(
        &self,
        date: ReportDate,
    ) -> Result<LandLeaderboardPayload, LokboardError> {
        get_json(&format!("/land/landLeaderboard/{date}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_for(land_id: &str) -> String {
        let date = ReportDate::parse("2025-03-05").unwrap();
        land_contributions_path(&LandId::parse(land_id).unwrap(), date)
    }

    #[test]
    fn should_leave_plain_land_ids_untouched() {
        assert_eq!(path_for("130045"), "/land/130045/2025-03-05");
    }

    #[test]
    fn should_escape_path_delimiters() {
        assert_eq!(
            path_for("a/b?c#d e%"),
            "/land/a%2Fb%3Fc%23d%20e%25/2025-03-05"
        );
    }

    #[test]
    fn should_escape_other_reserved_characters() {
        assert_eq!(path_for("a[b]&c"), "/land/a%5Bb%5D%26c/2025-03-05");
    }
}
