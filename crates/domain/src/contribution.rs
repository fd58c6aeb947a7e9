//! Contribution snapshots: what kingdoms contributed to a land on a given day.

use serde::{Deserialize, Deserializer, Serialize};

use crate::id::{KingdomId, LandId};
use crate::selection::Scored;
use crate::time::ReportDate;

/// Read `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One kingdom's contribution to one land for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    #[serde(default)]
    pub date: Option<ReportDate>,
    pub kingdom_id: KingdomId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_points: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kingdom_name: String,
    #[serde(default)]
    pub continent: Option<u16>,
    #[serde(default)]
    pub land_id: Option<LandId>,
}

impl Scored for Contribution {
    fn total_points(&self) -> f64 {
        self.total_points
    }

    fn label(&self) -> &str {
        &self.kingdom_name
    }
}

/// Response of `GET /land/{landId}/{date}`.
///
/// The server also sends the land's `id` and `owner`; they are not displayed.
/// `lastUpdated` is often `null` and reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_updated: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contributions: Vec<Contribution>,
}

impl ContributionData {
    /// Sum of points over every contribution, independent of any paging or chart cut.
    #[must_use]
    pub fn total_points(&self) -> f64 {
        total_points(&self.contributions)
    }

    /// Number of contributing kingdoms.
    #[must_use]
    pub fn kingdom_count(&self) -> usize {
        self.contributions.len()
    }

    /// Whether the snapshot holds no contributions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }
}

/// Sum `total_points` over a sequence of scored rows.
#[must_use]
pub fn total_points<T: Scored>(rows: &[T]) -> f64 {
    rows.iter().map(Scored::total_points).sum()
}

/// Leaderboard row: a kingdom's points summed over every land for a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalContribution {
    pub kingdom_id: KingdomId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kingdom_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_points: f64,
    #[serde(default)]
    pub continent: Option<u16>,
}

impl Scored for TotalContribution {
    fn total_points(&self) -> f64 {
        self.total_points
    }

    fn label(&self) -> &str {
        &self.kingdom_name
    }
}

/// Response of `GET /land/contributionLeaderboard/{date}`, pre-ranked by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContributionLeaderboard {
    #[serde(default, deserialize_with = "null_as_default")]
    pub contributions: Vec<TotalContribution>,
}

impl ContributionLeaderboard {
    /// Whether the leaderboard has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }
}
