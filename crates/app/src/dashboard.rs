//! Dashboard state machine: three mutually exclusive tabs and their views.
//!
//! User actions mutate a [`Dashboard`] and may return a [`FetchRequest`]; the
//! caller runs it (see [`DashboardService::run`](crate::services::dashboard_service::DashboardService::run))
//! and feeds the resulting [`FetchOutcome`] back through [`Dashboard::apply`].
//! All mutation happens on one thread, between awaits.

use std::borrow::Cow;

use lokboard_domain::chart::ChartKind;
use lokboard_domain::contribution::{Contribution, ContributionData, ContributionLeaderboard};
use lokboard_domain::error::{LokboardError, ValidationError};
use lokboard_domain::id::LandId;
use lokboard_domain::land::LandLeaderboard;
use lokboard_domain::pagination::{PageItem, Pagination, RowsPerPage};
use lokboard_domain::selection::{TOP_N, is_truncated, top_n};
use lokboard_domain::time::ReportDate;

use crate::fetch::{FetchSlot, FetchState, FetchTicket};

/// The three dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Kingdom,
    Leaderboard,
    LandLeaderboard,
}

impl Tab {
    /// Tabs in display order.
    pub const ALL: [Self; 3] = [Self::Kingdom, Self::Leaderboard, Self::LandLeaderboard];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Kingdom => "Kingdom Contributions",
            Self::Leaderboard => "Contributions Leaderboard",
            Self::LandLeaderboard => "Land Points Leaderboard",
        }
    }

    fn failure_prefix(self) -> &'static str {
        match self {
            Self::Kingdom => "Failed to fetch data",
            Self::Leaderboard => "Failed to fetch leaderboard",
            Self::LandLeaderboard => "Failed to fetch land leaderboard",
        }
    }
}

/// User-facing message for a failed fetch in `tab`.
///
/// Validation messages are shown as-is; request failures get a per-view prefix.
#[must_use]
pub fn failure_message(tab: Tab, err: &LokboardError) -> String {
    if err.is_validation() {
        err.to_string()
    } else {
        format!("{}: {err}", tab.failure_prefix())
    }
}

/// Validated inputs of the kingdom view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KingdomKey {
    pub land_id: LandId,
    pub date: ReportDate,
}

impl KingdomKey {
    /// Validate the land id and date inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IncompleteLandQuery`] when either input is blank
    /// and [`ValidationError::InvalidDate`] when the date is malformed.
    pub fn parse(land_id: &str, date: &str) -> Result<Self, ValidationError> {
        let incomplete = |err: ValidationError| match err {
            ValidationError::MissingLandId | ValidationError::MissingDate => {
                ValidationError::IncompleteLandQuery
            }
            other => other,
        };
        Ok(Self {
            land_id: LandId::parse(land_id).map_err(incomplete)?,
            date: ReportDate::parse(date).map_err(incomplete)?,
        })
    }
}

/// A fetch a user action asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Kingdom {
        ticket: FetchTicket,
        key: KingdomKey,
    },
    Leaderboard {
        ticket: FetchTicket,
        date: ReportDate,
    },
    LandLeaderboard {
        ticket: FetchTicket,
        date: ReportDate,
    },
}

impl FetchRequest {
    /// The view this request fills.
    #[must_use]
    pub fn tab(&self) -> Tab {
        match self {
            Self::Kingdom { .. } => Tab::Kingdom,
            Self::Leaderboard { .. } => Tab::Leaderboard,
            Self::LandLeaderboard { .. } => Tab::LandLeaderboard,
        }
    }
}

/// The resolved result of a [`FetchRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Kingdom {
        ticket: FetchTicket,
        result: Result<ContributionData, LokboardError>,
    },
    Leaderboard {
        ticket: FetchTicket,
        result: Result<ContributionLeaderboard, LokboardError>,
    },
    LandLeaderboard {
        ticket: FetchTicket,
        result: Result<LandLeaderboard, LokboardError>,
    },
}

impl FetchOutcome {
    /// The failure carried by this outcome, if any.
    #[must_use]
    pub fn error(&self) -> Option<&LokboardError> {
        match self {
            Self::Kingdom { result: Err(err), .. }
            | Self::Leaderboard { result: Err(err), .. }
            | Self::LandLeaderboard { result: Err(err), .. } => Some(err),
            _ => None,
        }
    }
}

/// Kingdom contributions view: land id + date inputs, chart toggle, paginated table.
#[derive(Debug, Clone, PartialEq)]
pub struct KingdomView {
    pub land_id_input: String,
    pub date_input: String,
    pub chart: ChartKind,
    pagination: Pagination,
    slot: FetchSlot<ContributionData>,
    last_key: Option<KingdomKey>,
}

impl KingdomView {
    fn new(date: ReportDate) -> Self {
        Self {
            land_id_input: String::new(),
            date_input: date.to_string(),
            chart: ChartKind::default(),
            pagination: Pagination::default(),
            slot: FetchSlot::default(),
            last_key: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &FetchState<ContributionData> {
        self.slot.state()
    }

    #[must_use]
    pub fn data(&self) -> Option<&ContributionData> {
        self.slot.state().data()
    }

    #[must_use]
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Key of the last request issued, shown in the summary header.
    #[must_use]
    pub fn last_key(&self) -> Option<&KingdomKey> {
        self.last_key.as_ref()
    }

    fn rows(&self) -> &[Contribution] {
        self.data().map_or(&[], |data| data.contributions.as_slice())
    }

    /// Rows to chart: everything, or the ten highest when there are more.
    #[must_use]
    pub fn chart_rows(&self) -> Cow<'_, [Contribution]> {
        top_n(self.rows(), TOP_N)
    }

    /// Whether the chart omits some rows that the table shows.
    #[must_use]
    pub fn is_chart_truncated(&self) -> bool {
        is_truncated(self.rows().len(), TOP_N)
    }

    /// Rows of the current table page.
    #[must_use]
    pub fn page_rows(&self) -> &[Contribution] {
        self.pagination.slice(self.rows())
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.rows().len())
    }

    #[must_use]
    pub fn page_numbers(&self) -> Vec<PageItem> {
        self.pagination.page_numbers(self.rows().len())
    }

    /// Points over every loaded row, independent of paging and chart truncation.
    #[must_use]
    pub fn total_points(&self) -> f64 {
        self.data().map_or(0.0, ContributionData::total_points)
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: RowsPerPage) {
        self.pagination.set_rows_per_page(rows_per_page);
    }

    /// Navigate the table; out-of-range pages are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let count = self.rows().len();
        self.pagination.go_to(page, count)
    }

    pub fn next_page(&mut self) -> bool {
        let count = self.rows().len();
        self.pagination.next(count)
    }

    pub fn previous_page(&mut self) -> bool {
        let count = self.rows().len();
        self.pagination.previous(count)
    }

    pub fn last_page(&mut self) -> bool {
        let count = self.rows().len();
        self.pagination.last(count)
    }

    fn start(&mut self, key: KingdomKey) -> FetchRequest {
        let ticket = self.slot.begin();
        self.last_key = Some(key.clone());
        FetchRequest::Kingdom { ticket, key }
    }

    fn resolve(&mut self, ticket: FetchTicket, result: Result<ContributionData, LokboardError>) -> bool {
        let applied = self
            .slot
            .resolve(ticket, result.map_err(|err| failure_message(Tab::Kingdom, &err)));
        if applied {
            self.pagination.reset();
        }
        applied
    }
}

/// A date-keyed leaderboard view.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardView<T> {
    pub date_input: String,
    slot: FetchSlot<T>,
}

impl<T> LeaderboardView<T> {
    fn new(date: ReportDate) -> Self {
        Self {
            date_input: date.to_string(),
            slot: FetchSlot::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &FetchState<T> {
        self.slot.state()
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.slot.state().data()
    }

    fn start(&mut self, tab: Tab) -> Option<(FetchTicket, ReportDate)> {
        match ReportDate::parse(&self.date_input) {
            Ok(date) => Some((self.slot.begin(), date)),
            Err(err) => {
                self.slot
                    .reject(failure_message(tab, &LokboardError::Validation(err)));
                None
            }
        }
    }

    fn resolve(&mut self, tab: Tab, ticket: FetchTicket, result: Result<T, LokboardError>) -> bool {
        self.slot
            .resolve(ticket, result.map_err(|err| failure_message(tab, &err)))
    }
}

/// Whole-dashboard state: the active tab and every view's inputs and data.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    active: Tab,
    pub kingdom: KingdomView,
    pub leaderboard: LeaderboardView<ContributionLeaderboard>,
    pub land_leaderboard: LeaderboardView<LandLeaderboard>,
}

impl Dashboard {
    /// Fresh dashboard. The kingdom view defaults to `today`, leaderboards to the day before.
    #[must_use]
    pub fn new(today: ReportDate) -> Self {
        let yesterday = today.previous_day();
        Self {
            active: Tab::default(),
            kingdom: KingdomView::new(today),
            leaderboard: LeaderboardView::new(yesterday),
            land_leaderboard: LeaderboardView::new(yesterday),
        }
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active
    }

    /// Fetch the initially active view if it loads on entry.
    pub fn mount(&mut self) -> Option<FetchRequest> {
        self.auto_fetch()
    }

    /// Switch tabs. Entering a leaderboard loads it; data of every view is kept.
    pub fn select_tab(&mut self, tab: Tab) -> Option<FetchRequest> {
        if self.active == tab {
            return None;
        }
        self.active = tab;
        self.auto_fetch()
    }

    fn auto_fetch(&mut self) -> Option<FetchRequest> {
        match self.active {
            Tab::Kingdom => None,
            Tab::Leaderboard => self.fetch_leaderboard(),
            Tab::LandLeaderboard => self.fetch_land_leaderboard(),
        }
    }

    pub fn set_land_id(&mut self, input: impl Into<String>) {
        self.kingdom.land_id_input = input.into();
    }

    pub fn set_kingdom_date(&mut self, input: impl Into<String>) {
        self.kingdom.date_input = input.into();
    }

    pub fn set_chart_kind(&mut self, chart: ChartKind) {
        self.kingdom.chart = chart;
    }

    /// Change the leaderboard date; reloads when that view is showing.
    pub fn set_leaderboard_date(&mut self, input: impl Into<String>) -> Option<FetchRequest> {
        let input = input.into();
        if self.leaderboard.date_input == input {
            return None;
        }
        self.leaderboard.date_input = input;
        if self.active == Tab::Leaderboard {
            self.fetch_leaderboard()
        } else {
            None
        }
    }

    /// Change the land leaderboard date; reloads when that view is showing.
    pub fn set_land_leaderboard_date(&mut self, input: impl Into<String>) -> Option<FetchRequest> {
        let input = input.into();
        if self.land_leaderboard.date_input == input {
            return None;
        }
        self.land_leaderboard.date_input = input;
        if self.active == Tab::LandLeaderboard {
            self.fetch_land_leaderboard()
        } else {
            None
        }
    }

    /// Load the kingdom view from its current inputs.
    ///
    /// Invalid inputs put the view into a failed state and issue nothing.
    pub fn fetch_kingdom(&mut self) -> Option<FetchRequest> {
        match KingdomKey::parse(&self.kingdom.land_id_input, &self.kingdom.date_input) {
            Ok(key) => Some(self.kingdom.start(key)),
            Err(err) => {
                tracing::debug!(error = %err, "kingdom fetch rejected");
                self.kingdom
                    .slot
                    .reject(failure_message(Tab::Kingdom, &LokboardError::from(err)));
                None
            }
        }
    }

    /// Re-issue the last kingdom request, or fetch from the inputs if none was made.
    pub fn retry_kingdom(&mut self) -> Option<FetchRequest> {
        match self.kingdom.last_key.clone() {
            Some(key) => Some(self.kingdom.start(key)),
            None => self.fetch_kingdom(),
        }
    }

    pub fn fetch_leaderboard(&mut self) -> Option<FetchRequest> {
        self.leaderboard
            .start(Tab::Leaderboard)
            .map(|(ticket, date)| FetchRequest::Leaderboard { ticket, date })
    }

    pub fn fetch_land_leaderboard(&mut self) -> Option<FetchRequest> {
        self.land_leaderboard
            .start(Tab::LandLeaderboard)
            .map(|(ticket, date)| FetchRequest::LandLeaderboard { ticket, date })
    }

    /// Store a resolved fetch. Returns `false` when it was superseded and dropped.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        let (tab, applied) = match outcome {
            FetchOutcome::Kingdom { ticket, result } => {
                (Tab::Kingdom, self.kingdom.resolve(ticket, result))
            }
            FetchOutcome::Leaderboard { ticket, result } => (
                Tab::Leaderboard,
                self.leaderboard.resolve(Tab::Leaderboard, ticket, result),
            ),
            FetchOutcome::LandLeaderboard { ticket, result } => (
                Tab::LandLeaderboard,
                self.land_leaderboard
                    .resolve(Tab::LandLeaderboard, ticket, result),
            ),
        };
        if !applied {
            tracing::debug!(tab = tab.label(), "discarding superseded response");
        }
        applied
    }
}
