use leptos::prelude::*;
use leptos::task::spawn_local;
use lokboard_app::dashboard::{Dashboard, FetchOutcome, FetchRequest, Tab};
use lokboard_app::services::DashboardService;
use lokboard_domain::time::ReportDate;

pub mod api;
mod components;
mod pages;

use api::HttpContributionSource;
use components::TabBar;
use pages::{KingdomPage, LandLeaderboardPage, LeaderboardPage};

/// Reactive handle on the whole dashboard, passed down to every page.
#[derive(Clone, Copy)]
pub struct DashboardHandle {
    state: RwSignal<Dashboard>,
}

impl DashboardHandle {
    fn new(today: ReportDate) -> Self {
        Self {
            state: RwSignal::new(Dashboard::new(today)),
        }
    }

    /// Read a projection of the state, tracking it.
    pub fn with<T>(self, f: impl FnOnce(&Dashboard) -> T) -> T {
        self.state.with(f)
    }

    /// Read a projection of the state without tracking it.
    pub fn with_untracked<T>(self, f: impl FnOnce(&Dashboard) -> T) -> T {
        self.state.with_untracked(f)
    }

    /// Mutate the state without starting any request.
    pub fn update(self, f: impl FnOnce(&mut Dashboard)) {
        self.state.update(f);
    }

    /// Mutate the state and run whatever fetch the action asked for.
    pub fn act(self, action: impl FnOnce(&mut Dashboard) -> Option<FetchRequest>) {
        if let Some(request) = self.state.try_update(action).flatten() {
            self.dispatch(request);
        }
    }

    fn dispatch(self, request: FetchRequest) {
        let state = self.state;
        spawn_local(async move {
            let service = DashboardService::new(HttpContributionSource);
            let outcome = service.run(request).await;
            warn_on_failure(&outcome);
            state.update(|dashboard| {
                dashboard.apply(outcome);
            });
        });
    }
}

fn warn_on_failure(outcome: &FetchOutcome) {
    if let Some(err) = outcome.error() {
        web_sys::console::warn_1(&format!("Fetch failed: {err}").into());
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let dashboard = DashboardHandle::new(ReportDate::today());
    dashboard.act(Dashboard::mount);

    let active = Memo::new(move |_| dashboard.with(Dashboard::active_tab));

    view! {
        <div class="kingdom-contributions-container">
            <h1>"Kingdom Contributions Dashboard"</h1>
            <TabBar
                active=active
                on_select=move |tab| dashboard.act(|d| d.select_tab(tab))
            />
            {move || match active.get() {
                Tab::Kingdom => view! { <KingdomPage dashboard/> }.into_any(),
                Tab::Leaderboard => view! { <LeaderboardPage dashboard/> }.into_any(),
                Tab::LandLeaderboard => view! { <LandLeaderboardPage dashboard/> }.into_any(),
            }}
        </div>
    }
}
