//! Land points leaderboard: lands ranked by points, owners shown shortened.

use leptos::prelude::*;
use lokboard_app::dashboard::Dashboard;
use lokboard_app::fetch::FetchState;
use lokboard_domain::chart::chart_data;
use lokboard_domain::format::{format_points, or_na, shorten_address};
use lokboard_domain::land::LandLeaderboard;
use lokboard_domain::palette::color_for;

use super::long_date;
use crate::DashboardHandle;
use crate::components::{ContributionChart, EmptyState, ErrorBanner, Loading, RankBadge, StatCard};

#[component]
pub fn LandLeaderboardPage(dashboard: DashboardHandle) -> impl IntoView {
    let status = Memo::new(move |_| dashboard.with(|d| d.land_leaderboard.state().clone()));
    let date = Memo::new(move |_| dashboard.with(|d| d.land_leaderboard.date_input.clone()));

    view! {
        <div class="land-leaderboard-container">
            <div class="land-leaderboard-controls">
                <div class="input-group">
                    <label for="landLeaderboardDate">"Date"</label>
                    <input
                        type="date"
                        id="landLeaderboardDate"
                        prop:value=date
                        on:change=move |ev| {
                            dashboard.act(|d| d.set_land_leaderboard_date(event_target_value(&ev)));
                        }
                    />
                </div>
                <button
                    class="btn btn-primary"
                    disabled=move || status.get().is_loading()
                    on:click=move |_| dashboard.act(Dashboard::fetch_land_leaderboard)
                >
                    "Fetch Land Leaderboard"
                </button>
            </div>

            {move || match status.get() {
                FetchState::Idle => ().into_any(),
                FetchState::Loading => {
                    view! { <Loading message="Loading land leaderboard data..."/> }.into_any()
                }
                FetchState::Failed(message) => view! { <ErrorBanner message/> }.into_any(),
                FetchState::Loaded(board) if board.is_empty() => {
                    view! {
                        <EmptyState
                            title="No land leaderboard data found"
                            on_retry=move |()| dashboard.act(Dashboard::fetch_land_leaderboard)
                        />
                    }
                    .into_any()
                }
                FetchState::Loaded(board) => {
                    let date = long_date(&date.get_untracked());
                    view! { <LandLeaderboardResults board date/> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn LandLeaderboardResults(board: LandLeaderboard, date: String) -> impl IntoView {
    let chart = chart_data(&board.lands);

    view! {
        <div class="land-leaderboard-content">
            <div class="header-info">
                <h2>"Land Points Leaderboard"</h2>
                <div>
                    <StatCard label="Date" value=date/>
                    <StatCard label="Total Lands" value=board.lands.len().to_string() highlight=true/>
                </div>
            </div>

            <div class="chart-container">
                <h3>"Lands with Most Points"</h3>
                <ContributionChart data=chart/>
            </div>

            <div class="land-leaderboard-table">
                <h3>"Leaderboard Rankings"</h3>
                <table>
                    <thead>
                        <tr>
                            <th>"Rank"</th>
                            <th>"Land ID"</th>
                            <th>"Total Points"</th>
                            <th>"Owner"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {board
                            .lands
                            .into_iter()
                            .enumerate()
                            .map(|(index, land)| {
                                let land_id = or_na(&land.land_id).to_string();
                                let owner = or_na(&shorten_address(&land.owner)).to_string();
                                view! {
                                    <tr>
                                        <td><RankBadge index/></td>
                                        <td>
                                            <span class="row-accent" style:background-color=color_for(index).hex()></span>
                                            {land_id}
                                        </td>
                                        <td>{format_points(land.total_points)}</td>
                                        <td title=land.owner>{owner}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
