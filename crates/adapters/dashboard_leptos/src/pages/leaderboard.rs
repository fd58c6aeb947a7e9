//! Contributions leaderboard: kingdoms ranked by points over all lands.

use leptos::prelude::*;
use lokboard_app::dashboard::Dashboard;
use lokboard_app::fetch::FetchState;
use lokboard_domain::chart::chart_data;
use lokboard_domain::contribution::ContributionLeaderboard;
use lokboard_domain::format::format_points;
use lokboard_domain::palette::color_for;

use super::long_date;
use crate::DashboardHandle;
use crate::components::{ContributionChart, EmptyState, ErrorBanner, Loading, RankBadge, StatCard};

#[component]
pub fn LeaderboardPage(dashboard: DashboardHandle) -> impl IntoView {
    let status = Memo::new(move |_| dashboard.with(|d| d.leaderboard.state().clone()));
    let date = Memo::new(move |_| dashboard.with(|d| d.leaderboard.date_input.clone()));

    view! {
        <div class="leaderboard-container">
            <div class="leaderboard-controls">
                <div class="input-group">
                    <label for="leaderboardDate">"Date"</label>
                    <input
                        type="date"
                        id="leaderboardDate"
                        prop:value=date
                        on:change=move |ev| dashboard.act(|d| d.set_leaderboard_date(event_target_value(&ev)))
                    />
                </div>
                <button
                    class="btn btn-primary"
                    disabled=move || status.get().is_loading()
                    on:click=move |_| dashboard.act(Dashboard::fetch_leaderboard)
                >
                    "Fetch Leaderboard"
                </button>
            </div>

            {move || match status.get() {
                FetchState::Idle => ().into_any(),
                FetchState::Loading => {
                    view! { <Loading message="Loading leaderboard data..."/> }.into_any()
                }
                FetchState::Failed(message) => view! { <ErrorBanner message/> }.into_any(),
                FetchState::Loaded(board) if board.is_empty() => {
                    view! {
                        <EmptyState
                            title="No leaderboard data found"
                            on_retry=move |()| dashboard.act(Dashboard::fetch_leaderboard)
                        />
                    }
                    .into_any()
                }
                FetchState::Loaded(board) => {
                    let date = long_date(&date.get_untracked());
                    view! { <LeaderboardResults board date/> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn LeaderboardResults(board: ContributionLeaderboard, date: String) -> impl IntoView {
    let chart = chart_data(&board.contributions);

    view! {
        <div class="leaderboard-content">
            <div class="header-info">
                <h2>"Contributions Leaderboard"</h2>
                <div>
                    <StatCard label="Date" value=date/>
                    <StatCard
                        label="Top Kingdoms"
                        value=board.contributions.len().to_string()
                        highlight=true
                    />
                </div>
            </div>

            <div class="chart-container">
                <h3>"Top Contributing Kingdoms"</h3>
                <ContributionChart data=chart/>
            </div>

            <div class="leaderboard-table">
                <h3>"Leaderboard Rankings"</h3>
                <table>
                    <thead>
                        <tr>
                            <th>"Rank"</th>
                            <th>"Kingdom Name"</th>
                            <th>"Total Points"</th>
                            <th>"Continent"</th>
                            <th>"Kingdom ID"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {board
                            .contributions
                            .into_iter()
                            .enumerate()
                            .map(|(index, row)| {
                                let continent = row
                                    .continent
                                    .map_or_else(|| "N/A".to_string(), |c| c.to_string());
                                view! {
                                    <tr>
                                        <td><RankBadge index/></td>
                                        <td>
                                            <span class="row-accent" style:background-color=color_for(index).hex()></span>
                                            {row.kingdom_name}
                                        </td>
                                        <td>{format_points(row.total_points)}</td>
                                        <td>{continent}</td>
                                        <td>{row.kingdom_id.to_string()}</td>
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
