//! Kingdom contributions view: one land on one day, charted and paginated.

use leptos::prelude::*;
use lokboard_app::dashboard::Dashboard;
use lokboard_app::fetch::FetchState;
use lokboard_domain::chart::{ChartKind, chart_data};
use lokboard_domain::contribution::ContributionData;
use lokboard_domain::format::format_points;
use lokboard_domain::pagination::RowsPerPage;
use lokboard_domain::palette::color_for;
use lokboard_domain::selection::TOP_N;
use lokboard_domain::time::format_last_updated;

use crate::DashboardHandle;
use crate::components::{
    ContributionChart, EmptyState, ErrorBanner, Loading, PaginationControls, StatCard,
};

#[component]
pub fn KingdomPage(dashboard: DashboardHandle) -> impl IntoView {
    let status = Memo::new(move |_| dashboard.with(|d| d.kingdom.state().clone()));
    let chart_kind = Memo::new(move |_| dashboard.with(|d| d.kingdom.chart));
    let fetch = move || dashboard.act(Dashboard::fetch_kingdom);

    view! {
        <div class="search-container">
            <div class="input-group">
                <label for="landId">"Land ID"</label>
                <input
                    type="text"
                    id="landId"
                    placeholder="Enter Land ID"
                    prop:value=move || dashboard.with(|d| d.kingdom.land_id_input.clone())
                    on:input=move |ev| dashboard.update(|d| d.set_land_id(event_target_value(&ev)))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            fetch();
                        }
                    }
                />
            </div>

            <div class="input-group">
                <label for="date">"Date"</label>
                <input
                    type="date"
                    id="date"
                    prop:value=move || dashboard.with(|d| d.kingdom.date_input.clone())
                    on:input=move |ev| dashboard.update(|d| d.set_kingdom_date(event_target_value(&ev)))
                />
            </div>

            <button
                class="btn btn-primary"
                disabled=move || status.get().is_loading()
                on:click=move |_| fetch()
            >
                "Fetch Data"
            </button>

            <div class="view-toggle">
                <label>"Chart Type"</label>
                <div>
                    {[ChartKind::Bar, ChartKind::Pie]
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <button
                                    class=move || {
                                        if chart_kind.get() == kind { "btn btn-primary" } else { "btn btn-secondary" }
                                    }
                                    on:click=move |_| dashboard.update(|d| d.set_chart_kind(kind))
                                >
                                    {kind.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>

        {move || match status.get() {
            FetchState::Idle => ().into_any(),
            FetchState::Loading => view! { <Loading message="Loading data..."/> }.into_any(),
            FetchState::Failed(message) => view! { <ErrorBanner message/> }.into_any(),
            FetchState::Loaded(data) if data.is_empty() => view! {
                <EmptyState
                    title="No contributions found"
                    detail="There is no contribution data available for the selected Land ID and Date."
                    on_retry=move |()| dashboard.act(Dashboard::retry_kingdom)
                />
            }
            .into_any(),
            FetchState::Loaded(data) => view! { <KingdomResults dashboard data/> }.into_any(),
        }}
    }
}

#[component]
fn KingdomResults(dashboard: DashboardHandle, data: ContributionData) -> impl IntoView {
    let (land_id, date) = dashboard
        .with_untracked(|d| d.kingdom.last_key().cloned())
        .map(|key| (key.land_id.to_string(), key.date.long_format()))
        .unwrap_or_default();
    let truncated = dashboard.with_untracked(|d| d.kingdom.is_chart_truncated());
    let count = data.kingdom_count();

    let chart = Memo::new(move |_| dashboard.with(|d| chart_data(&*d.kingdom.chart_rows())));
    let chart_kind = Memo::new(move |_| dashboard.with(|d| d.kingdom.chart));
    let pagination = Memo::new(move |_| dashboard.with(|d| d.kingdom.pagination()));
    let page_rows = Memo::new(move |_| dashboard.with(|d| d.kingdom.page_rows().to_vec()));

    view! {
        <div class="results-container">
            <div class="header-info">
                <div>
                    <h2>"Contributions Summary"</h2>
                    <StatCard label="Land ID" value=land_id/>
                    <StatCard label="Date" value=date/>
                </div>
                <div>
                    <StatCard label="Total Kingdoms" value=count.to_string() highlight=true/>
                    <StatCard label="Total Points" value=format_points(data.total_points()) highlight=true/>
                    <StatCard label="Last Updated" value=format_last_updated(&data.last_updated)/>
                </div>
            </div>

            <div class="chart-container">
                <h3>"Kingdom Contributions Visualization"</h3>
                {truncated.then(|| view! {
                    <p class="chart-note">
                        {format!("Showing top {TOP_N} kingdoms by total points. See table below for all data.")}
                    </p>
                })}
                <ContributionChart data=chart kind=chart_kind/>
            </div>

            <div class="data-table">
                <div class="table-header">
                    <h3>"Contributions Table"</h3>
                    <label for="rowsPerPage">"Rows per page:"</label>
                    <select
                        id="rowsPerPage"
                        prop:value=move || pagination.get().rows_per_page().get().to_string()
                        on:change=move |ev| {
                            let selected = event_target_value(&ev)
                                .parse()
                                .ok()
                                .and_then(RowsPerPage::from_count);
                            if let Some(rows_per_page) = selected {
                                dashboard.update(|d| d.kingdom.set_rows_per_page(rows_per_page));
                            }
                        }
                    >
                        {RowsPerPage::ALL
                            .into_iter()
                            .map(|rows| view! { <option value=rows.get().to_string()>{rows.get()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <table>
                    <thead>
                        <tr>
                            <th>"Kingdom Name"</th>
                            <th>"Total Points"</th>
                            <th>"Kingdom ID"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let pagination = pagination.get();
                            page_rows
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(local, row)| {
                                    let accent = color_for(pagination.global_index(local)).hex();
                                    view! {
                                        <tr>
                                            <td>
                                                <span class="row-accent" style:background-color=accent></span>
                                                {row.kingdom_name}
                                            </td>
                                            <td>{format_points(row.total_points)}</td>
                                            <td>{row.kingdom_id.to_string()}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>

                <PaginationControls
                    pagination=pagination
                    count=count
                    on_page=move |page| dashboard.update(|d| {
                        d.kingdom.go_to_page(page);
                    })
                />
            </div>
        </div>
    }
}
