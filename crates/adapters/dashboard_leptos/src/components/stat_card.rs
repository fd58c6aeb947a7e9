//! Labelled value shown in a view's summary header.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// The label shown before the value.
    #[prop(into)]
    label: String,
    #[prop(into)] value: String,
    /// Emphasised styling for numeric totals.
    #[prop(optional)]
    highlight: bool,
) -> impl IntoView {
    view! {
        <p class="stat-card">
            <span class="stat-label">{label}":"</span>
            <span class=if highlight { "stat-value stat-value-highlight" } else { "stat-value" }>
                {value}
            </span>
        </p>
    }
}
