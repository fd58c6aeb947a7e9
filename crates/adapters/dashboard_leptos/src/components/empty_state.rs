//! Placeholder shown when a fetch succeeded with zero rows.

use leptos::prelude::*;

/// Title, explanation and an optional retry button.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(into, optional)] detail: Option<String>,
    /// When set, a "Try Again" button re-issues the request.
    #[prop(into, optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>{title}</h3>
            {detail.map(|detail| view! { <p>{detail}</p> })}
            {on_retry.map(|on_retry| view! {
                <button class="btn btn-primary" on:click=move |_| on_retry.run(())>
                    "Try Again"
                </button>
            })}
        </div>
    }
}
