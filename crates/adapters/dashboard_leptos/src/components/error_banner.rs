//! Inline error message for a failed fetch.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-message" role="alert">
            {message}
        </div>
    }
}
