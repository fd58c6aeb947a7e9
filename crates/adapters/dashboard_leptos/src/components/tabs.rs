//! Tab bar switching between the three views.

use leptos::prelude::*;
use lokboard_app::dashboard::Tab;

#[component]
pub fn TabBar(
    #[prop(into)] active: Signal<Tab>,
    /// Invoked with the clicked tab, including the active one.
    #[prop(into)]
    on_select: Callback<Tab>,
) -> impl IntoView {
    view! {
        <nav class="tabs-container">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class=move || if active.get() == tab { "tab tab-active" } else { "tab" }
                            on:click=move |_| on_select.run(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
