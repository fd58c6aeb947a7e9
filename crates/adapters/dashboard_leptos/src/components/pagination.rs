//! First / Prev / page numbers / Next / Last controls for a paginated table.

use leptos::prelude::*;
use lokboard_domain::pagination::{PageItem, Pagination};

/// Renders nothing when the table fits on one page.
#[component]
pub fn PaginationControls(
    #[prop(into)] pagination: Signal<Pagination>,
    /// Total number of rows in the table.
    #[prop(into)]
    count: Signal<usize>,
    /// Invoked with the requested one-based page.
    #[prop(into)]
    on_page: Callback<usize>,
) -> impl IntoView {
    let total = move || pagination.get().total_pages(count.get());
    let current = move || pagination.get().current_page();
    let at_start = move || !pagination.get().has_previous();
    let at_end = move || !pagination.get().has_next(count.get());

    view! {
        <Show when=move || { total() > 1 }>
            <div class="pagination">
                <button disabled=at_start on:click=move |_| on_page.run(1)>"First"</button>
                <button disabled=at_start on:click=move |_| on_page.run(current().saturating_sub(1))>
                    "Prev"
                </button>
                <div class="page-numbers">
                    {move || {
                        pagination
                            .get()
                            .page_numbers(count.get())
                            .into_iter()
                            .map(|item| match item {
                                PageItem::Page(page) => view! {
                                    <button
                                        class=move || if current() == page { "page page-current" } else { "page" }
                                        on:click=move |_| on_page.run(page)
                                    >
                                        {page}
                                    </button>
                                }
                                .into_any(),
                                PageItem::Ellipsis => view! {
                                    <span class="page-ellipsis">{item.to_string()}</span>
                                }
                                .into_any(),
                            })
                            .collect_view()
                    }}
                </div>
                <button disabled=at_end on:click=move |_| on_page.run(current() + 1)>"Next"</button>
                <button disabled=at_end on:click=move |_| on_page.run(total())>"Last"</button>
                <span class="page-status">{move || format!("Page {} of {}", current(), total())}</span>
            </div>
        </Show>
    }
}
