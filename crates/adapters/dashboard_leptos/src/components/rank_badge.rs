//! Rank cell with medal styling for the top three.

use leptos::prelude::*;
use lokboard_domain::format::Rank;

#[component]
pub fn RankBadge(
    /// Zero-based position in the pre-ranked list.
    index: usize,
) -> impl IntoView {
    let rank = Rank::from_index(index);
    let class = match rank.medal_class() {
        Some(medal) => format!("rank-badge {medal}"),
        None => "rank-badge".to_string(),
    };
    view! { <span class=class>{rank.position()}</span> }
}
