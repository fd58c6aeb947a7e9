mod chart;
mod empty_state;
mod error_banner;
mod loading;
mod pagination;
mod rank_badge;
mod stat_card;
mod tabs;

pub use chart::ContributionChart;
pub use empty_state::EmptyState;
pub use error_banner::ErrorBanner;
pub use loading::Loading;
pub use pagination::PaginationControls;
pub use rank_badge::RankBadge;
pub use stat_card::StatCard;
pub use tabs::TabBar;
