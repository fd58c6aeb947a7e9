mod kingdom;
mod land_leaderboard;
mod leaderboard;

pub use kingdom::KingdomPage;
pub use land_leaderboard::LandLeaderboardPage;
pub use leaderboard::LeaderboardPage;

use lokboard_domain::time::ReportDate;

/// Long form of a date input for summary headers, or the raw input if it does not parse.
fn long_date(input: &str) -> String {
    ReportDate::parse(input).map_or_else(|_| input.to_string(), ReportDate::long_format)
}
