//! Text formatting for table cells, tooltips and headers.

/// Addresses shorter than this are shown in full.
const SHORT_ADDRESS_LEN: usize = 10;

/// Shorten a wallet address to `0x1234...cdef` form.
///
/// Inputs under ten characters are returned unchanged.
#[must_use]
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() < SHORT_ADDRESS_LEN {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Render a point total with thousands separators and at most three decimals.
#[must_use]
pub fn format_points(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Visual treatment of a leaderboard rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Gold,
    Silver,
    Bronze,
    Plain(usize),
}

impl Rank {
    /// Rank for the row at zero-based `index` of a pre-ranked list.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Gold,
            1 => Self::Silver,
            2 => Self::Bronze,
            n => Self::Plain(n + 1),
        }
    }

    /// One-based position.
    #[must_use]
    pub fn position(self) -> usize {
        match self {
            Self::Gold => 1,
            Self::Silver => 2,
            Self::Bronze => 3,
            Self::Plain(n) => n,
        }
    }

    /// CSS class for the rank badge; `None` for plain ranks.
    #[must_use]
    pub fn medal_class(self) -> Option<&'static str> {
        match self {
            Self::Gold => Some("rank-gold"),
            Self::Silver => Some("rank-silver"),
            Self::Bronze => Some("rank-bronze"),
            Self::Plain(_) => None,
        }
    }
}

/// Text for an optional cell, `N/A` when blank.
#[must_use]
pub fn or_na(value: &str) -> &str {
    if value.is_empty() { "N/A" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_shorten_long_address() {
        assert_eq!(shorten_address("0x1234567890abcdef"), "0x1234...cdef");
    }

    #[test]
    fn should_keep_short_address() {
        assert_eq!(shorten_address("short"), "short");
        assert_eq!(shorten_address(""), "");
        assert_eq!(shorten_address("123456789"), "123456789");
    }

    #[test]
    fn should_shorten_at_exactly_ten_characters() {
        assert_eq!(shorten_address("0123456789"), "012345...6789");
    }

    #[test]
    fn should_group_thousands() {
        assert_eq!(format_points(0.0), "0");
        assert_eq!(format_points(999.0), "999");
        assert_eq!(format_points(1000.0), "1,000");
        assert_eq!(format_points(1_234_567.5), "1,234,567.5");
        assert_eq!(format_points(-45_000.0), "-45,000");
    }

    #[test]
    fn should_round_to_three_decimals() {
        assert_eq!(format_points(1.23456), "1.235");
        assert_eq!(format_points(0.1 + 0.2), "0.3");
        assert_eq!(format_points(-0.0001), "0");
    }

    #[test]
    fn should_award_medals_to_first_three_ranks() {
        assert_eq!(Rank::from_index(0).medal_class(), Some("rank-gold"));
        assert_eq!(Rank::from_index(2), Rank::Bronze);
        assert_eq!(Rank::from_index(3), Rank::Plain(4));
        assert_eq!(Rank::from_index(3).medal_class(), None);
        assert_eq!(Rank::from_index(1).position(), 2);
    }

    #[test]
    fn should_substitute_na_for_blank() {
        assert_eq!(or_na(""), "N/A");
        assert_eq!(or_na("L1"), "L1");
    }
}
