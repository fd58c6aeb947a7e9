//! Land leaderboard: lands ranked by points, and the normalizer for its wire shape.
//!
//! The server answers `GET /land/landLeaderboard/{date}` with `{ "points": [...] }`
//! while every consumer works with `lands`. Elements are loosely typed: ids may be
//! missing, and `totalPoints` arrives as a number or a numeric string. Everything
//! about that mismatch is contained in [`normalize_land_leaderboard`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::selection::Scored;

/// One land and the points it accumulated for the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandTotalPoints {
    pub land_id: String,
    pub total_points: f64,
    pub owner: String,
}

impl Scored for LandTotalPoints {
    fn total_points(&self) -> f64 {
        self.total_points
    }

    fn label(&self) -> &str {
        &self.land_id
    }
}

/// Normalized land leaderboard, pre-ranked by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandLeaderboard {
    pub lands: Vec<LandTotalPoints>,
}

impl LandLeaderboard {
    /// Whether the leaderboard has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lands.is_empty()
    }
}

/// Raw body of `GET /land/landLeaderboard/{date}` exactly as the server sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandLeaderboardPayload {
    #[serde(default)]
    pub points: Value,
}

impl LandLeaderboardPayload {
    /// Number of elements whose `totalPoints` could not be read and was set to zero.
    #[must_use]
    pub fn zeroed_points(&self) -> usize {
        self.points.as_array().map_or(0, |items| {
            items
                .iter()
                .filter(|item| {
                    let raw = item.get("totalPoints").unwrap_or(&Value::Null);
                    !raw.is_number() && read_points(raw) == 0.0
                })
                .count()
        })
    }
}

/// Reshape the wire payload into a [`LandLeaderboard`].
///
/// A missing or non-array `points` yields an empty leaderboard, never an error.
/// Element order is preserved.
#[must_use]
pub fn normalize_land_leaderboard(payload: &LandLeaderboardPayload) -> LandLeaderboard {
    let lands = payload
        .points
        .as_array()
        .map(|items| items.iter().map(normalize_entry).collect())
        .unwrap_or_default();
    LandLeaderboard { lands }
}

fn normalize_entry(item: &Value) -> LandTotalPoints {
    LandTotalPoints {
        land_id: read_text(item.get("landId")),
        total_points: read_points(item.get("totalPoints").unwrap_or(&Value::Null)),
        owner: read_text(item.get("owner")),
    }
}

/// Truthy strings, numbers and `true` are kept as text; everything else becomes `""`.
fn read_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

fn read_points(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Parse the longest leading decimal float of `input`, ignoring leading whitespace
/// and any trailing garbage (`" 42.5kg"` reads as `42.5`).
fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
        }
        let frac_digits = frac - end - 1;
        if digits + frac_digits > 0 {
            digits += frac_digits;
            end = frac;
        }
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let exp_digits = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > exp_digits {
            end = exp;
        }
    }
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> LandLeaderboardPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn should_rename_points_to_lands_and_coerce_numeric_string() {
        let board = normalize_land_leaderboard(&payload(json!({
            "points": [{"landId": "L1", "totalPoints": "42.5", "owner": "0xabc"}]
        })));
        assert_eq!(
            board.lands,
            vec![LandTotalPoints {
                land_id: "L1".to_string(),
                total_points: 42.5,
                owner: "0xabc".to_string(),
            }]
        );
    }

    #[test]
    fn should_yield_empty_lands_when_points_missing() {
        let board = normalize_land_leaderboard(&payload(json!({})));
        assert!(board.is_empty());
    }

    #[test]
    fn should_yield_empty_lands_when_points_null_or_not_array() {
        assert!(normalize_land_leaderboard(&payload(json!({"points": null}))).is_empty());
        assert!(normalize_land_leaderboard(&payload(json!({"points": "oops"}))).is_empty());
        assert!(normalize_land_leaderboard(&payload(json!({"points": {"landId": "x"}}))).is_empty());
    }

    #[test]
    fn should_keep_numeric_points_as_is() {
        let board = normalize_land_leaderboard(&payload(json!({
            "points": [{"landId": "L1", "totalPoints": 1200, "owner": "o"}]
        })));
        assert!((board.lands[0].total_points - 1200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_default_missing_fields() {
        let board = normalize_land_leaderboard(&payload(json!({"points": [{}]})));
        assert_eq!(
            board.lands,
            vec![LandTotalPoints {
                land_id: String::new(),
                total_points: 0.0,
                owner: String::new(),
            }]
        );
    }

    #[test]
    fn should_zero_unparsable_points() {
        let board = normalize_land_leaderboard(&payload(json!({"points": [
            {"landId": "a", "totalPoints": "abc"},
            {"landId": "b", "totalPoints": null},
            {"landId": "c", "totalPoints": true},
            {"landId": "d", "totalPoints": "1e999"}
        ]})));
        assert!(board.lands.iter().all(|l| l.total_points == 0.0));
    }

    #[test]
    fn should_read_leading_float_prefix() {
        assert_eq!(parse_float_prefix("  42.5kg"), Some(42.5));
        assert_eq!(parse_float_prefix("-3"), Some(-3.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("7."), Some(7.0));
        assert_eq!(parse_float_prefix("1.5e3x"), Some(1500.0));
        assert_eq!(parse_float_prefix("2e"), Some(2.0));
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix(""), None);
    }

    #[test]
    fn should_stringify_numeric_ids_and_blank_falsy_ones() {
        let board = normalize_land_leaderboard(&payload(json!({"points": [
            {"landId": 130045, "totalPoints": 1, "owner": null},
            {"landId": 0, "totalPoints": 1, "owner": ""}
        ]})));
        assert_eq!(board.lands[0].land_id, "130045");
        assert_eq!(board.lands[0].owner, "");
        assert_eq!(board.lands[1].land_id, "");
    }

    #[test]
    fn should_preserve_server_order() {
        let board = normalize_land_leaderboard(&payload(json!({"points": [
            {"landId": "low", "totalPoints": 1},
            {"landId": "high", "totalPoints": 99}
        ]})));
        let ids: Vec<&str> = board.lands.iter().map(|l| l.land_id.as_str()).collect();
        assert_eq!(ids, ["low", "high"]);
    }

    #[test]
    fn should_count_zeroed_points() {
        let raw = payload(json!({"points": [
            {"totalPoints": "12"},
            {"totalPoints": "n/a"},
            {},
            {"totalPoints": 0}
        ]}));
        assert_eq!(raw.zeroed_points(), 2);
    }
}
