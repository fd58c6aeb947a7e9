//! Top-N selection of rows for charting.

use std::borrow::Cow;

/// Number of rows the kingdom chart shows at most.
pub const TOP_N: usize = 10;

/// A row carrying a point total and a display label.
pub trait Scored {
    /// Points used for ranking and charting.
    fn total_points(&self) -> f64;

    /// Name shown on chart axes and legends.
    fn label(&self) -> &str;
}

/// Select the rows to chart.
///
/// When there are at most `limit` rows they are returned untouched, in server
/// order. Otherwise a copy is stable-sorted by points, highest first, and cut to
/// `limit`; rows with equal points keep their relative order.
#[must_use]
pub fn top_n<T: Scored + Clone>(rows: &[T], limit: usize) -> Cow<'_, [T]> {
    if rows.len() <= limit {
        return Cow::Borrowed(rows);
    }
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| b.total_points().total_cmp(&a.total_points()));
    sorted.truncate(limit);
    Cow::Owned(sorted)
}

/// Whether charting `len` rows drops some of them.
#[must_use]
pub fn is_truncated(len: usize, limit: usize) -> bool {
    len > limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str, f64);

    impl Scored for Row {
        fn total_points(&self) -> f64 {
            self.1
        }

        fn label(&self) -> &str {
            self.0
        }
    }

    fn rows(points: &[f64]) -> Vec<Row> {
        const NAMES: [&str; 15] = [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o",
        ];
        points
            .iter()
            .zip(NAMES)
            .map(|(p, name)| Row(name, *p))
            .collect()
    }

    #[test]
    fn should_return_source_unchanged_when_at_most_limit() {
        let source = rows(&[1.0, 9.0, 3.0]);
        let top = top_n(&source, TOP_N);
        assert!(matches!(top, Cow::Borrowed(_)));
        assert_eq!(top.as_ref(), source.as_slice());

        let ten = rows(&[5.0; 10]);
        assert_eq!(top_n(&ten, TOP_N).as_ref(), ten.as_slice());
    }

    #[test]
    fn should_keep_ten_highest_sorted_descending() {
        let source = rows(&[
            5.0, 1.0, 12.0, 7.0, 3.0, 20.0, 0.0, 8.0, 15.0, 2.0, 11.0, 4.0, 9.0,
        ]);
        let top = top_n(&source, TOP_N);
        assert_eq!(top.len(), 10);

        let points: Vec<f64> = top.iter().map(Scored::total_points).collect();
        assert!(points.windows(2).all(|w| w[0] >= w[1]));

        let min_kept = points.iter().copied().fold(f64::INFINITY, f64::min);
        let excluded: Vec<&Row> = source.iter().filter(|r| !top.contains(r)).collect();
        assert_eq!(excluded.len(), 3);
        assert!(excluded.iter().all(|r| r.1 <= min_kept));
    }

    #[test]
    fn should_break_ties_by_original_order() {
        let source = rows(&[1.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0]);
        let top = top_n(&source, TOP_N);
        let labels: Vec<&str> = top.iter().map(Scored::label).collect();
        assert_eq!(labels, ["b", "c", "d", "e", "f", "g", "h", "i", "j", "k"]);
    }

    #[test]
    fn should_not_mutate_source() {
        let source = rows(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0]);
        let before = source.clone();
        let _ = top_n(&source, TOP_N);
        assert_eq!(source, before);
    }

    #[test]
    fn should_report_truncation_only_above_limit() {
        assert!(!is_truncated(0, TOP_N));
        assert!(!is_truncated(10, TOP_N));
        assert!(is_truncated(11, TOP_N));
    }
}
