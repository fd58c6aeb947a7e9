//! Client-side pagination of the kingdom contributions table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Page-number lists longer than this collapse into first/window/last with ellipses.
const MAX_PAGES_SHOWN: usize = 5;

/// Allowed table page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RowsPerPage {
    Five,
    #[default]
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

impl RowsPerPage {
    /// Every selectable page size, smallest first.
    pub const ALL: [Self; 5] = [
        Self::Five,
        Self::Ten,
        Self::TwentyFive,
        Self::Fifty,
        Self::Hundred,
    ];

    /// Number of rows on one page.
    #[must_use]
    pub fn get(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::TwentyFive => 25,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }

    /// Map a selector value back to a page size.
    #[must_use]
    pub fn from_count(count: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|rows| rows.get() == count)
    }
}

impl fmt::Display for RowsPerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// One entry of the page-number control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

/// Number of pages needed for `count` rows; zero when there are no rows.
#[must_use]
pub fn total_pages(count: usize, rows_per_page: RowsPerPage) -> usize {
    count.div_ceil(rows_per_page.get())
}

/// Build the page-number control for `total_pages` pages with `current` selected.
///
/// Up to five pages are listed in full. Beyond that the list is page 1, a window
/// of `current - 1 ..= current + 1` clamped to `2 ..= total_pages - 1`, and the
/// last page, with an ellipsis wherever the window does not touch an endpoint.
#[must_use]
pub fn page_numbers(total_pages: usize, current: usize) -> Vec<PageItem> {
    if total_pages <= MAX_PAGES_SHOWN {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);

    let mut items = vec![PageItem::Page(1)];
    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total_pages - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total_pages));
    items
}

/// Current page (1-indexed) and page size of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    current_page: usize,
    rows_per_page: RowsPerPage,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            rows_per_page: RowsPerPage::default(),
        }
    }
}

impl Pagination {
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn rows_per_page(&self) -> RowsPerPage {
        self.rows_per_page
    }

    /// Page count for a table of `count` rows.
    #[must_use]
    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.rows_per_page)
    }

    /// Change the page size and return to page 1.
    pub fn set_rows_per_page(&mut self, rows_per_page: RowsPerPage) {
        self.rows_per_page = rows_per_page;
        self.current_page = 1;
    }

    /// Return to page 1, e.g. after new data was loaded.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Move to `page` if it exists for `count` rows.
    ///
    /// Returns `false` and leaves the current page untouched when `page` is
    /// outside `1..=total_pages`.
    pub fn go_to(&mut self, page: usize, count: usize) -> bool {
        if page < 1 || page > self.total_pages(count) {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn first(&mut self, count: usize) -> bool {
        self.go_to(1, count)
    }

    pub fn previous(&mut self, count: usize) -> bool {
        match self.current_page.checked_sub(1) {
            Some(page) => self.go_to(page, count),
            None => false,
        }
    }

    pub fn next(&mut self, count: usize) -> bool {
        self.go_to(self.current_page + 1, count)
    }

    pub fn last(&mut self, count: usize) -> bool {
        self.go_to(self.total_pages(count), count)
    }

    /// Whether a previous page exists.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a next page exists for `count` rows.
    #[must_use]
    pub fn has_next(&self, count: usize) -> bool {
        self.current_page < self.total_pages(count)
    }

    /// Rows of the current page, clipped to what exists.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let rows = self.rows_per_page.get();
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(rows)
            .min(items.len());
        let end = start.saturating_add(rows).min(items.len());
        &items[start..end]
    }

    /// Position in the full table of the `local`-th row of the current page.
    #[must_use]
    pub fn global_index(&self, local: usize) -> usize {
        self.current_page.saturating_sub(1) * self.rows_per_page.get() + local
    }

    /// Page-number control for a table of `count` rows.
    #[must_use]
    pub fn page_numbers(&self, count: usize) -> Vec<PageItem> {
        page_numbers(self.total_pages(count), self.current_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis as E, Page as P};

    #[test]
    fn should_compute_total_pages() {
        assert_eq!(total_pages(0, RowsPerPage::Ten), 0);
        assert_eq!(total_pages(1, RowsPerPage::Ten), 1);
        assert_eq!(total_pages(10, RowsPerPage::Ten), 1);
        assert_eq!(total_pages(23, RowsPerPage::Ten), 3);
        assert_eq!(total_pages(23, RowsPerPage::Five), 5);
        assert_eq!(total_pages(100, RowsPerPage::Hundred), 1);
    }

    #[test]
    fn should_slice_partial_last_page_and_ignore_out_of_range_navigation() {
        let items: Vec<usize> = (0..23).collect();
        let mut pagination = Pagination::default();
        assert_eq!(pagination.total_pages(items.len()), 3);

        assert!(pagination.go_to(3, items.len()));
        assert_eq!(pagination.slice(&items), &[20, 21, 22]);

        assert!(!pagination.go_to(4, items.len()));
        assert_eq!(pagination.current_page(), 3);
        assert!(!pagination.go_to(0, items.len()));
        assert_eq!(pagination.current_page(), 3);
    }

    #[test]
    fn should_slice_first_page() {
        let items: Vec<usize> = (0..23).collect();
        let pagination = Pagination::default();
        assert_eq!(pagination.slice(&items), (0..10).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn should_slice_empty_table() {
        let items: Vec<usize> = Vec::new();
        let pagination = Pagination::default();
        assert!(pagination.slice(&items).is_empty());
        assert_eq!(pagination.total_pages(0), 0);
    }

    #[test]
    fn should_reset_page_when_rows_per_page_changes() {
        let mut pagination = Pagination::default();
        assert!(pagination.go_to(2, 50));
        pagination.set_rows_per_page(RowsPerPage::TwentyFive);
        assert_eq!(pagination.current_page(), 1);
        assert_eq!(pagination.rows_per_page(), RowsPerPage::TwentyFive);
    }

    #[test]
    fn should_reset_page_to_first() {
        let mut pagination = Pagination::default();
        assert!(pagination.last(45));
        assert_eq!(pagination.current_page(), 5);
        pagination.reset();
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn should_step_between_neighbours() {
        let mut pagination = Pagination::default();
        assert!(!pagination.previous(30));
        assert!(!pagination.has_previous());
        assert!(pagination.next(30));
        assert!(pagination.next(30));
        assert!(!pagination.has_next(30));
        assert!(!pagination.next(30));
        assert_eq!(pagination.current_page(), 3);
        assert!(pagination.previous(30));
        assert!(pagination.first(30));
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn should_compute_global_index() {
        let mut pagination = Pagination::default();
        pagination.set_rows_per_page(RowsPerPage::Five);
        assert!(pagination.go_to(3, 20));
        assert_eq!(pagination.global_index(0), 10);
        assert_eq!(pagination.global_index(4), 14);
    }

    #[test]
    fn should_map_selector_values() {
        assert_eq!(RowsPerPage::from_count(25), Some(RowsPerPage::TwentyFive));
        assert_eq!(RowsPerPage::from_count(7), None);
        assert_eq!(RowsPerPage::Hundred.to_string(), "100");
    }

    #[test]
    fn should_list_every_page_up_to_five() {
        assert!(page_numbers(0, 1).is_empty());
        assert_eq!(page_numbers(1, 1), vec![P(1)]);
        assert_eq!(page_numbers(4, 1), vec![P(1), P(2), P(3), P(4)]);
        assert_eq!(page_numbers(4, 4), vec![P(1), P(2), P(3), P(4)]);
        assert_eq!(page_numbers(5, 3), vec![P(1), P(2), P(3), P(4), P(5)]);
        assert_eq!(page_numbers(5, 5), vec![P(1), P(2), P(3), P(4), P(5)]);
    }

    #[test]
    fn should_collapse_six_pages() {
        assert_eq!(page_numbers(6, 1), vec![P(1), P(2), E, P(6)]);
        assert_eq!(page_numbers(6, 3), vec![P(1), P(2), P(3), P(4), E, P(6)]);
        assert_eq!(page_numbers(6, 4), vec![P(1), E, P(3), P(4), P(5), P(6)]);
        assert_eq!(page_numbers(6, 6), vec![P(1), E, P(5), P(6)]);
    }

    #[test]
    fn should_collapse_ten_pages() {
        assert_eq!(page_numbers(10, 1), vec![P(1), P(2), E, P(10)]);
        assert_eq!(page_numbers(10, 2), vec![P(1), P(2), P(3), E, P(10)]);
        assert_eq!(
            page_numbers(10, 5),
            vec![P(1), E, P(4), P(5), P(6), E, P(10)]
        );
        assert_eq!(page_numbers(10, 9), vec![P(1), E, P(8), P(9), P(10)]);
        assert_eq!(page_numbers(10, 10), vec![P(1), E, P(9), P(10)]);
    }

    #[test]
    fn should_collapse_twenty_pages() {
        assert_eq!(page_numbers(20, 1), vec![P(1), P(2), E, P(20)]);
        assert_eq!(
            page_numbers(20, 11),
            vec![P(1), E, P(10), P(11), P(12), E, P(20)]
        );
        assert_eq!(page_numbers(20, 20), vec![P(1), E, P(19), P(20)]);
    }

    #[test]
    fn should_follow_window_rule_for_seven_pages() {
        assert_eq!(
            page_numbers(7, 4),
            vec![P(1), E, P(3), P(4), P(5), E, P(7)]
        );
        assert_eq!(page_numbers(7, 3), vec![P(1), P(2), P(3), P(4), E, P(7)]);
    }

    #[test]
    fn should_render_ellipsis_marker() {
        assert_eq!(E.to_string(), "...");
        assert_eq!(P(4).to_string(), "4");
    }
}
