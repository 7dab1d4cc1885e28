//! Fixed-size page slicing and the page-button window.

use std::ops::RangeInclusive;

/// Page size of member lists.
pub const MEMBER_PAGE_SIZE: usize = 50;
/// Page size of per-member statistics views.
pub const STATISTICS_PAGE_SIZE: usize = 10;

/// Buttons shown on each side of the current page.
const WINDOW_RADIUS: usize = 3;

/// Items `[page * size, (page + 1) * size)`, clamped to the collection.
pub fn page_slice<T>(items: &[T], page: usize, size: usize) -> &[T] {
    if size == 0 {
        return &[];
    }
    let start = page.saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Index of the last non-empty page, `0` for collections smaller than one page.
pub fn last_page(total: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    total.div_ceil(size).saturating_sub(1)
}

/// Page buttons around `current`: `0..=6` near the start, otherwise
/// `current-3..=current+3`, never past `last`.
pub fn page_window(current: usize, last: usize) -> RangeInclusive<usize> {
    let (start, end) = match current.checked_sub(WINDOW_RADIUS) {
        None => (0, WINDOW_RADIUS * 2),
        Some(start) => (start, current + WINDOW_RADIUS),
    };
    start.min(last)..=end.min(last)
}

/// Current page of a searchable list.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PageState {
    pub page: usize,
    pub search: String,
}

impl PageState {
    /// Updates the search term; any change of term returns to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search != self.search {
            self.search = search;
            self.page = 0;
        }
    }

    pub fn go_to(&mut self, page: usize, last: usize) {
        self.page = page.min(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_of_120_items_hold_50_50_20() {
        let items: Vec<u32> = (0..120).collect();
        let sizes: Vec<usize> = (0..3)
            .map(|page| page_slice(&items, page, MEMBER_PAGE_SIZE).len())
            .collect();

        assert_eq!(sizes, vec![50, 50, 20]);
        assert_eq!(last_page(items.len(), MEMBER_PAGE_SIZE), 2);
        assert!(page_slice(&items, 3, MEMBER_PAGE_SIZE).is_empty());
    }

    #[test]
    fn concatenated_pages_rebuild_the_collection() {
        for total in [0usize, 1, 9, 10, 11, 57, 100] {
            let items: Vec<usize> = (0..total).collect();
            for size in [1usize, 7, 10, 50] {
                let rebuilt: Vec<usize> = (0..=last_page(total, size))
                    .flat_map(|page| page_slice(&items, page, size).iter().copied())
                    .collect();
                assert_eq!(rebuilt, items, "total {} size {}", total, size);
            }
        }
    }

    #[test]
    fn last_page_falls_back_to_zero() {
        assert_eq!(last_page(0, 50), 0);
        assert_eq!(last_page(49, 50), 0);
        assert_eq!(last_page(100, 50), 1);
        assert_eq!(last_page(101, 50), 2);
    }

    #[test]
    fn window_starts_at_zero_near_first_page() {
        assert_eq!(page_window(0, 20), 0..=6);
        assert_eq!(page_window(2, 20), 0..=6);
        assert_eq!(page_window(3, 20), 0..=6);
        assert_eq!(page_window(4, 20), 1..=7);
        assert_eq!(page_window(10, 20), 7..=13);
    }

    #[test]
    fn window_never_passes_last_page() {
        assert_eq!(page_window(0, 2), 0..=2);
        assert_eq!(page_window(19, 20), 16..=20);
    }

    #[test]
    fn changing_search_resets_page() {
        let mut state = PageState::default();
        state.go_to(4, 10);
        state.set_search("abc");
        assert_eq!(state.page, 0);

        state.go_to(2, 10);
        state.set_search("abc");
        assert_eq!(state.page, 2);
    }
}
