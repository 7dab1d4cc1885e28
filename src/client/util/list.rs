//! The one "filter, sort, paginate" pipeline shared by every list view.

use std::cmp::Ordering;

use crate::client::util::pagination::{last_page, page_slice};

type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;
type Comparator<'a, T> = Box<dyn Fn(&T, &T) -> Ordering + 'a>;

/// A parametrized list view: predicate, comparator and page size.
///
/// ```rust,ignore
/// let view = ListQuery::new(MEMBER_PAGE_SIZE)
///     .filter(|m: &MemberDto| member_matches(m, &query, mode))
///     .sort_by(compare_members)
///     .run(&members, page);
/// ```
pub struct ListQuery<'a, T> {
    predicate: Option<Predicate<'a, T>>,
    comparator: Option<Comparator<'a, T>>,
    page_size: usize,
}

/// Result of running a [`ListQuery`] over a collection.
#[derive(Debug, PartialEq)]
pub struct ListPage<'a, T> {
    /// Items on the requested page.
    pub items: Vec<&'a T>,
    /// Matching items over all pages.
    pub total: usize,
    /// Requested page, clamped to the last page.
    pub page: usize,
    pub last_page: usize,
}

impl<'a, T> ListQuery<'a, T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            predicate: None,
            comparator: None,
            page_size,
        }
    }

    pub fn filter(mut self, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        self.predicate = Some(Box::new(predicate));
        self
    }

    pub fn sort_by(mut self, comparator: impl Fn(&T, &T) -> Ordering + 'a) -> Self {
        self.comparator = Some(Box::new(comparator));
        self
    }

    /// Sorts ascending by an optional string key; missing keys sort first.
    pub fn sort_by_name(self, key: impl Fn(&T) -> Option<String> + 'a) -> Self {
        self.sort_by(move |a, b| key(a).unwrap_or_default().cmp(&key(b).unwrap_or_default()))
    }

    /// Sorts ascending by a numeric key such as a position or timestamp.
    pub fn sort_by_number(self, key: impl Fn(&T) -> i64 + 'a) -> Self {
        self.sort_by(move |a, b| key(a).cmp(&key(b)))
    }

    /// Filtered and sorted items over all pages. The sort is stable.
    pub fn apply<'b>(&self, items: &'b [T]) -> Vec<&'b T> {
        let mut matched: Vec<&T> = match &self.predicate {
            Some(predicate) => items.iter().filter(|item| predicate(item)).collect(),
            None => items.iter().collect(),
        };
        if let Some(comparator) = &self.comparator {
            matched.sort_by(|a, b| comparator(a, b));
        }
        matched
    }

    pub fn run<'b>(&self, items: &'b [T], page: usize) -> ListPage<'b, T> {
        let matched = self.apply(items);
        let total = matched.len();
        let last = last_page(total, self.page_size);
        let page = page.min(last);
        let items = page_slice(&matched, page, self.page_size).to_vec();

        ListPage {
            items,
            total,
            page,
            last_page: last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Channel {
        name: Option<String>,
        position: i64,
    }

    fn channel(name: Option<&str>, position: i64) -> Channel {
        Channel {
            name: name.map(str::to_string),
            position,
        }
    }

    #[test]
    fn empty_filter_returns_all_items_sorted() {
        let channels = vec![channel(Some("b"), 2), channel(Some("a"), 1), channel(None, 3)];
        let sorted = ListQuery::new(10)
            .sort_by_name(|c: &Channel| c.name.clone())
            .apply(&channels);

        let names: Vec<Option<&str>> = sorted.iter().map(|c| c.name.as_deref()).collect();
        assert_eq!(names, vec![None, Some("a"), Some("b")]);
    }

    #[test]
    fn run_filters_sorts_and_pages() {
        let channels: Vec<Channel> = (0..25).rev().map(|i| channel(Some("c"), i)).collect();
        let page = ListQuery::new(10)
            .filter(|c: &Channel| c.position % 2 == 0)
            .sort_by_number(|c| c.position)
            .run(&channels, 1);

        assert_eq!(page.total, 13);
        assert_eq!(page.last_page, 1);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.items[0].position, 20);
    }

    #[test]
    fn run_clamps_out_of_range_page() {
        let channels = vec![channel(Some("a"), 0)];
        let page = ListQuery::new(50).run(&channels, 7);
        assert_eq!(page.page, 0);
        assert_eq!(page.items.len(), 1);
    }
}
