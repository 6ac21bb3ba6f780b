//! # List-page state machine
//!
//! Every paginated view (customers, declarations, the three line-item
//! tables) drives the same controller: a current page fetched from the
//! server while browsing, and a client-filtered full sweep while a search
//! query is active. [`ListPager`] keeps the two modes explicit so an
//! unrelated state change can never trigger an accidental full re-scan.
//!
//! Mutations hand the pager an *epoch*: `begin_load`/`begin_search` bump
//! it, and a commit carrying a superseded epoch is rejected. A slow
//! response from an abandoned page change therefore cannot clobber newer
//! state, and a failed fetch leaves the previous items and total in place.

use crate::pagination::PageQuery;

#[derive(Clone, Debug, PartialEq)]
enum Mode<T> {
    /// Server-paged browsing; `ListPager::items` holds the current page.
    Browse,
    /// Client-side filtering over a full sweep of the collection.
    Search { full: Vec<T>, filtered: Vec<T> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListPager<T> {
    items: Vec<T>,
    mode: Mode<T>,
    search_query: String,
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
    loading: bool,
    searching: bool,
    epoch: u64,
}

impl<T: Clone> ListPager<T> {
    pub fn new(items_per_page: usize) -> Self {
        assert!(items_per_page > 0);
        Self {
            items: Vec::new(),
            mode: Mode::Browse,
            search_query: String::new(),
            current_page: 1,
            items_per_page,
            total_items: 0,
            loading: false,
            searching: false,
            epoch: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True while the full-collection sweep behind a new search runs.
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn is_search_mode(&self) -> bool {
        matches!(self.mode, Mode::Search { .. })
    }

    /// Total rows in the active view: the server total while browsing, the
    /// filtered count while searching.
    pub fn total_items(&self) -> usize {
        match &self.mode {
            Mode::Browse => self.total_items,
            Mode::Search { filtered, .. } => filtered.len(),
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items(), self.items_per_page)
    }

    /// The window to request for the current page.
    pub fn query(&self) -> PageQuery {
        PageQuery::new(
            self.items_per_page,
            (self.current_page - 1) * self.items_per_page,
        )
    }

    /// Rows to render for the current page.
    pub fn page_items(&self) -> &[T] {
        match &self.mode {
            Mode::Browse => &self.items,
            Mode::Search { filtered, .. } => {
                let start = (self.current_page - 1) * self.items_per_page;
                if start >= filtered.len() {
                    return &[];
                }
                let end = (start + self.items_per_page).min(filtered.len());
                &filtered[start..end]
            }
        }
    }

    fn bump(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }

    /// Move to `page` and mark a fetch in flight. Returns the epoch the
    /// eventual [`commit_page`](Self::commit_page) must present. Any sweep
    /// still running is superseded along with its busy flag.
    pub fn begin_load(&mut self, page: usize) -> u64 {
        self.current_page = page.max(1);
        self.loading = true;
        self.searching = false;
        self.bump()
    }

    /// Apply a fetched page. Rejected (returning `false`) when the epoch
    /// was superseded or a search has taken over since the fetch started.
    pub fn commit_page(&mut self, epoch: u64, items: Vec<T>, total: usize) -> bool {
        if epoch != self.epoch || self.is_search_mode() {
            return false;
        }
        self.items = items;
        self.total_items = total;
        self.loading = false;
        true
    }

    /// A failed fetch clears the busy flags and keeps the previous
    /// items/total untouched.
    pub fn fail_load(&mut self, epoch: u64) {
        if epoch != self.epoch {
            return;
        }
        self.loading = false;
        self.searching = false;
    }

    /// Enter (or restart) search mode: resets to the first page,
    /// invalidates in-flight fetches, and marks the sweep as running.
    pub fn begin_search(&mut self, query: impl Into<String>) -> u64 {
        self.search_query = query.into();
        self.current_page = 1;
        self.searching = true;
        self.loading = false;
        self.bump()
    }

    /// Install the swept full set, filtered with `matches`.
    pub fn commit_search(&mut self, epoch: u64, full: Vec<T>, matches: impl Fn(&T) -> bool) -> bool {
        if epoch != self.epoch {
            return false;
        }
        let filtered = full.iter().filter(|item| matches(item)).cloned().collect();
        self.mode = Mode::Search { full, filtered };
        self.current_page = 1;
        self.searching = false;
        true
    }

    /// Re-filter the cached full set after the query changed. Returns
    /// `false` when there is no cache yet, in which case the caller must run the sweep.
    pub fn refilter(&mut self, query: impl Into<String>, matches: impl Fn(&T) -> bool) -> bool {
        let query = query.into();
        match &mut self.mode {
            Mode::Search { full, filtered } => {
                self.search_query = query;
                *filtered = full.iter().filter(|item| matches(item)).cloned().collect();
                self.current_page = 1;
                true
            }
            Mode::Browse => false,
        }
    }

    /// Leave search mode and discard the cached full set. Behaves like
    /// [`begin_load`](Self::begin_load) for page 1: the caller re-fetches
    /// through the server.
    pub fn clear_search(&mut self) -> u64 {
        self.search_query.clear();
        self.mode = Mode::Browse;
        self.searching = false;
        self.begin_load(1)
    }

    /// Local page change for search mode, where every page is already in
    /// memory.
    pub fn set_page(&mut self, page: usize) {
        let pages = self.total_pages().max(1);
        self.current_page = page.clamp(1, pages);
    }

    /// Page to re-fetch after deleting one row from the current page:
    /// stays put unless the page just vanished, in which case it falls
    /// back to the new last page.
    pub fn page_for_reload_after_delete(&self) -> usize {
        let remaining = self.total_items().saturating_sub(1);
        let pages = total_pages(remaining, self.items_per_page).max(1);
        self.current_page.min(pages)
    }
}

/// `ceil(total / per_page)` without going through floats.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(pager: &mut ListPager<u32>, page: usize, items: Vec<u32>, total: usize) {
        let epoch = pager.begin_load(page);
        assert!(pager.commit_page(epoch, items, total));
    }

    #[test]
    fn total_pages_is_ceiling() {
        for total in 0..=57 {
            for per_page in [1usize, 3, 7, 10] {
                assert_eq!(
                    total_pages(total, per_page),
                    (total + per_page - 1) / per_page,
                    "total={total} per_page={per_page}"
                );
            }
        }
    }

    #[test]
    fn page_window_math() {
        // 25 rows, 10 per page: page 3 holds exactly the last 5.
        let mut pager = ListPager::new(10);
        let epoch = pager.begin_load(3);
        assert_eq!(pager.query(), PageQuery::new(10, 20));
        assert!(pager.commit_page(epoch, (21..=25).collect(), 25));
        assert_eq!(pager.total_pages(), 3);
        assert_eq!(pager.page_items().len(), 5);
    }

    #[test]
    fn stale_commit_is_rejected() {
        let mut pager = ListPager::new(10);
        loaded(&mut pager, 1, vec![1, 2, 3], 3);

        let slow = pager.begin_load(2);
        let newer = pager.begin_load(3);
        // The slow page-2 response lands after page 3 was requested.
        assert!(!pager.commit_page(slow, vec![99], 3));
        assert_eq!(pager.page_items(), &[1, 2, 3]);
        assert!(pager.is_loading());

        assert!(pager.commit_page(newer, vec![7], 3));
        assert_eq!(pager.page_items(), &[7]);
    }

    #[test]
    fn failure_preserves_previous_state() {
        let mut pager = ListPager::new(10);
        loaded(&mut pager, 1, vec![1, 2], 12);

        let epoch = pager.begin_load(2);
        pager.fail_load(epoch);
        assert!(!pager.is_loading());
        assert_eq!(pager.page_items(), &[1, 2]);
        assert_eq!(pager.total_items(), 12);
    }

    #[test]
    fn search_resets_to_first_page() {
        let mut pager = ListPager::new(10);
        loaded(&mut pager, 4, (31..=40).collect(), 60);
        assert_eq!(pager.current_page(), 4);

        let epoch = pager.begin_search("ana");
        assert_eq!(pager.current_page(), 1);
        assert!(pager.is_searching());

        let full: Vec<u32> = (1..=60).collect();
        assert!(pager.commit_search(epoch, full, |n| n % 2 == 0));
        assert!(pager.is_search_mode());
        assert_eq!(pager.total_items(), 30);
        assert_eq!(pager.total_pages(), 3);
        assert_eq!(pager.page_items()[0], 2);
    }

    #[test]
    fn search_supersedes_inflight_page_fetch() {
        let mut pager = ListPager::new(10);
        let page_epoch = pager.begin_load(2);
        let search_epoch = pager.begin_search("x");
        // The superseded page fetch must not leave its busy flag behind.
        assert!(!pager.is_loading());

        // The browse fetch resolves late; it must not leak into search mode.
        assert!(!pager.commit_page(page_epoch, vec![1], 1));
        assert!(pager.commit_search(search_epoch, vec![1, 2, 3], |_| true));
        assert_eq!(pager.total_items(), 3);
        assert!(!pager.is_searching());
    }

    #[test]
    fn page_change_supersedes_inflight_sweep() {
        let mut pager: ListPager<u32> = ListPager::new(10);
        let sweep_epoch = pager.begin_search("q");
        let page_epoch = pager.begin_load(1);
        assert!(!pager.is_searching());

        assert!(!pager.commit_search(sweep_epoch, vec![1], |_| true));
        assert!(pager.commit_page(page_epoch, vec![5, 6], 2));
        assert!(!pager.is_loading());
        assert_eq!(pager.page_items(), &[5, 6]);
    }

    #[test]
    fn refilter_reuses_cache_and_resets_page() {
        let mut pager = ListPager::new(2);
        let epoch = pager.begin_search("even");
        assert!(pager.commit_search(epoch, (1..=10).collect(), |n| n % 2 == 0));
        pager.set_page(2);
        assert_eq!(pager.current_page(), 2);

        assert!(pager.refilter("odd", |n| n % 2 == 1));
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.page_items(), &[1, 3]);
        assert_eq!(pager.search_query(), "odd");
    }

    #[test]
    fn refilter_without_cache_requires_sweep() {
        let mut pager: ListPager<u32> = ListPager::new(10);
        assert!(!pager.refilter("x", |_| true));
    }

    #[test]
    fn clear_search_discards_cache() {
        let mut pager = ListPager::new(10);
        let epoch = pager.begin_search("q");
        assert!(pager.commit_search(epoch, vec![1, 2, 3], |_| true));

        let reload = pager.clear_search();
        assert!(!pager.is_search_mode());
        assert_eq!(pager.search_query(), "");
        assert_eq!(pager.current_page(), 1);
        assert!(pager.is_loading());
        assert!(pager.commit_page(reload, vec![9], 1));
    }

    #[test]
    fn delete_falls_back_to_last_page() {
        // 3 pages of 10, sitting on page 3 with a single row.
        let mut pager = ListPager::new(10);
        loaded(&mut pager, 3, vec![21], 21);
        assert_eq!(pager.total_pages(), 3);

        // Removing that row leaves 20 rows, so page 2 is the new last page.
        assert_eq!(pager.page_for_reload_after_delete(), 2);

        // A full page 2 comes back from the re-fetch.
        loaded(&mut pager, 2, (11..=20).collect(), 20);
        assert_eq!(pager.page_items().len(), pager.items_per_page());
    }

    #[test]
    fn delete_in_the_middle_stays_on_page() {
        let mut pager = ListPager::new(10);
        loaded(&mut pager, 2, (11..=20).collect(), 35);
        assert_eq!(pager.page_for_reload_after_delete(), 2);
    }

    #[test]
    fn search_mode_pages_slice_the_filtered_set() {
        let mut pager = ListPager::new(4);
        let epoch = pager.begin_search("all");
        assert!(pager.commit_search(epoch, (1..=10).collect(), |_| true));

        pager.set_page(3);
        assert_eq!(pager.page_items(), &[9, 10]);

        // Out-of-range page requests clamp.
        pager.set_page(99);
        assert_eq!(pager.current_page(), 3);
    }
}
