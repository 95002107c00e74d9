//! Page slicing over the filtered result.

/// Records shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// One page of a result set plus the numbers the pagination controls need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page, in result order.
    pub visible: Vec<T>,
    /// 1-based page number as requested (clamped to at least 1).
    pub page_number: usize,
    /// `ceil(total / size)`; zero for an empty result.
    pub total_pages: usize,
    /// Size of the whole result set.
    pub total: usize,
    /// Entries per page, at least 1.
    pub page_size: usize,
}

impl<T> Page<T> {
    /// Whether the whole result set is empty, as opposed to this page only.
    ///
    /// Drives the empty-state message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Whether the "previous" control is enabled: any page after the first.
    #[must_use]
    pub fn prev_enabled(&self) -> bool {
        self.page_number > 1
    }

    /// Whether the "next" control is enabled.
    ///
    /// Always `false` for an empty result, where `total_pages` is zero.
    #[must_use]
    pub fn next_enabled(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// Total shown in the "Página X de Y" label, never below 1.
    #[must_use]
    pub fn display_total(&self) -> usize {
        self.total_pages.max(1)
    }

    /// Controls are hidden when everything fits on one page.
    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.total > self.page_size
    }
}

/// Slices `items` down to the 1-based `page` of `size` entries.
///
/// Out-of-range pages produce an empty `visible` list rather than an error.
///
/// # Parameters
///
/// * `items` - Full result set, already filtered and sorted
/// * `page` - 1-based page number; 0 is treated as 1
/// * `size` - Entries per page; 0 is treated as 1
///
/// # Returns
///
/// The slice for `page` plus the totals the pagination controls need.
///
/// # Examples
///
/// ```
/// use vagas::query::paginate;
///
/// let ids: Vec<u32> = (1..=14).collect();
/// let page = paginate(&ids, 3, 6);
/// assert_eq!(page.visible, vec![13, 14]);
/// assert_eq!(page.total_pages, 3);
/// assert!(!page.next_enabled());
/// ```
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: usize, size: usize) -> Page<T> {
    let page_number = page.max(1);
    let page_size = size.max(1);
    let total = items.len();

    let start = (page_number - 1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    Page {
        visible: items[start..end].to_vec(),
        page_number,
        total_pages: (total + page_size - 1) / page_size,
        total,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourteen_records_make_three_pages() {
        let items: Vec<usize> = (0..14).collect();

        let first = paginate(&items, 1, DEFAULT_PAGE_SIZE);
        assert_eq!(first.visible, vec![0, 1, 2, 3, 4, 5]);
        assert!(!first.prev_enabled());
        assert!(first.next_enabled());
        assert!(first.controls_visible());

        let last = paginate(&items, 3, DEFAULT_PAGE_SIZE);
        assert_eq!(last.visible, vec![12, 13]);
        assert!(last.prev_enabled());
        assert!(!last.next_enabled());
    }

    #[test]
    fn empty_result_reports_one_page() {
        let page = paginate::<u8>(&[], 1, DEFAULT_PAGE_SIZE);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.display_total(), 1);
        assert!(!page.next_enabled());
        assert!(!page.prev_enabled());
        assert!(!page.controls_visible());
    }

    #[test]
    fn exactly_one_full_page_hides_controls() {
        let items: Vec<usize> = (0..6).collect();
        let page = paginate(&items, 1, DEFAULT_PAGE_SIZE);
        assert_eq!(page.visible.len(), 6);
        assert!(!page.controls_visible());

        let items: Vec<usize> = (0..7).collect();
        assert!(paginate(&items, 1, DEFAULT_PAGE_SIZE).controls_visible());
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<usize> = (0..4).collect();
        let page = paginate(&items, 9, DEFAULT_PAGE_SIZE);
        assert!(page.visible.is_empty());
        assert_eq!(page.page_number, 9);
        assert!(!page.next_enabled());
    }

    #[test]
    fn degenerate_inputs_are_clamped() {
        let items: Vec<usize> = (0..3).collect();
        let page = paginate(&items, 0, 0);
        assert_eq!(page.page_number, 1);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.visible, vec![0]);
        assert_eq!(page.total_pages, 3);
    }
}
