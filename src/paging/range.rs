//! Page range computation for paginator controls

use smallvec::SmallVec;

/// Window size used when the caller has no viewport information yet
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// A single entry in a paginator button row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMarker {
    /// A concrete, clickable page number (1-based)
    Page(usize),
    /// Placeholder for an elided run of pages
    Ellipsis,
}

impl PageMarker {
    /// Page number, if this marker is a page
    pub fn page(&self) -> Option<usize> {
        match self {
            PageMarker::Page(n) => Some(*n),
            PageMarker::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageMarker::Ellipsis)
    }
}

/// Markers for one paginator render.
///
/// Anchored ranges at the default window hold at most 7 markers, so the
/// common case never touches the heap.
pub type PageRange = SmallVec<[PageMarker; 9]>;

/// Largest window honoured; wider requests are clamped to this many buttons
pub const MAX_WINDOW_SIZE: usize = 256;

/// Compute the markers a paginator should render.
///
/// Returns an empty range when `total <= 1`; the caller hides the
/// paginator entirely in that case.
///
/// Without anchors the result is a contiguous run of up to `window_size`
/// pages centred on `current`, shifted to stay full near either end.
/// With anchors, page 1 and page `total` are always present; the interior
/// spans `window_size / 2` pages either side of `current` and is widened
/// to `window_size - 2` pages when it runs into an anchor.
///
/// Inputs outside `current ∈ [1, total]` or `window_size ∈ [1, MAX_WINDOW_SIZE]`
/// are clamped.
pub fn compute_range(
    current: usize,
    total: usize,
    window_size: usize,
    show_first_last: bool,
) -> PageRange {
    let mut range = PageRange::new();
    if total <= 1 {
        return range;
    }

    let current = current.clamp(1, total);
    let window_size = window_size.clamp(1, MAX_WINDOW_SIZE);
    let half = window_size / 2;

    if !show_first_last {
        let mut start = current.saturating_sub(half).max(1);
        let end = total.min(start.saturating_add(window_size - 1));
        if end == total {
            // Keep the window full near the last page
            start = end.saturating_sub(window_size - 1).max(1);
        }
        // Near the first page `end` is already start + window_size - 1
        range.extend((start..=end).map(PageMarker::Page));
        return range;
    }

    let (start, end) = interior_bounds(current, total, half, window_size.saturating_sub(2));

    range.push(PageMarker::Page(1));
    if start > 2 {
        range.push(PageMarker::Ellipsis);
    }
    range.extend((start..=end).map(PageMarker::Page));
    if end < total - 1 {
        range.push(PageMarker::Ellipsis);
    }
    range.push(PageMarker::Page(total));

    range
}

/// Inclusive bounds of the pages shown between the two anchors.
///
/// An empty interior comes back with `end < start`; only one of the two
/// ellipsis conditions can hold for it.
fn interior_bounds(current: usize, total: usize, half: usize, interior: usize) -> (usize, usize) {
    let last_interior = total - 1;
    if last_interior < 2 {
        return (2, 1);
    }

    let mut start = current.saturating_sub(half).max(2);
    let mut end = last_interior.min(current.saturating_add(half));

    let span = (end + 1).saturating_sub(start);
    if span < interior {
        if start == 2 {
            end = last_interior.min(start.saturating_add(interior - 1));
        } else if end == last_interior {
            start = (end + 1).saturating_sub(interior).max(2);
        }
    }

    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page};

    fn pages(range: &[PageMarker]) -> Vec<usize> {
        range.iter().filter_map(PageMarker::page).collect()
    }

    #[test]
    fn test_single_page_is_empty() {
        assert!(compute_range(1, 1, 5, false).is_empty());
        assert!(compute_range(1, 1, 5, true).is_empty());
        assert!(compute_range(1, 0, 5, true).is_empty());
    }

    #[test]
    fn test_centered_window() {
        let range = compute_range(5, 10, 5, false);
        assert_eq!(pages(&range), vec![3, 4, 5, 6, 7]);
        assert!(range.iter().all(|m| !m.is_ellipsis()));
    }

    #[test]
    fn test_window_pinned_at_start() {
        assert_eq!(pages(&compute_range(1, 10, 5, false)), vec![1, 2, 3, 4, 5]);
        assert_eq!(pages(&compute_range(2, 10, 5, false)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_pinned_at_end() {
        assert_eq!(pages(&compute_range(10, 10, 5, false)), vec![6, 7, 8, 9, 10]);
        assert_eq!(pages(&compute_range(9, 10, 5, false)), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_window_larger_than_total() {
        assert_eq!(pages(&compute_range(2, 3, 7, false)), vec![1, 2, 3]);
    }

    #[test]
    fn test_even_window_without_anchors() {
        assert_eq!(pages(&compute_range(5, 10, 4, false)), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_anchors_at_last_page() {
        let range = compute_range(10, 10, 5, true);
        assert_eq!(range.first(), Some(&Page(1)));
        assert_eq!(range.last(), Some(&Page(10)));
        assert_eq!(range[1], Ellipsis);
        assert_eq!(range.iter().filter(|m| m.is_ellipsis()).count(), 1);
        assert_eq!(range.as_slice(), &[Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]);
    }

    #[test]
    fn test_anchors_at_first_page() {
        let range = compute_range(1, 10, 5, true);
        assert_eq!(range.as_slice(), &[Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]);
    }

    #[test]
    fn test_anchors_in_the_middle() {
        let range = compute_range(5, 10, 5, true);
        assert_eq!(
            range.as_slice(),
            &[Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_anchors_near_the_first_page() {
        let range = compute_range(3, 10, 5, true);
        assert_eq!(
            range.as_slice(),
            &[Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_anchors_wide_window() {
        let range = compute_range(10, 20, 7, true);
        let interior: Vec<usize> = (7..=13).collect();
        assert_eq!(range[1], Ellipsis);
        assert_eq!(pages(&range[2..range.len() - 2]), interior);
        assert_eq!(range[range.len() - 2], Ellipsis);
    }

    #[test]
    fn test_anchors_two_pages() {
        let range = compute_range(1, 2, 5, true);
        assert_eq!(range.as_slice(), &[Page(1), Page(2)]);
        let range = compute_range(2, 2, 5, true);
        assert_eq!(range.as_slice(), &[Page(1), Page(2)]);
    }

    #[test]
    fn test_anchors_small_total_has_no_gap() {
        assert_eq!(
            compute_range(2, 4, 5, true).as_slice(),
            &[Page(1), Page(2), Page(3), Page(4)]
        );
    }

    #[test]
    fn test_anchors_tiny_window_clamps_interior() {
        let range = compute_range(5, 10, 1, true);
        assert_eq!(range.as_slice(), &[Page(1), Ellipsis, Page(5), Ellipsis, Page(10)]);
        let range = compute_range(10, 10, 1, true);
        assert_eq!(range.as_slice(), &[Page(1), Ellipsis, Page(10)]);
        let range = compute_range(5, 10, 2, true);
        assert_eq!(
            range.as_slice(),
            &[Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        let range = compute_range(1, 3, 0, true);
        assert_eq!(range.as_slice(), &[Page(1), Ellipsis, Page(3)]);
    }

    #[test]
    fn test_anchors_interior_widens_at_the_edges() {
        // half = 3, interior slots = 4
        assert_eq!(pages(&compute_range(1, 20, 6, true)), vec![1, 2, 3, 4, 5, 20]);
        assert_eq!(pages(&compute_range(20, 20, 6, true)), vec![1, 16, 17, 18, 19, 20]);
        assert_eq!(
            pages(&compute_range(10, 20, 6, true)),
            vec![1, 7, 8, 9, 10, 11, 12, 13, 20]
        );
        for current in 1..=20 {
            let interior = pages(&compute_range(current, 20, 6, true)).len() - 2;
            assert!((4..=7).contains(&interior), "current = {}", current);
        }
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(compute_range(0, 10, 5, false), compute_range(1, 10, 5, false));
        assert_eq!(compute_range(99, 10, 5, true), compute_range(10, 10, 5, true));
    }

    #[test]
    fn test_extreme_inputs_do_not_overflow() {
        let range = compute_range(usize::MAX, usize::MAX, usize::MAX, false);
        assert_eq!(range.len(), MAX_WINDOW_SIZE);
        assert_eq!(range.last(), Some(&Page(usize::MAX)));

        let range = compute_range(usize::MAX - 1, usize::MAX, 7, true);
        assert_eq!(
            range.as_slice(),
            &[
                Page(1),
                Ellipsis,
                Page(usize::MAX - 5),
                Page(usize::MAX - 4),
                Page(usize::MAX - 3),
                Page(usize::MAX - 2),
                Page(usize::MAX - 1),
                Page(usize::MAX),
            ]
        );

        let range = compute_range(usize::MAX, usize::MAX, usize::MAX, true);
        assert_eq!(range.first(), Some(&Page(1)));
        assert_eq!(range.last(), Some(&Page(usize::MAX)));
        assert_eq!(pages(&range).len(), MAX_WINDOW_SIZE);
        assert_eq!(range[1], Ellipsis);
    }

    #[test]
    fn test_zero_window_without_anchors() {
        assert_eq!(pages(&compute_range(4, 10, 0, false)), vec![4]);
    }
}
