//! 1-based pagination math for the list presentation.

use std::ops::Range;

/// Number of pages needed for `item_count` items, rounding up.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1))
}

/// Clamps a 1-based page index into the valid range for `total` pages.
///
/// An empty list still reports page 1 so the chrome always has a current
/// page to render.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Half-open index range of the items on a 1-based page.
pub fn page_bounds(item_count: usize, page: usize, page_size: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = (page.max(1) - 1).saturating_mul(page_size).min(item_count);
    let end = start.saturating_add(page_size).min(item_count);
    start..end
}

/// The slice of `items` visible on a 1-based page.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_bounds(items.len(), page, page_size)]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(12, 5), 3);
        assert_eq!(total_pages(10, 5), 2);
        assert_eq!(total_pages(1, 5), 1);
        assert_eq!(total_pages(0, 5), 0);
    }

    #[test]
    fn clamp_keeps_page_one_for_empty_lists() {
        assert_eq!(clamp_page(1, 0), 1);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn clamp_restricts_to_valid_range() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let items: Vec<u32> = (0..12).collect();

        assert_eq!(page_slice(&items, 1, 5), &items[0..5]);
        assert_eq!(page_slice(&items, 3, 5), &items[10..12]);
    }

    #[test]
    fn out_of_range_pages_yield_empty_slices() {
        let items: Vec<u32> = (0..4).collect();

        assert_eq!(page_slice(&items, 9, 5), &[] as &[u32]);
        assert_eq!(page_slice(&[] as &[u32], 1, 5), &[] as &[u32]);
    }
}
