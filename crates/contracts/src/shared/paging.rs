//! Client-side pagination arithmetic for lists that are fetched whole
//! and sliced into fixed windows.

/// Number of pages needed for `total_count` items.
///
/// # Examples
/// ```
/// use contracts::shared::paging::total_pages;
/// assert_eq!(total_pages(12, 5), 3);
/// assert_eq!(total_pages(10, 5), 2);
/// assert_eq!(total_pages(0, 5), 0);
/// ```
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    (total_count + page_size - 1) / page_size
}

/// Clamp a 0-indexed page so it addresses an existing window. An empty
/// list clamps to page 0.
pub fn clamp_page(page: usize, total_count: usize, page_size: usize) -> usize {
    let pages = total_pages(total_count, page_size);
    if pages == 0 {
        0
    } else {
        page.min(pages - 1)
    }
}

/// Half-open `[start, end)` slice bounds of one page. Both bounds are
/// clamped to `total_count`, so the window is always in range even for a
/// page past the end.
pub fn page_window(total_count: usize, page: usize, page_size: usize) -> (usize, usize) {
    let start = page.saturating_mul(page_size).min(total_count);
    let end = start.saturating_add(page_size).min(total_count);
    (start, end)
}
