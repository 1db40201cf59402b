//! Page arithmetic and the compressed page-number window

/// Page sizes the UI offers
pub const PAGE_SIZES: [u32; 3] = [10, 20, 50];

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// How many pages either side of the current one stay visible
const WINDOW_DELTA: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLabel {
    Page(u32),
    Ellipsis,
}

pub fn is_valid_page_size(size: u32) -> bool {
    PAGE_SIZES.contains(&size)
}

/// Next entry in [`PAGE_SIZES`], wrapping. Unknown sizes restart at the smallest.
pub fn next_page_size(size: u32) -> u32 {
    match PAGE_SIZES.iter().position(|&s| s == size) {
        Some(i) => PAGE_SIZES[(i + 1) % PAGE_SIZES.len()],
        None => PAGE_SIZES[0],
    }
}

pub fn total_pages(total: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Zero-based offset of the first item on `page`
pub fn offset_for(page: u32, page_size: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// The pagination bar is only worth drawing with more than one page
pub fn should_show_pagination(total_pages: u32) -> bool {
    total_pages > 1
}

/// 1-based inclusive range of items shown on `page`, or `None` when there is nothing to show
pub fn shown_range(page: u32, page_size: u32, total: u32) -> Option<(u32, u32)> {
    if total == 0 {
        return None;
    }
    let first = offset_for(page, page_size).saturating_add(1);
    let last = page.saturating_mul(page_size).min(total);
    if first > last {
        return None;
    }
    Some((first, last))
}

/// Labels for the page buttons: first, last, and `current ± 2`, with any
/// skipped run collapsed into one ellipsis.
pub fn page_window(current: u32, total_pages: u32) -> Vec<PageLabel> {
    let low = current.saturating_sub(WINDOW_DELTA);
    let high = current.saturating_add(WINDOW_DELTA);

    let mut labels = Vec::new();
    let mut prev = 0;
    for page in 1..=total_pages {
        if page == 1 || page == total_pages || (low..=high).contains(&page) {
            if page - prev > 1 {
                labels.push(PageLabel::Ellipsis);
            }
            labels.push(PageLabel::Page(page));
            prev = page;
        }
    }
    labels
}
