use serde::Serialize;

/// Pages kept on each side of the current page.
pub const DEFAULT_WINDOW_DELTA: usize = 2;

/// One entry of the page strip. Serializes as the page number, or `null` for
/// an ellipsis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Bounded, ellipsis-compressed page strip.
///
/// Page 1 and `total_pages` are always present, together with every page
/// within `delta` of `current_page`. Consecutive kept pages that are not
/// neighbours are joined by a single [`PageMarker::Ellipsis`]. With one page
/// or none the strip is empty and no controls are shown.
pub fn pagination_window(current_page: usize, total_pages: usize, delta: usize) -> Vec<PageMarker> {
    if total_pages <= 1 {
        return vec![];
    }

    let current_page = current_page.clamp(1, total_pages);
    let last_page = total_pages;

    let mid_start = current_page.saturating_sub(delta).max(2);
    let mid_end = current_page.saturating_add(delta).min(last_page - 1);

    let mut kept = Vec::with_capacity(mid_end.saturating_sub(mid_start) + 3);
    kept.push(1);
    if mid_start <= mid_end {
        kept.extend(mid_start..=mid_end);
    }
    kept.push(last_page);

    let mut pages = Vec::with_capacity(kept.len() * 2);
    let mut previous: Option<usize> = None;
    for page in kept {
        if let Some(previous) = previous {
            if page - previous > 1 {
                pages.push(PageMarker::Ellipsis);
            }
        }
        pages.push(PageMarker::Page(page));
        previous = Some(page);
    }

    pages
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<PageMarker>,
    pub page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// Whether the page strip and the previous/next controls are rendered.
    pub show_controls: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        let current_page = current_page.clamp(1, total_pages);

        let pages = pagination_window(current_page, total_pages, DEFAULT_WINDOW_DELTA);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
            show_controls: total_pages > 1,
        }
    }
}
