use serde::Serialize;

/// Number of page links always shown at the start of the bar.
const LEFT_EDGE: usize = 2;
/// Number of page links shown before the current page.
const LEFT_CURRENT: usize = 2;
/// Number of page links shown after the current page.
const RIGHT_CURRENT: usize = 4;
/// Number of page links always shown at the end of the bar.
const RIGHT_EDGE: usize = 2;

/// Page numbers for a pagination bar, with `None` where a gap is rendered.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    // A page past the end keeps the window anchored on the last page.
    let current_page = current_page.min(last_page);
    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current)
        .saturating_add(1)
        .min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One page of an ordered collection plus the metadata templates need.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    /// 1-based number of this page.
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Paginated<T> {
    /// Wraps `items` as page `current_page` of `total_items` split by `per_page`.
    pub fn new(items: Vec<T>, current_page: usize, per_page: usize, total_items: usize) -> Self {
        let current_page = current_page.max(1);
        let total_pages = if per_page == 0 {
            0
        } else {
            total_items.div_ceil(per_page)
        };

        let pages = get_pages(
            total_pages,
            current_page,
            LEFT_EDGE,
            LEFT_CURRENT,
            RIGHT_CURRENT,
            RIGHT_EDGE,
        );

        Self {
            items,
            pages,
            page: current_page,
            per_page,
            total_pages,
            total_items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
