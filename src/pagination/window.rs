//! Page window calculation
//!
//! Always shows the boundary pages and the sibling range around the current
//! page. Hidden runs of pages collapse into a single ellipsis, except runs
//! shorter than the collapse threshold which are shown page by page
//! (`1 2 3` instead of `1 ... 3`).

use super::types::{PageToken, DEFAULT_COLLAPSE_THRESHOLD};

/// Compute the page window with the default collapse threshold
///
/// Total over its domain: an out-of-range `current` still yields a
/// well-formed window, just without the current page in it. A `total` of
/// zero is treated as one page.
pub fn compute_window(current: u32, total: u32, sibling_count: u32) -> Vec<PageToken> {
    compute_window_with(current, total, sibling_count, DEFAULT_COLLAPSE_THRESHOLD)
}

/// Compute the page window, collapsing hidden runs of `collapse_threshold`
/// or more pages (a threshold below 1 is read as 1)
pub fn compute_window_with(
    current: u32,
    total: u32,
    sibling_count: u32,
    collapse_threshold: u32,
) -> Vec<PageToken> {
    let total = total.max(1);
    let threshold = collapse_threshold.max(1);

    // Small totals fit entirely: boundaries, siblings and fills cover every page
    if u64::from(total) <= 2 * u64::from(sibling_count) + 5 {
        return (1..=total).map(PageToken::Page).collect();
    }

    let low = current.saturating_sub(sibling_count).max(1);
    let high = current.saturating_add(sibling_count).min(total);

    let mut anchors = Vec::with_capacity(2 * sibling_count as usize + 3);
    anchors.push(1);
    if low <= high {
        anchors.extend(low..=high);
    }
    anchors.push(total);
    anchors.dedup();

    let mut tokens = Vec::with_capacity(anchors.len() + 2);
    let mut previous: Option<u32> = None;

    for page in anchors {
        if let Some(prev) = previous {
            let hidden = page - prev - 1;
            if hidden >= threshold {
                tokens.push(PageToken::Ellipsis);
            } else {
                tokens.extend((prev + 1..page).map(PageToken::Page));
            }
        }
        tokens.push(PageToken::Page(page));
        previous = Some(page);
    }

    tokens
}
