//! Rows-per-page transitions

use super::types::RowsPerPage;
use crate::error::{Error, Result};
use tracing::debug;

/// Number of pages needed for `total_items` at `rows` per page
///
/// Zero items means zero pages; callers that render a page control clamp
/// this up to one.
pub fn total_pages(total_items: u64, rows: RowsPerPage) -> u32 {
    let pages = total_items.div_ceil(u64::from(rows.get()));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Page to land on after switching from `old_rows` to `new_rows` per page
///
/// Keeps the first item of the current page visible: picks the smallest page
/// `p` of the new layout with `p * new_rows` past that item's index.
///
/// # Errors
///
/// `Error::PageResolution` when no page of the new layout holds that item,
/// which only happens when `current_page` was already past the end of
/// `total_items`. That is a caller bug, not a user error.
pub fn resolve_page(
    current_page: u32,
    old_rows: RowsPerPage,
    new_rows: RowsPerPage,
    total_items: u64,
) -> Result<u32> {
    let first_index = u64::from(current_page.saturating_sub(1)) * u64::from(old_rows.get());
    let pages = total_pages(total_items, new_rows);

    let page = first_index / u64::from(new_rows.get()) + 1;

    match u32::try_from(page) {
        Ok(page) if page <= pages => {
            debug!(
                current_page,
                old_rows = old_rows.get(),
                new_rows = new_rows.get(),
                page,
                "resolved page after rows change"
            );
            Ok(page)
        }
        _ => Err(Error::PageResolution { first_index, pages }),
    }
}
