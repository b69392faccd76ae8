//! Pagination module
//!
//! Supports: page windows with ellipsis collapsing, page-size changes that keep
//! the reader's position, and slicing a list into pages.
//!
//! # Overview
//!
//! `compute_window` turns `(current, total, sibling_count)` into the tokens a
//! page control renders. `resolve_page` recomputes the page to land on when
//! the rows-per-page setting changes. Both are pure; callers recompute them
//! whenever their inputs change.

mod rows;
mod types;
mod window;

pub use rows::{resolve_page, total_pages};
pub use types::{
    PageControl, PageRange, PageToken, PaginationState, RowsPerPage, WindowConfig,
    DEFAULT_COLLAPSE_THRESHOLD, DEFAULT_SIBLING_COUNT,
};
pub use window::{compute_window, compute_window_with};
