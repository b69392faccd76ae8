//! Pagination types
//!
//! Defines the page token, pagination state and rows-per-page abstractions
//! shared by the window calculator and the row-size resolver.

use super::window::compute_window_with;
use crate::error::Error;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Page links shown on each side of the current page
pub const DEFAULT_SIBLING_COUNT: u32 = 1;

/// Smallest run of hidden pages that collapses into an ellipsis
pub const DEFAULT_COLLAPSE_THRESHOLD: u32 = 2;

// ============================================================================
// Page Tokens
// ============================================================================

/// One entry of a page control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// A clickable page number
    Page(u32),
    /// A collapsed run of hidden pages
    Ellipsis,
}

impl PageToken {
    pub fn page(&self) -> Option<u32> {
        match self {
            PageToken::Page(n) => Some(*n),
            PageToken::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(n) => write!(f, "{n}"),
            PageToken::Ellipsis => f.write_str("..."),
        }
    }
}

// Pages serialize as numbers, ellipses as the literal "..."
impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Page(n) => serializer.serialize_u32(*n),
            PageToken::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// A token together with whether it is the page being viewed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageControl {
    pub token: PageToken,
    pub is_current: bool,
}

// ============================================================================
// Window Configuration
// ============================================================================

/// Shape of the page window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Page links shown on each side of the current page
    #[serde(default = "default_sibling_count")]
    pub sibling_count: u32,
    /// Hidden runs shorter than this are shown page by page
    #[serde(default = "default_collapse_threshold")]
    pub collapse_threshold: u32,
}

fn default_sibling_count() -> u32 {
    DEFAULT_SIBLING_COUNT
}

fn default_collapse_threshold() -> u32 {
    DEFAULT_COLLAPSE_THRESHOLD
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            sibling_count: DEFAULT_SIBLING_COUNT,
            collapse_threshold: DEFAULT_COLLAPSE_THRESHOLD,
        }
    }
}

// ============================================================================
// Pagination State
// ============================================================================

/// Current position within a paginated list
///
/// `current` is expected within `1..=total`. The window calculator does not
/// clamp; use [`PaginationState::clamped`] before slicing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub current: u32,
    pub total: u32,
    pub sibling_count: u32,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new(current: u32, total: u32, sibling_count: u32) -> Self {
        Self {
            current,
            total,
            sibling_count,
        }
    }

    /// Copy with `current` clamped into `1..=total` (and `total` at least 1)
    #[must_use]
    pub fn clamped(self) -> Self {
        let total = self.total.max(1);
        Self {
            current: self.current.clamp(1, total),
            total,
            ..self
        }
    }

    pub fn is_first(&self) -> bool {
        self.current <= 1
    }

    pub fn is_last(&self) -> bool {
        self.current >= self.total
    }

    /// Page window with the default collapse threshold
    pub fn window(&self) -> Vec<PageToken> {
        self.window_with(DEFAULT_COLLAPSE_THRESHOLD)
    }

    pub fn window_with(&self, collapse_threshold: u32) -> Vec<PageToken> {
        compute_window_with(
            self.current,
            self.total,
            self.sibling_count,
            collapse_threshold,
        )
    }

    /// Page window with each token marked current or not
    pub fn controls(&self, collapse_threshold: u32) -> Vec<PageControl> {
        self.window_with(collapse_threshold)
            .into_iter()
            .map(|token| PageControl {
                token,
                is_current: token.page() == Some(self.current),
            })
            .collect()
    }
}

// ============================================================================
// Rows Per Page
// ============================================================================

/// Rows shown per page, one of a fixed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RowsPerPage {
    Five,
    #[default]
    Ten,
    TwentyFive,
}

impl RowsPerPage {
    /// Every option in selector order
    pub const ALL: [RowsPerPage; 3] = [RowsPerPage::Five, RowsPerPage::Ten, RowsPerPage::TwentyFive];

    pub fn get(self) -> u32 {
        match self {
            RowsPerPage::Five => 5,
            RowsPerPage::Ten => 10,
            RowsPerPage::TwentyFive => 25,
        }
    }
}

impl TryFrom<u32> for RowsPerPage {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(RowsPerPage::Five),
            10 => Ok(RowsPerPage::Ten),
            25 => Ok(RowsPerPage::TwentyFive),
            _ => Err(Error::InvalidRowsPerPage { value }),
        }
    }
}

impl From<RowsPerPage> for u32 {
    fn from(rows: RowsPerPage) -> Self {
        rows.get()
    }
}

impl fmt::Display for RowsPerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

// ============================================================================
// Page Range
// ============================================================================

/// Half-open item range `[start, end)` covered by one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

impl PageRange {
    /// Range of `page` (1-based) at `rows` per page, before clipping to the list
    pub fn of(page: u32, rows: RowsPerPage) -> Self {
        let rows = rows.get() as usize;
        let page = page.max(1) as usize;
        Self {
            start: (page - 1).saturating_mul(rows),
            end: page.saturating_mul(rows),
        }
    }

    /// Clip to a list of `len` items
    #[must_use]
    pub fn clip(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }

    /// The items this page shows
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let clipped = self.clip(items.len());
        items.get(clipped.start..clipped.end).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
