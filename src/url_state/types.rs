//! URL state types

use crate::classification::Classification;
use crate::pagination::RowsPerPage;
use crate::search::SearchQuery;
use serde::{Deserialize, Serialize};

/// Query parameter holding the 1-based page number
pub const PAGE_PARAM: &str = "page";

/// Query parameter holding rows per page
pub const ROWS_PARAM: &str = "rows";

/// Query parameter holding the selected classification token
pub const CLASSIFICATION_PARAM: &str = "classification";

/// Query parameter holding the search text
pub const SEARCH_PARAM: &str = "q";

/// Everything a listing page keeps in its URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlState {
    /// 1-based page number
    pub page: u32,
    pub rows: RowsPerPage,
    /// Selected bucket; the fallback bucket is never selected through a URL
    pub classification: Option<Classification>,
    pub search: SearchQuery,
}

impl Default for UrlState {
    fn default() -> Self {
        Self {
            page: 1,
            rows: RowsPerPage::default(),
            classification: None,
            search: SearchQuery::none(),
        }
    }
}

impl UrlState {
    pub fn new(page: u32, rows: RowsPerPage) -> Self {
        Self {
            page: page.max(1),
            ..Self::default()
        }
        .with_rows(rows)
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    #[must_use]
    pub fn with_rows(mut self, rows: RowsPerPage) -> Self {
        self.rows = rows;
        self
    }

    /// Select a bucket; selecting the fallback clears the selection
    #[must_use]
    pub fn with_classification(mut self, classification: Option<Classification>) -> Self {
        self.classification = classification.filter(|c| !c.is_fallback());
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: SearchQuery) -> Self {
        self.search = search;
        self
    }

    /// Copy with the page clamped into `1..=total_pages`
    #[must_use]
    pub fn clamped(&self, total_pages: u32) -> Self {
        Self {
            page: self.page.clamp(1, total_pages.max(1)),
            ..self.clone()
        }
    }
}
