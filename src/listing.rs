//! Compound listing
//!
//! Combines compound search with pagination: the rows of the current page,
//! the "x-y of n" summary and the page controls with their link targets.

use crate::dataset::{Compound, CompoundName};
use crate::error::Result;
use crate::pagination::{
    resolve_page, total_pages, PageRange, PageToken, PaginationState, RowsPerPage, WindowConfig,
};
use crate::search::search;
use crate::types::CompoundPosition;
use crate::url_state::{Navigation, UrlState};
use serde::Serialize;
use tracing::debug;

// ============================================================================
// View Types
// ============================================================================

/// One table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompoundRow {
    /// Position in the element's full compound list
    pub position: CompoundPosition,
    pub molecular_formula: String,
    pub names: Vec<CompoundName>,
}

/// A numbered page button or an ellipsis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub token: PageToken,
    pub is_current: bool,
    /// Link target; ellipses have none
    pub href: Option<String>,
}

/// Previous or next arrow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectionLink {
    pub disabled: bool,
    /// Link target; disabled arrows have none
    pub href: Option<String>,
}

impl DirectionLink {
    fn new(path: &str, target: Option<UrlState>) -> Self {
        match target {
            Some(state) => Self {
                disabled: false,
                href: Some(Navigation::with_state(path, &state).href()),
            },
            None => Self {
                disabled: true,
                href: None,
            },
        }
    }
}

// ============================================================================
// Listing
// ============================================================================

/// One rendered page of an element's compounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompoundListing {
    /// Route the page links point at
    pub path: String,
    /// State with the page clamped to the available pages
    pub state: UrlState,
    /// Compounds matching the search
    pub total_items: usize,
    /// Zero when nothing matches
    pub total_pages: u32,
    pub range: PageRange,
    pub rows: Vec<CompoundRow>,
    pub summary: String,
    pub pages: Vec<PageLink>,
    pub previous: DirectionLink,
    pub next: DirectionLink,
}

impl CompoundListing {
    pub fn build(
        path: impl Into<String>,
        compounds: &[Compound],
        state: &UrlState,
        window: WindowConfig,
    ) -> Result<Self> {
        let path = path.into();
        let matches = search(compounds, &state.search).matches;
        let total_items = matches.len();
        let pages_needed = total_pages(total_items as u64, state.rows);

        let state = state.clamped(pages_needed);
        let pagination =
            PaginationState::new(state.page, pages_needed, window.sibling_count).clamped();

        let range = PageRange::of(state.page, state.rows).clip(total_items);
        let rows = range
            .slice(&matches)
            .iter()
            .map(|&position| compound_row(compounds, position))
            .collect::<Result<Vec<_>>>()?;

        let pages = pagination
            .controls(window.collapse_threshold)
            .into_iter()
            .map(|control| PageLink {
                token: control.token,
                is_current: control.is_current,
                href: control
                    .token
                    .page()
                    .map(|page| Navigation::with_state(&path, &state.clone().with_page(page)).href()),
            })
            .collect();

        let previous = DirectionLink::new(
            &path,
            (!pagination.is_first()).then(|| state.clone().with_page(state.page - 1)),
        );
        let next = DirectionLink::new(
            &path,
            (!pagination.is_last()).then(|| state.clone().with_page(state.page + 1)),
        );

        let summary = summary(&state, range, total_items);

        debug!(
            path = %path,
            page = state.page,
            rows = state.rows.get(),
            total_items,
            "built compound listing"
        );

        Ok(Self {
            path,
            state,
            total_items,
            total_pages: pages_needed,
            range,
            rows,
            summary,
            pages,
            previous,
            next,
        })
    }

    /// State after picking a new rows-per-page value
    ///
    /// Stays on the page holding the first row currently shown. With nothing
    /// to show, lands on page 1.
    pub fn change_rows(&self, new_rows: RowsPerPage) -> Result<UrlState> {
        if self.total_items == 0 {
            return Ok(self.state.clone().with_page(1).with_rows(new_rows));
        }

        let page = resolve_page(
            self.state.page,
            self.state.rows,
            new_rows,
            self.total_items as u64,
        )?;
        Ok(self.state.clone().with_page(page).with_rows(new_rows))
    }

    /// Shallow navigation for the rows selector
    pub fn rows_navigation(&self, new_rows: RowsPerPage) -> Result<Navigation> {
        let state = self.change_rows(new_rows)?;
        Ok(Navigation::with_state(self.path.clone(), &state).shallow())
    }

    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

fn compound_row(compounds: &[Compound], position: CompoundPosition) -> Result<CompoundRow> {
    let compound = &compounds[position];
    Ok(CompoundRow {
        position,
        molecular_formula: compound.molecular_formula.clone(),
        names: compound.linked_names()?,
    })
}

fn summary(state: &UrlState, range: PageRange, total_items: usize) -> String {
    if total_items == 0 {
        return format!(
            "There are no compounds known as \"{}\"",
            state.search.as_str().unwrap_or_default()
        );
    }

    let plural = if total_items == 1 { "" } else { "s" };
    format!(
        "{}-{} of {} compound{}",
        range.start + 1,
        range.end,
        total_items,
        plural
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::search::SearchQuery;
    use pretty_assertions::assert_eq;

    const PATH: &str = "/elements/carbon/list-of-compounds";

    fn carbon() -> Vec<Compound> {
        Dataset::builtin()
            .unwrap()
            .by_number(6)
            .unwrap()
            .compounds
            .clone()
    }

    fn synthetic(count: usize) -> Vec<Compound> {
        (0..count)
            .map(|i| Compound {
                molecular_formula: format!("X{i}"),
                all_names: vec![format!("compound {i}")],
                articles: Vec::new(),
            })
            .collect()
    }

    fn build(compounds: &[Compound], state: &UrlState) -> CompoundListing {
        CompoundListing::build(PATH, compounds, state, WindowConfig::default()).unwrap()
    }

    // ========================================================================
    // Build Tests
    // ========================================================================

    #[test]
    fn test_first_page() {
        let listing = build(&carbon(), &UrlState::new(1, RowsPerPage::Five));

        assert_eq!(listing.total_items, 12);
        assert_eq!(listing.total_pages, 3);
        assert_eq!(listing.summary, "1-5 of 12 compounds");
        assert_eq!(listing.rows.len(), 5);
        assert_eq!(listing.rows[0].molecular_formula, "CO2");
        assert!(listing.previous.disabled);
        assert!(listing.previous.href.is_none());
        assert_eq!(
            listing.next.href.as_deref(),
            Some("/elements/carbon/list-of-compounds?page=2&rows=5")
        );

        let tokens: Vec<_> = listing.pages.iter().map(|p| p.token).collect();
        assert_eq!(
            tokens,
            vec![PageToken::Page(1), PageToken::Page(2), PageToken::Page(3)]
        );
        assert!(listing.pages[0].is_current);
    }

    #[test]
    fn test_last_page_is_partial() {
        let listing = build(&carbon(), &UrlState::new(3, RowsPerPage::Five));

        assert_eq!(listing.summary, "11-12 of 12 compounds");
        assert_eq!(listing.rows.len(), 2);
        assert_eq!(listing.range, PageRange { start: 10, end: 12 });
        assert!(!listing.previous.disabled);
        assert!(listing.next.disabled);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let listing = build(&carbon(), &UrlState::new(99, RowsPerPage::Five));
        assert_eq!(listing.state.page, 3);
        assert_eq!(listing.rows.len(), 2);
    }

    #[test]
    fn test_search_filters_rows() {
        let state = UrlState::new(1, RowsPerPage::Ten).with_search(SearchQuery::text("acid"));
        let listing = build(&carbon(), &state);

        assert_eq!(listing.summary, "1-1 of 1 compound");
        assert_eq!(listing.rows[0].position, 7);
        assert_eq!(listing.rows[0].molecular_formula, "CH3COOH");
        assert!(listing.previous.disabled);
        assert!(listing.next.disabled);
        assert_eq!(
            listing.pages[0].href.as_deref(),
            Some("/elements/carbon/list-of-compounds?page=1&q=acid&rows=10")
        );
    }

    #[test]
    fn test_no_matches() {
        let state = UrlState::default().with_search(SearchQuery::text("xyz"));
        let listing = build(&carbon(), &state);

        assert!(listing.is_empty());
        assert_eq!(listing.total_pages, 0);
        assert_eq!(listing.summary, "There are no compounds known as \"xyz\"");
        assert!(listing.rows.is_empty());
        assert!(listing.previous.disabled);
        assert!(listing.next.disabled);
        assert_eq!(listing.pages.len(), 1);
    }

    #[test]
    fn test_window_collapses_long_listings() {
        let compounds = synthetic(57);
        let listing = build(&compounds, &UrlState::new(6, RowsPerPage::Five));

        assert_eq!(listing.total_pages, 12);
        let tokens: Vec<_> = listing.pages.iter().map(|p| p.token).collect();
        assert_eq!(
            tokens,
            vec![
                PageToken::Page(1),
                PageToken::Ellipsis,
                PageToken::Page(5),
                PageToken::Page(6),
                PageToken::Page(7),
                PageToken::Ellipsis,
                PageToken::Page(12),
            ]
        );
        assert!(listing.pages[1].href.is_none());
        assert!(listing.pages[3].is_current);
        assert_eq!(listing.summary, "26-30 of 57 compounds");
    }

    #[test]
    fn test_names_carry_article_links() {
        let listing = build(&carbon(), &UrlState::new(1, RowsPerPage::Five));
        let linked = listing
            .rows
            .iter()
            .flat_map(|row| &row.names)
            .filter(|name| name.article_url.is_some())
            .count();
        assert!(linked > 0);
        for name in listing.rows.iter().flat_map(|row| &row.names) {
            if let Some(url) = &name.article_url {
                assert!(url.starts_with("https://en.wikipedia.org/wiki/"));
                assert!(!url.contains(' '));
            }
        }
    }

    // ========================================================================
    // Rows Change Tests
    // ========================================================================

    #[test]
    fn test_change_rows_keeps_first_row_visible() {
        let listing = build(&carbon(), &UrlState::new(3, RowsPerPage::Five));

        assert_eq!(listing.change_rows(RowsPerPage::Ten).unwrap().page, 2);
        assert_eq!(listing.change_rows(RowsPerPage::TwentyFive).unwrap().page, 1);

        let state = listing.change_rows(RowsPerPage::Ten).unwrap();
        assert_eq!(state.rows, RowsPerPage::Ten);
    }

    #[test]
    fn test_change_rows_on_empty_listing() {
        let state = UrlState::new(1, RowsPerPage::Ten).with_search(SearchQuery::text("xyz"));
        let listing = build(&carbon(), &state);

        let changed = listing.change_rows(RowsPerPage::Five).unwrap();
        assert_eq!(changed.page, 1);
        assert_eq!(changed.rows, RowsPerPage::Five);
        assert_eq!(changed.search, SearchQuery::text("xyz"));
    }

    #[test]
    fn test_rows_navigation_is_shallow() {
        let listing = build(&carbon(), &UrlState::new(2, RowsPerPage::Five));
        let nav = listing.rows_navigation(RowsPerPage::Ten).unwrap();

        assert!(nav.shallow);
        assert_eq!(nav.href(), "/elements/carbon/list-of-compounds?page=1&rows=10");
    }
}
