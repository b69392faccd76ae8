//! Route paths and navigation targets

use super::codec::{encode, query_string};
use super::types::UrlState;
use crate::classification::{to_token, Classification, ClassificationSelection};
use crate::dataset::Element;
use crate::types::QueryParams;
use serde::Serialize;

/// Where the router should go next
///
/// `shallow` navigation updates the URL without reloading page data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub path: String,
    pub query: QueryParams,
    pub shallow: bool,
}

impl Navigation {
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: QueryParams::new(),
            shallow: false,
        }
    }

    /// Navigate to `path` carrying the encoded state
    pub fn with_state(path: impl Into<String>, state: &UrlState) -> Self {
        Self {
            path: path.into(),
            query: encode(state),
            shallow: false,
        }
    }

    #[must_use]
    pub fn shallow(mut self) -> Self {
        self.shallow = true;
        self
    }

    /// Path plus query string, as used in a link
    pub fn href(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, query_string(&self.query))
        }
    }
}

/// `/classifications/{token}`
pub fn classification_path(classification: Classification) -> String {
    format!("/classifications/{}", to_token(classification.category()))
}

/// Every classification route, one per declared bucket
pub fn classification_paths() -> Vec<String> {
    Classification::ALL
        .into_iter()
        .map(classification_path)
        .collect()
}

/// `/elements/{slug}`
pub fn element_path(element: &Element) -> String {
    format!("/elements/{}", element.slug())
}

/// `/elements/{slug}/list-of-compounds`
pub fn compounds_path(element: &Element) -> String {
    format!("{}/list-of-compounds", element_path(element))
}

/// Shallow navigation after a legend click
///
/// A selection goes to its classification route; clearing the selection
/// returns to the table's base path.
pub fn select_classification(selection: ClassificationSelection) -> Navigation {
    match selection.selected() {
        Some(classification) => Navigation::to(classification_path(classification)).shallow(),
        None => Navigation::to("/").shallow(),
    }
}
