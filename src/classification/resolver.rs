//! Category code resolution and token parsing

use super::canonical::{to_snake, to_token};
use super::types::{Classification, ClassificationBucket};
use serde::{Deserialize, Serialize};

/// Resolve a dataset category code to its bucket
///
/// The first non-fallback bucket (in declared order) whose snake-cased
/// category name is a prefix of the code wins. Codes carry suffixes such as
/// sub-categories, which is why this is a prefix test and not equality.
/// Hyphens in the code are read as underscores.
pub fn resolve(category_code: &str) -> &'static ClassificationBucket {
    let code = category_code.replace('-', "_");

    Classification::public()
        .find(|c| code.starts_with(&to_snake(c.category())))
        .unwrap_or(Classification::FALLBACK)
        .bucket()
}

/// Parse a URL token back into its bucket
///
/// Only exact tokens produced by `to_token` of a declared bucket parse.
pub fn parse(token: &str) -> Option<&'static ClassificationBucket> {
    Classification::ALL
        .into_iter()
        .find(|c| to_token(c.category()) == token)
        .map(Classification::bucket)
}

/// The legend's current selection, at most one bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationSelection(Option<Classification>);

impl ClassificationSelection {
    /// No bucket selected
    pub fn none() -> Self {
        Self(None)
    }

    pub fn of(classification: Classification) -> Self {
        Self(Some(classification))
    }

    pub fn selected(&self) -> Option<Classification> {
        self.0
    }

    /// Click on a legend entry: the selected bucket clears, any other replaces it
    #[must_use]
    pub fn toggle(self, clicked: Classification) -> Self {
        match self.0 {
            Some(current) if current == clicked => Self(None),
            _ => Self(Some(clicked)),
        }
    }

    /// Whether an element with this category code should be highlighted
    pub fn is_highlighted(&self, category_code: &str) -> bool {
        self.0
            .is_some_and(|selected| resolve(category_code).classification == selected)
    }
}

impl From<Option<Classification>> for ClassificationSelection {
    fn from(value: Option<Classification>) -> Self {
        Self(value)
    }
}
