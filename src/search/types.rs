//! Search types and traits

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How a field is compared against the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    /// Field is lower-cased before the substring test
    Insensitive,
    /// Field is compared as-is (numbers, codes)
    Sensitive,
}

/// One searchable value of a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchField<'a> {
    pub value: Cow<'a, str>,
    pub case: CaseMode,
}

impl<'a> SearchField<'a> {
    pub fn insensitive(value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            value: value.into(),
            case: CaseMode::Insensitive,
        }
    }

    pub fn sensitive(value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            value: value.into(),
            case: CaseMode::Sensitive,
        }
    }

    /// Substring test against an already lower-cased needle
    pub fn contains(&self, needle: &str) -> bool {
        match self.case {
            CaseMode::Insensitive => self.value.to_lowercase().contains(needle),
            CaseMode::Sensitive => self.value.contains(needle),
        }
    }
}

/// A record that can be filtered by the search engine
pub trait Searchable {
    /// Identifier reported for matching records
    type Id: Copy + PartialEq;

    /// Identifier of this record, given its position in the dataset
    fn search_id(&self, position: usize) -> Self::Id;

    /// Searchable fields in precedence order
    fn search_fields(&self) -> Vec<SearchField<'_>>;
}

/// Free-text query
///
/// "No query" and "empty query" are different states; both match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery(Option<String>);

impl SearchQuery {
    pub fn new(query: Option<String>) -> Self {
        Self(query)
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn text(query: impl Into<String>) -> Self {
        Self(Some(query.into()))
    }

    /// Query as typed into a search box, where clearing the box means no query
    pub fn from_input(input: &str) -> Self {
        if input.is_empty() {
            Self(None)
        } else {
            Self(Some(input.to_string()))
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Lower-cased query, if any
    pub fn needle(&self) -> Option<String> {
        self.0.as_ref().map(|q| q.to_lowercase())
    }

    pub fn into_inner(self) -> Option<String> {
        self.0
    }
}

impl From<Option<String>> for SearchQuery {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

/// Outcome of a search, remembering whether a query was present
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults<Id> {
    pub query_present: bool,
    pub matches: Vec<Id>,
}

impl<Id: PartialEq> SearchResults<Id> {
    /// `None` without a query (nothing is dimmed), otherwise membership
    pub fn is_match(&self, id: &Id) -> Option<bool> {
        self.query_present.then(|| self.matches.contains(id))
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
