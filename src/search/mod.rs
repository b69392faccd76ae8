//! Search module
//!
//! Membership filtering of a fixed dataset against a free-text query.
//!
//! # Overview
//!
//! Each record type lists its searchable fields in precedence order through
//! the `Searchable` trait. A record matches when any field contains the
//! lower-cased query; fields are tried in order and the first hit wins.
//! There is no ranking and no fuzzy matching.

mod engine;
mod types;

pub use engine::{filter, matches, search};
pub use types::{CaseMode, SearchField, SearchQuery, SearchResults, Searchable};
