//! Search engine

use super::types::{SearchQuery, SearchResults, Searchable};
use tracing::debug;

/// Whether a single record matches the query
///
/// Fields are tested in precedence order and the first hit short-circuits.
pub fn matches<T: Searchable>(item: &T, query: &SearchQuery) -> bool {
    match query.needle() {
        None => true,
        Some(needle) => matches_needle(item, &needle),
    }
}

fn matches_needle<T: Searchable>(item: &T, needle: &str) -> bool {
    item.search_fields()
        .iter()
        .any(|field| field.contains(needle))
}

/// Identifiers of matching records, in dataset order
pub fn filter<T: Searchable>(dataset: &[T], query: &SearchQuery) -> Vec<T::Id> {
    let needle = query.needle();

    let ids: Vec<T::Id> = dataset
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            needle
                .as_deref()
                .map_or(true, |needle| matches_needle(*item, needle))
        })
        .map(|(position, item)| item.search_id(position))
        .collect();

    debug!(
        query = query.as_str().unwrap_or_default(),
        total = dataset.len(),
        matched = ids.len(),
        "filtered dataset"
    );

    ids
}

/// Filter and keep track of whether a query was present
pub fn search<T: Searchable>(dataset: &[T], query: &SearchQuery) -> SearchResults<T::Id> {
    SearchResults {
        query_present: query.is_present(),
        matches: filter(dataset, query),
    }
}
