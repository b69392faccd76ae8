//! URL state module
//!
//! Encodes pagination, classification and search selections into query
//! parameters and decodes them back, plus the route paths the pages use.
//!
//! # Query Parameters
//!
//! | Parameter        | Values                              | Default |
//! |------------------|-------------------------------------|---------|
//! | `page`           | positive integer                    | `1`     |
//! | `rows`           | `5`, `10`, `25`                     | `10`    |
//! | `classification` | a non-fallback bucket token         | absent  |
//! | `q`              | free text                           | absent  |
//!
//! Malformed numbers are errors; unknown classification tokens decode to
//! "no selection".

mod codec;
mod routes;
mod types;

pub use codec::{
    decode, decode_classification, decode_query, decode_url, decode_with, encode, encode_query,
    parse_query,
};
pub use routes::{
    classification_path, classification_paths, compounds_path, element_path, select_classification,
    Navigation,
};
pub use types::{UrlState, CLASSIFICATION_PARAM, PAGE_PARAM, ROWS_PARAM, SEARCH_PARAM};

#[cfg(test)]
mod tests;
