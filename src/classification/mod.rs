//! Classification module
//!
//! Maps raw dataset category codes to one of ten fixed classification
//! buckets and converts bucket names to URL-safe tokens.
//!
//! # Overview
//!
//! - `to_token` / `to_snake` - canonical forms of a human-readable category name
//! - `resolve` - category code to bucket, by prefix, with an explicit fallback
//! - `parse` - URL token back to its bucket
//! - `ClassificationSelection` - the legend's single-choice highlight state

mod canonical;
mod resolver;
mod types;

pub use canonical::{to_snake, to_token};
pub use resolver::{parse, resolve, ClassificationSelection};
pub use types::{Classification, ClassificationBucket, BUCKETS};

#[cfg(test)]
mod tests;
