// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Periodic Explorer
//!
//! The state engine behind a periodic table browser: which page buttons to
//! show, which page to land on after a page-size change, which elements and
//! compounds match a search, which classification bucket an element belongs
//! to, and how all of that round-trips through a URL query string.
//!
//! ## Features
//!
//! - **Page Windows**: Boundary pages, siblings and collapsed ellipses
//! - **Page-Size Changes**: Keep the first visible row on screen
//! - **Search**: Case-insensitive substring match over several fields
//! - **Classifications**: Prefix resolution of dataset category codes
//! - **URL State**: Lossless encode/decode of page, rows, bucket and query
//!
//! ## Quick Start
//!
//! ```rust
//! use periodic_explorer::pagination::{compute_window, PageToken};
//! use periodic_explorer::url_state::{decode_query, encode_query};
//!
//! let window = compute_window(6, 12, 1);
//! assert_eq!(window[1], PageToken::Ellipsis);
//!
//! let state = decode_query("?page=3&rows=25&classification=noble-gas").unwrap();
//! assert_eq!(encode_query(&state), "classification=noble-gas&page=3&rows=25");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       URL State Codec                           │
//! │   page · rows · classification · q  ⇄  query string / routes    │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌────────────┬─────────────────┴──┬────────────────┬──────────────┐
//! │ Pagination │      Search        │ Classification │   Dataset    │
//! ├────────────┼────────────────────┼────────────────┼──────────────┤
//! │ Window     │ Element fields     │ Canonical forms│ Elements     │
//! │ Resize     │ Compound fields    │ Prefix resolve │ Compounds    │
//! │ Page range │ Match overlay      │ Legend toggle  │ JSON loader  │
//! └────────────┴────────────────────┴────────────────┴──────────────┘
//!                                │
//!               ┌────────────────┴────────────────┐
//!               │  Periodic grid · Compound list  │
//!               └─────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the explorer
pub mod error;

/// Common types and type aliases
pub mod types;

/// Classification buckets and category resolution
pub mod classification;

/// Page windows and page-size transitions
pub mod pagination;

/// Multi-field search
pub mod search;

/// Element and compound records
pub mod dataset;

/// Query parameter codec and routes
pub mod url_state;

/// Periodic grid with overlays
pub mod grid;

/// Paginated compound listing
pub mod listing;

/// Explorer configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use classification::{Classification, ClassificationSelection};
pub use config::{load_config, load_config_from_str, ExplorerConfig};
pub use dataset::{load_dataset, Dataset, Element};
pub use pagination::{compute_window, resolve_page, PageToken, RowsPerPage};
pub use search::{SearchQuery, Searchable};
pub use url_state::{decode, encode, UrlState};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
