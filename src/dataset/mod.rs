//! Dataset module
//!
//! The static, read-only element and compound records the core works on.
//! Loaded once before anything else runs and never mutated afterwards.

mod loader;
mod types;

pub use loader::{load_dataset, BUILTIN_DATASET};
pub use types::{wikipedia_url, Compound, CompoundName, Dataset, Element, WIKIPEDIA_BASE};
