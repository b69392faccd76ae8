//! Dataset loading and validation
//!
//! Supports the bundled sample dataset (by name) and JSON files (by path).

use super::types::{Dataset, Element};
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Sample dataset embedded in the binary
pub static BUILTIN_DATASET: &str = include_str!("../../data/elements.json");

/// Highest atomic number accepted
const MAX_ELEMENT_NUMBER: u32 = 118;

impl Dataset {
    /// The bundled sample dataset
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_DATASET)
    }

    /// Parse and validate a JSON array of elements
    pub fn from_json_str(json: &str) -> Result<Self> {
        let elements: Vec<Element> = serde_json::from_str(json)?;

        validate_elements(&elements)?;
        Ok(Self::new(elements))
    }

    /// Load and validate a JSON dataset file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        let dataset = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            elements = dataset.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }
}

/// Load from a path, or the bundled dataset when no path is given
pub fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
    match path {
        Some(path) => Dataset::from_file(path),
        None => Dataset::builtin(),
    }
}

/// Validate element records
fn validate_elements(elements: &[Element]) -> Result<()> {
    let mut seen = HashSet::with_capacity(elements.len());

    for element in elements {
        if element.number == 0 || element.number > MAX_ELEMENT_NUMBER {
            return Err(Error::dataset(format!(
                "Element '{}' has atomic number {} outside 1..={MAX_ELEMENT_NUMBER}",
                element.name, element.number
            )));
        }

        if !seen.insert(element.number) {
            return Err(Error::dataset(format!(
                "Duplicate atomic number {}",
                element.number
            )));
        }

        if element.name.trim().is_empty() || element.symbol.trim().is_empty() {
            return Err(Error::dataset(format!(
                "Element {} must have a name and a symbol",
                element.number
            )));
        }

        for (position, compound) in element.compounds.iter().enumerate() {
            for article in compound.orphan_articles() {
                warn!(
                    element = %element.name,
                    compound = position,
                    article,
                    "article matches none of the compound's names"
                );
            }
        }
    }

    Ok(())
}
