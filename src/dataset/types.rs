//! Element and compound records

use crate::classification::{resolve, ClassificationBucket};
use crate::error::{Error, Result, ResultExt};
use crate::search::{SearchField, Searchable};
use crate::types::{CompoundPosition, ElementNumber};
use serde::{Deserialize, Serialize};
use url::Url;

/// Base URL for compound article links
pub const WIKIPEDIA_BASE: &str = "https://en.wikipedia.org/wiki/";

// ============================================================================
// Element
// ============================================================================

/// A chemical element; identity is its atomic number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub number: ElementNumber,
    #[serde(alias = "name_en")]
    pub name: String,
    pub symbol: String,
    pub atomic_mass: f64,
    /// Snake-case category, possibly with a sub-category suffix
    pub category_code: String,
    /// Column on the periodic grid (1-based)
    pub xpos: u32,
    /// Row on the periodic grid (1-based)
    pub ypos: u32,
    #[serde(default)]
    pub compounds: Vec<Compound>,
}

impl Element {
    /// Lower-cased English name, used in element routes
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn classification(&self) -> &'static ClassificationBucket {
        resolve(&self.category_code)
    }
}

impl Searchable for Element {
    type Id = ElementNumber;

    fn search_id(&self, _position: usize) -> ElementNumber {
        self.number
    }

    // Name, then symbol, then atomic mass as written in decimal
    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![
            SearchField::insensitive(self.name.as_str()),
            SearchField::insensitive(self.symbol.as_str()),
            SearchField::sensitive(self.atomic_mass.to_string()),
        ]
    }
}

// ============================================================================
// Compound
// ============================================================================

/// A compound listed under an element; identity is its list position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compound {
    #[serde(alias = "molecularformula")]
    pub molecular_formula: String,
    #[serde(alias = "allnames", default)]
    pub all_names: Vec<String>,
    /// Article titles; each should match one of `all_names` ignoring case
    #[serde(default)]
    pub articles: Vec<String>,
}

/// A compound name with its article link, if it has one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompoundName {
    pub name: String,
    pub article_url: Option<String>,
}

impl Compound {
    /// The article whose title equals `name` ignoring case
    pub fn article_for(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.articles
            .iter()
            .find(|article| article.to_lowercase() == name)
            .map(String::as_str)
    }

    /// Articles that match none of the names
    pub fn orphan_articles(&self) -> impl Iterator<Item = &str> {
        self.articles
            .iter()
            .filter(|article| {
                let article = article.to_lowercase();
                !self.all_names.iter().any(|n| n.to_lowercase() == article)
            })
            .map(String::as_str)
    }

    /// Every name with its article link
    pub fn linked_names(&self) -> Result<Vec<CompoundName>> {
        self.all_names
            .iter()
            .map(|name| {
                let article_url = self
                    .article_for(name)
                    .map(|article| wikipedia_url(article).map(String::from))
                    .transpose()
                    .with_context(|| format!("Invalid article link for '{name}'"))?;
                Ok(CompoundName {
                    name: name.clone(),
                    article_url,
                })
            })
            .collect()
    }
}

impl Searchable for Compound {
    type Id = CompoundPosition;

    fn search_id(&self, position: usize) -> CompoundPosition {
        position
    }

    fn search_fields(&self) -> Vec<SearchField<'_>> {
        std::iter::once(SearchField::insensitive(self.molecular_formula.as_str()))
            .chain(
                self.all_names
                    .iter()
                    .map(|name| SearchField::insensitive(name.as_str())),
            )
            .collect()
    }
}

/// Article link with spaces replaced by `-`
pub fn wikipedia_url(article: &str) -> Result<Url> {
    let mut url = Url::parse(WIKIPEDIA_BASE)?;
    url.path_segments_mut()
        .map_err(|()| Error::Other(format!("Cannot append to {WIKIPEDIA_BASE}")))?
        .pop_if_empty()
        .push(&article.replace(' ', "-"));
    Ok(url)
}

// ============================================================================
// Dataset
// ============================================================================

/// All elements, in dataset order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    elements: Vec<Element>,
}

impl Dataset {
    /// Wrap already-validated elements
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn by_number(&self, number: ElementNumber) -> Option<&Element> {
        self.elements.iter().find(|e| e.number == number)
    }

    /// Look up an element by its route slug (lower-cased name)
    pub fn by_slug(&self, slug: &str) -> Result<&Element> {
        let slug = slug.to_lowercase();
        self.elements
            .iter()
            .find(|e| e.slug() == slug)
            .ok_or_else(|| Error::element_not_found(slug))
    }
}
