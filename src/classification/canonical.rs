//! Canonical forms of category names
//!
//! The bucket list uses spaced names ("Noble Gas"), URLs use hyphenated
//! tokens ("noble-gas") and the dataset's `category_code` field uses
//! underscores ("noble_gas").

/// Lowercase a category name and join its words with `-`
///
/// Hyphens already inside a word are kept, so "Post-Transition Metal"
/// becomes `post-transition-metal`. An empty name yields an empty token.
pub fn to_token(category: &str) -> String {
    join_words(category, '-', |c| c.is_whitespace())
}

/// Lowercase a category name and join its words with `_`
///
/// Both whitespace and hyphens separate words here, matching the
/// underscore-only form of dataset category codes.
pub fn to_snake(category: &str) -> String {
    join_words(category, '_', |c| c.is_whitespace() || c == '-')
}

fn join_words(category: &str, separator: char, is_break: impl Fn(char) -> bool) -> String {
    let lower = category.to_lowercase();
    let mut out = String::with_capacity(lower.len());

    for word in lower.split(is_break).filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(separator);
        }
        out.push_str(word);
    }

    out
}
