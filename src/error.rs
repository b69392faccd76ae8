//! Error types for Periodic Explorer
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for Periodic Explorer
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Query Parameter Errors
    // ============================================================================
    #[error("Malformed query parameter '{param}': {value:?}")]
    MalformedQueryParameter { param: String, value: String },

    #[error("Rows per page must be one of 5, 10 or 25, got {value}")]
    InvalidRowsPerPage { value: u32 },

    #[error("Query parameter '{param}' was given more than once")]
    RepeatedQueryParameter { param: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("No page contains item {first_index} (candidate pages: 1..={pages})")]
    PageResolution { first_index: u64, pages: u32 },

    // ============================================================================
    // Dataset Errors
    // ============================================================================
    #[error("Dataset error: {message}")]
    Dataset { message: String },

    #[error("Element not found: {name}")]
    ElementNotFound { name: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a malformed query parameter error
    pub fn malformed(param: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedQueryParameter {
            param: param.into(),
            value: value.into(),
        }
    }

    /// Create a repeated query parameter error
    pub fn repeated(param: impl Into<String>) -> Self {
        Self::RepeatedQueryParameter {
            param: param.into(),
        }
    }

    /// Create a dataset error
    pub fn dataset(message: impl Into<String>) -> Self {
        Self::Dataset {
            message: message.into(),
        }
    }

    /// Create an element not found error
    pub fn element_not_found(name: impl Into<String>) -> Self {
        Self::ElementNotFound { name: name.into() }
    }

    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Errors caused by user-supplied input (links, query strings, CLI args)
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::MalformedQueryParameter { .. }
                | Error::InvalidRowsPerPage { .. }
                | Error::RepeatedQueryParameter { .. }
                | Error::ElementNotFound { .. }
                | Error::InvalidUrl(_)
        )
    }

    /// Errors that mean the caller handed inconsistent state to the core
    pub fn is_programming_error(&self) -> bool {
        matches!(self, Error::PageResolution { .. })
    }
}

/// Result type alias for Periodic Explorer
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.with_context(|| message.into())
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Other(format!("{}: {}", f(), e.into())))
    }
}
