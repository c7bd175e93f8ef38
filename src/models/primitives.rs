//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around string identifiers
//! and endpoint configuration so they cannot be mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A strongly-typed product identifier.
///
/// # Example
///
/// ```
/// use shopware_admin::ProductId;
///
/// let id = ProductId::new("0190a8d4c9e37a3e8b4b1c7f1d2e3f40");
/// println!("Product: {}", id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product ID from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the product ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&ProductId> for ProductId {
    fn from(id: &ProductId) -> Self {
        id.clone()
    }
}

/// Base URL of a Shopware instance.
///
/// Trailing slashes are stripped on construction so that API paths can be
/// appended without producing `//`.
///
/// # Example
///
/// ```
/// use shopware_admin::BaseUrl;
///
/// let base = BaseUrl::new("https://shop.example.com/");
/// assert_eq!(base.as_str(), "https://shop.example.com");
/// assert_eq!(base.join("/api/product"), "https://shop.example.com/api/product");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Create a base URL, stripping any trailing `/` characters.
    pub fn new(url: impl Into<String>) -> Self {
        let mut url = url.into();
        let trimmed_len = url.trim_end_matches('/').len();
        url.truncate(trimmed_len);
        Self(url)
    }

    /// Get the normalized URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append an absolute API path (starting with `/`).
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for BaseUrl {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for BaseUrl {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
