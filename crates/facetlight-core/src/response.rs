//! Search response model.
//!
//! These types describe what the search backend hands to the presentation
//! layer for a single request. They are read-only from the renderer's point
//! of view and live only as long as the request.
//!
//! # Facet items
//!
//! Backends report facet values either as bare strings or as objects with a
//! hit count and an optional display label. [`FacetItem`] captures both
//! shapes at deserialization time, so nothing downstream needs to probe an
//! item for a `value`.
//!
//! ```rust
//! use facetlight_core::SearchResponse;
//!
//! let json = r#"{
//!     "total": 3,
//!     "facet_fields": [
//!         {"name": "format", "items": ["Book", {"value": "Map", "hits": 2}]}
//!     ]
//! }"#;
//!
//! let response = SearchResponse::from_json(json).unwrap();
//! let format = response.facet_field("format").unwrap();
//! assert_eq!(format.items[0].value(), "Book");
//! assert_eq!(format.items[1].hits(), Some(2));
//! assert!(response.spelling.is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A search response as delivered by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Total number of matching documents.
    #[serde(default)]
    pub total: u64,

    /// Spelling suggestions. Absent for backends without spellcheck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling: Option<Spelling>,

    /// Facet data, in backend order.
    #[serde(default)]
    pub facet_fields: Vec<FacetFieldData>,
}

impl SearchResponse {
    /// Parse a response from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Find facet data by field name.
    pub fn facet_field(&self, name: &str) -> Option<&FacetFieldData> {
        self.facet_fields.iter().find(|f| f.name == name)
    }

    /// Suggested words, or an empty slice when spelling is absent.
    pub fn spelling_words(&self) -> &[String] {
        self.spelling
            .as_ref()
            .map(|s| s.words.as_slice())
            .unwrap_or_default()
    }
}

/// Spelling suggestions attached to a response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spelling {
    /// Suggested alternate query terms, best first.
    #[serde(default)]
    pub words: Vec<String>,
}

impl Spelling {
    /// Create suggestions from a list of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

/// Facet values returned for one field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetFieldData {
    /// Field name as known to the backend.
    pub name: String,

    /// Facet values, in backend order.
    #[serde(default)]
    pub items: Vec<FacetItem>,
}

impl FacetFieldData {
    /// Create facet data for a field.
    pub fn new(name: impl Into<String>, items: Vec<FacetItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// Returns `true` if the backend reported no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single facet value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacetItem {
    /// A bare value with no count or label.
    Raw(String),
    /// A value with a hit count and optional display label.
    Value(FacetValue),
}

impl FacetItem {
    /// The value used for filtering.
    pub fn value(&self) -> &str {
        match self {
            Self::Raw(value) => value,
            Self::Value(v) => &v.value,
        }
    }

    /// Number of matching documents, when the backend reported one.
    pub fn hits(&self) -> Option<u64> {
        match self {
            Self::Raw(_) => None,
            Self::Value(v) => Some(v.hits),
        }
    }

    /// Backend-supplied display label, if distinct from the value.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Raw(_) => None,
            Self::Value(v) => v.label.as_deref(),
        }
    }
}

impl From<&str> for FacetItem {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_string())
    }
}

impl From<FacetValue> for FacetItem {
    fn from(value: FacetValue) -> Self {
        Self::Value(value)
    }
}

/// A counted facet value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    /// Value used for filtering.
    pub value: String,

    /// Number of matching documents.
    #[serde(default)]
    pub hits: u64,

    /// Display label, if distinct from the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FacetValue {
    /// Create a counted value.
    pub fn new(value: impl Into<String>, hits: u64) -> Self {
        Self {
            value: value.into(),
            hits,
            label: None,
        }
    }

    /// Attach a display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
