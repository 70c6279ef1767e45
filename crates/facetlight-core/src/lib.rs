//! Facetlight Core: configuration, response model, and errors.
//!
//! This crate holds everything the presentation layer reads but never
//! mutates during a render: the facet field registry, the process-wide
//! display configuration, and the search response as delivered by the
//! backend. It has no internal Facetlight dependencies.
//!
//! # Modules
//!
//! - [`config`]: Field configuration, nested config containers, and the registry
//! - [`error`]: Error types and Result alias
//! - [`response`]: Search response, facet data, and spelling suggestions
//! - [`util`]: Text helpers (humanize, parameterize, HTML escaping)
//!
//! # Lifecycle
//!
//! ```rust
//! use facetlight_core::{ConfigRegistry, DisplayConfig, FieldConfig};
//!
//! let mut config = DisplayConfig::default();
//! config.add_facet_field(FieldConfig::new("format").with_label("Format"));
//!
//! // Built once at startup, shared read-only afterwards.
//! let registry = ConfigRegistry::new(config).into_shared();
//! assert_eq!(registry.get("format").unwrap().label.as_deref(), Some("Format"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod response;
pub mod util;

// Re-export key types at crate root for convenience
pub use config::{
    ComponentOverride, ConfigRegistry, DisplayConfig, FieldConfig, FieldConfigLookup,
    NestedConfig, QueryFacet,
};
pub use error::{Error, Result};
pub use response::{FacetFieldData, FacetItem, FacetValue, SearchResponse, Spelling};
