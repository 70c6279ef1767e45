//! Facet configuration.
//!
//! - [`field`]: Per-field configuration records
//! - [`nested`]: Ordered containers with a default-value factory
//! - [`display`]: Process-wide display configuration (TOML-loadable)
//! - [`registry`]: Immutable lookup built once from a [`DisplayConfig`]

pub mod display;
pub mod field;
pub mod nested;
pub mod registry;

pub use display::DisplayConfig;
pub use field::{ComponentOverride, FieldConfig, QueryFacet};
pub use nested::NestedConfig;
pub use registry::{ConfigRegistry, FieldConfigLookup};
