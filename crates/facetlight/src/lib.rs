//! Facetlight facet presentation, umbrella crate.
//!
//! This crate re-exports all Facetlight components for convenience.
//! The `render` feature (on by default) pulls in presenters, components,
//! and the render dispatcher; without it only configuration and response
//! types are available.

pub use facetlight_core as core;

#[cfg(feature = "render")]
pub use facetlight_render as render;

/// The types most integrations need.
pub mod prelude {
    pub use facetlight_core::{
        ConfigRegistry, DisplayConfig, Error, FieldConfig, FieldConfigLookup, Result,
        SearchResponse,
    };

    #[cfg(feature = "render")]
    pub use facetlight_render::{
        Fragment, LegacyFacetHelpers, PathOptions, RenderContext, RenderDispatcher, SearchState,
    };
}
