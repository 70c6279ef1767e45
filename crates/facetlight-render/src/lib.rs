//! # facetlight-render
//!
//! Facet and spellcheck presentation for Facetlight.
//!
//! This crate decides *which* component renders a facet field and *with
//! what* data. Query-state mutation (building hrefs) is delegated to a
//! host-supplied [`SearchState`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    facetlight-render                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderDispatcher                                           │
//! │  ├── FieldConfigLookup   (facetlight-core registry)         │
//! │  ├── PresenterFactory    (field + item presenters)          │
//! │  └── ComponentRegistry   (FacetFieldListComponent, ...)     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  SpellcheckComponent     (independent leaf)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  LegacyFacetHelpers      (deprecated adapter)               │
//! │  Diagnostics             (deprecation side channel)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use facetlight_render::{RenderContext, RenderDispatcher};
//!
//! let dispatcher = RenderDispatcher::new(registry);
//! let ctx = RenderContext::new(search_state);
//!
//! if let Some(fragment) = dispatcher.render_facet(&response, &ctx, "format", true)? {
//!     body.push_str(fragment.as_str());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod component;
pub mod context;
pub mod diagnostics;
pub mod dispatcher;
pub mod legacy;
pub mod presenter;
pub mod spellcheck;

pub use component::{ComponentRegistry, FacetComponent, FacetFieldListComponent, Fragment};
pub use context::{PathOptions, RenderContext, SearchState};
pub use diagnostics::{Deprecation, DiagnosticSink, Diagnostics, RecordingSink};
pub use dispatcher::RenderDispatcher;
pub use legacy::LegacyFacetHelpers;
pub use presenter::{
    DefaultFieldPresenter, FacetItemPresenter, FieldPresenter, ItemPresenter, PresenterFactory,
    PresenterParts,
};
pub use spellcheck::{SpellcheckComponent, show_spellcheck_suggestions};

pub use facetlight_core::{Error, Result};
