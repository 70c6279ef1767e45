//! Per-request rendering context.
//!
//! The context carries the host's [`SearchState`] (which knows the active
//! query and how to build links from it) and the name of the action being
//! served. It lives for one request.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use facetlight_core::FieldConfig;

/// Extra URL parameters passed through to link building.
pub type PathOptions = BTreeMap<String, String>;

/// The current search, as seen by the presentation layer.
///
/// Implemented by the host application. Link building lives here because
/// it depends on routing and on the full query, neither of which this crate
/// owns.
pub trait SearchState: Send + Sync {
    /// Values currently selected for a facet field.
    fn facet_values(&self, config: &FieldConfig) -> Vec<String>;

    /// Whether the field is constrained by the active query.
    fn has_facet(&self, config: &FieldConfig) -> bool {
        !self.facet_values(config).is_empty()
    }

    /// Whether a specific value is selected for the field.
    fn has_facet_value(&self, config: &FieldConfig, value: &str) -> bool {
        self.facet_values(config).iter().any(|v| v == value)
    }

    /// Link that adds a facet value to the current search.
    fn add_facet_href(&self, config: &FieldConfig, value: &str, path_options: &PathOptions)
    -> String;

    /// Link that removes a facet value from the current search.
    fn remove_facet_href(
        &self,
        config: &FieldConfig,
        value: &str,
        path_options: &PathOptions,
    ) -> String;

    /// Link that re-issues the search with `query` in place of the original.
    fn link_to_query(&self, query: &str) -> String;
}

/// Name of the action that renders a single expanded facet.
pub const FACET_ACTION: &str = "facet";

/// Rendering context for one request.
#[derive(Clone)]
pub struct RenderContext {
    search_state: Arc<dyn SearchState>,
    action: Option<String>,
}

impl RenderContext {
    /// Create a context for the given search state.
    pub fn new(search_state: Arc<dyn SearchState>) -> Self {
        Self {
            search_state,
            action: None,
        }
    }

    /// Set the action being served (e.g. `"index"` or `"facet"`).
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// The host's search state.
    pub fn search_state(&self) -> &dyn SearchState {
        self.search_state.as_ref()
    }

    /// The action being served, if known.
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Returns `true` when serving the single-facet expansion view.
    pub fn is_facet_action(&self) -> bool {
        self.action() == Some(FACET_ACTION)
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}


// ============================================================================
// Tests
// ============================================================================
