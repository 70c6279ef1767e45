//! Deprecated facet helpers.
//!
//! Thin forwards onto [`RenderDispatcher`], the presenters and the
//! [`SearchState`](crate::SearchState). Every deprecated call reports
//! one deprecation through the dispatcher's [`Diagnostics`] and then
//! behaves exactly as before.
//!
//! New code should use presenters directly:
//!
//! | Helper | Replacement |
//! |--------|-------------|
//! | `should_collapse_facet` | `FieldPresenter::collapsed` |
//! | `facet_partial_name` | component selection via `component = "..."` |
//! | `path_for_facet` | `ItemPresenter::href` |
//! | `facet_params` | `SearchState::facet_values` |
//! | `facet_display_value` | `ItemPresenter::label` |
//! | `facet_field_id` | rendered by the component |
//!
//! [`Diagnostics`]: crate::Diagnostics

use facetlight_core::util::parameterize;
use facetlight_core::{FacetItem, FieldConfig, Result};

use crate::context::{PathOptions, RenderContext};
use crate::dispatcher::RenderDispatcher;

/// Default partial for pivot facets.
pub const PIVOT_PARTIAL: &str = "facet_pivot";

/// Default partial for plain facets.
pub const LIMIT_PARTIAL: &str = "facet_limit";

/// Deprecated helper surface, bound to one request.
#[derive(Debug, Clone, Copy)]
pub struct LegacyFacetHelpers<'a> {
    dispatcher: &'a RenderDispatcher,
    ctx: &'a RenderContext,
}

impl<'a> LegacyFacetHelpers<'a> {
    /// Bind the helpers to a dispatcher and request context.
    pub fn new(dispatcher: &'a RenderDispatcher, ctx: &'a RenderContext) -> Self {
        Self { dispatcher, ctx }
    }

    fn deprecated(&self, helper: &str, replacement: &str) {
        self.dispatcher.diagnostics().deprecated(
            helper,
            format!("{helper} is deprecated and will be removed; use {replacement} instead"),
        );
    }

    /// Whether a facet block starts collapsed.
    ///
    /// An active field is never collapsed; otherwise the configured
    /// `collapse` flag decides.
    #[deprecated(note = "use FieldPresenter::collapsed")]
    pub fn should_collapse_facet(&self, config: &FieldConfig) -> bool {
        self.deprecated("should_collapse_facet", "FieldPresenter::collapsed");
        !self.ctx.search_state().has_facet(config) && config.collapse
    }

    /// Name of the partial used to render a field.
    ///
    /// The configured `partial` wins, then [`PIVOT_PARTIAL`] for pivot
    /// facets, then [`LIMIT_PARTIAL`].
    #[deprecated(note = "select a component with `component = \"...\"`")]
    pub fn facet_partial_name(&self, field: &str) -> Result<String> {
        self.deprecated("facet_partial_name", "a component override");
        let config = self.dispatcher.facet_configuration_for_field(field)?;
        let name = match (&config.partial, config.pivot) {
            (Some(partial), _) => partial.clone(),
            (None, true) => PIVOT_PARTIAL.to_string(),
            (None, false) => LIMIT_PARTIAL.to_string(),
        };
        Ok(name)
    }

    /// Link for a facet value.
    #[deprecated(note = "use ItemPresenter::href")]
    pub fn path_for_facet(
        &self,
        field: &str,
        item: &FacetItem,
        path_options: &PathOptions,
    ) -> Result<String> {
        self.deprecated("path_for_facet", "ItemPresenter::href");
        let config = self.dispatcher.facet_configuration_for_field(field)?;
        let presenter = self
            .dispatcher
            .presenters()
            .build_item(&config, item, self.ctx)?;
        Ok(presenter.href(path_options))
    }

    /// Whether the active query constrains `field`.
    pub fn facet_field_in_params(&self, field: &str) -> Result<bool> {
        let config = self.dispatcher.facet_configuration_for_field(field)?;
        Ok(self.ctx.search_state().has_facet(&config))
    }

    /// Values selected for `field` in the active query.
    #[deprecated(note = "use SearchState::facet_values")]
    pub fn facet_params(&self, field: &str) -> Result<Vec<String>> {
        self.deprecated("facet_params", "SearchState::facet_values");
        let config = self.dispatcher.facet_configuration_for_field(field)?;
        Ok(self.ctx.search_state().facet_values(&config))
    }

    /// Display label for a facet value.
    #[deprecated(note = "use ItemPresenter::label")]
    pub fn facet_display_value(&self, field: &str, item: &FacetItem) -> Result<String> {
        self.deprecated("facet_display_value", "ItemPresenter::label");
        let config = self.dispatcher.facet_configuration_for_field(field)?;
        let presenter = self
            .dispatcher
            .presenters()
            .build_item(&config, item, self.ctx)?;
        Ok(presenter.label())
    }

    /// DOM id of a facet block.
    #[deprecated(note = "the id is rendered by the facet component")]
    pub fn facet_field_id(&self, config: &FieldConfig) -> String {
        self.deprecated("facet_field_id", "the facet component");
        format!("facet-{}", parameterize(&config.key))
    }
}

// ============================================================================
// Tests
// ============================================================================
