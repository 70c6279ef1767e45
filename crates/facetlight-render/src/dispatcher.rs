//! Facet render dispatch.
//!
//! [`RenderDispatcher`] ties the pipeline together:
//!
//! ```text
//! render_facet(field)
//!   → FieldConfigLookup::resolve(field)
//!   → should_render_field(config, data)      (no → Ok(None))
//!   → PresenterFactory::build(config, data, ctx)
//!   → ComponentRegistry::resolve(config)
//!   → component.render(presenter, layout)
//! ```
//!
//! The dispatcher is built once and shared; everything request-specific
//! arrives through its arguments.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use facetlight_core::{FacetFieldData, FieldConfig, FieldConfigLookup, Result, SearchResponse};

use crate::component::{ComponentRegistry, Fragment};
use crate::context::RenderContext;
use crate::diagnostics::Diagnostics;
use crate::presenter::{FieldPresenter, PresenterFactory};
use crate::spellcheck::SpellcheckComponent;

/// Chooses and invokes the component for each facet field.
#[derive(Clone)]
pub struct RenderDispatcher {
    lookup: Arc<dyn FieldConfigLookup>,
    presenters: Arc<PresenterFactory>,
    components: Arc<ComponentRegistry>,
    diagnostics: Diagnostics,
}

impl RenderDispatcher {
    /// Create a dispatcher with the default presenters and components.
    pub fn new(lookup: Arc<dyn FieldConfigLookup>) -> Self {
        Self {
            lookup,
            presenters: Arc::new(PresenterFactory::new()),
            components: Arc::new(ComponentRegistry::new()),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Use a custom presenter factory.
    pub fn with_presenters(mut self, presenters: Arc<PresenterFactory>) -> Self {
        self.presenters = presenters;
        self
    }

    /// Use a custom component registry.
    pub fn with_components(mut self, components: Arc<ComponentRegistry>) -> Self {
        self.components = components;
        self
    }

    /// Report deprecations through the given diagnostics.
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// The configuration lookup.
    pub fn lookup(&self) -> &dyn FieldConfigLookup {
        self.lookup.as_ref()
    }

    /// The presenter factory.
    pub fn presenters(&self) -> &PresenterFactory {
        &self.presenters
    }

    /// The diagnostics channel.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Resolve the configuration for a field.
    pub fn facet_configuration_for_field(&self, field: &str) -> Result<Cow<'_, FieldConfig>> {
        self.lookup.resolve(field)
    }

    /// Whether a field should be rendered at all.
    ///
    /// False when the configuration hides the field or no values remain
    /// once the configured `limit` is applied.
    pub fn should_render_field(config: &FieldConfig, data: &FacetFieldData) -> bool {
        let visible = match config.limit {
            Some(limit) => limit.min(data.items.len()),
            None => data.items.len(),
        };
        config.show && visible > 0
    }

    /// Effective layout flag: always off for the single-facet view.
    pub fn effective_layout(ctx: &RenderContext, layout: bool) -> bool {
        if ctx.is_facet_action() { false } else { layout }
    }

    /// Build the presenter for a field.
    pub fn facet_field_presenter<'a>(
        &self,
        config: Cow<'a, FieldConfig>,
        data: &'a FacetFieldData,
        ctx: &'a RenderContext,
    ) -> Result<Box<dyn FieldPresenter + 'a>> {
        self.presenters.build(config, data, ctx)
    }

    /// Render a facet field by name.
    ///
    /// Returns `Ok(None)` when there is nothing to render: the response has
    /// no data for the field, the field is hidden, or it has no values.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigNotFound`](facetlight_core::Error::ConfigNotFound) if
    ///   the field is not configured and no default is enabled
    /// - [`Error::InvalidComponentOverride`](facetlight_core::Error::InvalidComponentOverride)
    ///   or `InvalidPresenterOverride` for unregistered overrides
    pub fn render_facet(
        &self,
        response: &SearchResponse,
        ctx: &RenderContext,
        field: &str,
        layout: bool,
    ) -> Result<Option<Fragment>> {
        let config = self.lookup.resolve(field)?;
        match response.facet_field(field) {
            Some(data) => self.render_configured(config, data, ctx, layout),
            None => {
                log::debug!("No facet data for '{field}' in response, skipping");
                Ok(None)
            }
        }
    }

    /// Render facet data the caller already holds.
    pub fn render_facet_data(
        &self,
        data: &FacetFieldData,
        ctx: &RenderContext,
        layout: bool,
    ) -> Result<Option<Fragment>> {
        let config = self.lookup.resolve(&data.name)?;
        self.render_configured(config, data, ctx, layout)
    }

    /// Render several fields with layout and concatenate the results.
    ///
    /// Fields with nothing to render contribute nothing. The first error
    /// aborts the whole call.
    pub fn render_facet_partials(
        &self,
        response: &SearchResponse,
        ctx: &RenderContext,
        fields: &[&str],
    ) -> Result<Fragment> {
        let mut out = Fragment::default();
        for field in fields {
            if let Some(fragment) = self.render_facet(response, ctx, field, true)? {
                out.push(&fragment);
            }
        }
        Ok(out)
    }

    fn render_configured(
        &self,
        config: Cow<'_, FieldConfig>,
        data: &FacetFieldData,
        ctx: &RenderContext,
        layout: bool,
    ) -> Result<Option<Fragment>> {
        if !Self::should_render_field(&config, data) {
            log::debug!(
                "Skipping facet '{}' (show: {}, items: {})",
                config.key,
                config.show,
                data.items.len()
            );
            return Ok(None);
        }

        // A render that fails on a presenter override reports no deprecations.
        let presenter = self.presenters.build(config, data, ctx)?;
        let component = self
            .components
            .resolve(presenter.config(), &self.diagnostics)?;
        let layout = Self::effective_layout(ctx, layout);

        log::debug!(
            "Rendering facet '{}' with {} (layout: {layout})",
            presenter.key(),
            component.name()
        );
        Ok(Some(component.render(&*presenter, layout)))
    }

    /// Render spelling suggestions for a response.
    ///
    /// `options` defaults to the response's suggested words. Returns `None`
    /// when suggestions should not be shown.
    pub fn render_spellcheck(
        &self,
        response: &SearchResponse,
        ctx: &RenderContext,
        options: Option<Vec<String>>,
    ) -> Option<Fragment> {
        SpellcheckComponent::new(response, options).render(ctx, self.lookup.spell_max())
    }
}

impl fmt::Debug for RenderDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderDispatcher")
            .field("spell_max", &self.lookup.spell_max())
            .field("presenters", &self.presenters)
            .field("components", &self.components)
            .field("diagnostics", &self.diagnostics)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
