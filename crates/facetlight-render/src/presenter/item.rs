//! Facet value presenters.

use facetlight_core::{FacetItem, FieldConfig};

use crate::context::{PathOptions, RenderContext};

/// Display-ready view of a single facet value.
pub trait ItemPresenter {
    /// Value used for filtering.
    fn value(&self) -> &str;

    /// Label shown to the user.
    fn label(&self) -> String;

    /// Number of matching documents, if known.
    fn hits(&self) -> Option<u64>;

    /// Whether the value is selected in the current search.
    fn selected(&self) -> bool;

    /// Link target: removes the value when selected, adds it otherwise.
    fn href(&self, path_options: &PathOptions) -> String;
}

/// Constructor for an item presenter.
pub type ItemPresenterCtor =
    for<'a> fn(&'a FacetItem, &'a FieldConfig, &'a RenderContext) -> Box<dyn ItemPresenter + 'a>;

/// Default item presenter.
#[derive(Debug)]
pub struct FacetItemPresenter<'a> {
    item: &'a FacetItem,
    config: &'a FieldConfig,
    ctx: &'a RenderContext,
}

impl<'a> FacetItemPresenter<'a> {
    /// Create a presenter for one value of a configured field.
    pub fn new(item: &'a FacetItem, config: &'a FieldConfig, ctx: &'a RenderContext) -> Self {
        Self { item, config, ctx }
    }
}

/// Default [`ItemPresenterCtor`]: builds a [`FacetItemPresenter`].
pub fn default_item_presenter<'a>(
    item: &'a FacetItem,
    config: &'a FieldConfig,
    ctx: &'a RenderContext,
) -> Box<dyn ItemPresenter + 'a> {
    Box::new(FacetItemPresenter::new(item, config, ctx))
}

impl ItemPresenter for FacetItemPresenter<'_> {
    fn value(&self) -> &str {
        self.item.value()
    }

    /// Query-facet label first, then the backend label, then the raw value.
    fn label(&self) -> String {
        let value = self.item.value();
        if let Some(query) = self.config.query.get(value) {
            return query.label.clone();
        }
        self.item.label().unwrap_or(value).to_string()
    }

    fn hits(&self) -> Option<u64> {
        self.item.hits()
    }

    fn selected(&self) -> bool {
        self.ctx
            .search_state()
            .has_facet_value(self.config, self.item.value())
    }

    fn href(&self, path_options: &PathOptions) -> String {
        let state = self.ctx.search_state();
        if self.selected() {
            state.remove_facet_href(self.config, self.item.value(), path_options)
        } else {
            state.add_facet_href(self.config, self.item.value(), path_options)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
