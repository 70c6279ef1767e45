//! Facet field presenters.

use std::borrow::Cow;

use facetlight_core::util::humanize;
use facetlight_core::{FacetFieldData, FacetItem, FieldConfig};

use crate::context::{PathOptions, RenderContext};
use crate::presenter::item::{ItemPresenter, ItemPresenterCtor};

/// Display-ready view of one facet field.
///
/// Components read everything they display through this trait; they never
/// look at configuration or search state directly.
pub trait FieldPresenter {
    /// Configuration of the field.
    fn config(&self) -> &FieldConfig;

    /// Facet data from the response.
    fn data(&self) -> &FacetFieldData;

    /// Field key.
    fn key(&self) -> &str {
        &self.config().key
    }

    /// Heading label.
    fn label(&self) -> String;

    /// Whether the field is constrained by the current search.
    fn active(&self) -> bool;

    /// Whether the field starts collapsed.
    fn collapsed(&self) -> bool;

    /// Values to display.
    fn items(&self) -> &[FacetItem];

    /// Presenter for one of this field's values.
    fn item_presenter<'s>(&'s self, item: &'s FacetItem) -> Box<dyn ItemPresenter + 's>;

    /// Label for a value.
    fn item_label(&self, item: &FacetItem) -> String {
        self.item_presenter(item).label()
    }

    /// Whether a value is selected in the current search.
    fn selected(&self, item: &FacetItem) -> bool {
        self.item_presenter(item).selected()
    }

    /// Link target for a value.
    fn item_href(&self, item: &FacetItem, path_options: &PathOptions) -> String {
        self.item_presenter(item).href(path_options)
    }
}

/// Everything a field presenter constructor receives.
#[derive(Debug)]
pub struct PresenterParts<'a> {
    /// Resolved field configuration.
    pub config: Cow<'a, FieldConfig>,
    /// Facet data from the response.
    pub data: &'a FacetFieldData,
    /// Request context.
    pub ctx: &'a RenderContext,
    /// Item presenter constructor resolved for this field.
    pub item_presenter: ItemPresenterCtor,
}

/// Constructor for a field presenter.
pub type FieldPresenterCtor = for<'a> fn(PresenterParts<'a>) -> Box<dyn FieldPresenter + 'a>;

/// Default field presenter.
#[derive(Debug)]
pub struct DefaultFieldPresenter<'a> {
    config: Cow<'a, FieldConfig>,
    data: &'a FacetFieldData,
    ctx: &'a RenderContext,
    item_ctor: ItemPresenterCtor,
}

impl<'a> DefaultFieldPresenter<'a> {
    /// Create the presenter from its parts.
    pub fn new(parts: PresenterParts<'a>) -> Self {
        Self {
            config: parts.config,
            data: parts.data,
            ctx: parts.ctx,
            item_ctor: parts.item_presenter,
        }
    }
}

/// Default [`FieldPresenterCtor`]: builds a [`DefaultFieldPresenter`].
pub fn default_field_presenter<'a>(parts: PresenterParts<'a>) -> Box<dyn FieldPresenter + 'a> {
    Box::new(DefaultFieldPresenter::new(parts))
}

impl FieldPresenter for DefaultFieldPresenter<'_> {
    fn config(&self) -> &FieldConfig {
        &self.config
    }

    fn data(&self) -> &FacetFieldData {
        self.data
    }

    fn label(&self) -> String {
        match &self.config.label {
            Some(label) => label.clone(),
            None => humanize(&self.data.name),
        }
    }

    fn active(&self) -> bool {
        self.ctx.search_state().has_facet(&self.config)
    }

    // An active field is never collapsed, whatever its configuration says.
    fn collapsed(&self) -> bool {
        !self.active() && self.config.collapse
    }

    fn items(&self) -> &[FacetItem] {
        let items = self.data.items.as_slice();
        match self.config.limit {
            Some(limit) => &items[..limit.min(items.len())],
            None => items,
        }
    }

    fn item_presenter<'s>(&'s self, item: &'s FacetItem) -> Box<dyn ItemPresenter + 's> {
        (self.item_ctor)(item, &self.config, self.ctx)
    }
}

// ============================================================================
// Tests
// ============================================================================
