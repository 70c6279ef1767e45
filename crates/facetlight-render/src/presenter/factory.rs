//! Presenter factory.
//!
//! Field configurations may name a presenter (`presenter = "..."`) and an
//! item presenter (`item_presenter = "..."`). The factory maps those names
//! to constructors registered at startup. Absent or blank names select the
//! defaults; unknown names are an error.
//!
//! ```rust,ignore
//! let factory = PresenterFactory::new()
//!     .register_field_presenter("RangePresenter", range_presenter);
//!
//! let presenter = factory.build(config, &data, &ctx)?;
//! println!("{} (collapsed: {})", presenter.label(), presenter.collapsed());
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use facetlight_core::{Error, FacetFieldData, FacetItem, FieldConfig, Result};

use crate::context::RenderContext;
use crate::presenter::field::{
    FieldPresenter, FieldPresenterCtor, PresenterParts, default_field_presenter,
};
use crate::presenter::item::{ItemPresenter, ItemPresenterCtor, default_item_presenter};

/// Registered name of the default field presenter.
pub const DEFAULT_FIELD_PRESENTER: &str = "FacetFieldPresenter";

/// Registered name of the default item presenter.
pub const DEFAULT_ITEM_PRESENTER: &str = "FacetItemPresenter";

/// Builds presenters, honoring per-field overrides.
#[derive(Clone)]
pub struct PresenterFactory {
    field_presenters: HashMap<String, FieldPresenterCtor>,
    item_presenters: HashMap<String, ItemPresenterCtor>,
}

impl PresenterFactory {
    /// Create a factory with the default presenters registered.
    pub fn new() -> Self {
        Self {
            field_presenters: HashMap::new(),
            item_presenters: HashMap::new(),
        }
        .register_field_presenter(DEFAULT_FIELD_PRESENTER, default_field_presenter)
        .register_item_presenter(DEFAULT_ITEM_PRESENTER, default_item_presenter)
    }

    /// Register a field presenter under a name.
    pub fn register_field_presenter(
        mut self,
        name: impl Into<String>,
        ctor: FieldPresenterCtor,
    ) -> Self {
        self.field_presenters.insert(name.into(), ctor);
        self
    }

    /// Register an item presenter under a name.
    pub fn register_item_presenter(
        mut self,
        name: impl Into<String>,
        ctor: ItemPresenterCtor,
    ) -> Self {
        self.item_presenters.insert(name.into(), ctor);
        self
    }

    /// Check if a field presenter is registered.
    pub fn has_field_presenter(&self, name: &str) -> bool {
        self.field_presenters.contains_key(name)
    }

    /// Check if an item presenter is registered.
    pub fn has_item_presenter(&self, name: &str) -> bool {
        self.item_presenters.contains_key(name)
    }

    fn resolve_field(&self, config: &FieldConfig) -> Result<FieldPresenterCtor> {
        match override_name(config.presenter.as_deref()) {
            None => Ok(default_field_presenter as FieldPresenterCtor),
            Some(name) => self.field_presenters.get(name).copied().ok_or_else(|| {
                Error::InvalidPresenterOverride {
                    key: config.key.clone(),
                    name: name.to_string(),
                }
            }),
        }
    }

    fn resolve_item(&self, config: &FieldConfig) -> Result<ItemPresenterCtor> {
        match override_name(config.item_presenter.as_deref()) {
            None => Ok(default_item_presenter as ItemPresenterCtor),
            Some(name) => self.item_presenters.get(name).copied().ok_or_else(|| {
                Error::InvalidPresenterOverride {
                    key: config.key.clone(),
                    name: name.to_string(),
                }
            }),
        }
    }

    /// Build the presenter for a field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPresenterOverride`] if the configuration names
    /// a presenter or item presenter that is not registered.
    pub fn build<'a>(
        &self,
        config: Cow<'a, FieldConfig>,
        data: &'a FacetFieldData,
        ctx: &'a RenderContext,
    ) -> Result<Box<dyn FieldPresenter + 'a>> {
        let field_ctor = self.resolve_field(&config)?;
        let item_ctor = self.resolve_item(&config)?;
        Ok(field_ctor(PresenterParts {
            config,
            data,
            ctx,
            item_presenter: item_ctor,
        }))
    }

    /// Build the presenter for a single value outside of a field presenter.
    pub fn build_item<'a>(
        &self,
        config: &'a FieldConfig,
        item: &'a FacetItem,
        ctx: &'a RenderContext,
    ) -> Result<Box<dyn ItemPresenter + 'a>> {
        let ctor = self.resolve_item(config)?;
        Ok(ctor(item, config, ctx))
    }
}

fn override_name(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.trim().is_empty())
}

impl Default for PresenterFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PresenterFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<&str> = self.field_presenters.keys().map(String::as_str).collect();
        let mut items: Vec<&str> = self.item_presenters.keys().map(String::as_str).collect();
        fields.sort_unstable();
        items.sort_unstable();
        f.debug_struct("PresenterFactory")
            .field("field_presenters", &fields)
            .field("item_presenters", &items)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
