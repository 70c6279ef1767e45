//! Per-field facet configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Configuration for one facet field.
///
/// Loaded once at startup and never mutated while rendering. Overrides
/// (`component`, `presenter`, `item_presenter`) name types registered with
/// the render layer; an unregistered name makes rendering that field fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Unique key of this field within the registry.
    pub key: String,

    /// Display label. Falls back to the humanized field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Legacy partial name used by older templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial: Option<String>,

    /// Whether this is a pivot (hierarchical) facet.
    #[serde(default)]
    pub pivot: bool,

    /// Whether the facet starts collapsed when not active.
    #[serde(default = "default_true")]
    pub collapse: bool,

    /// Whether the facet is rendered at all.
    #[serde(default = "default_true")]
    pub show: bool,

    /// Maximum number of values to display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Component override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentOverride>,

    /// Registered name of the field presenter to use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presenter: Option<String>,

    /// Registered name of the item presenter to use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_presenter: Option<String>,

    /// Query facets: facet value to label and filter query.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub query: BTreeMap<String, QueryFacet>,
}

fn default_true() -> bool {
    true
}

impl FieldConfig {
    /// Create a configuration with defaults for the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: None,
            partial: None,
            pivot: false,
            collapse: default_true(),
            show: default_true(),
            limit: None,
            component: None,
            presenter: None,
            item_presenter: None,
            query: BTreeMap::new(),
        }
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the legacy partial name.
    pub fn with_partial(mut self, partial: impl Into<String>) -> Self {
        self.partial = Some(partial.into());
        self
    }

    /// Mark the field as a pivot facet.
    pub fn with_pivot(mut self, pivot: bool) -> Self {
        self.pivot = pivot;
        self
    }

    /// Set the collapse flag.
    pub fn with_collapse(mut self, collapse: bool) -> Self {
        self.collapse = collapse;
        self
    }

    /// Set whether the field is shown.
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Limit the number of displayed values.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the component override.
    pub fn with_component(mut self, component: ComponentOverride) -> Self {
        self.component = Some(component);
        self
    }

    /// Set the presenter override by registered name.
    pub fn with_presenter(mut self, name: impl Into<String>) -> Self {
        self.presenter = Some(name.into());
        self
    }

    /// Set the item presenter override by registered name.
    pub fn with_item_presenter(mut self, name: impl Into<String>) -> Self {
        self.item_presenter = Some(name.into());
        self
    }

    /// Add a query facet entry.
    pub fn with_query(mut self, value: impl Into<String>, query: QueryFacet) -> Self {
        self.query.insert(value.into(), query);
        self
    }
}

/// The component override slot of a [`FieldConfig`].
///
/// In TOML this is either a boolean or a registered component name:
///
/// ```toml
/// component = "RangeComponent"
/// # or, deprecated:
/// component = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComponentOverride {
    /// `false` means "use the default"; `true` is accepted for older
    /// configurations and also means "use the default", with a deprecation.
    Flag(bool),
    /// A registered component name.
    Named(String),
}

impl ComponentOverride {
    /// Create a named override.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Returns the component name when one is actually configured.
    ///
    /// Blank names count as absent.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) if !name.trim().is_empty() => Some(name),
            _ => None,
        }
    }

    /// Returns `true` for the deprecated literal `true`.
    pub fn is_legacy_flag(&self) -> bool {
        matches!(self, Self::Flag(true))
    }
}

/// A query facet entry: a canned filter with its own label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFacet {
    /// Display label for this value.
    pub label: String,

    /// Filter query sent to the backend.
    pub fq: String,
}

impl QueryFacet {
    /// Create a query facet entry.
    pub fn new(label: impl Into<String>, fq: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fq: fq.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
