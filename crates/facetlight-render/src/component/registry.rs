//! Component registry and override resolution.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use facetlight_core::{Error, FieldConfig, Result};

use crate::component::{FacetComponent, FacetFieldListComponent};
use crate::diagnostics::Diagnostics;

/// Named facet components plus the default.
///
/// # Example
///
/// ```rust,ignore
/// let components = ComponentRegistry::new()
///     .add(RangeComponent::default())
///     .add(PivotComponent::default());
///
/// assert!(components.has_component("RangeComponent"));
/// ```
#[derive(Clone)]
pub struct ComponentRegistry {
    components: HashMap<String, Arc<dyn FacetComponent>>,
    default: Arc<dyn FacetComponent>,
}

impl ComponentRegistry {
    /// Create a registry whose default is [`FacetFieldListComponent`].
    pub fn new() -> Self {
        Self::with_default(FacetFieldListComponent)
    }

    /// Create a registry with a custom default component.
    ///
    /// The default is also registered under its own name.
    pub fn with_default<C: FacetComponent + 'static>(component: C) -> Self {
        let default: Arc<dyn FacetComponent> = Arc::new(component);
        let mut components = HashMap::new();
        components.insert(default.name().to_string(), Arc::clone(&default));
        Self {
            components,
            default,
        }
    }

    /// Register a component under its name.
    #[allow(clippy::should_implement_trait)]
    pub fn add<C: FacetComponent + 'static>(mut self, component: C) -> Self {
        self.components
            .insert(component.name().to_string(), Arc::new(component));
        self
    }

    /// Look up a component by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn FacetComponent>> {
        self.components.get(name).cloned()
    }

    /// Check if a component is registered.
    pub fn has_component(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// The default component.
    pub fn default_component(&self) -> Arc<dyn FacetComponent> {
        Arc::clone(&self.default)
    }

    /// Resolve the component for a field.
    ///
    /// - No override, `false`, or a blank name: the default component.
    /// - Literal `true`: the default component, plus one deprecation notice.
    /// - A name: the registered component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponentOverride`] if the name is not
    /// registered.
    pub fn resolve(
        &self,
        config: &FieldConfig,
        diagnostics: &Diagnostics,
    ) -> Result<Arc<dyn FacetComponent>> {
        let Some(component) = &config.component else {
            return Ok(self.default_component());
        };

        if component.is_legacy_flag() {
            diagnostics.deprecated(
                format!("facet_fields.{}.component", config.key),
                "`component = true` is no longer necessary and will become an error; \
                 remove it to use the default component",
            );
            return Ok(self.default_component());
        }

        match component.name() {
            None => Ok(self.default_component()),
            Some(name) => self
                .get(name)
                .ok_or_else(|| Error::InvalidComponentOverride {
                    key: config.key.clone(),
                    name: name.to_string(),
                }),
        }
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ComponentRegistry")
            .field("components", &names)
            .field("default", &self.default.name())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
