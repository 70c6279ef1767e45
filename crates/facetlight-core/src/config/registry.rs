//! Immutable facet configuration registry.
//!
//! The registry is built exactly once from a [`DisplayConfig`] at startup
//! and is read-only afterwards. Share it as `Arc<ConfigRegistry>`; every
//! lookup takes `&self`, so concurrent readers need no locking.

use std::borrow::Cow;
use std::sync::Arc;

use crate::config::display::DisplayConfig;
use crate::config::field::FieldConfig;
use crate::config::nested::NestedConfig;
use crate::error::{Error, Result};

/// Resolves a field name to its configuration.
///
/// Lookup is by exact key; there is no fuzzy matching.
pub trait FieldConfigLookup: Send + Sync {
    /// Resolve the configuration for a field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if no entry matches and no default
    /// configuration is enabled.
    fn resolve(&self, field: &str) -> Result<Cow<'_, FieldConfig>>;

    /// Threshold for showing spelling suggestions.
    fn spell_max(&self) -> u64;
}

/// Frozen facet configuration.
#[derive(Debug)]
pub struct ConfigRegistry {
    facet_fields: NestedConfig<FieldConfig>,
    default_facet_config: bool,
    spell_max: u64,
}

impl ConfigRegistry {
    /// Freeze a display configuration into a registry.
    pub fn new(config: DisplayConfig) -> Self {
        log::debug!(
            "Building config registry: {} facet fields, default config {}",
            config.facet_fields.len(),
            if config.default_facet_config {
                "enabled"
            } else {
                "disabled"
            }
        );
        Self {
            facet_fields: config.facet_fields,
            default_facet_config: config.default_facet_config,
            spell_max: config.spell_max,
        }
    }

    /// Wrap the registry for sharing across threads.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Get a configured field without falling back to a default.
    pub fn get(&self, field: &str) -> Option<&FieldConfig> {
        self.facet_fields.get(field)
    }

    /// Returns `true` if the field has an explicit configuration.
    pub fn contains(&self, field: &str) -> bool {
        self.facet_fields.contains_key(field)
    }

    /// Configured keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.facet_fields.keys()
    }

    /// Configured fields in display order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldConfig> {
        self.facet_fields.values()
    }

    /// Number of configured fields.
    pub fn len(&self) -> usize {
        self.facet_fields.len()
    }

    /// Returns `true` if no fields are configured.
    pub fn is_empty(&self) -> bool {
        self.facet_fields.is_empty()
    }

    /// Whether unknown keys resolve to a default configuration.
    pub fn has_default(&self) -> bool {
        self.default_facet_config
    }
}

impl FieldConfigLookup for ConfigRegistry {
    fn resolve(&self, field: &str) -> Result<Cow<'_, FieldConfig>> {
        if let Some(config) = self.facet_fields.get(field) {
            return Ok(Cow::Borrowed(config));
        }
        if self.default_facet_config {
            log::debug!("No facet config for '{field}', using default");
            return Ok(Cow::Owned(self.facet_fields.default_for(field)));
        }
        Err(Error::config_not_found(field))
    }

    fn spell_max(&self) -> u64 {
        self.spell_max
    }
}

// ============================================================================
// Tests
// ============================================================================
