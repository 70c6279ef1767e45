//! Process-wide display configuration.
//!
//! `DisplayConfig` is the mutable, builder-time form of the configuration.
//! It can be assembled in code or loaded from TOML, and is then frozen into
//! a [`ConfigRegistry`](crate::ConfigRegistry) for the rest of the process
//! lifetime.
//!
//! # TOML format
//!
//! ```toml
//! spell_max = 5
//! default_facet_config = false
//!
//! [[facet_fields]]
//! key = "format"
//! label = "Format"
//!
//! [[facet_fields]]
//! key = "pub_date"
//! component = "RangeComponent"
//! collapse = false
//! ```
//!
//! Facet fields are an array of tables so that display order is the order
//! of declaration. Duplicate keys are rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::field::FieldConfig;
use crate::config::nested::NestedConfig;
use crate::error::{Error, Result};

/// Display configuration for search result pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show spelling suggestions only when the hit count is at most this.
    #[serde(default = "default_spell_max")]
    pub spell_max: u64,

    /// Resolve unknown facet keys to a default configuration instead of
    /// failing with `ConfigNotFound`.
    #[serde(default)]
    pub default_facet_config: bool,

    /// Facet field configurations, in display order.
    #[serde(default, with = "field_list")]
    pub facet_fields: NestedConfig<FieldConfig>,
}

fn default_spell_max() -> u64 {
    5
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            spell_max: default_spell_max(),
            default_facet_config: false,
            facet_fields: NestedConfig::for_fields(),
        }
    }
}

impl DisplayConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)?;
        log::debug!(
            "Loaded display config from {} ({} facet fields)",
            path.display(),
            config.facet_fields.len()
        );
        Ok(config)
    }

    /// Serialize the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Add or replace a facet field configuration.
    pub fn add_facet_field(&mut self, field: FieldConfig) -> &mut Self {
        self.facet_fields.insert(field.key.clone(), field);
        self
    }

    /// Get a facet field configuration, creating a default one if missing.
    pub fn facet_field(&mut self, key: &str) -> &mut FieldConfig {
        self.facet_fields.fetch(key)
    }
}

mod field_list {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::config::field::FieldConfig;
    use crate::config::nested::NestedConfig;

    pub fn serialize<S>(fields: &NestedConfig<FieldConfig>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let list: Vec<&FieldConfig> = fields.values().collect();
        list.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NestedConfig<FieldConfig>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let list = Vec::<FieldConfig>::deserialize(deserializer)?;
        let mut fields = NestedConfig::for_fields();
        for field in list {
            if fields.contains_key(&field.key) {
                return Err(D::Error::custom(format!(
                    "duplicate facet field key: {}",
                    field.key
                )));
            }
            fields.insert(field.key.clone(), field);
        }
        Ok(fields)
    }
}

// ============================================================================
// Tests
// ============================================================================
