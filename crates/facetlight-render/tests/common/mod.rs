//! Common test utilities for Facetlight integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use facetlight_core::{ConfigRegistry, DisplayConfig, FieldConfig, SearchResponse};
use facetlight_render::{
    Diagnostics, PathOptions, RecordingSink, RenderContext, RenderDispatcher, SearchState,
};

/// Display configuration shared by most tests.
pub const CATALOG_TOML: &str = r#"
spell_max = 10

[[facet_fields]]
key = "format"
label = "Format"

[[facet_fields]]
key = "language_facet"
label = "Language"
limit = 2

[[facet_fields]]
key = "pub_date"
label = "Publication Year"
collapse = false

[facet_fields.query.years_5]
label = "Within 5 Years"
fq = "pub_date:[2021 TO *]"

[[facet_fields]]
key = "lc_1letter"
show = false
"#;

/// Search response shared by most tests.
pub const RESPONSE_JSON: &str = r#"{
    "total": 42,
    "spelling": { "words": ["history"] },
    "facet_fields": [
        { "name": "format", "items": [
            { "value": "Book", "hits": 30 },
            { "value": "Map", "hits": 12 }
        ]},
        { "name": "language_facet", "items": [
            { "value": "eng", "hits": 20, "label": "English" },
            { "value": "fre", "hits": 15, "label": "French" },
            { "value": "ger", "hits": 7, "label": "German" }
        ]},
        { "name": "pub_date", "items": ["years_5"] },
        { "name": "lc_1letter", "items": [{ "value": "P", "hits": 4 }] },
        { "name": "subject_geo", "items": [] }
    ]
}"#;

/// Search state backed by a map of selected values, building query-string
/// links the way a host application would.
#[derive(Debug, Default)]
pub struct QueryStringState {
    /// Selected values per field key.
    pub selected: BTreeMap<String, Vec<String>>,
}

impl QueryStringState {
    /// Select a value.
    pub fn select(mut self, key: &str, value: &str) -> Self {
        self.selected
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
        self
    }

    /// Wrap into a render context.
    pub fn into_context(self) -> RenderContext {
        RenderContext::new(Arc::new(self))
    }

    fn query_string(path_options: &PathOptions) -> String {
        path_options
            .iter()
            .map(|(k, v)| format!("&{k}={v}"))
            .collect()
    }
}

impl SearchState for QueryStringState {
    fn facet_values(&self, config: &FieldConfig) -> Vec<String> {
        self.selected.get(&config.key).cloned().unwrap_or_default()
    }

    fn add_facet_href(&self, config: &FieldConfig, value: &str, path_options: &PathOptions) -> String {
        format!(
            "/catalog?f[{}][]={value}{}",
            config.key,
            Self::query_string(path_options)
        )
    }

    fn remove_facet_href(
        &self,
        config: &FieldConfig,
        value: &str,
        path_options: &PathOptions,
    ) -> String {
        format!(
            "/catalog?remove[{}]={value}{}",
            config.key,
            Self::query_string(path_options)
        )
    }

    fn link_to_query(&self, query: &str) -> String {
        format!("/catalog?q={query}")
    }
}

/// Everything a rendering test needs.
pub struct TestHarness {
    /// Dispatcher built from [`CATALOG_TOML`].
    pub dispatcher: RenderDispatcher,
    /// Records deprecations reported by the dispatcher.
    pub sink: Arc<RecordingSink>,
    /// Parsed [`RESPONSE_JSON`].
    pub response: SearchResponse,
}

impl TestHarness {
    /// Build the harness from the shared configuration and response.
    pub fn new() -> Self {
        Self::with_config(DisplayConfig::from_toml_str(CATALOG_TOML).expect("valid config"))
    }

    /// Build the harness from a custom configuration.
    pub fn with_config(config: DisplayConfig) -> Self {
        let sink = Arc::new(RecordingSink::new());
        let dispatcher = RenderDispatcher::new(ConfigRegistry::new(config).into_shared())
            .with_diagnostics(Diagnostics::with_sink(sink.clone()));
        let response = SearchResponse::from_json(RESPONSE_JSON).expect("valid response");
        Self {
            dispatcher,
            sink,
            response,
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
