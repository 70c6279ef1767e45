//! Configuration files through to rendering.

use std::io::Write;

use facetlight_core::{ConfigRegistry, DisplayConfig, FieldConfigLookup};
use facetlight_render::{LegacyFacetHelpers, PathOptions, RenderDispatcher};

use crate::common::{CATALOG_TOML, QueryStringState, TestHarness};

#[test]
fn test_load_config_file_and_render() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG_TOML.as_bytes()).unwrap();

    let config = DisplayConfig::load(file.path()).unwrap();
    let registry = ConfigRegistry::new(config).into_shared();
    assert_eq!(registry.spell_max(), 10);
    assert_eq!(
        registry.keys().collect::<Vec<_>>(),
        ["format", "language_facet", "pub_date", "lc_1letter"]
    );

    let dispatcher = RenderDispatcher::new(registry);
    let harness = TestHarness::new();
    let ctx = QueryStringState::default().into_context();
    let html = dispatcher
        .render_facet(&harness.response, &ctx, "format", true)
        .unwrap();
    assert!(html.is_some());
}

#[test]
#[allow(deprecated)]
fn test_legacy_helpers_report_deprecations() {
    let harness = TestHarness::new();
    let ctx = QueryStringState::default()
        .select("format", "Book")
        .into_context();
    let helpers = LegacyFacetHelpers::new(&harness.dispatcher, &ctx);

    let mut options = PathOptions::new();
    options.insert("per_page".to_string(), "20".to_string());

    assert_eq!(
        helpers
            .path_for_facet("format", &"Map".into(), &options)
            .unwrap(),
        "/catalog?f[format][]=Map&per_page=20"
    );
    assert_eq!(helpers.facet_partial_name("format").unwrap(), "facet_limit");
    assert!(helpers.facet_field_in_params("format").unwrap());

    let subjects: Vec<String> = harness
        .sink
        .entries()
        .into_iter()
        .map(|d| d.subject)
        .collect();
    assert_eq!(subjects, ["path_for_facet", "facet_partial_name"]);
}
