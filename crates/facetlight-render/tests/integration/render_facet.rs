//! Facet rendering through the dispatcher.

use facetlight_core::{ComponentOverride, DisplayConfig, Error, FieldConfig};
use facetlight_render::{FacetComponent, FieldPresenter, Fragment};

use crate::common::{QueryStringState, TestHarness};

// ============================================================================
// Layout and collapse
// ============================================================================

#[test]
fn test_inactive_field_renders_collapsed() {
    let harness = TestHarness::new();
    let ctx = QueryStringState::default().into_context();

    let html = harness
        .dispatcher
        .render_facet(&harness.response, &ctx, "format", true)
        .unwrap()
        .unwrap();
    let html = html.as_str();
    assert!(html.contains(r#"<div class="facet-limit" id="facet-format">"#));
    assert!(html.contains(r#"class="facet-toggle collapsed""#));
    assert!(html.contains(r#"href="/catalog?f[format][]=Book""#));
    assert!(html.contains(r#"<span class="facet-count">30</span>"#));
}

#[test]
fn test_active_field_renders_expanded() {
    let harness = TestHarness::new();
    let ctx = QueryStringState::default()
        .select("format", "Book")
        .into_context();

    let html = harness
        .dispatcher
        .render_facet(&harness.response, &ctx, "format", true)
        .unwrap()
        .unwrap();
    let html = html.as_str();
    assert!(html.contains("facet-limit facet-active"));
    assert!(html.contains("collapse show"));
    assert!(html.contains(r#"<span class="selected">Book</span>"#));
    assert!(html.contains(r#"href="/catalog?remove[format]=Book""#));
}

#[test]
fn test_collapse_false_renders_expanded() {
    let harness = TestHarness::new();
    let ctx = QueryStringState::default().into_context();

    let html = harness
        .dispatcher
        .render_facet(&harness.response, &ctx, "pub_date", true)
        .unwrap()
        .unwrap();
    assert!(html.as_str().contains(r#"aria-expanded="true""#));
}

#[test]
fn test_facet_action_renders_list_only() {
    let harness = TestHarness::new();
    let ctx = QueryStringState::default()
        .into_context()
        .with_action("facet");

    let html = harness
        .dispatcher
        .render_facet(&harness.response, &ctx, "format", true)
        .unwrap()
        .unwrap();
    assert!(html.as_str().starts_with(r#"<ul class="facet-values">"#));
    assert!(!html.as_str().contains("facet-toggle"));
}

// ============================================================================
// Labels and limits
// ============================================================================

#[test]
fn test_limit_and_backend_labels() {
    let harness = TestHarness::new();
    let ctx = QueryStringState::default().into_context();

    let html = harness
        .dispatcher
        .render_facet(&harness.response, &ctx, "language_facet", false)
        .unwrap()
        .unwrap();
    let html = html.as_str();
    assert!(html.contains(">English</a>"));
    assert!(html.contains(">French</a>"));
    assert!(!html.contains("German"));
}

#[test]
fn test_query_facet_label() {
    let harness = TestHarness::new();
    let ctx = QueryStringState::default().into_context();

    let html = harness
        .dispatcher
        .render_facet(&harness.response, &ctx, "pub_date", false)
        .unwrap()
        .unwrap();
    assert!(html.as_str().contains(">Within 5 Years</a>"));
}

// ============================================================================
// Nothing to render
// ============================================================================

#[test]
fn test_hidden_field_renders_nothing() {
    let harness = TestHarness::new();
    let ctx = QueryStringState::default().into_context();
    let result = harness
        .dispatcher
        .render_facet(&harness.response, &ctx, "lc_1letter", true);
    assert!(result.unwrap().is_none());
}

#[test]
fn test_empty_field_renders_nothing() {
    let mut config = DisplayConfig::default();
    config.add_facet_field(FieldConfig::new("subject_geo"));
    let harness = TestHarness::with_config(config);
    let ctx = QueryStringState::default().into_context();

    let result = harness
        .dispatcher
        .render_facet(&harness.response, &ctx, "subject_geo", true);
    assert!(result.unwrap().is_none());
}

#[test]
fn test_unconfigured_field_fails() {
    let harness = TestHarness::new();
    let ctx = QueryStringState::default().into_context();

    let err = harness
        .dispatcher
        .render_facet(&harness.response, &ctx, "subject_geo", true)
        .unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound { ref key } if key == "subject_geo"));
}

#[test]
fn test_default_config_covers_unconfigured_field() {
    let mut config = DisplayConfig::default();
    config.default_facet_config = true;
    let harness = TestHarness::with_config(config);
    let ctx = QueryStringState::default().into_context();

    let html = harness
        .dispatcher
        .render_facet(&harness.response, &ctx, "format", true)
        .unwrap()
        .unwrap();
    assert!(html.as_str().contains(">Format</button>"));
}

// ============================================================================
// Component overrides
// ============================================================================

struct CountOnly;

impl FacetComponent for CountOnly {
    fn name(&self) -> &str {
        "CountOnly"
    }

    fn render(&self, presenter: &dyn FieldPresenter, _layout: bool) -> Fragment {
        Fragment::new(format!("{}: {}", presenter.key(), presenter.items().len()))
    }
}

fn config_with_component(component: ComponentOverride) -> DisplayConfig {
    let mut config = DisplayConfig::default();
    config.add_facet_field(FieldConfig::new("format").with_component(component));
    config
}

#[test]
fn test_named_component() {
    let harness = TestHarness::with_config(config_with_component(ComponentOverride::named(
        "CountOnly",
    )));
    let dispatcher = harness.dispatcher.clone().with_components(std::sync::Arc::new(
        facetlight_render::ComponentRegistry::new().add(CountOnly),
    ));
    let ctx = QueryStringState::default().into_context();

    let html = dispatcher
        .render_facet(&harness.response, &ctx, "format", true)
        .unwrap()
        .unwrap();
    assert_eq!(html.as_str(), "format: 2");
}

#[test]
fn test_unknown_component_fails() {
    let harness =
        TestHarness::with_config(config_with_component(ComponentOverride::named("Missing")));
    let ctx = QueryStringState::default().into_context();

    let err = harness
        .dispatcher
        .render_facet(&harness.response, &ctx, "format", true)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidComponentOverride { ref name, .. } if name == "Missing"));
}

#[test]
fn test_legacy_true_component_warns_and_renders_default() {
    let harness = TestHarness::with_config(config_with_component(ComponentOverride::Flag(true)));
    let ctx = QueryStringState::default().into_context();

    let html = harness
        .dispatcher
        .render_facet(&harness.response, &ctx, "format", true)
        .unwrap()
        .unwrap();
    assert!(html.as_str().contains("facet-values"));
    assert_eq!(harness.sink.len(), 1);
}

// ============================================================================
// Partials
// ============================================================================

#[test]
fn test_render_facet_partials_in_order() {
    let harness = TestHarness::new();
    let ctx = QueryStringState::default().into_context();

    let html = harness
        .dispatcher
        .render_facet_partials(
            &harness.response,
            &ctx,
            &["pub_date", "format", "lc_1letter"],
        )
        .unwrap();
    let html = html.as_str();
    let pub_date = html.find("facet-pub_date").unwrap();
    let format = html.find("facet-format").unwrap();
    assert!(pub_date < format);
    assert!(!html.contains("facet-lc_1letter"));
}

#[test]
fn test_zero_limit_renders_nothing() {
    let mut config = DisplayConfig::default();
    config.add_facet_field(FieldConfig::new("format").with_limit(0));
    let harness = TestHarness::with_config(config);
    let ctx = QueryStringState::default().into_context();

    let result = harness
        .dispatcher
        .render_facet(&harness.response, &ctx, "format", true);
    assert!(result.unwrap().is_none());
}
