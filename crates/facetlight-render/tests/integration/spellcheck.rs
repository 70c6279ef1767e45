//! Spelling suggestions through the dispatcher.

use facetlight_core::SearchResponse;
use serde_json::json;

use crate::common::{QueryStringState, TestHarness};

fn response(total: u64, words: &[&str]) -> SearchResponse {
    let value = json!({
        "total": total,
        "spelling": { "words": words },
    });
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_suggestions_for_few_results() {
    let harness = TestHarness::new();
    let ctx = QueryStringState::default().into_context();

    let html = harness
        .dispatcher
        .render_spellcheck(&response(3, &["history"]), &ctx, None)
        .unwrap();
    assert!(html.as_str().contains("Did you mean to type:"));
    assert!(html.as_str().contains(r#"<a href="/catalog?q=history">history</a>"#));
}

#[test]
fn test_no_suggestions_over_spell_max() {
    let harness = TestHarness::new();
    let ctx = QueryStringState::default().into_context();

    // spell_max is 10 in the shared configuration; the shared response has 42 hits.
    assert!(
        harness
            .dispatcher
            .render_spellcheck(&harness.response, &ctx, None)
            .is_none()
    );
}

#[test]
fn test_explicit_options() {
    let harness = TestHarness::new();
    let ctx = QueryStringState::default().into_context();

    let html = harness
        .dispatcher
        .render_spellcheck(
            &response(0, &["history"]),
            &ctx,
            Some(vec!["histology".to_string(), "historic".to_string()]),
        )
        .unwrap();
    assert!(html.as_str().contains(">histology</a> or <a"));
    assert!(!html.as_str().contains(">history<"));
}

#[test]
fn test_missing_spelling_field() {
    let harness = TestHarness::new();
    let ctx = QueryStringState::default().into_context();
    let response = SearchResponse::from_json(r#"{"total": 0}"#).unwrap();

    assert!(
        harness
            .dispatcher
            .render_spellcheck(&response, &ctx, None)
            .is_none()
    );
}
