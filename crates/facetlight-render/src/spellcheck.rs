//! Spelling suggestions.

use facetlight_core::SearchResponse;
use facetlight_core::util::html_escape;

use crate::component::Fragment;
use crate::context::RenderContext;

/// Whether spelling suggestions should be shown for a response.
///
/// Suggestions only make sense for searches that found few results, and
/// only when the backend actually returned suggestions. A response without
/// spelling information (not every backend provides one) shows nothing.
pub fn show_spellcheck_suggestions(response: &SearchResponse, spell_max: u64) -> bool {
    response.total <= spell_max
        && response
            .spelling
            .as_ref()
            .is_some_and(|spelling| !spelling.words.is_empty())
}

/// Renders "did you mean" links for a search response.
#[derive(Debug, Clone)]
pub struct SpellcheckComponent<'a> {
    response: &'a SearchResponse,
    options: Vec<String>,
}

impl<'a> SpellcheckComponent<'a> {
    /// Create the component.
    ///
    /// Without explicit `options`, the response's suggested words are used.
    pub fn new(response: &'a SearchResponse, options: Option<Vec<String>>) -> Self {
        let options = options.unwrap_or_else(|| response.spelling_words().to_vec());
        Self { response, options }
    }

    /// Terms that will be offered.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Whether anything will be rendered.
    pub fn should_render(&self, spell_max: u64) -> bool {
        !self.options.is_empty() && self.show_suggestions(spell_max)
    }

    /// See [`show_spellcheck_suggestions`].
    pub fn show_suggestions(&self, spell_max: u64) -> bool {
        show_spellcheck_suggestions(self.response, spell_max)
    }

    /// Render the suggestions, or `None` when there is nothing to suggest.
    pub fn render(&self, ctx: &RenderContext, spell_max: u64) -> Option<Fragment> {
        if !self.should_render(spell_max) {
            log::debug!(
                "Skipping spellcheck (total: {}, options: {})",
                self.response.total,
                self.options.len()
            );
            return None;
        }

        let links: Vec<String> = self
            .options
            .iter()
            .map(|term| {
                let href = ctx.search_state().link_to_query(term);
                format!(
                    r#"<a href="{}">{}</a>"#,
                    html_escape(&href),
                    html_escape(term)
                )
            })
            .collect();

        Some(Fragment::new(format!(
            r#"<div id="spell"><h4 class="suggest"><em>Did you mean to type:</em> {}?</h4></div>"#,
            links.join(" or ")
        )))
    }
}

// ============================================================================
// Tests
// ============================================================================
