//! Default facet component: a collapsible block with a list of values.

use facetlight_core::util::{html_escape, parameterize};

use crate::component::{FacetComponent, Fragment};
use crate::context::PathOptions;
use crate::presenter::{FieldPresenter, ItemPresenter};

/// Renders a facet field as a list of linked values.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacetFieldListComponent;

impl FacetFieldListComponent {
    /// Registered name of this component.
    pub const NAME: &'static str = "FacetFieldListComponent";

    fn render_item(out: &mut String, item: &dyn ItemPresenter) {
        let label = html_escape(&item.label());
        let href = html_escape(&item.href(&PathOptions::new()));

        out.push_str(r#"<li><span class="facet-label">"#);
        if item.selected() {
            out.push_str(&format!(
                r#"<span class="selected">{label}</span><a class="remove" href="{href}">[remove]</a>"#
            ));
        } else {
            out.push_str(&format!(
                r#"<a class="facet-select" href="{href}">{label}</a>"#
            ));
        }
        out.push_str("</span>");
        if let Some(hits) = item.hits() {
            out.push_str(&format!(r#"<span class="facet-count">{hits}</span>"#));
        }
        out.push_str("</li>");
    }

    fn render_list(presenter: &dyn FieldPresenter) -> String {
        let mut list = String::from(r#"<ul class="facet-values">"#);
        for item in presenter.items() {
            Self::render_item(&mut list, &*presenter.item_presenter(item));
        }
        list.push_str("</ul>");
        list
    }
}

impl FacetComponent for FacetFieldListComponent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn render(&self, presenter: &dyn FieldPresenter, layout: bool) -> Fragment {
        let list = Self::render_list(presenter);
        if !layout {
            return Fragment::new(list);
        }

        let id = format!("facet-{}", parameterize(presenter.key()));
        let collapsed = presenter.collapsed();
        let active = if presenter.active() { " facet-active" } else { "" };
        let toggle = if collapsed { " collapsed" } else { "" };
        let show = if collapsed { "" } else { " show" };
        let label = html_escape(&presenter.label());

        Fragment::new(format!(
            concat!(
                r#"<div class="facet-limit{active}" id="{id}">"#,
                r#"<h3 class="facet-field-heading">"#,
                r#"<button type="button" class="facet-toggle{toggle}" aria-expanded="{expanded}" aria-controls="{id}-content">{label}</button>"#,
                r#"</h3>"#,
                r#"<div id="{id}-content" class="facet-content collapse{show}">{list}</div>"#,
                r#"</div>"#
            ),
            active = active,
            id = id,
            toggle = toggle,
            expanded = !collapsed,
            label = label,
            show = show,
            list = list,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
