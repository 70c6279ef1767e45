//! Facet components and rendered fragments.
//!
//! A component turns a [`FieldPresenter`](crate::FieldPresenter) into
//! markup. Components are registered by name in a [`ComponentRegistry`];
//! a field configuration selects one with `component = "<name>"`.

pub mod facet_list;
pub mod registry;

use std::fmt;

use crate::presenter::FieldPresenter;

pub use facet_list::FacetFieldListComponent;
pub use registry::ComponentRegistry;

/// A rendered piece of markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    /// Wrap already-escaped markup.
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the markup string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append another fragment.
    pub fn push(&mut self, other: &Fragment) {
        self.0.push_str(&other.0);
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Fragment> for Fragment {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        let mut out = Fragment::default();
        for fragment in iter {
            out.push(&fragment);
        }
        out
    }
}

/// Renders a facet field.
pub trait FacetComponent: Send + Sync {
    /// Registered name of the component.
    fn name(&self) -> &str;

    /// Render the field. Without `layout`, only the value list is produced
    /// (no surrounding block, heading, or collapse toggle).
    fn render(&self, presenter: &dyn FieldPresenter, layout: bool) -> Fragment;
}
