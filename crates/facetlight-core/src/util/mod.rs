//! Utility modules.
//!
//! - [`text`]: Label humanization, id parameterization, and HTML escaping

pub mod text;

pub use text::{html_escape, humanize, parameterize};
