//! Presenters: display-ready views over configuration plus facet data.
//!
//! - [`field`]: [`FieldPresenter`] and the default implementation
//! - [`item`]: [`ItemPresenter`] and the default implementation
//! - [`factory`]: [`PresenterFactory`], resolving presenter overrides by name

pub mod factory;
pub mod field;
pub mod item;

pub use factory::PresenterFactory;
pub use field::{
    DefaultFieldPresenter, FieldPresenter, FieldPresenterCtor, PresenterParts,
    default_field_presenter,
};
pub use item::{FacetItemPresenter, ItemPresenter, ItemPresenterCtor, default_item_presenter};
