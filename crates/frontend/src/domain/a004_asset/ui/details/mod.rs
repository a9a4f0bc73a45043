//! Asset form (Create / Edit), with a category pick-list.

mod view;
mod view_model;

pub use view::AssetForm;
pub use view_model::AssetFormViewModel;
