//! Location form (Create / Edit).

mod view;
mod view_model;

pub use view::LocationForm;
pub use view_model::LocationFormViewModel;
