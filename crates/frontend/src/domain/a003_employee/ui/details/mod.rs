//! Employee form (Create / Edit), with a location pick-list.

mod view;
mod view_model;

pub use view::EmployeeForm;
pub use view_model::EmployeeFormViewModel;
