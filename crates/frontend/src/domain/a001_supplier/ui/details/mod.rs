//! Supplier form (Create / Edit).
//!
//! - view_model.rs: form state and commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::SupplierForm;
pub use view_model::SupplierFormViewModel;
