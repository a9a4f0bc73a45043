//! Add Payment form. Create-only: recorded payments are never edited.

mod view;
mod view_model;

pub use view::PaymentForm;
pub use view_model::PaymentFormViewModel;
