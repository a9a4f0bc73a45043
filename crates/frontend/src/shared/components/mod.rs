mod form_controls;
mod page_header;

pub use form_controls::{NumberField, SelectField, TextAreaField, TextField};
pub use page_header::PageHeader;
