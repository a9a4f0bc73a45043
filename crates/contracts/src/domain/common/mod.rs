//! Pieces shared by every entity module.

/// Message shown by every form when a required field is missing. The forms
/// deliberately report one fixed message rather than a per-field one.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Minimal (id, display-name) projection of a collection, used only to
/// populate a selector. Implemented by the drop-list types and by the full
/// records that double as pick-lists.
pub trait PickOption {
    fn option_id(&self) -> i64;
    fn option_label(&self) -> &str;
}
