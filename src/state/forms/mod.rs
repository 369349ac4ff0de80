//! Form domain layer
//!
//! The patient draft, its field descriptors, and focus handling for the
//! details form.

mod draft;
mod field;
mod form_state;

pub use draft::{DietType, FieldName, FormDraft};
pub use field::{FormField, InputKind};
pub use form_state::{DietForm, Form, SUBMIT_ROW};
