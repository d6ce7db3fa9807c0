//! Form-field state.
//!
//! One generic field abstraction serves every form in the console: a
//! value, a touched flag, and a validation predicate. State changes go
//! through a closed action type, so there is exactly one reducer for
//! all fields and no stringly-typed payloads.

mod field;
pub mod validators;

pub use field::{FieldAction, FormField, Validator};
