//! Form domain layer
//!
//! Type-safe field handling and submission checks for the registration form.

mod field;
mod form_state;
mod validation;

pub use field::FormField;
pub use form_state::*;
pub use validation::{describe as describe_validation_errors, validate};
