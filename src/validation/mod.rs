//! Validation of quote requests.

mod validate;

pub use validate::{validate_other_line, validate_request, validate_wall_line, ValidationResult};
