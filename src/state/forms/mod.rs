//! Form domain layer
//!
//! Field value objects and the profile form state container.

mod field;
mod form_state;

pub use field::{FieldValue, FormField};
pub use form_state::{Form, ProfileForm};
