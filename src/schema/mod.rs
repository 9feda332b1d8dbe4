//! Schema validation for the profile form
//!
//! A fixed table of per-field rules plus one cross-field check (end date may
//! not precede start date). Validation is pure: it reads [`FormValues`] and
//! returns either a [`FormRecord`] or every error found.

mod error;
mod field;
mod locale;
mod record;
mod rules;

pub use error::ValidationErrors;
pub use field::{Field, Role, PREFERENCE_OPTIONS};
pub use locale::{field_label, preference_label, submit_label, Locale};
pub use record::{FormRecord, FormValues};
pub use rules::{Schema, SchemaVariant};
