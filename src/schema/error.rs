//! Validation error types

use super::field::Field;
use serde::Serialize;
use thiserror::Error;

/// A single rule violation, located by field path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{}: {message}", .field_path.join("."))]
pub struct ValidationError {
    pub field_path: Vec<String>,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field_path: vec![field.path().to_string()],
            message: message.into(),
        }
    }

    /// The top-level field this error is attached to
    pub fn field(&self) -> Option<Field> {
        self.field_path.first().and_then(|p| Field::from_path(p))
    }

    pub fn is_for(&self, field: Field) -> bool {
        self.field() == Some(field)
    }
}

/// Ordered set of errors produced by one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{} validation error(s)", .0.len())]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.iter().any(|e| e.is_for(field))
    }

    /// First message attached to `field`, the one shown beneath its input
    pub fn first_message(&self, field: Field) -> Option<&str> {
        self.iter()
            .find(|e| e.is_for(field))
            .map(|e| e.message.as_str())
    }

    /// Fields that carry at least one error, in error order
    pub fn fields(&self) -> Vec<Field> {
        let mut fields = Vec::new();
        for field in self.iter().filter_map(ValidationError::field) {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        fields
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
