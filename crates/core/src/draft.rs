//! The pending new-row form state.
//!
//! A [`Draft`] is a value: edits produce a new draft rather than mutating
//! one shared in place.

use crate::error::CoreError;
use crate::record::FieldSpec;

/// In-progress row the user is composing, one string per editable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    fields: Vec<(&'static str, String)>,
}

impl Draft {
    /// Create a draft with every field of `specs` set to the empty string.
    pub fn empty(specs: &[FieldSpec]) -> Self {
        Self {
            fields: specs.iter().map(|s| (s.name, String::new())).collect(),
        }
    }

    /// Return a new draft with `field` replaced by `value`.
    ///
    /// Any string is accepted, including the empty string.
    pub fn with_field(mut self, field: &str, value: impl Into<String>) -> Result<Self, CoreError> {
        let slot = self
            .fields
            .iter_mut()
            .find(|(name, _)| *name == field)
            .ok_or_else(|| CoreError::UnknownField {
                field: field.to_string(),
            })?;
        slot.1 = value.into();
        Ok(self)
    }

    /// The all-empty draft with the same field set.
    pub fn cleared(&self) -> Self {
        Self {
            fields: self
                .fields
                .iter()
                .map(|(name, _)| (*name, String::new()))
                .collect(),
        }
    }

    /// Current value of `field`, or `None` if the draft has no such field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Whether every field holds a non-empty string.
    ///
    /// Whitespace-only values count as filled in.
    pub fn is_complete(&self) -> bool {
        self.fields.iter().all(|(_, value)| !value.is_empty())
    }

    /// Fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(name, value)| (*name, value.as_str()))
    }
}
