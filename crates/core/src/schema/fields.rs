//! Typed field extraction over a raw JSON object.

use std::fmt;

use serde_json::Value;

use super::RawFields;
use crate::types::DbId;

/// Marker used in [`ValidationError::found`] when a mandatory field is absent.
pub const MISSING: &str = "missing";

/// Primitive type a schema field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Integer,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => f.write_str("text"),
            FieldType::Integer => f.write_str("integer"),
        }
    }
}

/// A field was missing or carried the wrong primitive type.
///
/// This is the only error a schema produces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field `{field}` expected {expected}, found {found}")]
pub struct ValidationError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Type the schema declares for the field.
    pub expected: FieldType,
    /// `"missing"`, or the JSON kind of the value that was supplied.
    pub found: &'static str,
}

impl ValidationError {
    fn missing(field: &'static str, expected: FieldType) -> Self {
        Self {
            field,
            expected,
            found: MISSING,
        }
    }

    fn mismatch(field: &'static str, expected: FieldType, value: &Value) -> Self {
        Self {
            field,
            expected,
            found: kind_of(value),
        }
    }
}

/// Human-readable JSON kind, used for error reporting only.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() => "integer",
        // Only u64 values above i64::MAX; numbers below i64::MIN parse as f64.
        Value::Number(n) if n.is_u64() => "integer out of range",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read-only view over raw fields with per-type accessors.
///
/// Mandatory accessors treat an explicit `null` as a type mismatch; optional
/// accessors treat `null` the same as an absent key.
pub(crate) struct Fields<'a> {
    raw: &'a RawFields,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(raw: &'a RawFields) -> Self {
        Self { raw }
    }

    pub(crate) fn text(&self, name: &'static str) -> Result<String, ValidationError> {
        match self.raw.get(name) {
            None => Err(ValidationError::missing(name, FieldType::Text)),
            Some(value) => as_text(name, value),
        }
    }

    pub(crate) fn text_or(
        &self,
        name: &'static str,
        default: &str,
    ) -> Result<String, ValidationError> {
        match self.raw.get(name) {
            None | Some(Value::Null) => Ok(default.to_string()),
            Some(value) => as_text(name, value),
        }
    }

    pub(crate) fn integer(&self, name: &'static str) -> Result<DbId, ValidationError> {
        match self.raw.get(name) {
            None => Err(ValidationError::missing(name, FieldType::Integer)),
            Some(value) => as_integer(name, value),
        }
    }

    pub(crate) fn optional_integer(
        &self,
        name: &'static str,
    ) -> Result<Option<DbId>, ValidationError> {
        match self.raw.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => as_integer(name, value).map(Some),
        }
    }
}

fn as_text(name: &'static str, value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(ValidationError::mismatch(name, FieldType::Text, other)),
    }
}

fn as_integer(name: &'static str, value: &Value) -> Result<DbId, ValidationError> {
    value
        .as_i64()
        .ok_or_else(|| ValidationError::mismatch(name, FieldType::Integer, value))
}
