//! Learner schema.

use serde::{Deserialize, Serialize};

use super::fields::Fields;
use super::{RawFields, Schema, ValidationError};

/// Input for registering a learner.
///
/// `email` is not format-checked here; uniqueness is enforced in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerCreate {
    pub name: String,
    pub email: String,
}

impl Schema for LearnerCreate {
    fn construct(fields: &RawFields) -> Result<Self, ValidationError> {
        let f = Fields::new(fields);
        Ok(Self {
            name: f.text("name")?,
            email: f.text("email")?,
        })
    }
}
