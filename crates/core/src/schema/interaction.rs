//! Interaction log schema.
//!
//! An interaction log records one learner action against one item. Both ids
//! are checked for type only; `0` passes here and is rejected by the foreign
//! keys in storage.

use serde::{Deserialize, Serialize};

use super::fields::Fields;
use super::{RawFields, Schema, ValidationError};
use crate::types::DbId;

/// Input for recording an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionLogCreate {
    pub learner_id: DbId,
    pub item_id: DbId,
    /// Free-text category, e.g. `"attempt"`.
    pub kind: String,
}

impl Schema for InteractionLogCreate {
    fn construct(fields: &RawFields) -> Result<Self, ValidationError> {
        let f = Fields::new(fields);
        Ok(Self {
            learner_id: f.integer("learner_id")?,
            item_id: f.integer("item_id")?,
            kind: f.text("kind")?,
        })
    }
}
