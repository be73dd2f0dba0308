//! Entity schemas: the shape/type gate in front of persistence.
//!
//! A schema checks that each declared field is present (when mandatory) and
//! carries the right primitive type, then fills in defaults. It never checks
//! string lengths, numeric ranges, or whether a referenced row exists. Those
//! rules belong to the persistence layer, which may reject a record that a
//! schema accepted.
//!
//! Every schema can be built two ways:
//!
//! - [`Schema::construct`] from a raw JSON object, reporting the first bad
//!   field as a [`ValidationError`]. The HTTP layer uses this path.
//! - `serde::Deserialize`, with the same defaults, for typed callers.

mod fields;
pub mod interaction;
pub mod item;
pub mod learner;

pub use fields::{FieldType, ValidationError};
pub use interaction::InteractionLogCreate;
pub use item::{ItemCreate, ItemUpdate, DEFAULT_ITEM_TYPE};
pub use learner::LearnerCreate;

/// Raw field name -> value mapping as received from a transport.
pub type RawFields = serde_json::Map<String, serde_json::Value>;

/// A validated, immutable record built from raw fields.
pub trait Schema: Sized {
    /// Validate `fields` and build the record.
    ///
    /// Pure: the same input always yields an equal record or the same error.
    /// Fields the schema does not declare are ignored.
    fn construct(fields: &RawFields) -> Result<Self, ValidationError>;
}
