//! Row structs read back from the database.
//!
//! Input records live in `lms_core::schema`; these types only describe what
//! a stored row looks like.

pub mod interaction;
pub mod item;
pub mod learner;
