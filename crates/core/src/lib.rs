//! Domain core for the learning backend.
//!
//! Holds the shared id/timestamp types, the domain error type, and the
//! entity schemas that gate raw input before it reaches persistence.

pub mod error;
pub mod paging;
pub mod schema;
pub mod types;
