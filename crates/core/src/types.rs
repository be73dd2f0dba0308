//! Primitive aliases shared by every crate in the workspace.

/// Row identifier. Postgres `BIGSERIAL`, so any 32-bit reference fits.
pub type DbId = i64;

/// UTC timestamp as stored in `TIMESTAMPTZ` columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
