//! Integrity stage at the persistence boundary.
//!
//! The schema layer lets through references such as `parent_id = 0` or
//! `learner_id = 0`. Postgres rejects them through the constraints declared
//! in `db/migrations`; this module turns those rejections into an
//! [`IntegrityViolation`] so callers can tell them apart from shape errors
//! and from genuine database failures.

use std::fmt;

/// Which kind of constraint a write violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// SQLSTATE `23503`: the referenced row does not exist.
    ForeignKey,
    /// SQLSTATE `23505`.
    Unique,
    /// SQLSTATE `23514`.
    Check,
    /// SQLSTATE `23502`.
    NotNull,
}

impl ViolationKind {
    /// Map a Postgres SQLSTATE to a violation kind, if it is one we classify.
    pub fn from_sqlstate(code: &str) -> Option<Self> {
        match code {
            "23503" => Some(Self::ForeignKey),
            "23505" => Some(Self::Unique),
            "23514" => Some(Self::Check),
            "23502" => Some(Self::NotNull),
            _ => None,
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ForeignKey => "foreign key",
            Self::Unique => "unique",
            Self::Check => "check",
            Self::NotNull => "not-null",
        };
        f.write_str(label)
    }
}

/// A write rejected by a database constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} constraint violated: {constraint}")]
pub struct IntegrityViolation {
    pub kind: ViolationKind,
    /// Constraint name as declared in the migrations, or `"unknown"`.
    pub constraint: String,
}

/// Classify a sqlx error as an integrity violation.
///
/// Returns `None` for anything that is not a constraint rejection
/// (connection failures, `RowNotFound`, syntax errors, ...).
pub fn classify(err: &sqlx::Error) -> Option<IntegrityViolation> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    let kind = ViolationKind::from_sqlstate(db_err.code().as_deref()?)?;
    let constraint = db_err.constraint().unwrap_or("unknown").to_string();
    tracing::debug!(%kind, %constraint, "Classified integrity violation");
    Some(IntegrityViolation { kind, constraint })
}
