//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that take
//! `&PgPool` first. Inputs are already schema-validated; constraint failures
//! surface as `sqlx::Error` and are classified by [`crate::integrity`].

pub mod interaction_repo;
pub mod item_repo;
pub mod learner_repo;

pub use interaction_repo::InteractionRepo;
pub use item_repo::ItemRepo;
pub use learner_repo::LearnerRepo;
