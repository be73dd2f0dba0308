pub mod interaction;
pub mod item;
pub mod learner;
