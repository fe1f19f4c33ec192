//! Criteria module - what correct form looks like for each exercise
//!
//! Re-exports only. All logic in submodules.

mod comments;
mod exercise;
mod model;
pub mod catalog;

pub use comments::CommentCode;
pub use exercise::{ExerciseShape, ExerciseType, RepetitionPoses};
pub use model::{AngleCriterion, ExerciseCriterion, SidedCriterionPair};
