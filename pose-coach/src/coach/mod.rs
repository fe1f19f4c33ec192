//! Coach module - assessment, repetition counting and feedback
//!
//! Re-exports only. All logic in submodules.

mod assessment;
mod feedback;
mod orchestrator;
mod preamble;
mod repetition;

pub use assessment::{assess_sample, Assessment, AssessmentObserver, NoopObserver, TracingObserver};
pub use feedback::{
    build_feedback, overall_rank, rate_to_rank, CoachFeedback, FeedbackKind, FeedbackRank,
    FeedbackUnit, JointFeedback,
};
pub use orchestrator::Coach;
pub use preamble::{in_preamble, preamble_criterion};
pub use repetition::count_alternates;
