//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod capture;
mod coach_integration;

pub use capture::{
    capture_len, clear_capture, keep_last_seconds, record_landmarks, record_landmarks_at,
};

pub use coach_integration::{
    configure_coach, feedback_comment, feedback_comment_count, feedback_comment_joints,
    feedback_comment_rate, feedback_count, feedback_criterion_name, feedback_rank,
    feedback_success_rate, feedback_unit, feedback_value, overall_feedback_rank, run_coach,
};

pub(crate) use coach_integration::reset_session;
