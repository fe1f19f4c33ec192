//! Pose Coach - exercise form assessment from pose landmarks
//!
//! Entry point for the WASM module and the native library. Only contains:
//! - Module declarations
//! - Public re-exports of the coaching core
//! - wasm_bindgen entry points that delegate to submodules

mod bridge;
pub mod coach;
pub mod config;
pub mod criteria;
pub mod error;
pub mod pose;

use wasm_bindgen::prelude::*;

pub use bridge::{
    capture_len, clear_capture, configure_coach, feedback_comment, feedback_comment_count,
    feedback_comment_joints, feedback_comment_rate, feedback_count, feedback_criterion_name,
    feedback_rank, feedback_success_rate, feedback_unit, feedback_value, keep_last_seconds,
    overall_feedback_rank, record_landmarks, record_landmarks_at, run_coach,
};
pub use coach::{Coach, CoachFeedback, FeedbackRank, FeedbackUnit, JointFeedback};
pub use config::CoachConfig;
pub use criteria::{ExerciseCriterion, ExerciseShape, ExerciseType};
pub use error::{CoachError, CoachResult};
pub use pose::{AngleMode, LandmarkSample, PoseFrame};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Reset capture and coach state; call before starting a new session
#[wasm_bindgen]
pub fn init() {
    clear_capture();
    bridge::reset_session();
    console_log!("✅ Pose coach ready ({} exercises)", ExerciseType::ALL.len());
}
