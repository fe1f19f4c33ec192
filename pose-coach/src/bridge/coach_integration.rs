//! Coach integration - runs the coach over the capture and exposes results
//!
//! JS calls `run_coach` once the user stops, then reads the feedback back
//! field by field.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use super::capture::with_capture;
use crate::coach::{overall_rank, Coach, CoachFeedback};
use crate::config::CoachConfig;
use crate::criteria::ExerciseType;
use crate::error::{CoachError, CoachResult};
use crate::pose::{JointTriple, PoseFrame};

impl From<CoachError> for JsValue {
    fn from(err: CoachError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Coach plus the feedback of its last run
#[derive(Default)]
pub(crate) struct CoachSession {
    coach: Coach,
    feedbacks: Vec<CoachFeedback>,
}

impl CoachSession {
    pub(crate) fn configure(&mut self, config: CoachConfig) -> CoachResult<()> {
        self.coach = Coach::new(config)?;
        Ok(())
    }

    /// Assess `frames` and keep the results; returns the feedback count
    pub(crate) fn run(&mut self, exercise: &str, frames: &[PoseFrame]) -> CoachResult<usize> {
        let exercise: ExerciseType = exercise.parse()?;
        self.feedbacks = self.coach.assess(exercise, frames);
        Ok(self.feedbacks.len())
    }

    pub(crate) fn feedback(&self, index: usize) -> Option<&CoachFeedback> {
        self.feedbacks.get(index)
    }

    pub(crate) fn feedbacks(&self) -> &[CoachFeedback] {
        &self.feedbacks
    }
}

thread_local! {
    static SESSION: RefCell<CoachSession> = RefCell::new(CoachSession::default());
}

/// Drop previous results and restore the default configuration
pub(crate) fn reset_session() {
    SESSION.with(|session_cell| *session_cell.borrow_mut() = CoachSession::default());
}

/// Landmark indices of `triples`, three per triple (outer, vertex, outer)
fn joint_indices(triples: &[JointTriple]) -> Vec<u32> {
    triples
        .iter()
        .flat_map(|triple| [triple.a, triple.b, triple.c])
        .map(|index| index as u32)
        .collect()
}

fn read_feedback<R>(index: usize, f: impl FnOnce(&CoachFeedback) -> R) -> Option<R> {
    SESSION.with(|session_cell| session_cell.borrow().feedback(index).map(f))
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Replace the coach configuration (smoothing window, comment threshold)
#[wasm_bindgen]
pub fn configure_coach(
    window_size: usize,
    window_step: usize,
    comment_threshold: f32,
) -> Result<(), JsValue> {
    let config = CoachConfig::new()
        .with_window(window_size, window_step)
        .with_comment_threshold(comment_threshold);
    SESSION.with(|session_cell| session_cell.borrow_mut().configure(config))?;
    Ok(())
}

/// Assess the current capture as `exercise` (e.g. "PLANK", "push-ups")
///
/// Returns the number of feedback entries available to the getters.
#[wasm_bindgen]
pub fn run_coach(exercise: &str) -> Result<usize, JsValue> {
    let frames = with_capture(|store| store.frames().to_vec());
    let count = SESSION.with(|session_cell| session_cell.borrow_mut().run(exercise, &frames))?;
    web_sys::console::log_1(
        &format!("✅ {} assessed over {} frames", exercise, frames.len()).into(),
    );
    Ok(count)
}

#[wasm_bindgen]
pub fn feedback_count() -> usize {
    SESSION.with(|session_cell| session_cell.borrow().feedbacks().len())
}

#[wasm_bindgen]
pub fn feedback_success_rate(index: usize) -> Option<f32> {
    read_feedback(index, |feedback| feedback.success_rate)
}

/// Repetitions or seconds, saturated to u32 for JS
#[wasm_bindgen]
pub fn feedback_value(index: usize) -> Option<u32> {
    read_feedback(index, |feedback| {
        u32::try_from(feedback.feedback_value).unwrap_or(u32::MAX)
    })
}

#[wasm_bindgen]
pub fn feedback_unit(index: usize) -> Option<String> {
    read_feedback(index, |feedback| feedback.feedback_unit.as_str().to_string())
}

#[wasm_bindgen]
pub fn feedback_rank(index: usize) -> Option<String> {
    read_feedback(index, |feedback| feedback.rank().to_string())
}

#[wasm_bindgen]
pub fn feedback_criterion_name(index: usize) -> Option<String> {
    read_feedback(index, |feedback| feedback.criterion.name.to_string())
}

#[wasm_bindgen]
pub fn feedback_comment_count(index: usize) -> usize {
    read_feedback(index, |feedback| feedback.comments.len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn feedback_comment(index: usize, comment: usize) -> Option<String> {
    read_feedback(index, |feedback| {
        feedback.comments.get(comment).map(|c| c.comment.clone())
    })
    .flatten()
}

#[wasm_bindgen]
pub fn feedback_comment_rate(index: usize, comment: usize) -> Option<f32> {
    read_feedback(index, |feedback| feedback.comments.get(comment).map(|c| c.rate)).flatten()
}

/// Landmark indices to highlight for a comment, three per joint angle
#[wasm_bindgen]
pub fn feedback_comment_joints(index: usize, comment: usize) -> Option<Vec<u32>> {
    read_feedback(index, |feedback| {
        feedback
            .comments
            .get(comment)
            .map(|c| joint_indices(c.code.focused_joints()))
    })
    .flatten()
}

/// Single badge for the whole last run
#[wasm_bindgen]
pub fn overall_feedback_rank() -> String {
    SESSION.with(|session_cell| overall_rank(session_cell.borrow().feedbacks()).to_string())
}
