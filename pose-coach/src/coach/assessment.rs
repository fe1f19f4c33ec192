//! Assessment engine - one frame against one exercise criterion
//!
//! Each pair passes if either side is within tolerance; the left side is
//! checked first. The frame matches when every pair passes.

use crate::criteria::{AngleCriterion, CommentCode, ExerciseCriterion};
use crate::pose::{angle_matches, AngleMode, PoseFrame};

/// Outcome of assessing a single frame
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assessment {
    /// Every pair had a matching side
    pub matched: bool,
    /// One `Success` per passing pair, left then right failure comments otherwise
    pub comments: Vec<CommentCode>,
}

// ============================================================================
// OBSERVERS
// ============================================================================

/// Notified for every angle criterion the engine evaluates
///
/// Both methods default to doing nothing.
pub trait AssessmentObserver {
    fn on_success(&self, _criterion: &AngleCriterion) {}
    fn on_failure(&self, _criterion: &AngleCriterion) {}
}

/// Ignores every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl AssessmentObserver for NoopObserver {}

/// Emits a `tracing` trace event per evaluated criterion
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl AssessmentObserver for TracingObserver {
    fn on_success(&self, criterion: &AngleCriterion) {
        tracing::trace!(
            joints = ?criterion.joints,
            target_deg = criterion.target_deg,
            "angle criterion matched"
        );
    }

    fn on_failure(&self, criterion: &AngleCriterion) {
        tracing::trace!(
            joints = ?criterion.joints,
            target_deg = criterion.target_deg,
            comment = ?criterion.failure_comment,
            "angle criterion missed"
        );
    }
}

// ============================================================================
// ENGINE
// ============================================================================

fn check_side(
    frame: &PoseFrame,
    criterion: &AngleCriterion,
    mode: AngleMode,
    observer: &dyn AssessmentObserver,
) -> bool {
    let matched = angle_matches(
        frame,
        criterion.joints,
        criterion.target_deg,
        criterion.tolerance_deg,
        mode,
    );
    if matched {
        observer.on_success(criterion);
    } else {
        observer.on_failure(criterion);
    }
    matched
}

/// Assess one frame against every pair of `criterion`
pub fn assess_sample(
    frame: &PoseFrame,
    criterion: &ExerciseCriterion,
    mode: AngleMode,
    observer: &dyn AssessmentObserver,
) -> Assessment {
    let mut matched = true;
    let mut comments = Vec::with_capacity(criterion.pairs.len());

    for pair in criterion.pairs.iter() {
        // right side is only consulted when the left misses
        if check_side(frame, &pair.left, mode, observer)
            || check_side(frame, &pair.right, mode, observer)
        {
            comments.push(CommentCode::Success);
        } else {
            matched = false;
            comments.push(pair.left.failure_comment);
            comments.push(pair.right.failure_comment);
        }
    }

    Assessment { matched, comments }
}
