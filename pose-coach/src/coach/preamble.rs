//! Preamble detection - is the user roughly in position yet?
//!
//! A preamble is the strict criterion with every tolerance widened. Frames
//! captured while the user is still walking into position fail it and are
//! left out of timing and assessment.

use super::assessment::{assess_sample, NoopObserver};
use crate::criteria::ExerciseCriterion;
use crate::pose::{AngleMode, PoseFrame};

/// Lenient copy of `criterion` with tolerances scaled by `factor`
pub fn preamble_criterion(criterion: &ExerciseCriterion, factor: f64) -> ExerciseCriterion {
    criterion.with_scaled_tolerance(factor)
}

/// Whether `frame` satisfies the preamble
pub fn in_preamble(frame: &PoseFrame, preamble: &ExerciseCriterion, mode: AngleMode) -> bool {
    assess_sample(frame, preamble, mode, &NoopObserver).matched
}
