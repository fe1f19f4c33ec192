//! Criterion data types
//!
//! Criteria are plain data. Catalog entries are `static` and borrow their
//! pair lists; derived criteria (preambles, custom tuning) own theirs.

use std::borrow::Cow;

use super::comments::CommentCode;
use crate::error::{CoachError, CoachResult};
use crate::pose::JointTriple;

/// Target angle ± tolerance at one joint triple
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleCriterion {
    pub joints: JointTriple,
    /// Target angle in degrees
    pub target_deg: f64,
    /// Allowed deviation in degrees (never negative)
    pub tolerance_deg: f64,
    /// Comment fired when the angle misses the target
    pub failure_comment: CommentCode,
}

impl AngleCriterion {
    /// Const constructor for catalog entries; tolerances there are literals
    pub const fn new(
        joints: JointTriple,
        target_deg: f64,
        tolerance_deg: f64,
        failure_comment: CommentCode,
    ) -> Self {
        Self {
            joints,
            target_deg,
            tolerance_deg,
            failure_comment,
        }
    }

    /// Checked constructor for criteria built at runtime
    pub fn try_new(
        joints: JointTriple,
        target_deg: f64,
        tolerance_deg: f64,
        failure_comment: CommentCode,
    ) -> CoachResult<Self> {
        if tolerance_deg.is_nan() || tolerance_deg < 0.0 {
            return Err(CoachError::NegativeTolerance {
                tolerance: tolerance_deg,
            });
        }
        Ok(Self::new(joints, target_deg, tolerance_deg, failure_comment))
    }

    /// Copy with the tolerance scaled by `factor`
    pub fn with_scaled_tolerance(&self, factor: f64) -> Self {
        Self {
            tolerance_deg: self.tolerance_deg * factor,
            ..*self
        }
    }
}

/// The same relationship measured on each side of the body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidedCriterionPair {
    pub left: AngleCriterion,
    pub right: AngleCriterion,
}

impl SidedCriterionPair {
    pub const fn new(left: AngleCriterion, right: AngleCriterion) -> Self {
        Self { left, right }
    }

    pub fn with_scaled_tolerance(&self, factor: f64) -> Self {
        Self {
            left: self.left.with_scaled_tolerance(factor),
            right: self.right.with_scaled_tolerance(factor),
        }
    }
}

/// What "correct form" means for one pose of an exercise
///
/// A frame matches when, for every pair, at least one side is within
/// tolerance of its target.
#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseCriterion {
    /// Name of this pose (e.g. "Pushup high position")
    pub name: Cow<'static, str>,
    /// Exercise the pose belongs to
    pub exercise_name: Cow<'static, str>,
    pub pairs: Cow<'static, [SidedCriterionPair]>,
    /// Whether both sides are expected to look alike
    pub symmetric: bool,
}

impl ExerciseCriterion {
    /// Const constructor used by the static catalog
    pub const fn from_static(
        name: &'static str,
        exercise_name: &'static str,
        pairs: &'static [SidedCriterionPair],
        symmetric: bool,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            exercise_name: Cow::Borrowed(exercise_name),
            pairs: Cow::Borrowed(pairs),
            symmetric,
        }
    }

    pub fn new(
        name: impl Into<String>,
        exercise_name: impl Into<String>,
        pairs: Vec<SidedCriterionPair>,
        symmetric: bool,
    ) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            exercise_name: Cow::Owned(exercise_name.into()),
            pairs: Cow::Owned(pairs),
            symmetric,
        }
    }

    /// Copy with every tolerance scaled by `factor`, all else unchanged
    pub fn with_scaled_tolerance(&self, factor: f64) -> Self {
        Self {
            name: self.name.clone(),
            exercise_name: self.exercise_name.clone(),
            pairs: self
                .pairs
                .iter()
                .map(|pair| pair.with_scaled_tolerance(factor))
                .collect(),
            symmetric: self.symmetric,
        }
    }
}
