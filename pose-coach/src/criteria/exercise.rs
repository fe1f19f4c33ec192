//! Exercise selector - which criteria an exercise is judged by, and how
//!
//! The shape decides what the coach measures: repetitions between canonical
//! poses, or time held in one pose (optionally picking the better side).

use std::fmt;
use std::str::FromStr;

use super::catalog;
use super::model::ExerciseCriterion;
use crate::error::{CoachError, CoachResult};

// ============================================================================
// EXERCISE TYPE
// ============================================================================

/// Exercises the catalog knows how to coach
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExerciseType {
    DownwardDog,
    WarriorII,
    PushUps,
    Plank,
    Chair,
    JumpingJacks,
}

impl ExerciseType {
    pub const ALL: [ExerciseType; 6] = [
        ExerciseType::DownwardDog,
        ExerciseType::WarriorII,
        ExerciseType::PushUps,
        ExerciseType::Plank,
        ExerciseType::Chair,
        ExerciseType::JumpingJacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseType::DownwardDog => "DOWNWARD_DOG",
            ExerciseType::WarriorII => "WARRIOR_II",
            ExerciseType::PushUps => "PUSH_UPS",
            ExerciseType::Plank => "PLANK",
            ExerciseType::Chair => "CHAIR",
            ExerciseType::JumpingJacks => "JUMPING_JACKS",
        }
    }

    /// How this exercise is measured
    pub fn shape(&self) -> ExerciseShape<'static> {
        match self {
            ExerciseType::DownwardDog => ExerciseShape::SingleTimed(&catalog::DOWNWARD_DOG),
            ExerciseType::Plank => ExerciseShape::SingleTimed(&catalog::PLANK),
            ExerciseType::Chair => ExerciseShape::SingleTimed(&catalog::CHAIR),
            ExerciseType::WarriorII => ExerciseShape::SymmetricTimed {
                left: &catalog::WARRIOR_II_LEFT,
                right: &catalog::WARRIOR_II_RIGHT,
            },
            ExerciseType::PushUps => ExerciseShape::Repetition(RepetitionPoses::from_pair(
                &catalog::PUSH_UPS_UP,
                &catalog::PUSH_UPS_DOWN,
            )),
            ExerciseType::JumpingJacks => ExerciseShape::Repetition(RepetitionPoses::from_pair(
                &catalog::JUMPING_JACKS_OPEN,
                &catalog::JUMPING_JACKS_CLOSED,
            )),
        }
    }

    /// Every criterion the exercise uses, in shape order
    pub fn criteria(&self) -> Vec<&'static ExerciseCriterion> {
        self.shape().criteria()
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = CoachError;

    /// Accepts "PUSH_UPS", "push-ups", "Push ups" and the like
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();

        ExerciseType::ALL
            .into_iter()
            .find(|exercise| exercise.as_str() == normalized)
            .ok_or_else(|| CoachError::UnknownExercise(s.to_string()))
    }
}

// ============================================================================
// EXERCISE SHAPE
// ============================================================================

/// Canonical poses a repetition cycles through, in order
///
/// Always holds at least two poses.
#[derive(Clone, Debug, PartialEq)]
pub struct RepetitionPoses<'a> {
    poses: Vec<&'a ExerciseCriterion>,
}

impl<'a> RepetitionPoses<'a> {
    pub fn new(poses: Vec<&'a ExerciseCriterion>) -> CoachResult<Self> {
        if poses.len() < 2 {
            return Err(CoachError::TooFewPoses { count: poses.len() });
        }
        Ok(Self { poses })
    }

    fn from_pair(first: &'a ExerciseCriterion, second: &'a ExerciseCriterion) -> Self {
        Self {
            poses: vec![first, second],
        }
    }

    pub fn poses(&self) -> &[&'a ExerciseCriterion] {
        &self.poses
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}

/// What the coach measures for an exercise
#[derive(Clone, Debug, PartialEq)]
pub enum ExerciseShape<'a> {
    /// Count cycles through the canonical poses
    Repetition(RepetitionPoses<'a>),
    /// Time held; each side measured separately and the better one reported
    SymmetricTimed {
        left: &'a ExerciseCriterion,
        right: &'a ExerciseCriterion,
    },
    /// Time held in a single pose
    SingleTimed(&'a ExerciseCriterion),
}

impl<'a> ExerciseShape<'a> {
    pub fn criteria(&self) -> Vec<&'a ExerciseCriterion> {
        match self {
            ExerciseShape::Repetition(poses) => poses.poses().to_vec(),
            ExerciseShape::SymmetricTimed { left, right } => vec![*left, *right],
            ExerciseShape::SingleTimed(criterion) => vec![*criterion],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExerciseShape::Repetition(_) => "repetition",
            ExerciseShape::SymmetricTimed { .. } => "symmetric-timed",
            ExerciseShape::SingleTimed(_) => "single-timed",
        }
    }
}
