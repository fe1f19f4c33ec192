//! Exercise criterion catalog
//!
//! One `static` criterion per canonical pose. Built at compile time and
//! never mutated, so concurrent assessments can share them freely.

use super::comments::CommentCode;
use super::model::{AngleCriterion, ExerciseCriterion, SidedCriterionPair};
use crate::pose::joints::*;

/// Shorthand for a left/right pair sharing target, tolerance and comment
const fn mirrored(
    left: JointTriple,
    right: JointTriple,
    target_deg: f64,
    tolerance_deg: f64,
    comment: CommentCode,
) -> SidedCriterionPair {
    SidedCriterionPair::new(
        AngleCriterion::new(left, target_deg, tolerance_deg, comment),
        AngleCriterion::new(right, target_deg, tolerance_deg, comment),
    )
}

// ============================================================================
// PLANK
// ============================================================================

const PLANK_PAIRS: [SidedCriterionPair; 3] = [
    // elbows under shoulders
    mirrored(
        LEFT_ELBOW_SHOULDER_HIP,
        RIGHT_ELBOW_SHOULDER_HIP,
        90.0,
        15.0,
        CommentCode::BothElbowShoulderHipNotRight,
    ),
    // flat back
    mirrored(
        LEFT_SHOULDER_HIP_KNEE,
        RIGHT_SHOULDER_HIP_KNEE,
        180.0,
        25.0,
        CommentCode::ShoulderHipKneeNotFlat,
    ),
    mirrored(
        LEFT_HIP_KNEE_ANKLE,
        RIGHT_HIP_KNEE_ANKLE,
        180.0,
        15.0,
        CommentCode::BothHipKneeAnkleNotFlat,
    ),
];

pub static PLANK: ExerciseCriterion =
    ExerciseCriterion::from_static("Plank", "PLANK", &PLANK_PAIRS, true);

// ============================================================================
// PUSH-UPS
// ============================================================================

const PUSH_UPS_LEGS: SidedCriterionPair = mirrored(
    LEFT_HIP_KNEE_ANKLE,
    RIGHT_HIP_KNEE_ANKLE,
    165.0,
    15.0,
    CommentCode::BothHipKneeAnkleNotFlat,
);

const PUSH_UPS_BACK: SidedCriterionPair = mirrored(
    LEFT_SHOULDER_HIP_KNEE,
    RIGHT_SHOULDER_HIP_KNEE,
    180.0,
    15.0,
    CommentCode::ShoulderHipKneeNotFlat,
);

const PUSH_UPS_UP_PAIRS: [SidedCriterionPair; 3] = [
    mirrored(
        LEFT_WRIST_ELBOW_SHOULDER,
        RIGHT_WRIST_ELBOW_SHOULDER,
        170.0,
        20.0,
        CommentCode::BothWristElbowShoulderNotFlat,
    ),
    PUSH_UPS_LEGS,
    PUSH_UPS_BACK,
];

const PUSH_UPS_DOWN_PAIRS: [SidedCriterionPair; 3] = [
    mirrored(
        LEFT_WRIST_ELBOW_SHOULDER,
        RIGHT_WRIST_ELBOW_SHOULDER,
        90.0,
        20.0,
        CommentCode::BothWristElbowShoulderNotRight,
    ),
    PUSH_UPS_LEGS,
    PUSH_UPS_BACK,
];

pub static PUSH_UPS_UP: ExerciseCriterion =
    ExerciseCriterion::from_static("Pushup high position", "PUSH_UPS", &PUSH_UPS_UP_PAIRS, true);

pub static PUSH_UPS_DOWN: ExerciseCriterion =
    ExerciseCriterion::from_static("Pushup low position", "PUSH_UPS", &PUSH_UPS_DOWN_PAIRS, true);

// ============================================================================
// CHAIR
// ============================================================================

const CHAIR_PAIRS: [SidedCriterionPair; 2] = [
    mirrored(
        LEFT_SHOULDER_HIP_KNEE,
        RIGHT_SHOULDER_HIP_KNEE,
        90.0,
        15.0,
        CommentCode::ShoulderHipKneeNotRight,
    ),
    mirrored(
        LEFT_HIP_KNEE_ANKLE,
        RIGHT_HIP_KNEE_ANKLE,
        90.0,
        10.0,
        CommentCode::BothHipKneeAnkleNotRight,
    ),
];

pub static CHAIR: ExerciseCriterion =
    ExerciseCriterion::from_static("Chair", "CHAIR", &CHAIR_PAIRS, true);

// ============================================================================
// DOWNWARD DOG
// ============================================================================

const DOWNWARD_DOG_PAIRS: [SidedCriterionPair; 4] = [
    mirrored(
        LEFT_HIP_KNEE_ANKLE,
        RIGHT_HIP_KNEE_ANKLE,
        170.0,
        10.0,
        CommentCode::BothHipKneeAnkleNotFlat,
    ),
    // arms in line with the back
    mirrored(
        LEFT_ELBOW_SHOULDER_HIP,
        RIGHT_ELBOW_SHOULDER_HIP,
        170.0,
        10.0,
        CommentCode::ElbowShoulderHipNotFlat,
    ),
    mirrored(
        LEFT_WRIST_ELBOW_SHOULDER,
        RIGHT_WRIST_ELBOW_SHOULDER,
        170.0,
        10.0,
        CommentCode::BothWristElbowShoulderNotFlat,
    ),
    // hips folded
    mirrored(
        LEFT_SHOULDER_HIP_KNEE,
        RIGHT_SHOULDER_HIP_KNEE,
        80.0,
        15.0,
        CommentCode::ShoulderHipKneeNotBent,
    ),
];

pub static DOWNWARD_DOG: ExerciseCriterion =
    ExerciseCriterion::from_static("Downward dog", "DOWNWARD_DOG", &DOWNWARD_DOG_PAIRS, true);

// ============================================================================
// JUMPING JACKS
// ============================================================================

const JUMPING_JACKS_LEGS_FLAT: SidedCriterionPair = mirrored(
    LEFT_HIP_KNEE_ANKLE,
    RIGHT_HIP_KNEE_ANKLE,
    165.0,
    15.0,
    CommentCode::BothHipKneeAnkleNotFlat,
);

const JUMPING_JACKS_OPEN_PAIRS: [SidedCriterionPair; 3] = [
    mirrored(
        LEFT_OPPHIP_HIP_KNEE,
        RIGHT_OPPHIP_HIP_KNEE,
        115.0,
        10.0,
        CommentCode::BothOppHipHipKneeNotOpen,
    ),
    JUMPING_JACKS_LEGS_FLAT,
    mirrored(
        LEFT_ELBOW_SHOULDER_HIP,
        RIGHT_ELBOW_SHOULDER_HIP,
        160.0,
        15.0,
        CommentCode::ArmsNotRaised,
    ),
];

const JUMPING_JACKS_CLOSED_PAIRS: [SidedCriterionPair; 4] = [
    mirrored(
        LEFT_OPPHIP_HIP_KNEE,
        RIGHT_OPPHIP_HIP_KNEE,
        90.0,
        5.0,
        CommentCode::BothOppHipHipKneeNotClosed,
    ),
    JUMPING_JACKS_LEGS_FLAT,
    mirrored(
        LEFT_WRIST_ELBOW_SHOULDER,
        RIGHT_WRIST_ELBOW_SHOULDER,
        165.0,
        20.0,
        CommentCode::BothWristElbowShoulderNotFlat,
    ),
    // arms hanging along the body
    SidedCriterionPair::new(
        AngleCriterion::new(
            LEFT_ELBOW_SHOULDER_OPPSHOULDER,
            90.0,
            15.0,
            CommentCode::ArmsNotLowered,
        ),
        AngleCriterion::new(
            RIGHT_ELBOW_SHOULDER_OPPSHOULDER,
            90.0,
            20.0,
            CommentCode::ArmsNotLowered,
        ),
    ),
];

pub static JUMPING_JACKS_OPEN: ExerciseCriterion = ExerciseCriterion::from_static(
    "Jumping-jacks open position",
    "JUMPING_JACKS",
    &JUMPING_JACKS_OPEN_PAIRS,
    true,
);

pub static JUMPING_JACKS_CLOSED: ExerciseCriterion = ExerciseCriterion::from_static(
    "Jumping-jacks closed position",
    "JUMPING_JACKS",
    &JUMPING_JACKS_CLOSED_PAIRS,
    true,
);

// ============================================================================
// WARRIOR II
// ============================================================================

const WARRIOR_ARMS_FLAT: SidedCriterionPair = SidedCriterionPair::new(
    AngleCriterion::new(
        LEFT_WRIST_ELBOW_SHOULDER,
        180.0,
        20.0,
        CommentCode::LeftWristElbowShoulderNotFlat,
    ),
    AngleCriterion::new(
        RIGHT_WRIST_ELBOW_SHOULDER,
        180.0,
        20.0,
        CommentCode::RightWristElbowShoulderNotFlat,
    ),
);

const WARRIOR_ARMS_RAISED: SidedCriterionPair = SidedCriterionPair::new(
    AngleCriterion::new(
        LEFT_ELBOW_SHOULDER_HIP,
        100.0,
        15.0,
        CommentCode::LeftElbowShoulderHipNotRight,
    ),
    AngleCriterion::new(
        RIGHT_ELBOW_SHOULDER_HIP,
        100.0,
        15.0,
        CommentCode::RightElbowShoulderHipNotRight,
    ),
);

const WARRIOR_LEFT_KNEE_BENT: AngleCriterion = AngleCriterion::new(
    LEFT_HIP_KNEE_ANKLE,
    100.0,
    8.0,
    CommentCode::LeftHipKneeAnkleNotRight,
);
const WARRIOR_RIGHT_KNEE_BENT: AngleCriterion = AngleCriterion::new(
    RIGHT_HIP_KNEE_ANKLE,
    100.0,
    8.0,
    CommentCode::RightHipKneeAnkleNotRight,
);
const WARRIOR_LEFT_LEG_FLAT: AngleCriterion = AngleCriterion::new(
    LEFT_HIP_KNEE_ANKLE,
    175.0,
    15.0,
    CommentCode::LeftHipKneeAnkleNotFlat,
);
const WARRIOR_RIGHT_LEG_FLAT: AngleCriterion = AngleCriterion::new(
    RIGHT_HIP_KNEE_ANKLE,
    175.0,
    15.0,
    CommentCode::RightHipKneeAnkleNotFlat,
);

const WARRIOR_II_LEFT_PAIRS: [SidedCriterionPair; 3] = [
    WARRIOR_ARMS_FLAT,
    WARRIOR_ARMS_RAISED,
    SidedCriterionPair::new(WARRIOR_LEFT_KNEE_BENT, WARRIOR_RIGHT_LEG_FLAT),
];

const WARRIOR_II_RIGHT_PAIRS: [SidedCriterionPair; 3] = [
    WARRIOR_ARMS_FLAT,
    WARRIOR_ARMS_RAISED,
    SidedCriterionPair::new(WARRIOR_LEFT_LEG_FLAT, WARRIOR_RIGHT_KNEE_BENT),
];

/// Warrior II with the left knee bent
pub static WARRIOR_II_LEFT: ExerciseCriterion = ExerciseCriterion::from_static(
    "Warrior II left leg bent",
    "WARRIOR_II",
    &WARRIOR_II_LEFT_PAIRS,
    false,
);

/// Warrior II with the right knee bent
pub static WARRIOR_II_RIGHT: ExerciseCriterion = ExerciseCriterion::from_static(
    "Warrior II right leg bent",
    "WARRIOR_II",
    &WARRIOR_II_RIGHT_PAIRS,
    false,
);

/// Every catalog entry, for iteration
pub static ALL_CRITERIA: [&ExerciseCriterion; 9] = [
    &PLANK,
    &PUSH_UPS_UP,
    &PUSH_UPS_DOWN,
    &CHAIR,
    &DOWNWARD_DOG,
    &JUMPING_JACKS_OPEN,
    &JUMPING_JACKS_CLOSED,
    &WARRIOR_II_LEFT,
    &WARRIOR_II_RIGHT,
];
