//! Corrective comment codes attached to angle criteria

use std::fmt;

use crate::pose::joints::{self, JointTriple};

/// Corrective messages a criterion can fire
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommentCode {
    /// Reserved: the criterion matched, nothing to correct
    Success,
    /// Criterion carries no dedicated message
    NotImplemented,
    ShoulderHipKneeNotFlat,
    ShoulderHipKneeNotBent,
    ShoulderHipKneeNotRight,
    LeftWristElbowShoulderNotFlat,
    RightWristElbowShoulderNotFlat,
    BothWristElbowShoulderNotFlat,
    LeftWristElbowShoulderNotRight,
    RightWristElbowShoulderNotRight,
    BothWristElbowShoulderNotRight,
    BothElbowShoulderOppShoulderNotFlat,
    LeftElbowShoulderHipNotRight,
    RightElbowShoulderHipNotRight,
    BothElbowShoulderHipNotRight,
    ElbowShoulderHipNotFlat,
    ArmsNotRaised,
    ArmsNotLowered,
    LeftHipKneeAnkleNotFlat,
    RightHipKneeAnkleNotFlat,
    BothHipKneeAnkleNotFlat,
    LeftHipKneeAnkleNotRight,
    RightHipKneeAnkleNotRight,
    BothHipKneeAnkleNotRight,
    BothOppHipHipKneeNotOpen,
    BothOppHipHipKneeNotClosed,
}

impl CommentCode {
    /// Human-readable message shown to the user
    pub fn description(&self) -> &'static str {
        match self {
            CommentCode::Success => "Success",
            CommentCode::NotImplemented => "Not implemented yet",
            CommentCode::ShoulderHipKneeNotFlat => "Keep your back straight.",
            CommentCode::ShoulderHipKneeNotBent => "Try bending your body more at the hips.",
            CommentCode::ShoulderHipKneeNotRight => {
                "Bend your body to have a 90° angle at your hips."
            }
            CommentCode::LeftWristElbowShoulderNotFlat => "Keep your left elbow fully open.",
            CommentCode::RightWristElbowShoulderNotFlat => "Keep your right elbow fully open.",
            CommentCode::BothWristElbowShoulderNotFlat => {
                "Keep your elbows stretched and fully open."
            }
            CommentCode::LeftWristElbowShoulderNotRight => {
                "Your left wrist, elbow and shoulder should make a right angle."
            }
            CommentCode::RightWristElbowShoulderNotRight => {
                "Your right wrist, elbow and shoulder should make a right angle."
            }
            CommentCode::BothWristElbowShoulderNotRight => {
                "Your wrists, elbows and shoulders should make a right angle."
            }
            CommentCode::BothElbowShoulderOppShoulderNotFlat => {
                "Keep your elbows aligned with your shoulders."
            }
            CommentCode::LeftElbowShoulderHipNotRight => {
                "Keep your left arm straight, parallel to the ground."
            }
            CommentCode::RightElbowShoulderHipNotRight => {
                "Keep your right arm straight, parallel to the ground."
            }
            CommentCode::BothElbowShoulderHipNotRight => "Keep your elbows under your shoulders.",
            CommentCode::ElbowShoulderHipNotFlat => "Put your arms in line with your back.",
            CommentCode::ArmsNotRaised => "Raise your arms above your head.",
            CommentCode::ArmsNotLowered => "Bring your arms down along your body.",
            CommentCode::LeftHipKneeAnkleNotFlat => "Keep your left leg stretched.",
            CommentCode::RightHipKneeAnkleNotFlat => "Keep your right leg stretched.",
            CommentCode::BothHipKneeAnkleNotFlat => "Keep your legs stretched.",
            CommentCode::LeftHipKneeAnkleNotRight => "Keep a 90° angle at your left knee.",
            CommentCode::RightHipKneeAnkleNotRight => "Keep a 90° angle at your right knee.",
            CommentCode::BothHipKneeAnkleNotRight => "Keep a 90° angle at your knees.",
            CommentCode::BothOppHipHipKneeNotOpen => "Spread your legs wider.",
            CommentCode::BothOppHipHipKneeNotClosed => "Bring your legs together.",
        }
    }

    /// Joint triples the comment is about (for highlighting on a skeleton)
    pub fn focused_joints(&self) -> &'static [JointTriple] {
        match self {
            CommentCode::Success | CommentCode::NotImplemented => &[],
            CommentCode::ShoulderHipKneeNotFlat
            | CommentCode::ShoulderHipKneeNotBent
            | CommentCode::ShoulderHipKneeNotRight => {
                &[joints::LEFT_SHOULDER_HIP_KNEE, joints::RIGHT_SHOULDER_HIP_KNEE]
            }
            CommentCode::LeftWristElbowShoulderNotFlat
            | CommentCode::LeftWristElbowShoulderNotRight => &[joints::LEFT_WRIST_ELBOW_SHOULDER],
            CommentCode::RightWristElbowShoulderNotFlat
            | CommentCode::RightWristElbowShoulderNotRight => &[joints::RIGHT_WRIST_ELBOW_SHOULDER],
            CommentCode::BothWristElbowShoulderNotFlat
            | CommentCode::BothWristElbowShoulderNotRight => {
                &[joints::LEFT_WRIST_ELBOW_SHOULDER, joints::RIGHT_WRIST_ELBOW_SHOULDER]
            }
            CommentCode::BothElbowShoulderOppShoulderNotFlat | CommentCode::ArmsNotLowered => &[
                joints::LEFT_ELBOW_SHOULDER_OPPSHOULDER,
                joints::RIGHT_ELBOW_SHOULDER_OPPSHOULDER,
            ],
            CommentCode::LeftElbowShoulderHipNotRight => &[joints::LEFT_ELBOW_SHOULDER_HIP],
            CommentCode::RightElbowShoulderHipNotRight => &[joints::RIGHT_ELBOW_SHOULDER_HIP],
            CommentCode::BothElbowShoulderHipNotRight
            | CommentCode::ElbowShoulderHipNotFlat
            | CommentCode::ArmsNotRaised => {
                &[joints::LEFT_ELBOW_SHOULDER_HIP, joints::RIGHT_ELBOW_SHOULDER_HIP]
            }
            CommentCode::LeftHipKneeAnkleNotFlat | CommentCode::LeftHipKneeAnkleNotRight => {
                &[joints::LEFT_HIP_KNEE_ANKLE]
            }
            CommentCode::RightHipKneeAnkleNotFlat | CommentCode::RightHipKneeAnkleNotRight => {
                &[joints::RIGHT_HIP_KNEE_ANKLE]
            }
            CommentCode::BothHipKneeAnkleNotFlat | CommentCode::BothHipKneeAnkleNotRight => {
                &[joints::LEFT_HIP_KNEE_ANKLE, joints::RIGHT_HIP_KNEE_ANKLE]
            }
            CommentCode::BothOppHipHipKneeNotOpen | CommentCode::BothOppHipHipKneeNotClosed => {
                &[joints::LEFT_OPPHIP_HIP_KNEE, joints::RIGHT_OPPHIP_HIP_KNEE]
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CommentCode::Success)
    }
}

impl fmt::Display for CommentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
