//! Pose module - landmark frames, joint topology, angles and smoothing
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod landmark;
mod smoothing;
pub mod joints;

pub use angles::{
    angle, angle_matches, angle_within, triple_angle, AngleMode, ANGLE_MATCH_EPSILON_DEG,
    MIN_BONE_LENGTH,
};
pub use joints::{JointTriple, ALL_JOINT_LINKS};
pub use landmark::{
    decode_pose_frame, frame_timestamp, LandmarkSample, PoseFrame, LANDMARK_COUNT, XYZP_STRIDE,
    XYZ_STRIDE,
};
pub use smoothing::{smooth, trailing_window, window_mean};
