//! Landmark samples and pose frames
//!
//! A pose frame holds one sample per MediaPipe joint (33 total) for a single
//! captured instant. Frames arrive from the external pose detector already
//! filled; the core only reads them.

use crate::error::{CoachError, CoachResult};

/// Number of joints in the MediaPipe full-body layout
pub const LANDMARK_COUNT: usize = 33;

/// Flat values per joint when the detector sends x, y, z
pub const XYZ_STRIDE: usize = 3;

/// Flat values per joint when the detector also sends presence
pub const XYZP_STRIDE: usize = 4;

/// A single tracked joint at one instant
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LandmarkSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Detector confidence that the joint is in frame (0-1)
    pub presence: f32,
    /// Capture time in microseconds
    pub timestamp_micros: i64,
}

impl LandmarkSample {
    pub const fn new(x: f32, y: f32, z: f32, presence: f32, timestamp_micros: i64) -> Self {
        Self {
            x,
            y,
            z,
            presence,
            timestamp_micros,
        }
    }
}

/// All joints of one captured instant, indexed by joint number
pub type PoseFrame = [LandmarkSample; LANDMARK_COUNT];

/// Timestamp of a frame (all joints share the capture instant)
pub fn frame_timestamp(frame: &PoseFrame) -> i64 {
    frame[0].timestamp_micros
}

/// Decode a flat detector buffer into a pose frame
///
/// Accepts 99 values (x, y, z per joint, presence assumed 1.0) or
/// 132 values (x, y, z, presence per joint).
pub fn decode_pose_frame(data: &[f32], timestamp_micros: i64) -> CoachResult<PoseFrame> {
    let stride = match data.len() {
        n if n == LANDMARK_COUNT * XYZ_STRIDE => XYZ_STRIDE,
        n if n == LANDMARK_COUNT * XYZP_STRIDE => XYZP_STRIDE,
        actual => {
            return Err(CoachError::InvalidLandmarkCount {
                expected: format!(
                    "{} or {}",
                    LANDMARK_COUNT * XYZ_STRIDE,
                    LANDMARK_COUNT * XYZP_STRIDE
                ),
                actual,
            })
        }
    };

    let mut frame = [LandmarkSample::default(); LANDMARK_COUNT];
    for (joint, values) in frame.iter_mut().zip(data.chunks_exact(stride)) {
        let presence = if stride == XYZP_STRIDE { values[3] } else { 1.0 };
        *joint = LandmarkSample::new(values[0], values[1], values[2], presence, timestamp_micros);
    }
    Ok(frame)
}
