//! Shared helpers for building synthetic pose frames.

#![allow(dead_code)]

use pose_coach::pose::{LandmarkSample, PoseFrame, LANDMARK_COUNT};

/// Image-plane point
pub type Point = (f32, f32);

/// Point `length` away from `vertex` so that the angle `toward`-`vertex`-result
/// is `angle_deg`. The bone is rotated counter-clockwise from `toward`.
pub fn bend(vertex: Point, toward: Point, angle_deg: f32, length: f32) -> Point {
    let (dx, dy) = (toward.0 - vertex.0, toward.1 - vertex.1);
    let norm = (dx * dx + dy * dy).sqrt();
    let (ux, uy) = (dx / norm, dy / norm);
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    (
        vertex.0 + length * (ux * cos - uy * sin),
        vertex.1 + length * (ux * sin + uy * cos),
    )
}

/// Clockwise counterpart of `bend`, for mirrored limbs
pub fn bend_cw(vertex: Point, toward: Point, angle_deg: f32, length: f32) -> Point {
    bend(vertex, toward, -angle_deg, length)
}

/// Collects joint positions, then stamps them into a frame
#[derive(Default, Clone)]
pub struct FrameBuilder {
    joints: Vec<(usize, Point)>,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn joint(mut self, index: usize, point: Point) -> Self {
        self.joints.push((index, point));
        self
    }

    pub fn build(&self, timestamp_micros: i64) -> PoseFrame {
        let mut frame = [LandmarkSample::new(0.0, 0.0, 0.0, 1.0, timestamp_micros); LANDMARK_COUNT];
        for &(index, (x, y)) in &self.joints {
            frame[index] = LandmarkSample::new(x, y, 0.0, 1.0, timestamp_micros);
        }
        frame
    }
}
