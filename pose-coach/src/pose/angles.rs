//! Joint angle calculation using dot product
//!
//! Calculates the angle at a vertex joint between the two bones
//! vertex→a and vertex→c.

use nalgebra::Vector3;

use super::joints::JointTriple;
use super::landmark::{LandmarkSample, PoseFrame};

/// Bones shorter than this are treated as degenerate
pub const MIN_BONE_LENGTH: f64 = 1e-6;

/// Slack (degrees) absorbing f32 landmark rounding in angle comparisons
pub const ANGLE_MATCH_EPSILON_DEG: f64 = 1e-3;

/// Which coordinates take part in the angle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngleMode {
    /// Image plane only (x, y); detector depth is the noisiest axis
    #[default]
    Planar,
    /// Full x, y, z
    Spatial,
}

impl AngleMode {
    fn vector(self, landmark: &LandmarkSample) -> Vector3<f64> {
        let z = match self {
            AngleMode::Planar => 0.0,
            AngleMode::Spatial => f64::from(landmark.z),
        };
        Vector3::new(f64::from(landmark.x), f64::from(landmark.y), z)
    }
}

/// Calculate the angle at `b` in degrees
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns 0° when either bone is degenerate, which simply fails
/// whatever criterion asked for it.
pub fn angle(a: &LandmarkSample, b: &LandmarkSample, c: &LandmarkSample, mode: AngleMode) -> f64 {
    let vertex = mode.vector(b);
    let v1 = mode.vector(a) - vertex;
    let v2 = mode.vector(c) - vertex;

    let mag1 = v1.norm();
    let mag2 = v2.norm();
    if mag1 <= MIN_BONE_LENGTH || mag2 <= MIN_BONE_LENGTH {
        return 0.0;
    }

    let cos_angle = (v1.dot(&v2) / (mag1 * mag2)).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees()
}

/// Angle of a named triple inside a frame
pub fn triple_angle(frame: &PoseFrame, triple: JointTriple, mode: AngleMode) -> f64 {
    angle(&frame[triple.a], &frame[triple.b], &frame[triple.c], mode)
}

/// Whether a measured angle is within `tolerance` of `target`
///
/// Also accepts the reading folded over by 180°, since an unsigned joint
/// angle can be measured from either ray.
pub fn angle_within(measured: f64, target: f64, tolerance: f64) -> bool {
    let tolerance = tolerance + ANGLE_MATCH_EPSILON_DEG;
    (target - measured).abs() <= tolerance || (target - measured + 180.0).abs() <= tolerance
}

/// Whether the triple's angle in `frame` matches `target` ± `tolerance`
pub fn angle_matches(
    frame: &PoseFrame,
    triple: JointTriple,
    target: f64,
    tolerance: f64,
    mode: AngleMode,
) -> bool {
    angle_within(triple_angle(frame, triple, mode), target, tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn point(x: f32, y: f32, z: f32) -> LandmarkSample {
        LandmarkSample::new(x, y, z, 1.0, 0)
    }

    #[test]
    fn test_flat_angle() {
        let angle = angle(
            &point(0.0, 0.0, 0.0),
            &point(1.0, 0.0, 0.0),
            &point(2.0, 0.0, 0.0),
            AngleMode::Planar,
        );
        assert_relative_eq!(angle, 180.0, epsilon = 1e-3);
    }

    #[test]
    fn test_right_angle() {
        let angle = angle(
            &point(0.0, 1.0, 0.0),
            &point(0.0, 0.0, 0.0),
            &point(1.0, 0.0, 0.0),
            AngleMode::Planar,
        );
        assert_relative_eq!(angle, 90.0, epsilon = 1e-3);
    }

    #[test]
    fn test_collinear_reversed() {
        let angle = angle(
            &point(2.0, 0.0, 0.0),
            &point(1.0, 0.0, 0.0),
            &point(0.0, 0.0, 0.0),
            AngleMode::Planar,
        );
        assert_relative_eq!(angle, 180.0, epsilon = 1e-3);
    }

    #[test]
    fn test_acute_angle() {
        let angle = angle(
            &point(1.0, 1.0, 0.0),
            &point(0.0, 0.0, 0.0),
            &point(1.0, 0.0, 0.0),
            AngleMode::Planar,
        );
        assert_relative_eq!(angle, 45.0, epsilon = 1e-3);
    }

    #[test]
    fn test_planar_ignores_depth() {
        let a = point(0.0, 1.0, 5.0);
        let b = point(0.0, 0.0, 0.0);
        let c = point(1.0, 0.0, -3.0);
        assert_relative_eq!(angle(&a, &b, &c, AngleMode::Planar), 90.0, epsilon = 1e-3);
        assert!(angle(&a, &b, &c, AngleMode::Spatial) > 90.0);
    }

    #[test]
    fn test_spatial_right_angle() {
        let angle = angle(
            &point(0.0, 0.0, 1.0),
            &point(0.0, 0.0, 0.0),
            &point(0.0, 1.0, 0.0),
            AngleMode::Spatial,
        );
        assert_relative_eq!(angle, 90.0, epsilon = 1e-3);
    }

    #[test]
    fn test_degenerate_bone_is_zero() {
        let b = point(1.0, 1.0, 0.0);
        assert_eq!(angle(&b, &b, &point(2.0, 2.0, 0.0), AngleMode::Planar), 0.0);
        // depth-only bone collapses in the image plane
        assert_eq!(angle(&point(1.0, 1.0, 3.0), &b, &point(0.0, 0.0, 0.0), AngleMode::Planar), 0.0);
    }

    #[test]
    fn test_angle_within() {
        assert!(angle_within(170.0, 180.0, 10.0));
        assert!(!angle_within(169.0, 180.0, 10.0));
        assert!(angle_within(90.0, 90.0, 0.0));
        // folded reading: 180° measured against a 0° target
        assert!(angle_within(180.0, 0.0, 5.0));
    }
}
