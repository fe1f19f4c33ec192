//! Joint topology - MediaPipe landmark indices and named joint triples
//!
//! Every criterion is built from the triples declared here. Each anatomical
//! relationship is declared once per side, mirrored left/right.

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const NOSE: usize = 0;
pub const LEFT_EYE_INNER: usize = 1;
pub const LEFT_EYE: usize = 2;
pub const LEFT_EYE_OUTER: usize = 3;
pub const RIGHT_EYE_INNER: usize = 4;
pub const RIGHT_EYE: usize = 5;
pub const RIGHT_EYE_OUTER: usize = 6;
pub const LEFT_EAR: usize = 7;
pub const RIGHT_EAR: usize = 8;
pub const MOUTH_LEFT: usize = 9;
pub const MOUTH_RIGHT: usize = 10;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_PINKY: usize = 17;
pub const RIGHT_PINKY: usize = 18;
pub const LEFT_INDEX: usize = 19;
pub const RIGHT_INDEX: usize = 20;
pub const LEFT_THUMB: usize = 21;
pub const RIGHT_THUMB: usize = 22;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;
pub const LEFT_HEEL: usize = 29;
pub const RIGHT_HEEL: usize = 30;
pub const LEFT_FOOT_INDEX: usize = 31;
pub const RIGHT_FOOT_INDEX: usize = 32;

// ============================================================================
// JOINT TRIPLE
// ============================================================================

/// Three joint indices; the angle is measured at `b`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct JointTriple {
    pub a: usize,
    /// Vertex of the angle
    pub b: usize,
    pub c: usize,
}

impl JointTriple {
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }
}

// ============================================================================
// NAMED TRIPLES
// ============================================================================

// Elbow - Shoulder - Hip
pub const LEFT_ELBOW_SHOULDER_HIP: JointTriple =
    JointTriple::new(LEFT_ELBOW, LEFT_SHOULDER, LEFT_HIP);
pub const RIGHT_ELBOW_SHOULDER_HIP: JointTriple =
    JointTriple::new(RIGHT_ELBOW, RIGHT_SHOULDER, RIGHT_HIP);

// Wrist - Elbow - Shoulder
pub const LEFT_WRIST_ELBOW_SHOULDER: JointTriple =
    JointTriple::new(LEFT_WRIST, LEFT_ELBOW, LEFT_SHOULDER);
pub const RIGHT_WRIST_ELBOW_SHOULDER: JointTriple =
    JointTriple::new(RIGHT_WRIST, RIGHT_ELBOW, RIGHT_SHOULDER);

// Shoulder - Hip - Knee
pub const LEFT_SHOULDER_HIP_KNEE: JointTriple =
    JointTriple::new(LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE);
pub const RIGHT_SHOULDER_HIP_KNEE: JointTriple =
    JointTriple::new(RIGHT_SHOULDER, RIGHT_HIP, RIGHT_KNEE);

// Hip - Knee - Ankle
pub const LEFT_HIP_KNEE_ANKLE: JointTriple = JointTriple::new(LEFT_HIP, LEFT_KNEE, LEFT_ANKLE);
pub const RIGHT_HIP_KNEE_ANKLE: JointTriple =
    JointTriple::new(RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE);

// Elbow - Shoulder - opposite Shoulder
pub const LEFT_ELBOW_SHOULDER_OPPSHOULDER: JointTriple =
    JointTriple::new(LEFT_ELBOW, LEFT_SHOULDER, RIGHT_SHOULDER);
pub const RIGHT_ELBOW_SHOULDER_OPPSHOULDER: JointTriple =
    JointTriple::new(RIGHT_ELBOW, RIGHT_SHOULDER, LEFT_SHOULDER);

// opposite Hip - Hip - Knee
pub const LEFT_OPPHIP_HIP_KNEE: JointTriple = JointTriple::new(RIGHT_HIP, LEFT_HIP, LEFT_KNEE);
pub const RIGHT_OPPHIP_HIP_KNEE: JointTriple =
    JointTriple::new(LEFT_HIP, RIGHT_HIP, RIGHT_KNEE);

/// Every named triple, left then right for each relationship
pub const ALL_JOINT_LINKS: [JointTriple; 12] = [
    LEFT_ELBOW_SHOULDER_HIP,
    RIGHT_ELBOW_SHOULDER_HIP,
    LEFT_WRIST_ELBOW_SHOULDER,
    RIGHT_WRIST_ELBOW_SHOULDER,
    LEFT_SHOULDER_HIP_KNEE,
    RIGHT_SHOULDER_HIP_KNEE,
    LEFT_HIP_KNEE_ANKLE,
    RIGHT_HIP_KNEE_ANKLE,
    LEFT_ELBOW_SHOULDER_OPPSHOULDER,
    RIGHT_ELBOW_SHOULDER_OPPSHOULDER,
    LEFT_OPPHIP_HIP_KNEE,
    RIGHT_OPPHIP_HIP_KNEE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::LANDMARK_COUNT;

    #[test]
    fn test_links_within_layout() {
        for triple in ALL_JOINT_LINKS {
            assert!(triple.a < LANDMARK_COUNT);
            assert!(triple.b < LANDMARK_COUNT);
            assert!(triple.c < LANDMARK_COUNT);
        }
    }

    #[test]
    fn test_links_are_mirrored_pairs() {
        for pair in ALL_JOINT_LINKS.chunks(2) {
            let (left, right) = (pair[0], pair[1]);
            assert_ne!(left, right);
            // vertex moves to the other side of the body
            assert_eq!(left.b + 1, right.b);
        }
    }
}
