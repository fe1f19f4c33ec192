//! Property-based tests for geometry, matching and repetition counting.
//!
//! Run with: cargo test -p pose-coach -- properties

mod common;

use common::bend;
use pose_coach::coach::{assess_sample, count_alternates, rate_to_rank, NoopObserver};
use pose_coach::criteria::{AngleCriterion, CommentCode, ExerciseCriterion, SidedCriterionPair};
use pose_coach::pose::{
    angle, angle_within, triple_angle, AngleMode, LandmarkSample, PoseFrame, ALL_JOINT_LINKS,
    LANDMARK_COUNT,
};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_landmark() -> impl Strategy<Value = LandmarkSample> {
    prop::array::uniform3(-10.0..10.0f32)
        .prop_map(|[x, y, z]| LandmarkSample::new(x, y, z, 1.0, 0))
}

fn arb_mode() -> impl Strategy<Value = AngleMode> {
    prop_oneof![Just(AngleMode::Planar), Just(AngleMode::Spatial)]
}

fn arb_frame() -> impl Strategy<Value = PoseFrame> {
    prop::collection::vec(arb_landmark(), LANDMARK_COUNT).prop_map(|landmarks| {
        let mut frame = [LandmarkSample::default(); LANDMARK_COUNT];
        frame.copy_from_slice(&landmarks);
        frame
    })
}

/// Mirrored link slot, then (target offset, tolerance) for the left and right side
type PairSpec = (usize, (f64, f64), (f64, f64));

fn arb_pair_specs() -> impl Strategy<Value = Vec<PairSpec>> {
    let side = (-30.0..30.0f64, 0.0..20.0f64);
    prop::collection::vec((0..ALL_JOINT_LINKS.len() / 2, side.clone(), side), 1..=4)
}

/// Criterion whose targets sit near the angles measured on `frame`
fn criterion_near(frame: &PoseFrame, specs: &[PairSpec]) -> ExerciseCriterion {
    let side = |link: usize, (offset, tolerance): (f64, f64)| {
        let joints = ALL_JOINT_LINKS[link];
        let measured = triple_angle(frame, joints, AngleMode::Planar);
        AngleCriterion::new(joints, measured + offset, tolerance, CommentCode::NotImplemented)
    };
    let pairs = specs
        .iter()
        .map(|&(slot, left, right)| {
            SidedCriterionPair::new(side(2 * slot, left), side(2 * slot + 1, right))
        })
        .collect();
    ExerciseCriterion::new("near", "TEST", pairs, true)
}

/// Match series of the first pose; the second is its complement
fn arb_clean_series() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..40)
}

// =============================================================================
// Geometry
// =============================================================================

proptest! {
    #[test]
    fn angle_is_symmetric(
        a in arb_landmark(),
        b in arb_landmark(),
        c in arb_landmark(),
        mode in arb_mode(),
    ) {
        let forward = angle(&a, &b, &c, mode);
        let backward = angle(&c, &b, &a, mode);
        prop_assert!((forward - backward).abs() < 1e-9);
        prop_assert!(forward >= 0.0 && forward <= 180.0 + 1e-9);
    }

    #[test]
    fn triple_built_at_target_matches_exactly(
        vertex in prop::array::uniform2(-5.0..5.0f32),
        heading in 0.0..360.0f32,
        target in 5.0..175.0f32,
        first_length in 1.0..5.0f32,
        second_length in 1.0..5.0f32,
    ) {
        let vertex = (vertex[0], vertex[1]);
        let (sin, cos) = heading.to_radians().sin_cos();
        let a = (vertex.0 + first_length * cos, vertex.1 + first_length * sin);
        let c = bend(vertex, a, target, second_length);

        let point = |(x, y): (f32, f32)| LandmarkSample::new(x, y, 0.0, 1.0, 0);
        let measured = angle(&point(a), &point(vertex), &point(c), AngleMode::Planar);
        prop_assert!(
            angle_within(measured, f64::from(target), 0.0),
            "measured {} for target {}",
            measured,
            target
        );
    }

    #[test]
    fn widening_tolerance_keeps_matches(
        measured in 0.0..=180.0f64,
        target in 0.0..=180.0f64,
        tolerance in 0.0..90.0f64,
        extra in 0.0..90.0f64,
    ) {
        if angle_within(measured, target, tolerance) {
            prop_assert!(angle_within(measured, target, tolerance + extra));
        }
    }

    #[test]
    fn scaled_criterion_keeps_matching_frames(
        frame in arb_frame(),
        specs in arb_pair_specs(),
        factor in 1.0..3.0f64,
    ) {
        let criterion = criterion_near(&frame, &specs);
        let strict = assess_sample(&frame, &criterion, AngleMode::Planar, &NoopObserver);
        if strict.matched {
            let lenient = criterion.with_scaled_tolerance(factor);
            let widened = assess_sample(&frame, &lenient, AngleMode::Planar, &NoopObserver);
            prop_assert!(widened.matched);
        }
    }

    #[test]
    fn rank_never_improves_with_lower_rate(low in 0.0..=1.0f32, high in 0.0..=1.0f32) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        prop_assert!(rate_to_rank(high) <= rate_to_rank(low));
    }
}

// =============================================================================
// Repetition counting
// =============================================================================

proptest! {
    #[test]
    fn ambiguous_frames_are_ignored(
        first in arb_clean_series(),
        inserts in prop::collection::vec((any::<prop::sample::Index>(), any::<bool>()), 0..20),
    ) {
        let second: Vec<bool> = first.iter().map(|matched| !matched).collect();
        let expected = count_alternates(&[first.clone(), second.clone()]);

        let (mut noisy_first, mut noisy_second) = (first, second);
        for (position, both) in inserts {
            // both poses matching, or neither
            let at = position.index(noisy_first.len() + 1);
            noisy_first.insert(at, both);
            noisy_second.insert(at, both);
        }

        prop_assert_eq!(count_alternates(&[noisy_first, noisy_second]), expected);
    }

    #[test]
    fn repetitions_bounded_by_frames(first in arb_clean_series()) {
        let second: Vec<bool> = first.iter().map(|matched| !matched).collect();
        let count = count_alternates(&[first.clone(), second]) as usize;
        prop_assert!(count * 2 <= first.len());
    }
}
