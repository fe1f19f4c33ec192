//! Coach orchestrator - smoothing, shape dispatch and feedback assembly

use super::assessment::{AssessmentObserver, TracingObserver};
use super::feedback::{build_feedback, CoachFeedback, FeedbackKind};
use super::preamble::{in_preamble, preamble_criterion};
use super::repetition::count_alternates;
use crate::config::CoachConfig;
use crate::criteria::{ExerciseCriterion, ExerciseShape, ExerciseType, RepetitionPoses};
use crate::error::CoachResult;
use crate::pose::{smooth, PoseFrame};

/// Runs exercises over captured frames
pub struct Coach {
    config: CoachConfig,
    observer: Box<dyn AssessmentObserver>,
}

impl Coach {
    /// Coach with a validated configuration, reporting through `tracing`
    pub fn new(config: CoachConfig) -> CoachResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            observer: Box::new(TracingObserver),
        })
    }

    /// Replace the observer notified for every evaluated criterion
    #[must_use]
    pub fn with_observer(mut self, observer: impl AssessmentObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn config(&self) -> &CoachConfig {
        &self.config
    }

    /// Assess a catalog exercise
    pub fn assess(&self, exercise: ExerciseType, frames: &[PoseFrame]) -> Vec<CoachFeedback> {
        tracing::debug!(exercise = %exercise, frames = frames.len(), "assessing exercise");
        self.assess_shape(&exercise.shape(), frames)
    }

    /// Assess any exercise shape, including custom criteria
    ///
    /// Repetition shapes yield one feedback per pose; timed shapes yield one.
    pub fn assess_shape(
        &self,
        shape: &ExerciseShape<'_>,
        frames: &[PoseFrame],
    ) -> Vec<CoachFeedback> {
        let smoothed = smooth(frames, self.config.window_size, self.config.window_step);
        tracing::debug!(
            shape = shape.name(),
            raw = frames.len(),
            smoothed = smoothed.len(),
            "frames smoothed"
        );

        match shape {
            ExerciseShape::Repetition(poses) => self.assess_repetitions(poses, &smoothed),
            ExerciseShape::SymmetricTimed { left, right } => {
                let left = self.assess_timed(left, &smoothed);
                let right = self.assess_timed(right, &smoothed);
                // left wins ties
                let best = if right.success_rate > left.success_rate {
                    right
                } else {
                    left
                };
                vec![best]
            }
            ExerciseShape::SingleTimed(criterion) => vec![self.assess_timed(criterion, &smoothed)],
        }
    }

    fn assess_timed(&self, criterion: &ExerciseCriterion, frames: &[PoseFrame]) -> CoachFeedback {
        let preamble = preamble_criterion(criterion, self.config.preamble_tolerance_factor);
        build_feedback(
            frames,
            criterion,
            &preamble,
            FeedbackKind::TimeHeld,
            &self.config,
            self.observer.as_ref(),
        )
    }

    fn assess_repetitions(
        &self,
        poses: &RepetitionPoses<'_>,
        frames: &[PoseFrame],
    ) -> Vec<CoachFeedback> {
        let preambles: Vec<ExerciseCriterion> = poses
            .poses()
            .iter()
            .map(|pose| preamble_criterion(pose, self.config.preamble_tolerance_factor))
            .collect();

        let series: Vec<Vec<bool>> = preambles
            .iter()
            .map(|preamble| {
                frames
                    .iter()
                    .map(|frame| in_preamble(frame, preamble, self.config.angle_mode))
                    .collect()
            })
            .collect();
        let repetitions = count_alternates(&series);
        tracing::debug!(repetitions, poses = poses.len(), "repetitions counted");

        poses
            .poses()
            .iter()
            .zip(&preambles)
            .map(|(pose, preamble)| {
                build_feedback(
                    frames,
                    pose,
                    preamble,
                    FeedbackKind::Repetitions(repetitions),
                    &self.config,
                    self.observer.as_ref(),
                )
            })
            .collect()
    }
}

impl Default for Coach {
    fn default() -> Self {
        Self {
            config: CoachConfig::default(),
            observer: Box::new(TracingObserver),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coach::assessment::NoopObserver;
    use crate::coach::feedback::FeedbackUnit;
    use crate::criteria::{AngleCriterion, CommentCode, SidedCriterionPair};
    use crate::error::CoachError;
    use crate::pose::{joints, JointTriple, LandmarkSample, LANDMARK_COUNT};

    fn elbows(target: f64, name: &str) -> ExerciseCriterion {
        ExerciseCriterion::new(
            name,
            "TEST",
            vec![SidedCriterionPair::new(
                AngleCriterion::new(
                    joints::LEFT_WRIST_ELBOW_SHOULDER,
                    target,
                    10.0,
                    CommentCode::LeftWristElbowShoulderNotFlat,
                ),
                AngleCriterion::new(
                    joints::RIGHT_WRIST_ELBOW_SHOULDER,
                    target,
                    10.0,
                    CommentCode::RightWristElbowShoulderNotFlat,
                ),
            )],
            true,
        )
    }

    /// Left elbow at `left_deg`, right elbow at `right_deg`
    fn arms(left_deg: f32, right_deg: f32, timestamp: i64) -> PoseFrame {
        // every joint carries the capture instant
        let mut frame = [LandmarkSample::new(0.0, 0.0, 0.0, 1.0, timestamp); LANDMARK_COUNT];
        let mut place = |triple: JointTriple, degrees: f32, x: f32| {
            let (sin, cos) = degrees.to_radians().sin_cos();
            frame[triple.c] = LandmarkSample::new(x, -1.0, 0.0, 1.0, timestamp);
            frame[triple.b] = LandmarkSample::new(x, 0.0, 0.0, 1.0, timestamp);
            frame[triple.a] = LandmarkSample::new(x + sin, -cos, 0.0, 1.0, timestamp);
        };
        place(joints::LEFT_WRIST_ELBOW_SHOULDER, left_deg, 0.0);
        place(joints::RIGHT_WRIST_ELBOW_SHOULDER, right_deg, 5.0);
        frame
    }

    #[test]
    fn test_new_validates_config() {
        let err = Coach::new(CoachConfig::default().with_window(0, 1)).err();
        assert!(matches!(err, Some(CoachError::InvalidConfig { .. })));
    }

    #[test]
    fn test_single_timed() {
        let straight = elbows(180.0, "straight");
        let frames: Vec<PoseFrame> = (0..4).map(|i| arms(180.0, 180.0, i * 1_000_000)).collect();
        let coach = Coach::default().with_observer(NoopObserver);
        let feedbacks = coach.assess_shape(&ExerciseShape::SingleTimed(&straight), &frames);

        assert_eq!(feedbacks.len(), 1);
        assert_eq!(feedbacks[0].feedback_value, 3);
        assert_eq!(feedbacks[0].feedback_unit, FeedbackUnit::Seconds);
        assert_eq!(feedbacks[0].success_rate, 1.0);
    }

    #[test]
    fn test_symmetric_timed_picks_better_side() {
        let straight = elbows(180.0, "straight");
        let bent = elbows(90.0, "bent");
        let frames: Vec<PoseFrame> = (0..3).map(|i| arms(90.0, 90.0, i)).collect();

        let coach = Coach::default();
        let shape = ExerciseShape::SymmetricTimed {
            left: &straight,
            right: &bent,
        };
        let feedbacks = coach.assess_shape(&shape, &frames);
        assert_eq!(feedbacks.len(), 1);
        assert_eq!(feedbacks[0].criterion.name, "bent");
    }

    #[test]
    fn test_symmetric_tie_keeps_left() {
        let first = elbows(180.0, "first");
        let second = elbows(180.0, "second");
        let frames = vec![arms(180.0, 180.0, 0)];
        let shape = ExerciseShape::SymmetricTimed {
            left: &first,
            right: &second,
        };
        let feedbacks = Coach::default().assess_shape(&shape, &frames);
        assert_eq!(feedbacks[0].criterion.name, "first");
    }

    #[test]
    fn test_repetition_counts_cycles() {
        let up = elbows(180.0, "up");
        let down = elbows(90.0, "down");
        let poses = RepetitionPoses::new(vec![&up, &down]).unwrap();
        let frames: Vec<PoseFrame> = [180.0, 90.0, 180.0, 90.0, 180.0]
            .iter()
            .enumerate()
            .map(|(i, &deg)| arms(deg, deg, i as i64))
            .collect();

        let feedbacks = Coach::default().assess_shape(&ExerciseShape::Repetition(poses), &frames);
        assert_eq!(feedbacks.len(), 2);
        for feedback in &feedbacks {
            assert_eq!(feedback.feedback_value, 2);
            assert_eq!(feedback.feedback_unit, FeedbackUnit::Repetition);
            assert_eq!(feedback.success_rate, 1.0);
        }
        assert_eq!(feedbacks[0].criterion.name, "up");
    }

    #[test]
    fn test_smoothing_window_applied() {
        let straight = elbows(180.0, "straight");
        let frames: Vec<PoseFrame> = (0..6).map(|i| arms(180.0, 180.0, i * 1_000_000)).collect();
        let coach = Coach::new(CoachConfig::default().with_window(3, 3)).unwrap();
        let feedbacks = coach.assess_shape(&ExerciseShape::SingleTimed(&straight), &frames);
        // windows start at 0 s and 3 s
        assert_eq!(feedbacks[0].feedback_value, 3);
    }

    #[test]
    fn test_empty_capture() {
        for exercise in ExerciseType::ALL {
            let feedbacks = Coach::default().assess(exercise, &[]);
            assert!(!feedbacks.is_empty());
            for feedback in feedbacks {
                assert_eq!(feedback.success_rate, 0.0);
                assert_eq!(feedback.feedback_value, 0);
                assert!(feedback.comments.is_empty());
            }
        }
    }
}
