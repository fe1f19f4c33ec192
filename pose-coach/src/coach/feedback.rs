//! Feedback aggregation - per-frame assessments into one report per pose
//!
//! Comment frequencies are counted over every comment fired across the
//! assessed frames. The frequency of `Success` is the success rate; the
//! corrective codes become per-joint feedback sorted from rarest to most
//! frequent.

use std::collections::HashMap;
use std::fmt;

use super::assessment::{assess_sample, AssessmentObserver};
use super::preamble::in_preamble;
use crate::config::CoachConfig;
use crate::criteria::{CommentCode, ExerciseCriterion};
use crate::pose::{frame_timestamp, PoseFrame};

const MICROS_PER_SECOND: i64 = 1_000_000;

// ============================================================================
// TYPES
// ============================================================================

/// How often one corrective comment fired
#[derive(Clone, Debug, PartialEq)]
pub struct JointFeedback {
    pub code: CommentCode,
    /// Message shown to the user
    pub comment: String,
    /// Frequency among all fired comments (0-1)
    pub rate: f32,
}

/// Unit of `CoachFeedback::feedback_value`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackUnit {
    Repetition,
    Seconds,
}

impl FeedbackUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackUnit::Repetition => "REPETITION",
            FeedbackUnit::Seconds => "SECONDS",
        }
    }
}

impl fmt::Display for FeedbackUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the feedback value measures
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Repetitions already counted across the exercise's poses
    Repetitions(u32),
    /// Whole seconds spent in position
    TimeHeld,
}

/// Letter grade for a success rate
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeedbackRank {
    S,
    A,
    B,
    C,
    D,
    X,
}

impl FeedbackRank {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackRank::S => "S",
            FeedbackRank::A => "A",
            FeedbackRank::B => "B",
            FeedbackRank::C => "C",
            FeedbackRank::D => "D",
            FeedbackRank::X => "X",
        }
    }
}

impl fmt::Display for FeedbackRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report for one criterion after a coaching run
#[derive(Clone, Debug, PartialEq)]
pub struct CoachFeedback {
    /// Corrective comments, unique per code, ascending by rate
    pub comments: Vec<JointFeedback>,
    /// Frequency of passing pairs among all fired comments (0-1)
    pub success_rate: f32,
    pub feedback_value: u64,
    pub feedback_unit: FeedbackUnit,
    pub criterion: ExerciseCriterion,
}

impl CoachFeedback {
    pub fn rank(&self) -> FeedbackRank {
        rate_to_rank(self.success_rate)
    }
}

impl fmt::Display for CoachFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} (rank {}, {:.0}% success)",
            self.criterion.name,
            self.feedback_value,
            self.feedback_unit,
            self.rank(),
            self.success_rate * 100.0
        )?;
        for comment in &self.comments {
            write!(f, "\n  - {} ({:.0}%)", comment.comment, comment.rate * 100.0)?;
        }
        Ok(())
    }
}

// ============================================================================
// RANKING
// ============================================================================

/// Map a success rate onto a letter grade
pub fn rate_to_rank(rate: f32) -> FeedbackRank {
    if rate >= 0.9 {
        FeedbackRank::S
    } else if rate >= 0.8 {
        FeedbackRank::A
    } else if rate >= 0.7 {
        FeedbackRank::B
    } else if rate >= 0.6 {
        FeedbackRank::C
    } else if rate > 0.1 {
        FeedbackRank::D
    } else {
        FeedbackRank::X
    }
}

/// Rank of the mean success rate across `feedbacks` (X when empty)
pub fn overall_rank(feedbacks: &[CoachFeedback]) -> FeedbackRank {
    if feedbacks.is_empty() {
        return FeedbackRank::X;
    }
    let total: f32 = feedbacks.iter().map(|feedback| feedback.success_rate).sum();
    rate_to_rank(total / feedbacks.len() as f32)
}

// ============================================================================
// AGGREGATION
// ============================================================================

/// Whole seconds between the first and last frame
fn held_seconds(frames: &[&PoseFrame]) -> u64 {
    match (frames.first(), frames.last()) {
        (Some(first), Some(last)) => {
            let elapsed = frame_timestamp(last) - frame_timestamp(first);
            u64::try_from(elapsed / MICROS_PER_SECOND).unwrap_or(0)
        }
        _ => 0,
    }
}

/// Build the feedback for one criterion over a capture
///
/// Frames failing `preamble` are dropped first; the rest are timed and
/// assessed against the strict `criterion`.
pub fn build_feedback(
    frames: &[PoseFrame],
    criterion: &ExerciseCriterion,
    preamble: &ExerciseCriterion,
    kind: FeedbackKind,
    config: &CoachConfig,
    observer: &dyn AssessmentObserver,
) -> CoachFeedback {
    let kept: Vec<&PoseFrame> = frames
        .iter()
        .filter(|frame| in_preamble(frame, preamble, config.angle_mode))
        .collect();

    let mut counts: HashMap<CommentCode, usize> = HashMap::new();
    let mut total = 0_usize;
    for frame in &kept {
        let assessment = assess_sample(frame, criterion, config.angle_mode, observer);
        total += assessment.comments.len();
        for code in assessment.comments {
            *counts.entry(code).or_insert(0) += 1;
        }
    }

    let frequency = |count: usize| {
        if total == 0 {
            0.0
        } else {
            count as f32 / total as f32
        }
    };

    let success_rate = counts
        .get(&CommentCode::Success)
        .map_or(0.0, |&count| frequency(count));

    let mut comments: Vec<JointFeedback> = counts
        .iter()
        .filter(|(code, _)| !code.is_success())
        .map(|(&code, &count)| JointFeedback {
            code,
            comment: code.description().to_string(),
            rate: frequency(count),
        })
        .filter(|feedback| feedback.rate >= config.comment_threshold)
        .collect();
    comments.sort_by(|a, b| a.rate.total_cmp(&b.rate).then(a.code.cmp(&b.code)));

    let (feedback_value, feedback_unit) = match kind {
        FeedbackKind::Repetitions(count) => (u64::from(count), FeedbackUnit::Repetition),
        FeedbackKind::TimeHeld => (held_seconds(&kept), FeedbackUnit::Seconds),
    };

    tracing::debug!(
        criterion = %criterion.name,
        frames = frames.len(),
        kept = kept.len(),
        success_rate,
        feedback_value,
        "feedback built"
    );

    CoachFeedback {
        comments,
        success_rate,
        feedback_value,
        feedback_unit,
        criterion: criterion.clone(),
    }
}
