//! Sliding-window smoothing over captured frames
//!
//! Averages joint positions over a fixed window to damp single-frame
//! detector jitter before angle thresholds are applied.

use super::landmark::{frame_timestamp, LandmarkSample, PoseFrame, LANDMARK_COUNT};

/// Mean of every joint across a window of frames
///
/// x, y, z and presence are averaged. The timestamp is the first frame's,
/// so durations measured on smoothed frames start where the window starts.
/// Returns None for an empty window.
pub fn window_mean(window: &[PoseFrame]) -> Option<PoseFrame> {
    let first = window.first()?;
    let count = window.len() as f32;

    let mut mean = [LandmarkSample::default(); LANDMARK_COUNT];
    for (joint, averaged) in mean.iter_mut().enumerate() {
        let (mut x, mut y, mut z, mut presence) = (0.0_f32, 0.0_f32, 0.0_f32, 0.0_f32);
        for frame in window {
            let sample = &frame[joint];
            x += sample.x;
            y += sample.y;
            z += sample.z;
            presence += sample.presence;
        }
        *averaged = LandmarkSample::new(
            x / count,
            y / count,
            z / count,
            presence / count,
            first[joint].timestamp_micros,
        );
    }
    Some(mean)
}

/// Apply `window_mean` over every full window of `size` frames, advancing by `step`
///
/// Trailing frames that do not fill a window are dropped. A size and step of
/// 1 returns the frames unchanged. Zero size or step yields nothing.
pub fn smooth(frames: &[PoseFrame], size: usize, step: usize) -> Vec<PoseFrame> {
    if size == 0 || step == 0 {
        return Vec::new();
    }
    if size == 1 && step == 1 {
        return frames.to_vec();
    }

    frames
        .windows(size)
        .step_by(step)
        .filter_map(window_mean)
        .collect()
}

/// Suffix of frames lying within `duration_micros` of the last frame
///
/// Walks backwards accumulating the gaps between consecutive frames and
/// stops at the first frame that would push the total past the duration.
pub fn trailing_window(frames: &[PoseFrame], duration_micros: i64) -> &[PoseFrame] {
    let Some(last) = frames.last() else {
        return frames;
    };

    let mut elapsed = 0_i64;
    let mut previous = frame_timestamp(last);
    let mut kept = 0;
    for frame in frames.iter().rev() {
        let timestamp = frame_timestamp(frame);
        elapsed += previous - timestamp;
        previous = timestamp;
        if elapsed > duration_micros {
            break;
        }
        kept += 1;
    }
    &frames[frames.len() - kept..]
}
