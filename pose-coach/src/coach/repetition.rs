//! Repetition counter
//!
//! Given one "matched" series per canonical pose, counts how many times the
//! user cycled through the poses in order.

/// Count completed repetitions across per-pose match series
///
/// Indices where zero or several poses match are dropped. Starting from the
/// first remaining pose, every advance to the next pose in cyclic order is a
/// transition; two transitions make one repetition. Series of unequal
/// length are compared over the shortest one.
pub fn count_alternates(series: &[Vec<bool>]) -> u32 {
    let pose_count = series.len();
    let Some(frame_count) = series.iter().map(Vec::len).min() else {
        return 0;
    };

    let states = (0..frame_count).filter_map(|frame| {
        let mut matching = series
            .iter()
            .enumerate()
            .filter(|(_, poses)| poses[frame])
            .map(|(pose, _)| pose);
        match (matching.next(), matching.next()) {
            (Some(pose), None) => Some(pose),
            _ => None,
        }
    });

    let mut transitions = 0_u32;
    let mut current: Option<usize> = None;
    for state in states {
        match current {
            None => current = Some(state),
            Some(pose) if state == (pose + 1) % pose_count => {
                transitions += 1;
                current = Some(state);
            }
            Some(_) => {}
        }
    }

    transitions / 2
}
