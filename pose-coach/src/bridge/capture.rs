//! Capture storage and JS bridge
//!
//! Receives MediaPipe landmarks from JavaScript, one flat buffer per
//! detected frame, and keeps them until a coaching run reads them.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::error::CoachResult;
use crate::pose::{decode_pose_frame, trailing_window, PoseFrame};

const MICROS_PER_MILLI: f64 = 1_000.0;
const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Frames captured since the last clear
#[derive(Default)]
pub(crate) struct CaptureStore {
    frames: Vec<PoseFrame>,
}

impl CaptureStore {
    /// Decode and append one frame
    pub(crate) fn record(&mut self, data: &[f32], timestamp_micros: i64) -> CoachResult<()> {
        let frame = decode_pose_frame(data, timestamp_micros)?;
        self.frames.push(frame);
        Ok(())
    }

    /// Drop every frame older than `seconds` before the newest one
    pub(crate) fn keep_last(&mut self, seconds: f64) {
        let duration = (seconds.max(0.0) * MICROS_PER_SECOND) as i64;
        let kept = trailing_window(&self.frames, duration).len();
        let dropped = self.frames.len() - kept;
        self.frames.drain(..dropped);
    }

    pub(crate) fn clear(&mut self) {
        self.frames.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.frames.len()
    }

    pub(crate) fn frames(&self) -> &[PoseFrame] {
        &self.frames
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static CAPTURE: RefCell<CaptureStore> = RefCell::new(CaptureStore::default());
}

/// Run `f` against the current capture
pub(crate) fn with_capture<R>(f: impl FnOnce(&CaptureStore) -> R) -> R {
    CAPTURE.with(|store_cell| f(&store_cell.borrow()))
}

fn record_or_warn(data: &[f32], timestamp_micros: i64) {
    let result = CAPTURE.with(|store_cell| store_cell.borrow_mut().record(data, timestamp_micros));
    if let Err(err) = result {
        web_sys::console::warn_1(&err.to_string().into());
    }
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array of 99 values
/// (33 landmarks × x, y, z) or 132 values (× x, y, z, presence).
/// Timestamped with the browser clock.
#[wasm_bindgen]
pub fn record_landmarks(data: &[f32]) {
    let timestamp_micros = (js_sys::Date::now() * MICROS_PER_MILLI) as i64;
    record_or_warn(data, timestamp_micros);
}

/// Same as `record_landmarks` with an explicit capture time (e.g. video time)
#[wasm_bindgen]
pub fn record_landmarks_at(data: &[f32], timestamp_micros: i64) {
    record_or_warn(data, timestamp_micros);
}

#[wasm_bindgen]
pub fn clear_capture() {
    CAPTURE.with(|store_cell| store_cell.borrow_mut().clear());
}

/// Number of frames currently captured
#[wasm_bindgen]
pub fn capture_len() -> usize {
    with_capture(CaptureStore::len)
}

/// Keep only the frames of the last `seconds` of capture
#[wasm_bindgen]
pub fn keep_last_seconds(seconds: f64) {
    CAPTURE.with(|store_cell| store_cell.borrow_mut().keep_last(seconds));
}
