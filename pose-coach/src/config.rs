//! Coach configuration
//!
//! Tunables for smoothing, comment filtering and preamble leniency.

use crate::error::{CoachError, CoachResult};
use crate::pose::AngleMode;

/// Frames averaged per smoothing window (1 = no smoothing)
pub const DEFAULT_WINDOW_SIZE: usize = 1;

/// Frames the smoothing window advances by
pub const DEFAULT_WINDOW_STEP: usize = 1;

/// Minimum frequency for a corrective comment to be reported
pub const DEFAULT_COMMENT_THRESHOLD: f32 = 0.0;

/// Tolerance multiplier for the "user is in position" check
pub const DEFAULT_PREAMBLE_TOLERANCE_FACTOR: f64 = 1.5;

/// Configuration for a coaching run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoachConfig {
    /// Smoothing window length in frames
    pub window_size: usize,
    /// Smoothing window advance in frames
    pub window_step: usize,
    /// Corrective comments rarer than this are dropped (0..=1)
    pub comment_threshold: f32,
    /// Preamble criteria use tolerances multiplied by this
    pub preamble_tolerance_factor: f64,
    pub angle_mode: AngleMode,
}

impl CoachConfig {
    pub fn new() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            window_step: DEFAULT_WINDOW_STEP,
            comment_threshold: DEFAULT_COMMENT_THRESHOLD,
            preamble_tolerance_factor: DEFAULT_PREAMBLE_TOLERANCE_FACTOR,
            angle_mode: AngleMode::default(),
        }
    }

    #[must_use]
    pub fn with_window(mut self, size: usize, step: usize) -> Self {
        self.window_size = size;
        self.window_step = step;
        self
    }

    #[must_use]
    pub fn with_comment_threshold(mut self, threshold: f32) -> Self {
        self.comment_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_preamble_tolerance_factor(mut self, factor: f64) -> Self {
        self.preamble_tolerance_factor = factor;
        self
    }

    #[must_use]
    pub fn with_angle_mode(mut self, mode: AngleMode) -> Self {
        self.angle_mode = mode;
        self
    }

    /// Check every field is in range
    pub fn validate(&self) -> CoachResult<()> {
        if self.window_size == 0 {
            return Err(CoachError::invalid_config("window_size must be at least 1"));
        }
        if self.window_step == 0 {
            return Err(CoachError::invalid_config("window_step must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.comment_threshold) {
            return Err(CoachError::invalid_config(format!(
                "comment_threshold must be within 0..=1, got {}",
                self.comment_threshold
            )));
        }
        if !self.preamble_tolerance_factor.is_finite() || self.preamble_tolerance_factor < 1.0 {
            return Err(CoachError::invalid_config(format!(
                "preamble_tolerance_factor must be finite and at least 1, got {}",
                self.preamble_tolerance_factor
            )));
        }
        Ok(())
    }
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = CoachConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window_size, 1);
        assert_eq!(config.preamble_tolerance_factor, 1.5);
        assert_eq!(config.angle_mode, AngleMode::Planar);
    }

    #[test]
    fn test_builders() {
        let config = CoachConfig::new()
            .with_window(5, 2)
            .with_comment_threshold(0.1)
            .with_angle_mode(AngleMode::Spatial);
        assert_eq!((config.window_size, config.window_step), (5, 2));
        assert_eq!(config.comment_threshold, 0.1);
        assert_eq!(config.angle_mode, AngleMode::Spatial);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(CoachConfig::new().with_window(0, 1).validate().is_err());
        assert!(CoachConfig::new().with_window(3, 0).validate().is_err());
        assert!(CoachConfig::new().with_comment_threshold(1.5).validate().is_err());
        assert!(CoachConfig::new().with_comment_threshold(f32::NAN).validate().is_err());
        assert!(CoachConfig::new()
            .with_preamble_tolerance_factor(0.5)
            .validate()
            .is_err());
    }
}
