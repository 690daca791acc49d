// THEORY:
// Tunable behavior lives in plain structs with public fields, built in code by
// the caller. The defaults reproduce the reference detector exactly: a 3x3 box
// filter over the absolute frame difference and a strict threshold of 50 on the
// truncated window mean. Anything other than the defaults changes which pixels
// are classified as moving, so tests that rely on literal reference numbers
// always start from `Default::default()`.
//
// With the `serde` feature enabled both structs can be read from a config file;
// missing fields fall back to their defaults.

use crate::error::{MotionError, Result};

pub const DEFAULT_KERNEL_SIZE: usize = 3;
pub const DEFAULT_DIFFERENCE_THRESHOLD: u32 = 50;

/// Configuration for the two-frame (blurred difference) detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DetectorConfig {
    /// Side of the square smoothing window. Must be odd.
    pub kernel_size: usize,
    /// A pixel is moving when its window mean difference is strictly greater than this.
    pub difference_threshold: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            kernel_size: DEFAULT_KERNEL_SIZE,
            difference_threshold: DEFAULT_DIFFERENCE_THRESHOLD,
        }
    }
}

impl DetectorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.kernel_size == 0 || self.kernel_size % 2 == 0 {
            return Err(MotionError::InvalidKernel(self.kernel_size));
        }
        Ok(())
    }

    /// Distance from the window center to its edge (`H` in `K = 2H + 1`).
    pub fn half_kernel(&self) -> usize {
        self.kernel_size / 2
    }

    /// Number of samples in one window.
    pub fn window_area(&self) -> u64 {
        self.kernel_size as u64 * self.kernel_size as u64
    }
}

/// Orientation of the display relative to the camera's natural orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

/// Configuration for swipe recognition on top of per-frame detections.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Fraction of the frame that must be moving for a gesture to be in progress.
    pub min_fraction_in_motion: f64,
    /// Minimum horizontal travel, as a fraction of the frame width.
    pub min_horizontal_fraction: f64,
    /// Minimum vertical travel, as a fraction of the frame height.
    pub min_vertical_fraction: f64,
    /// Extra weight given to vertical travel on top of the frame aspect ratio
    /// when a swipe qualifies on both axes.
    pub aspect_weight: f64,
    pub horizontal_enabled: bool,
    pub vertical_enabled: bool,
    /// The camera image is a mirror of the scene (front-facing camera).
    pub mirrored: bool,
    pub rotation: Rotation,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_fraction_in_motion: 0.1,
            min_horizontal_fraction: 1.0 / 5.0,
            min_vertical_fraction: 1.0 / 6.0,
            aspect_weight: 6.0 / 5.0,
            horizontal_enabled: true,
            vertical_enabled: true,
            mirrored: true,
            rotation: Rotation::Deg0,
        }
    }
}
