// THEORY:
// The `detector` module is the top-level API of the crate. It encapsulates the
// whole stack (frame validation, the difference engine, classification and the
// running centroid) behind one call that takes borrowed frames and returns three
// numbers: the centroid of the moving pixels and the fraction of the frame that
// moved.
//
// Key architectural principles:
// 1.  **Inputs select the algorithm**: One frame means the caller supplies a
//     motion mask and the zero-pixel scan runs. Two frames mean the blurred
//     frame difference runs. `FrameInput` makes that choice explicit and each
//     case maps to one `MotionStrategy`.
// 2.  **Fail before reading**: Every precondition (shape agreement, kernel size)
//     is checked before the first pixel is touched. A detection either completes
//     or returns an error; there is nothing in between.
// 3.  **Stateless**: The detector holds configuration only. Calls are independent
//     and no frame outlives the call that borrowed it.

use crate::config::DetectorConfig;
use crate::core_modules::centroid::{RunningCentroid, SENTINEL};
use crate::core_modules::classifier::{BlurredDifferenceScan, MotionStrategy, ZeroPixelScan};
use crate::core_modules::frame::Frame;
use crate::error::Result;
use log::debug;

/// The frames handed to one detection call.
#[derive(Debug, Clone, Copy)]
pub enum FrameInput<'a> {
    /// A motion mask in which moving pixels are exactly zero.
    Mask(Frame<'a>),
    /// Two consecutive frames of the same shape.
    Pair {
        current: Frame<'a>,
        previous: Frame<'a>,
    },
}

impl<'a> From<Frame<'a>> for FrameInput<'a> {
    fn from(mask: Frame<'a>) -> Self {
        FrameInput::Mask(mask)
    }
}

impl<'a> From<(Frame<'a>, Frame<'a>)> for FrameInput<'a> {
    fn from((current, previous): (Frame<'a>, Frame<'a>)) -> Self {
        FrameInput::Pair { current, previous }
    }
}

/// The result of one detection call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Detection {
    /// Mean column of the moving pixels, or -1.0 when none moved.
    pub x: f64,
    /// Mean row of the moving pixels, or -1.0 when none moved.
    pub y: f64,
    /// Moving pixels divided by the full frame area.
    pub fraction_moving: f64,
    pub moving_pixels: usize,
}

impl Detection {
    /// The sentinel result for a frame in which nothing moved.
    pub fn no_motion() -> Self {
        Self {
            x: SENTINEL,
            y: SENTINEL,
            fraction_moving: 0.0,
            moving_pixels: 0,
        }
    }

    fn from_centroid(centroid: &RunningCentroid, frame_area: usize) -> Self {
        let (x, y) = centroid.mean();
        Self {
            x,
            y,
            fraction_moving: centroid.count() as f64 / frame_area as f64,
            moving_pixels: centroid.count(),
        }
    }

    pub fn has_motion(&self) -> bool {
        self.moving_pixels > 0
    }

    /// The centroid, or `None` for the no-motion sentinel.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        self.has_motion().then_some((self.x, self.y))
    }
}

/// Computes motion centroids from grayscale frames.
#[derive(Debug, Clone)]
pub struct MotionDetector {
    config: DetectorConfig,
}

impl Default for MotionDetector {
    fn default() -> Self {
        Self {
            config: DetectorConfig::default(),
        }
    }
}

impl MotionDetector {
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Runs whichever algorithm matches the supplied frames.
    pub fn detect<'a>(&self, input: impl Into<FrameInput<'a>>) -> Result<Detection> {
        match input.into() {
            FrameInput::Mask(mask) => Ok(self.detect_mask(mask)),
            FrameInput::Pair { current, previous } => self.detect_difference(current, previous),
        }
    }

    /// Single-frame variant: every zero sample of `mask` is a moving pixel.
    pub fn detect_mask(&self, mask: Frame<'_>) -> Detection {
        run(&ZeroPixelScan::new(mask))
    }

    /// Two-frame variant: blurred absolute difference against the threshold.
    pub fn detect_difference(&self, current: Frame<'_>, previous: Frame<'_>) -> Result<Detection> {
        let scan = BlurredDifferenceScan::new(current, previous, &self.config)?;
        Ok(run(&scan))
    }
}

fn run(strategy: &dyn MotionStrategy) -> Detection {
    let mut centroid = RunningCentroid::new();
    strategy.accumulate(&mut centroid);
    let detection = Detection::from_centroid(&centroid, strategy.frame_area());
    debug!(
        "{} scan: {} of {} pixels moving, centroid ({:.2}, {:.2})",
        strategy.name(),
        detection.moving_pixels,
        strategy.frame_area(),
        detection.x,
        detection.y
    );
    detection
}
