// THEORY:
// The classifier decides, pixel by pixel, whether something moved. There are
// exactly two ways to decide, and each is packaged as a `MotionStrategy` so the
// detector façade can pick one without branching through a shared loop:
//
// 1.  **ZeroPixelScan** (single frame): the caller has already produced a mask
//     in which moving pixels are exactly zero. Every pixel of the frame is
//     tested, borders included.
// 2.  **BlurredDifferenceScan** (two frames): the absolute difference between
//     the frames is box filtered by the difference engine, and a pixel moves
//     when its smoothed value is strictly above the threshold. Only interior
//     pixels are tested.
//
// Both strategies feed moving pixels to a `RunningCentroid` in raster order and
// report the full frame area as the denominator for the moving fraction, even
// though the two-frame scan never looks at the border band.

use crate::config::DetectorConfig;
use crate::core_modules::centroid::RunningCentroid;
use crate::core_modules::difference_engine::DifferenceEngine;
use crate::core_modules::frame::{Frame, Sample};
use crate::error::{MotionError, Result};

/// Single-frame test: only an exact zero counts as motion.
#[inline]
pub fn is_zero_sample(value: Sample) -> bool {
    value == 0
}

/// Two-frame test on a smoothed difference.
#[inline]
pub fn exceeds_threshold(smoothed: u32, threshold: u32) -> bool {
    smoothed > threshold
}

/// One way of turning input frames into moving pixels.
pub trait MotionStrategy {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Pixel count of the frame, the denominator of the moving fraction.
    fn frame_area(&self) -> usize;

    /// Observes every moving pixel, in raster order.
    fn accumulate(&self, centroid: &mut RunningCentroid);
}

/// Motion mask scan over a single frame.
pub struct ZeroPixelScan<'a> {
    frame: Frame<'a>,
}

impl<'a> ZeroPixelScan<'a> {
    pub fn new(frame: Frame<'a>) -> Self {
        Self { frame }
    }
}

impl MotionStrategy for ZeroPixelScan<'_> {
    fn name(&self) -> &'static str {
        "zero-pixel"
    }

    fn frame_area(&self) -> usize {
        self.frame.area()
    }

    fn accumulate(&self, centroid: &mut RunningCentroid) {
        for y in 0..self.frame.height() {
            for (x, &value) in self.frame.row(y).iter().enumerate() {
                if is_zero_sample(value) {
                    centroid.observe(x, y);
                }
            }
        }
    }
}

/// Box-filtered frame difference scan.
pub struct BlurredDifferenceScan<'a> {
    current: Frame<'a>,
    previous: Frame<'a>,
    engine: DifferenceEngine,
    threshold: u32,
}

impl<'a> BlurredDifferenceScan<'a> {
    /// Fails before touching any pixel if the frames differ in shape or the
    /// kernel is unusable.
    pub fn new(current: Frame<'a>, previous: Frame<'a>, config: &DetectorConfig) -> Result<Self> {
        config.validate()?;
        if current.dimensions() != previous.dimensions() {
            return Err(MotionError::DimensionMismatch {
                current: current.dimensions(),
                previous: previous.dimensions(),
            });
        }
        Ok(Self {
            current,
            previous,
            engine: DifferenceEngine::new(config.kernel_size),
            threshold: config.difference_threshold,
        })
    }
}

impl MotionStrategy for BlurredDifferenceScan<'_> {
    fn name(&self) -> &'static str {
        "blurred-difference"
    }

    fn frame_area(&self) -> usize {
        self.current.area()
    }

    fn accumulate(&self, centroid: &mut RunningCentroid) {
        let threshold = self.threshold;
        self.engine
            .scan(self.current, self.previous, |x, y, smoothed| {
                if exceeds_threshold(smoothed, threshold) {
                    centroid.observe(x, y);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        assert!(is_zero_sample(0));
        assert!(!is_zero_sample(1));
        assert!(!is_zero_sample(255));
        assert!(exceeds_threshold(51, 50));
        assert!(!exceeds_threshold(50, 50));
    }

    #[test]
    fn zero_scan_includes_corners() {
        let mut data = vec![7u8; 16];
        data[0] = 0;
        data[15] = 0;
        let frame = Frame::packed(4, 4, &data).unwrap();
        let mut centroid = RunningCentroid::new();
        ZeroPixelScan::new(frame).accumulate(&mut centroid);
        assert_eq!(centroid.count(), 2);
        assert_eq!(centroid.mean(), (1.5, 1.5));
    }

    #[test]
    fn difference_scan_rejects_mismatched_frames() {
        let a = vec![0u8; 12];
        let current = Frame::packed(4, 3, &a).unwrap();
        let previous = Frame::packed(3, 4, &a).unwrap();
        let err = BlurredDifferenceScan::new(current, previous, &DetectorConfig::default())
            .err()
            .unwrap();
        assert_eq!(
            err,
            MotionError::DimensionMismatch {
                current: (4, 3),
                previous: (3, 4)
            }
        );
    }

    #[test]
    fn difference_scan_uses_full_area() {
        let a = vec![0u8; 20];
        let frame = Frame::packed(5, 4, &a).unwrap();
        let scan = BlurredDifferenceScan::new(frame, frame, &DetectorConfig::default()).unwrap();
        assert_eq!(scan.frame_area(), 20);
    }
}
