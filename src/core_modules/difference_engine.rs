// THEORY:
// The difference engine drives a `WindowSum` across every interior pixel of a frame
// pair in raster order and hands each pixel's smoothed difference to a visitor.
// It owns the edge policy: a pixel closer than H to any border has no full
// K x K neighborhood and is simply never visited. Classification and
// accumulation are the visitor's business; the engine only produces numbers.

use crate::core_modules::frame::Frame;
use crate::core_modules::window_sum::WindowSum;
use std::ops::Range;

/// Columns and rows whose K x K neighborhood lies fully inside a `width` x `height` frame.
///
/// Both ranges are empty when the frame is smaller than the kernel.
pub fn interior(width: usize, height: usize, kernel: usize) -> (Range<usize>, Range<usize>) {
    let half = kernel / 2;
    if width < kernel || height < kernel {
        return (0..0, 0..0);
    }
    (half..width - half, half..height - half)
}

pub struct DifferenceEngine {
    kernel: usize,
}

impl DifferenceEngine {
    /// `kernel` must be odd; `DetectorConfig::validate` guarantees it.
    pub fn new(kernel: usize) -> Self {
        debug_assert!(kernel % 2 == 1);
        Self { kernel }
    }

    /// Calls `visit(x, y, smoothed)` for every interior pixel, row by row,
    /// left to right. `smoothed` is the truncated mean absolute difference over
    /// the pixel's window.
    pub fn scan<F>(&self, current: Frame<'_>, previous: Frame<'_>, mut visit: F)
    where
        F: FnMut(usize, usize, u32),
    {
        let (columns, rows) = interior(current.width(), current.height(), self.kernel);
        if columns.is_empty() || rows.is_empty() {
            return;
        }

        let mut window = WindowSum::new(current, previous, self.kernel);
        for y in rows {
            window.reset_row(y);
            for x in columns.clone() {
                window.advance(x);
                visit(x, y, window.smoothed());
            }
        }
    }
}
