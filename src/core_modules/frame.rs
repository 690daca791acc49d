// THEORY:
// The `Frame` is the most fundamental unit of the system: a read-only window onto
// one grayscale image that somebody else owns. It never copies or retains pixel
// data. The detector borrows a frame for the length of one call and the lifetime
// on `Frame<'a>` makes it impossible to hold on to it afterwards.
//
// Key architectural principles:
// 1.  **Validate once, read freely**: The geometry (width, height, row stride) is
//     checked against the backing slice when the frame is built. After that, the
//     hot path (`get`) only carries a debug assertion, never a runtime check of
//     its own beyond the slice index.
// 2.  **Padding aware**: Rows may be padded, so a row starts at `y * stride`, not
//     `y * width`. Bytes in the padding are never read.
// 3.  **Single-frame heuristics only**: Anything computed here (the mean
//     intensity) looks at one frame. Comparisons between frames live in the
//     difference engine.

use crate::error::{MotionError, Result};
use image::GrayImage;

pub type Sample = u8;

/// A borrowed 8-bit grayscale image.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    width: usize,
    height: usize,
    /// Bytes between the starts of consecutive rows.
    stride: usize,
    data: &'a [Sample],
}

impl<'a> Frame<'a> {
    /// Wraps `data` as a `width` x `height` frame whose rows are `stride` bytes apart.
    pub fn new(width: usize, height: usize, stride: usize, data: &'a [Sample]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MotionError::EmptyFrame { width, height });
        }
        if stride < width {
            return Err(MotionError::StrideTooSmall { stride, width });
        }
        // The last row does not need its padding.
        let required = (height - 1) * stride + width;
        if data.len() < required {
            return Err(MotionError::BufferTooSmall {
                required,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Wraps a tightly packed buffer (stride equal to width).
    pub fn packed(width: usize, height: usize, data: &'a [Sample]) -> Result<Self> {
        Self::new(width, height, width, data)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of pixels, padding excluded.
    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// The sample at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Sample {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} frame",
            self.width,
            self.height
        );
        self.data[y * self.stride + x]
    }

    /// Row `y` without its padding.
    #[inline]
    pub fn row(&self, y: usize) -> &'a [Sample] {
        debug_assert!(y < self.height);
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    /// Average sample value over the whole frame.
    pub fn mean_intensity(&self) -> f64 {
        let total: u64 = (0..self.height)
            .map(|y| self.row(y).iter().map(|&v| v as u64).sum::<u64>())
            .sum();
        total as f64 / self.area() as f64
    }
}

impl<'a> TryFrom<&'a GrayImage> for Frame<'a> {
    type Error = MotionError;

    fn try_from(image: &'a GrayImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Frame::packed(width as usize, height as usize, image.as_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn reads_through_row_padding() {
        // 3x2 frame, stride 4; padding bytes are 99.
        let data = [1, 2, 3, 99, 4, 5, 6];
        let frame = Frame::new(3, 2, 4, &data).unwrap();
        assert_eq!(frame.get(0, 0), 1);
        assert_eq!(frame.get(2, 0), 3);
        assert_eq!(frame.get(0, 1), 4);
        assert_eq!(frame.get(2, 1), 6);
        assert_eq!(frame.row(1), &[4, 5, 6]);
        assert_eq!(frame.area(), 6);
    }

    #[test]
    fn mean_ignores_padding() {
        let data = [10, 20, 255, 30, 40, 255];
        let frame = Frame::new(2, 2, 3, &data).unwrap();
        assert_eq!(frame.mean_intensity(), 25.0);
    }

    #[test]
    fn rejects_bad_geometry() {
        let data = [0u8; 8];
        assert_eq!(
            Frame::new(0, 2, 4, &data).unwrap_err(),
            MotionError::EmptyFrame {
                width: 0,
                height: 2
            }
        );
        assert_eq!(
            Frame::new(4, 2, 3, &data).unwrap_err(),
            MotionError::StrideTooSmall {
                stride: 3,
                width: 4
            }
        );
        assert_eq!(
            Frame::new(4, 3, 4, &data).unwrap_err(),
            MotionError::BufferTooSmall {
                required: 12,
                actual: 8
            }
        );
    }

    #[test]
    fn wraps_gray_image_without_copying() {
        let image = GrayImage::from_fn(4, 3, |x, y| Luma([(y * 4 + x) as u8]));
        let frame = Frame::try_from(&image).unwrap();
        assert_eq!(frame.dimensions(), (4, 3));
        assert_eq!(frame.stride(), 4);
        assert_eq!(frame.get(3, 2), 11);
        assert!(std::ptr::eq(frame.row(0).as_ptr(), image.as_raw().as_ptr()));
    }
}
