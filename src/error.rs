// THEORY:
// Every failure this crate can report is a caller contract violation. The
// detection pass itself is pure arithmetic over validated input, so all checks
// happen up front: when a `Frame` is built, when a detector is configured, and
// when two frames are paired. Nothing is retried and nothing is partially
// computed; the caller gets one of these variants before a single pixel is read.
//
// "No motion" is deliberately absent from this list. It is a normal outcome and
// is reported through the sentinel centroid of a `Detection`.

use thiserror::Error;

/// The ways a caller can violate the detector's input contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MotionError {
    /// A frame with no pixels was supplied.
    #[error("frame is empty ({width}x{height})")]
    EmptyFrame { width: usize, height: usize },

    /// The row stride cannot hold a full row.
    #[error("row stride {stride} is smaller than frame width {width}")]
    StrideTooSmall { stride: usize, width: usize },

    /// The backing slice is shorter than the declared geometry requires.
    #[error("frame buffer holds {actual} bytes but {required} are required")]
    BufferTooSmall { required: usize, actual: usize },

    /// The current and previous frames do not share the same dimensions.
    #[error(
        "frame dimensions differ: current is {}x{}, previous is {}x{}",
        current.0, current.1, previous.0, previous.1
    )]
    DimensionMismatch {
        current: (usize, usize),
        previous: (usize, usize),
    },

    /// The smoothing window must have an odd, non-zero side.
    #[error("kernel size {0} must be odd and non-zero")]
    InvalidKernel(usize),
}

pub type Result<T> = std::result::Result<T, MotionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_both_shapes() {
        let err = MotionError::DimensionMismatch {
            current: (640, 480),
            previous: (320, 240),
        };
        assert_eq!(
            err.to_string(),
            "frame dimensions differ: current is 640x480, previous is 320x240"
        );
    }

    #[test]
    fn kernel_message() {
        assert_eq!(
            MotionError::InvalidKernel(4).to_string(),
            "kernel size 4 must be odd and non-zero"
        );
    }
}
