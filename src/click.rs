// THEORY:
// Covering the camera with a hand makes the whole frame go dark. That is cheap to
// spot (a single mean over the frame) and makes a usable "click" next to the
// swipe gestures. No history is kept: each frame is judged on its own.

use crate::core_modules::frame::Frame;

pub const DEFAULT_MAX_AVERAGE_INTENSITY: f64 = 30.0;

/// Reports a click when a frame's mean intensity drops below a limit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DarkFrameClick {
    pub max_average_intensity: f64,
}

impl Default for DarkFrameClick {
    fn default() -> Self {
        Self {
            max_average_intensity: DEFAULT_MAX_AVERAGE_INTENSITY,
        }
    }
}

impl DarkFrameClick {
    pub fn new(max_average_intensity: f64) -> Self {
        Self {
            max_average_intensity,
        }
    }

    pub fn is_click(&self, frame: &Frame) -> bool {
        frame.mean_intensity() < self.max_average_intensity
    }
}
