// THEORY:
// This file is the main entry point for the `motion_averager` library crate.
// It defines the public API exposed to whatever owns the camera: a frame is
// borrowed in, three numbers come back out (the centroid of the moving pixels
// and the fraction of the frame that moved).
//
// The primary export is the `MotionDetector` and its data structures
// (`DetectorConfig`, `Frame`, `Detection`). On top of per-frame detection sit two
// small consumers that turn a stream of detections into user input: swipe
// gestures (`gesture`) and the dark-frame click (`click`). The numeric internals
// live in `core_modules`; they are public for tools and tests but most callers
// only need the re-exports below.

pub mod click;
pub mod config;
pub mod core_modules;
pub mod detector;
pub mod error;
pub mod gesture;

pub use crate::click::DarkFrameClick;
pub use crate::config::{DetectorConfig, GestureConfig, Rotation};
pub use crate::core_modules::frame::Frame;
pub use crate::detector::{Detection, FrameInput, MotionDetector};
pub use crate::error::{MotionError, Result};
pub use crate::gesture::{Direction, Gesture, GestureTracker};
