// THEORY:
// A swipe is a burst of motion whose centroid travels far enough in one
// direction. `GestureTracker` watches the per-frame `Detection`s and turns them
// into discrete gestures with a two-state machine:
//
// - **Idle -> InProgress**: more than `min_fraction_in_motion` of the frame is
//   moving. The centroid at that frame is the start position.
// - **InProgress -> Idle**: the moving fraction drops below the same limit. The
//   swipe is judged from the start position to the centroid of the last frame
//   that was still in motion.
//
// A swipe must travel a fixed share of the frame width (horizontal) or height
// (vertical). When both qualify, vertical wins only if its travel, scaled by the
// frame aspect and `aspect_weight`, beats the horizontal travel. The resulting
// camera-space direction is then mapped into screen space: the image may be
// mirrored (front camera) and the display may be rotated, which also swaps
// which axis each enable flag controls.

use crate::config::{GestureConfig, Rotation};
use crate::detector::Detection;
use log::debug;
use std::time::{Duration, Instant};

/// Screen-space swipe direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Down,
    Right,
    Up,
}

impl Direction {
    // Quarter turns, clockwise from Left.
    fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }

    fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Direction::Left,
            1 => Direction::Down,
            2 => Direction::Right,
            _ => Direction::Up,
        }
    }

    fn mirrored(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            other => other,
        }
    }

    /// Maps a camera-space direction onto a display at `rotation`.
    pub fn rotated(self, rotation: Rotation) -> Self {
        let turns = match rotation {
            Rotation::Deg0 => 3,
            Rotation::Deg90 => 0,
            Rotation::Deg180 => 1,
            Rotation::Deg270 => 2,
        };
        Self::from_index(self.index() + turns)
    }
}

/// A recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    pub direction: Direction,
    /// Time from the first moving frame to the frame where motion stopped.
    pub duration: Duration,
    pub start: (f64, f64),
    pub stop: (f64, f64),
}

struct InProgress {
    start: (f64, f64),
    started_at: Instant,
}

/// Recognizes swipes from a stream of detections on `width` x `height` frames.
pub struct GestureTracker {
    config: GestureConfig,
    min_horizontal_travel: f64,
    min_vertical_travel: f64,
    /// Vertical travel multiplier used when both axes qualify.
    vertical_weight: f64,
    in_progress: Option<InProgress>,
    previous_position: (f64, f64),
}

impl GestureTracker {
    pub fn new(width: usize, height: usize, config: GestureConfig) -> Self {
        let (w, h) = (width as f64, height as f64);
        Self {
            min_horizontal_travel: w * config.min_horizontal_fraction,
            min_vertical_travel: h * config.min_vertical_fraction,
            vertical_weight: w / h * config.aspect_weight,
            config,
            in_progress: None,
            previous_position: (0.0, 0.0),
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn is_tracking(&self) -> bool {
        self.in_progress.is_some()
    }

    /// Forgets any swipe in progress.
    pub fn reset(&mut self) {
        self.in_progress = None;
        self.previous_position = (0.0, 0.0);
    }

    /// Feeds the detection for one frame observed at `now`.
    pub fn update(&mut self, detection: &Detection, now: Instant) -> Option<Gesture> {
        let min_fraction = self.config.min_fraction_in_motion;
        let mut gesture = None;

        match self.in_progress.take() {
            None if detection.fraction_moving > min_fraction => {
                debug!(
                    "gesture started at ({:.1}, {:.1}) with {:.3} of frame moving",
                    detection.x, detection.y, detection.fraction_moving
                );
                self.in_progress = Some(InProgress {
                    start: (detection.x, detection.y),
                    started_at: now,
                });
            }
            Some(active) if detection.fraction_moving < min_fraction => {
                let stop = self.previous_position;
                gesture = self.classify(active.start, stop).map(|direction| Gesture {
                    direction,
                    duration: now.saturating_duration_since(active.started_at),
                    start: active.start,
                    stop,
                });
                debug!("gesture ended at ({:.1}, {:.1}): {:?}", stop.0, stop.1, gesture);
            }
            state => self.in_progress = state,
        }

        self.previous_position = (detection.x, detection.y);
        gesture
    }

    fn classify(&self, start: (f64, f64), stop: (f64, f64)) -> Option<Direction> {
        let dx = stop.0 - start.0;
        let dy = stop.1 - start.1;
        let mut direction = None;

        if self.horizontal_enabled() {
            if dx > self.min_horizontal_travel {
                direction = Some(Direction::Right);
            } else if -dx > self.min_horizontal_travel {
                direction = Some(Direction::Left);
            }
            if self.config.mirrored {
                direction = direction.map(Direction::mirrored);
            }
        }

        if self.vertical_enabled() {
            let vertical = dy.abs();
            if vertical > self.min_vertical_travel
                && (direction.is_none() || vertical * self.vertical_weight > dx.abs())
            {
                direction = Some(if dy < 0.0 { Direction::Up } else { Direction::Down });
            }
        }

        direction.map(|d| d.rotated(self.config.rotation))
    }

    // At 0 and 180 degrees the camera's horizontal axis is the screen's vertical one.
    fn horizontal_enabled(&self) -> bool {
        match self.config.rotation {
            Rotation::Deg0 | Rotation::Deg180 => self.config.vertical_enabled,
            Rotation::Deg90 | Rotation::Deg270 => self.config.horizontal_enabled,
        }
    }

    fn vertical_enabled(&self) -> bool {
        match self.config.rotation {
            Rotation::Deg0 | Rotation::Deg180 => self.config.horizontal_enabled,
            Rotation::Deg90 | Rotation::Deg270 => self.config.vertical_enabled,
        }
    }
}
