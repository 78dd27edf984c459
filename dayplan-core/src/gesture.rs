//! In-gesture drag state for move and resize interactions.
//!
//! A [`Drag`] lives for one gesture on one event tile. Updates are pure,
//! in-memory computations so high-frequency drag callbacks never touch
//! storage; snapping and clamping to the day happen once, when the gesture
//! ends. A gesture that ends with its total offset under the tap threshold
//! is a tap, not a move, and must not mutate anything.

use crate::event::{Event, SECONDS_PER_DAY};
use crate::snap::{pixels_to_seconds, snap_velocity_aware};

/// What a drag gesture manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// The whole tile: start moves, duration is unchanged.
    Move,
    /// The top edge: start and duration change inversely, end stays fixed.
    ResizeTop,
    /// The bottom edge: only duration changes.
    ResizeBottom,
}

/// Snapping parameters for ending a gesture.
#[derive(Debug, Clone, Copy)]
pub struct SnapPolicy {
    /// Fine increment for deliberate slow drags (seconds).
    pub slow_increment: i64,
    /// Grid increment for fast flicks (seconds).
    pub fast_increment: i64,
    /// Velocity magnitude (px/s) above which the fast increment applies.
    pub velocity_threshold: f64,
}

/// Ephemeral start/duration during a gesture, for rendering only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tentative {
    pub start_time: i64,
    pub duration: i64,
}

/// How a finished gesture resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Offset stayed under the tap threshold; no mutation.
    Tap,
    /// Snapped, clamped values ready to persist.
    Commit { start_time: i64, duration: i64 },
}

/// One active drag gesture.
#[derive(Debug)]
pub struct Drag {
    kind: DragKind,
    origin_start: i64,
    origin_duration: i64,
    hour_height: f64,
    tap_threshold: f64,
    /// Duration floor: one snap increment.
    min_duration: i64,
    delta_pixels: f64,
    velocity: f64,
}

impl Drag {
    /// Start a gesture on `event`. `min_duration` is the configured snap
    /// increment, which doubles as the duration floor.
    pub fn begin(
        kind: DragKind,
        event: &Event,
        hour_height: f64,
        tap_threshold: f64,
        min_duration: i64,
    ) -> Self {
        Drag {
            kind,
            origin_start: event.start_time,
            origin_duration: event.duration,
            hour_height,
            tap_threshold,
            min_duration,
            delta_pixels: 0.0,
            velocity: 0.0,
        }
    }

    pub fn kind(&self) -> DragKind {
        self.kind
    }

    /// Record the latest cumulative offset and return the values to render.
    /// No snapping here; tentative values may leave the day bounds.
    pub fn update(&mut self, delta_pixels: f64, velocity: f64) -> Tentative {
        self.delta_pixels = delta_pixels;
        self.velocity = velocity;
        self.tentative()
    }

    /// Current unsnapped values, duration already clamped to the floor.
    pub fn tentative(&self) -> Tentative {
        let delta = pixels_to_seconds(self.delta_pixels, self.hour_height).round() as i64;
        let origin_end = self.origin_start + self.origin_duration;

        match self.kind {
            DragKind::Move => Tentative {
                start_time: self.origin_start + delta,
                duration: self.origin_duration,
            },
            DragKind::ResizeTop => {
                let duration = (self.origin_duration - delta).max(self.min_duration);
                Tentative {
                    start_time: origin_end - duration,
                    duration,
                }
            }
            DragKind::ResizeBottom => Tentative {
                start_time: self.origin_start,
                duration: (self.origin_duration + delta).max(self.min_duration),
            },
        }
    }

    /// Finish the gesture: discriminate tap vs commit, then snap and clamp.
    pub fn end(self, policy: SnapPolicy) -> DragOutcome {
        if self.delta_pixels.abs() < self.tap_threshold {
            return DragOutcome::Tap;
        }

        let delta = pixels_to_seconds(self.delta_pixels, self.hour_height);
        let origin_end = self.origin_start + self.origin_duration;
        let snap_final = |seconds: f64| {
            snap_velocity_aware(
                seconds,
                policy.slow_increment,
                policy.fast_increment,
                self.velocity,
                policy.velocity_threshold,
            )
        };

        let (start_time, duration) = match self.kind {
            DragKind::Move => {
                let start = snap_final(self.origin_start as f64 + delta);
                (start, self.origin_duration)
            }
            DragKind::ResizeTop => {
                // End edge stays fixed; duration follows the snapped start.
                let start = snap_final(self.origin_start as f64 + delta);
                let duration = (origin_end - start).max(self.min_duration);
                (origin_end - duration, duration)
            }
            DragKind::ResizeBottom => {
                let duration =
                    snap_final(self.origin_duration as f64 + delta).max(self.min_duration);
                (self.origin_start, duration)
            }
        };

        // Committed values must land inside the day.
        let duration = duration.min(SECONDS_PER_DAY);
        let start_time = start_time.clamp(0, SECONDS_PER_DAY - duration);

        DragOutcome::Commit {
            start_time,
            duration,
        }
    }
}
