// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Drag gesture tracking and resolution.
//!
//! The terminal only reports mouse positions in cells, so the tracker scales
//! columns to nominal pixels before measuring the gesture. This keeps the
//! thresholds in the same units a pointer-driven carousel would use.

use std::time::{Duration, Instant};

/// A release faster than this (in px/s) decides direction on velocity alone.
pub(crate) const FAST_SWIPE_THRESHOLD: f64 = 500.0;

/// Nominal width of a terminal column, in pixels.
pub(crate) const CELL_WIDTH_PX: f64 = 8.0;

/// Only samples this recent contribute to the release velocity.
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// What a finished drag gesture asks the carousel to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum DragOutcome {
    Previous,
    Next,
    SnapBack,
}

/// Decides whether a drag gesture constitutes a slide change.
///
/// A fast swipe is decided by the sign of its velocity, irrespective of how
/// far the content moved. Otherwise the drag must cover more than a third of
/// the slide width. Dragging the content rightward (positive values) goes to
/// the previous slide, leftward goes to the next.
pub(crate) fn resolve_drag(offset_px: f64, velocity_px_per_s: f64, slide_width_px: f64) -> DragOutcome {
    let threshold = slide_width_px / 3.0;

    if velocity_px_per_s.abs() > FAST_SWIPE_THRESHOLD {
        if velocity_px_per_s > 0.0 {
            DragOutcome::Previous
        } else {
            DragOutcome::Next
        }
    } else if offset_px.abs() > threshold {
        if offset_px > 0.0 {
            DragOutcome::Previous
        } else {
            DragOutcome::Next
        }
    } else {
        DragOutcome::SnapBack
    }
}

/// Measurements of a released drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct DragRelease {
    pub(crate) offset_px: f64,
    pub(crate) velocity_px_per_s: f64,
}

#[derive(Clone, Copy, Debug)]
struct Sample {
    column: u16,
    at: Instant,
}

/// Follows a single pointer gesture from press to release.
#[derive(Debug, Default)]
pub(crate) struct DragTracker {
    origin: Option<Sample>,
    samples: Vec<Sample>,
    dragging: bool,
}

impl DragTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Records the pointer going down. Nothing is dragged until it moves.
    pub(crate) fn press(&mut self, column: u16, at: Instant) {
        let sample = Sample { column, at };
        self.origin = Some(sample);
        self.samples.clear();
        self.samples.push(sample);
        self.dragging = false;
    }

    /// Records pointer movement with the button held.
    ///
    /// Returns `true` exactly once per gesture, on the first movement away
    /// from the press position, which is when the carousel should be told
    /// that a drag has started.
    pub(crate) fn drag(&mut self, column: u16, at: Instant) -> bool {
        let Some(origin) = self.origin else {
            return false;
        };

        self.samples.push(Sample { column, at });

        if !self.dragging && column != origin.column {
            self.dragging = true;
            return true;
        }

        false
    }

    /// Records the pointer going up and measures the gesture.
    ///
    /// Returns `None` if the pointer never moved, i.e. this was a click.
    pub(crate) fn release(&mut self, column: u16, at: Instant) -> Option<DragRelease> {
        let origin = self.origin.take()?;
        self.samples.push(Sample { column, at });

        let was_dragging = std::mem::replace(&mut self.dragging, false);
        let samples = std::mem::take(&mut self.samples);

        if !was_dragging {
            return None;
        }

        let offset_px = column_delta(origin.column, column) * CELL_WIDTH_PX;

        Some(DragRelease {
            offset_px,
            velocity_px_per_s: release_velocity(&samples),
        })
    }

    /// Abandons the gesture, e.g. when the pointer leaves the carousel.
    pub(crate) fn cancel(&mut self) {
        self.origin = None;
        self.samples.clear();
        self.dragging = false;
    }
}

fn column_delta(from: u16, to: u16) -> f64 {
    f64::from(to) - f64::from(from)
}

// Velocity over the trailing window, measured from the oldest sample still
// inside it to the release sample.
fn release_velocity(samples: &[Sample]) -> f64 {
    let Some(last) = samples.last() else {
        return 0.0;
    };

    let reference = samples
        .iter()
        .find(|s| last.at.duration_since(s.at) <= VELOCITY_WINDOW)
        .unwrap_or(last);

    let elapsed_s = last.at.duration_since(reference.at).as_secs_f64();
    if elapsed_s <= 0.0 {
        return 0.0;
    }

    column_delta(reference.column, last.column) * CELL_WIDTH_PX / elapsed_s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_swipe_wins_over_small_offset() {
        assert_eq!(resolve_drag(5.0, 600.0, 720.0), DragOutcome::Previous);
        assert_eq!(resolve_drag(5.0, -600.0, 720.0), DragOutcome::Next);
    }

    #[test]
    fn fast_swipe_wins_over_opposing_offset() {
        assert_eq!(resolve_drag(-400.0, 900.0, 720.0), DragOutcome::Previous);
    }

    #[test]
    fn slow_drag_past_a_third_changes_slide() {
        assert_eq!(resolve_drag(241.0, 50.0, 720.0), DragOutcome::Previous);
        assert_eq!(resolve_drag(-241.0, -50.0, 720.0), DragOutcome::Next);
    }

    #[test]
    fn short_slow_drag_snaps_back() {
        assert_eq!(resolve_drag(10.0, 50.0, 720.0), DragOutcome::SnapBack);
        assert_eq!(resolve_drag(240.0, 500.0, 720.0), DragOutcome::SnapBack);
    }

    #[test]
    fn click_without_movement_is_not_a_drag() {
        let start = Instant::now();
        let mut tracker = DragTracker::new();
        tracker.press(10, start);

        assert_eq!(tracker.release(10, start + Duration::from_millis(80)), None);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn drag_starts_on_first_movement_only() {
        let start = Instant::now();
        let mut tracker = DragTracker::new();
        tracker.press(10, start);

        assert!(!tracker.drag(10, start + Duration::from_millis(10)));
        assert!(tracker.drag(12, start + Duration::from_millis(20)));
        assert!(!tracker.drag(14, start + Duration::from_millis(30)));
        assert!(tracker.is_dragging());
    }

    #[test]
    fn release_measures_offset_and_velocity() {
        let start = Instant::now();
        let mut tracker = DragTracker::new();
        tracker.press(40, start);
        tracker.drag(35, start + Duration::from_millis(500));
        tracker.drag(30, start + Duration::from_millis(550));

        let release = tracker
            .release(25, start + Duration::from_millis(600))
            .expect("gesture should be a drag");

        assert_eq!(release.offset_px, -15.0 * CELL_WIDTH_PX);
        // 10 columns in the final 100ms
        assert!((release.velocity_px_per_s - (-10.0 * CELL_WIDTH_PX / 0.1)).abs() < 1e-6);
    }

    #[test]
    fn cancelled_gesture_releases_nothing() {
        let start = Instant::now();
        let mut tracker = DragTracker::new();
        tracker.press(5, start);
        tracker.drag(9, start + Duration::from_millis(10));
        tracker.cancel();

        assert_eq!(tracker.release(12, start + Duration::from_millis(20)), None);
    }
}
