//! Horizontal swipe recognition for touch gestures.
//!
//! # Design
//! - The tracker is fed raw coordinates and timestamps; it never touches the DOM.
//! - A gesture locks to one axis once it travels past the lock distance. Vertical
//!   gestures are abandoned so the browser keeps native scrolling.
//! - Acceptance is distance OR velocity; everything else snaps back.

use crate::core::config::SwipeConfig;

/// Axis a gesture committed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Sideways travel dominated.
    Horizontal,
    /// Vertical travel dominated (treated as scroll).
    Vertical,
}

/// Direction of an accepted swipe, expressed in paging terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right: reveal the previous page.
    Previous,
    /// Finger moved left: reveal the next page.
    Next,
}

/// Result of feeding a move sample to the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// No gesture in progress, or not yet past the axis lock.
    Pending,
    /// Horizontal drag; the caller should cancel native scrolling and apply `offset`.
    Drag {
        /// Visual drag offset in pixels after edge resistance.
        offset: f64,
    },
    /// Vertical gesture; the caller should leave the event alone.
    Scroll,
}

/// Result of finishing a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Gesture qualifies as a swipe.
    Swipe(SwipeDirection),
    /// Horizontal drag that fell short; restore the resting position.
    SnapBack,
    /// No horizontal gesture was tracked.
    Ignored,
}

/// Whether the pager sits at either end, used for edge resistance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeState {
    /// Current page is the first one.
    pub at_first: bool,
    /// Current page is the last one.
    pub at_last: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Origin {
    x: f64,
    y: f64,
    time_ms: f64,
}

/// Stateful tracker for a single touch gesture at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeTracker {
    config: SwipeConfig,
    origin: Option<Origin>,
    axis: Option<Axis>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

impl SwipeTracker {
    /// Create a tracker with explicit thresholds.
    #[must_use]
    pub const fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            origin: None,
            axis: None,
        }
    }

    /// Begin a gesture at the given point.
    pub const fn start(&mut self, x: f64, y: f64, time_ms: f64) {
        self.origin = Some(Origin { x, y, time_ms });
        self.axis = None;
    }

    /// Whether a gesture is being tracked.
    #[must_use]
    pub const fn active(&self) -> bool {
        self.origin.is_some()
    }

    /// Axis the current gesture locked to, if any.
    #[must_use]
    pub const fn axis(&self) -> Option<Axis> {
        self.axis
    }

    /// Feed a move sample.
    pub fn update(&mut self, x: f64, y: f64, edges: EdgeState) -> MoveOutcome {
        let Some(origin) = self.origin else {
            return MoveOutcome::Pending;
        };
        let dx = x - origin.x;
        let dy = y - origin.y;
        if self.axis.is_none() {
            let lock = self.config.axis_lock_distance;
            if dx.abs() < lock && dy.abs() < lock {
                return MoveOutcome::Pending;
            }
            self.axis = Some(if dx.abs() > dy.abs() {
                Axis::Horizontal
            } else {
                Axis::Vertical
            });
        }
        match self.axis {
            Some(Axis::Horizontal) => MoveOutcome::Drag {
                offset: apply_resistance(dx, edges, self.config.edge_resistance),
            },
            _ => MoveOutcome::Scroll,
        }
    }

    /// Finish the gesture and classify it.
    pub fn finish(&mut self, x: f64, time_ms: f64) -> SwipeOutcome {
        let origin = self.origin.take();
        let axis = self.axis.take();
        let Some(origin) = origin else {
            return SwipeOutcome::Ignored;
        };
        if axis != Some(Axis::Horizontal) {
            return SwipeOutcome::Ignored;
        }
        let dx = x - origin.x;
        let elapsed = (time_ms - origin.time_ms).max(1.0);
        let velocity = dx.abs() / elapsed;
        let far_enough = dx.abs() >= self.config.min_distance;
        let fast_enough =
            velocity >= self.config.min_velocity && dx.abs() >= self.config.min_flick_distance;
        if !(far_enough || fast_enough) {
            return SwipeOutcome::SnapBack;
        }
        if dx > 0.0 {
            SwipeOutcome::Swipe(SwipeDirection::Previous)
        } else {
            SwipeOutcome::Swipe(SwipeDirection::Next)
        }
    }

    /// Drop any gesture in progress (e.g. on `touchcancel`).
    pub const fn cancel(&mut self) {
        self.origin = None;
        self.axis = None;
    }
}

/// Dampen a drag offset that pulls past the first or last page.
#[must_use]
pub fn apply_resistance(dx: f64, edges: EdgeState, factor: f64) -> f64 {
    if (dx > 0.0 && edges.at_first) || (dx < 0.0 && edges.at_last) {
        dx * factor
    } else {
        dx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIDDLE: EdgeState = EdgeState {
        at_first: false,
        at_last: false,
    };

    #[test]
    fn long_slow_drag_left_is_next() {
        let mut tracker = SwipeTracker::default();
        tracker.start(300.0, 100.0, 0.0);
        assert_eq!(
            tracker.update(240.0, 104.0, MIDDLE),
            MoveOutcome::Drag { offset: -60.0 }
        );
        assert_eq!(
            tracker.finish(240.0, 2_000.0),
            SwipeOutcome::Swipe(SwipeDirection::Next)
        );
        assert!(!tracker.active());
    }

    #[test]
    fn short_fast_flick_right_is_previous() {
        let mut tracker = SwipeTracker::default();
        tracker.start(100.0, 100.0, 0.0);
        let _ = tracker.update(125.0, 100.0, MIDDLE);
        assert_eq!(
            tracker.finish(130.0, 50.0),
            SwipeOutcome::Swipe(SwipeDirection::Previous)
        );
    }

    #[test]
    fn short_slow_drag_snaps_back() {
        let mut tracker = SwipeTracker::default();
        tracker.start(100.0, 100.0, 0.0);
        let _ = tracker.update(120.0, 100.0, MIDDLE);
        assert_eq!(tracker.finish(130.0, 1_000.0), SwipeOutcome::SnapBack);
    }

    #[test]
    fn vertical_gesture_is_left_to_scrolling() {
        let mut tracker = SwipeTracker::default();
        tracker.start(100.0, 100.0, 0.0);
        assert_eq!(tracker.update(104.0, 103.0, MIDDLE), MoveOutcome::Pending);
        assert_eq!(tracker.update(110.0, 180.0, MIDDLE), MoveOutcome::Scroll);
        assert_eq!(tracker.axis(), Some(Axis::Vertical));
        // Later sideways travel does not re-lock the axis.
        assert_eq!(tracker.update(10.0, 180.0, MIDDLE), MoveOutcome::Scroll);
        assert_eq!(tracker.finish(10.0, 100.0), SwipeOutcome::Ignored);
    }

    #[test]
    fn tap_without_movement_is_ignored() {
        let mut tracker = SwipeTracker::default();
        tracker.start(50.0, 50.0, 0.0);
        assert_eq!(tracker.finish(50.0, 10.0), SwipeOutcome::Ignored);
        assert_eq!(tracker.finish(50.0, 10.0), SwipeOutcome::Ignored);
    }

    #[test]
    fn edges_dampen_outward_drag_only() {
        let first = EdgeState {
            at_first: true,
            at_last: false,
        };
        let last = EdgeState {
            at_first: false,
            at_last: true,
        };
        assert!((apply_resistance(100.0, first, 0.3) - 30.0).abs() < 1e-9);
        assert!((apply_resistance(-100.0, first, 0.3) + 100.0).abs() < 1e-9);
        assert!((apply_resistance(-100.0, last, 0.3) + 30.0).abs() < 1e-9);
        assert!((apply_resistance(100.0, last, 0.3) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn cancel_clears_state() {
        let mut tracker = SwipeTracker::default();
        tracker.start(0.0, 0.0, 0.0);
        let _ = tracker.update(40.0, 0.0, MIDDLE);
        tracker.cancel();
        assert!(!tracker.active());
        assert_eq!(tracker.update(80.0, 0.0, MIDDLE), MoveOutcome::Pending);
    }
}
