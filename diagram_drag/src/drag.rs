// Copyright 2025 the Diagram Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracking for an in-progress drag.
//!
//! [`DragTracker`] remembers where a drag started and where the pointer was
//! last seen, both in world space. It yields the per-move delta and the total
//! offset since the start, which is what a preview needs to place a node
//! relative to its last committed position.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use diagram_drag::DragTracker;
//!
//! let mut tracker = DragTracker::default();
//! tracker.start(Point::new(10.0, 20.0));
//!
//! assert_eq!(tracker.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(tracker.update(Point::new(18.0, 21.0)), Some(Vec2::new(3.0, -4.0)));
//! assert_eq!(tracker.total_offset(), Some(Vec2::new(8.0, 1.0)));
//! ```

use kurbo::{Point, Vec2};

/// Anchor and latest pointer position of a drag, in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    anchor: Option<Point>,
    current: Option<Point>,
}

impl DragTracker {
    /// Starts tracking from `pos`, discarding any previous drag.
    ///
    /// Returns `false` (and stays idle) if `pos` is not finite.
    pub fn start(&mut self, pos: Point) -> bool {
        if !pos.is_finite() {
            self.end();
            return false;
        }
        self.anchor = Some(pos);
        self.current = Some(pos);
        true
    }

    /// Records a new pointer position and returns the delta since the last one.
    ///
    /// Returns `None` when idle or when `pos` is not finite; in both cases the
    /// tracker is unchanged.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        if !pos.is_finite() {
            return None;
        }
        let last = self.current?;
        self.current = Some(pos);
        Some(pos - last)
    }

    /// Total offset from the anchor to the latest position.
    #[must_use]
    pub fn total_offset(&self) -> Option<Vec2> {
        Some(self.current? - self.anchor?)
    }

    /// Where the drag started.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// The latest pointer position.
    #[must_use]
    pub fn current(&self) -> Option<Point> {
        self.current
    }

    /// Stops tracking. Safe to call when already idle.
    pub fn end(&mut self) {
        self.anchor = None;
        self.current = None;
    }

    /// Returns `true` while a drag is being tracked.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }
}
