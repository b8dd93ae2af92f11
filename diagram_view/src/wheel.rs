// Copyright 2025 the Diagram Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel input adaptation: delta → zoom factor, and zoom dispatch.
//!
//! A wheel gesture is turned into a signed zoom factor with
//! [`wheel_zoom_factor`], then routed with [`dispatch_wheel_zoom`]:
//! - If the target exposes [`AnchoredZoom`] (via [`ZoomControls::anchored`]),
//!   the factor is applied around the cursor so the world point under it
//!   stays put.
//! - Otherwise the target's unanchored [`ZoomControls::zoom_in`] /
//!   [`ZoomControls::zoom_out`] receive the factor's magnitude.
//!
//! The branch depends only on whether the anchoring capability is present.

use kurbo::Point;

use crate::viewport::CanvasViewport;

/// Default multiplier between a raw wheel delta and a zoom factor.
pub const DEFAULT_ZOOM_SPEED: f64 = 0.02;

/// Converts a raw vertical wheel delta into a signed zoom factor.
///
/// `factor = delta * -speed`. Positive deltas (scrolling away) give negative
/// factors (zoom out) and negative deltas give positive factors (zoom in).
/// A zero delta or zero speed gives exactly `0.0`, as does non-finite input.
#[must_use]
pub fn wheel_zoom_factor(delta: f64, speed: f64) -> f64 {
    if delta == 0.0 || speed == 0.0 || !delta.is_finite() || !speed.is_finite() {
        return 0.0;
    }
    delta * -speed
}

/// Zoom around a fixed screen-space anchor.
pub trait AnchoredZoom {
    /// Applies `factor` while keeping the world point under `anchor` fixed.
    ///
    /// Returns `true` if the zoom changed.
    fn zoom_by_at(&mut self, anchor: Point, factor: f64) -> bool;
}

/// Zoom operations a wheel gesture can be routed to.
pub trait ZoomControls {
    /// Unanchored zoom in by a non-negative step.
    fn zoom_in(&mut self, step: f64) -> bool;

    /// Unanchored zoom out by a non-negative step.
    fn zoom_out(&mut self, step: f64) -> bool;

    /// Returns the anchored zoom capability, if this target has one.
    fn anchored(&mut self) -> Option<&mut dyn AnchoredZoom> {
        None
    }
}

/// Routes a wheel gesture at `anchor` (screen space) to `target`.
///
/// Returns `true` if the target reported a change. Zero or non-finite input
/// never reaches the target.
pub fn dispatch_wheel_zoom<T: ZoomControls + ?Sized>(
    target: &mut T,
    anchor: Point,
    delta: f64,
    speed: f64,
) -> bool {
    let factor = wheel_zoom_factor(delta, speed);
    if factor == 0.0 {
        return false;
    }
    if let Some(anchored) = target.anchored() {
        return anchored.zoom_by_at(anchor, factor);
    }
    if factor < 0.0 {
        target.zoom_out(-factor)
    } else {
        target.zoom_in(factor)
    }
}

impl AnchoredZoom for CanvasViewport {
    fn zoom_by_at(&mut self, anchor: Point, factor: f64) -> bool {
        self.zoom_by(factor, Some(anchor))
    }
}

impl ZoomControls for CanvasViewport {
    fn zoom_in(&mut self, step: f64) -> bool {
        Self::zoom_in(self, step)
    }

    fn zoom_out(&mut self, step: f64) -> bool {
        Self::zoom_out(self, step)
    }

    fn anchored(&mut self) -> Option<&mut dyn AnchoredZoom> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use kurbo::{Point, Size};

    use super::{
        AnchoredZoom, DEFAULT_ZOOM_SPEED, ZoomControls, dispatch_wheel_zoom, wheel_zoom_factor,
    };
    use crate::CanvasViewport;

    #[derive(Debug, PartialEq)]
    enum Call {
        In(f64),
        Out(f64),
        At(Point, f64),
    }

    #[derive(Default)]
    struct Unanchored {
        calls: Vec<Call>,
    }

    impl ZoomControls for Unanchored {
        fn zoom_in(&mut self, step: f64) -> bool {
            self.calls.push(Call::In(step));
            true
        }

        fn zoom_out(&mut self, step: f64) -> bool {
            self.calls.push(Call::Out(step));
            true
        }
    }

    #[derive(Default)]
    struct Anchored {
        inner: Unanchored,
    }

    impl AnchoredZoom for Anchored {
        fn zoom_by_at(&mut self, anchor: Point, factor: f64) -> bool {
            self.inner.calls.push(Call::At(anchor, factor));
            true
        }
    }

    impl ZoomControls for Anchored {
        fn zoom_in(&mut self, step: f64) -> bool {
            self.inner.zoom_in(step)
        }

        fn zoom_out(&mut self, step: f64) -> bool {
            self.inner.zoom_out(step)
        }

        fn anchored(&mut self) -> Option<&mut dyn AnchoredZoom> {
            Some(self)
        }
    }

    #[test]
    fn factor_from_default_speed() {
        assert_eq!(wheel_zoom_factor(-100.0, DEFAULT_ZOOM_SPEED), 2.0);
        assert_eq!(wheel_zoom_factor(100.0, DEFAULT_ZOOM_SPEED), -2.0);
        assert_eq!(wheel_zoom_factor(-50.0, DEFAULT_ZOOM_SPEED), 1.0);

        let cases = [
            (-10.0, 0.2),
            (10.0, -0.2),
            (50.0, -1.0),
            (-100.0, 2.0),
        ];
        for (delta, expected) in cases {
            assert!((wheel_zoom_factor(delta, DEFAULT_ZOOM_SPEED) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_delta_gives_exact_zero() {
        let factor = wheel_zoom_factor(0.0, DEFAULT_ZOOM_SPEED);
        assert_eq!(factor, 0.0);
        assert!(factor.is_sign_positive());
        assert_eq!(wheel_zoom_factor(-0.0, DEFAULT_ZOOM_SPEED).to_bits(), 0.0_f64.to_bits());
        assert_eq!(wheel_zoom_factor(-100.0, 0.0), 0.0);
    }

    #[test]
    fn non_finite_input_gives_zero() {
        assert_eq!(wheel_zoom_factor(f64::NAN, DEFAULT_ZOOM_SPEED), 0.0);
        assert_eq!(wheel_zoom_factor(f64::INFINITY, DEFAULT_ZOOM_SPEED), 0.0);
        assert_eq!(wheel_zoom_factor(-100.0, f64::NAN), 0.0);
    }

    #[test]
    fn factor_scales_with_speed() {
        let base = wheel_zoom_factor(-37.0, DEFAULT_ZOOM_SPEED);
        for k in [0.5, 2.0, 3.0, 10.0] {
            let scaled = wheel_zoom_factor(-37.0, DEFAULT_ZOOM_SPEED * k);
            assert!((scaled - base * k).abs() < 1e-9);
        }
    }

    #[test]
    fn anchored_target_uses_anchor_path() {
        let mut target = Anchored::default();
        let anchor = Point::new(500.0, 500.0);
        assert!(dispatch_wheel_zoom(&mut target, anchor, -100.0, DEFAULT_ZOOM_SPEED));
        assert!(dispatch_wheel_zoom(&mut target, anchor, 100.0, DEFAULT_ZOOM_SPEED));
        assert_eq!(
            target.inner.calls,
            [Call::At(anchor, 2.0), Call::At(anchor, -2.0)]
        );
    }

    #[test]
    fn unanchored_target_falls_back_by_direction() {
        let mut target = Unanchored::default();
        let anchor = Point::new(500.0, 500.0);
        assert!(dispatch_wheel_zoom(&mut target, anchor, -100.0, DEFAULT_ZOOM_SPEED));
        assert!(dispatch_wheel_zoom(&mut target, anchor, 100.0, DEFAULT_ZOOM_SPEED));
        assert_eq!(target.calls, [Call::In(2.0), Call::Out(2.0)]);
    }

    #[test]
    fn zero_delta_never_reaches_target() {
        let mut target = Anchored::default();
        assert!(!dispatch_wheel_zoom(&mut target, Point::ZERO, 0.0, DEFAULT_ZOOM_SPEED));
        assert!(target.inner.calls.is_empty());
    }

    #[test]
    fn viewport_is_anchored() {
        let mut vp = CanvasViewport::new(Size::new(800.0, 600.0));
        let anchor = Point::new(300.0, 200.0);
        let before = vp.screen_to_world_point(anchor);
        assert!(dispatch_wheel_zoom(&mut vp, anchor, -10.0, DEFAULT_ZOOM_SPEED));
        assert!((vp.zoom() - 1.2).abs() < 1e-9);
        let after = vp.screen_to_world_point(anchor);
        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);
    }
}
