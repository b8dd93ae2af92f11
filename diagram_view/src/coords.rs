// Copyright 2025 the Diagram Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate conversion shared by the viewport and its callers.
//!
//! Three spaces are involved:
//! - **client** space: raw pointer positions as delivered by the host window.
//! - **screen** space: pixels relative to the rendering surface's origin.
//! - **world** space: the diagram's own logical coordinates.
//!
//! `screen = client - surface_origin` and
//! `world = (screen - translate) / zoom`.

use kurbo::{Affine, Point, Vec2};

/// The pan/zoom pair handed to a renderer.
///
/// `translate` is the screen-space position of the world origin and `zoom`
/// is the world-to-screen scale. A valid state has `zoom > 0`; states produced
/// by [`crate::CanvasViewport`] always satisfy this.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    /// Screen-space offset of the world origin.
    pub translate: Vec2,
    /// World-to-screen scale factor.
    pub zoom: f64,
}

impl ViewportState {
    /// No pan, unit zoom.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        zoom: 1.0,
    };

    /// Converts a screen-space point into world space.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        ((screen.to_vec2() - self.translate) / self.zoom).to_point()
    }

    /// Converts a world-space point into screen space.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        (world.to_vec2() * self.zoom + self.translate).to_point()
    }

    /// World → screen affine: scale by `zoom`, then translate by `translate`.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.zoom)
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Converts a client-space pointer position into surface-relative screen space.
///
/// `surface_origin` is the top-left corner of the rendering surface's bounding
/// box, in client coordinates.
#[must_use]
pub fn client_to_screen(client: Point, surface_origin: Point) -> Point {
    (client - surface_origin).to_point()
}

/// Returns the translate that keeps the world point under `anchor` fixed when
/// the zoom changes from `old_zoom` to `new_zoom`.
///
/// `t' = anchor - (anchor - t) * (new_zoom / old_zoom)`
///
/// Returns `translate` unchanged when `old_zoom` is not strictly positive,
/// either zoom is not finite, or the result would overflow.
#[must_use]
pub fn anchored_translate(anchor: Point, translate: Vec2, old_zoom: f64, new_zoom: f64) -> Vec2 {
    checked_anchored_translate(anchor, translate, old_zoom, new_zoom).unwrap_or(translate)
}

/// Like [`anchored_translate`], but `None` where that would fall back.
pub(crate) fn checked_anchored_translate(
    anchor: Point,
    translate: Vec2,
    old_zoom: f64,
    new_zoom: f64,
) -> Option<Vec2> {
    if old_zoom <= 0.0 || !old_zoom.is_finite() || !new_zoom.is_finite() {
        return None;
    }
    let ratio = new_zoom / old_zoom;
    let anchor = anchor.to_vec2();
    let next = anchor - (anchor - translate) * ratio;
    next.is_finite().then_some(next)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{ViewportState, anchored_translate, checked_anchored_translate, client_to_screen};

    #[test]
    fn client_offset_by_surface_origin() {
        let cases = [
            ((0.0, 0.0), (500.0, 400.0)),
            ((100.0, 50.0), (600.0, 450.0)),
            ((250.0, 150.0), (750.0, 550.0)),
            ((-50.0, -25.0), (450.0, 375.0)),
        ];
        for (origin, client) in cases {
            let screen = client_to_screen(client.into(), origin.into());
            assert_eq!(screen, Point::new(500.0, 400.0));
        }
    }

    #[test]
    fn anchored_zoom_in_from_identity() {
        let t = anchored_translate(Point::new(500.0, 500.0), Vec2::ZERO, 1.0, 1.1);
        assert!((t.x + 50.0).abs() < 1e-9);
        assert!((t.y + 50.0).abs() < 1e-9);
    }

    #[test]
    fn anchored_zoom_out_returns_to_origin() {
        let t = anchored_translate(Point::new(500.0, 500.0), Vec2::new(-50.0, -50.0), 1.1, 1.0);
        assert!(t.x.abs() < 1e-9);
        assert!(t.y.abs() < 1e-9);
    }

    #[test]
    fn anchor_at_world_origin_keeps_translate() {
        let t = anchored_translate(Point::ZERO, Vec2::ZERO, 1.0, 1.2);
        assert_eq!(t, Vec2::ZERO);

        let t = anchored_translate(Point::new(30.0, 40.0), Vec2::new(30.0, 40.0), 0.5, 3.0);
        assert_eq!(t, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn anchored_translate_ignores_degenerate_zoom() {
        let t0 = Vec2::new(3.0, 4.0);
        assert_eq!(anchored_translate(Point::new(1.0, 1.0), t0, 0.0, 2.0), t0);
        assert_eq!(anchored_translate(Point::new(1.0, 1.0), t0, -1.0, 2.0), t0);
        assert_eq!(anchored_translate(Point::new(1.0, 1.0), t0, f64::NAN, 2.0), t0);
        assert_eq!(anchored_translate(Point::new(1.0, 1.0), t0, 1.0, f64::INFINITY), t0);
    }

    #[test]
    fn anchored_translate_keeps_translate_on_overflow() {
        let t0 = Vec2::new(3.0, 4.0);
        let anchor = Point::new(1e308, 0.0);
        assert_eq!(anchored_translate(anchor, t0, 1.0, 4.0), t0);
        assert_eq!(checked_anchored_translate(anchor, t0, 1.0, 4.0), None);
        assert!(checked_anchored_translate(Point::new(1e300, 0.0), t0, 1.0, 4.0).is_some());
    }

    #[test]
    fn state_conversions_match_formulas() {
        let state = ViewportState {
            translate: Vec2::new(100.0, 50.0),
            zoom: 2.0,
        };
        assert_eq!(state.screen_to_world(Point::new(300.0, 250.0)), Point::new(100.0, 100.0));
        assert_eq!(state.world_to_screen(Point::new(100.0, 100.0)), Point::new(300.0, 250.0));
        assert_eq!(state.transform() * Point::new(100.0, 100.0), Point::new(300.0, 250.0));
    }
}
