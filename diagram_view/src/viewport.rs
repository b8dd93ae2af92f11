// Copyright 2025 the Diagram Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::coords::{ViewportState, checked_anchored_translate};
use crate::modes::{FitMode, ZoomPolicy};

/// Default lower zoom bound used by [`CanvasViewport::new`].
pub const DEFAULT_MIN_ZOOM: f64 = 0.1;

/// Default upper zoom bound used by [`CanvasViewport::new`].
pub const DEFAULT_MAX_ZOOM: f64 = 4.0;

/// Pan/zoom viewport over a diagram's world plane.
///
/// `CanvasViewport` owns the translate (screen-space position of the world
/// origin) and the uniform zoom factor of a rendering surface. It can be
/// used to:
/// - Convert points and rectangles between screen and world coordinates.
/// - Pan, and zoom with or without a fixed anchor point.
/// - Fit a world-space rectangle into the surface, or center on a point.
///
/// The zoom always lies within `[min_zoom, max_zoom]`, and both bounds are
/// strictly positive, so the zoom can never reach zero.
///
/// Every mutator returns `true` only if it actually changed the state; a
/// request fully absorbed by clamping (or carrying non-finite input) leaves
/// the viewport untouched and returns `false`.
#[derive(Clone, Debug)]
pub struct CanvasViewport {
    surface_size: Size,
    zoom: f64,
    translate: Vec2,
    min_zoom: f64,
    max_zoom: f64,
    zoom_policy: ZoomPolicy,
    fit_mode: FitMode,
    world_to_screen: Affine,
    screen_to_world: Affine,
}

impl CanvasViewport {
    /// Creates a new viewport over a surface of the given size.
    ///
    /// - Initial zoom is `1.0`.
    /// - Initial translate is zero (world origin maps to the surface origin).
    /// - Zoom is clamped to `[DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM]`.
    #[must_use]
    pub fn new(surface_size: Size) -> Self {
        let mut vp = Self {
            surface_size,
            zoom: 1.0,
            translate: Vec2::ZERO,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_policy: ZoomPolicy::default(),
            fit_mode: FitMode::default(),
            world_to_screen: Affine::IDENTITY,
            screen_to_world: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Builder-style variant of [`CanvasViewport::set_zoom_limits`].
    #[must_use]
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.set_zoom_limits(min_zoom, max_zoom);
        self
    }

    /// Builder-style variant of [`CanvasViewport::set_zoom_policy`].
    #[must_use]
    pub fn with_zoom_policy(mut self, policy: ZoomPolicy) -> Self {
        self.zoom_policy = policy;
        self
    }

    /// Returns the surface size in screen pixels.
    #[must_use]
    pub fn surface_size(&self) -> Size {
        self.surface_size
    }

    /// Sets the surface size in screen pixels.
    ///
    /// Zoom and translate are unaffected; only the visible world region and
    /// the center used by fitting and centering change.
    pub fn set_surface_size(&mut self, size: Size) -> bool {
        if self.surface_size == size || !size.is_finite() {
            return false;
        }
        self.surface_size = size;
        true
    }

    /// Returns the current pan/zoom pair.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        ViewportState {
            translate: self.translate,
            zoom: self.zoom,
        }
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the screen-space position of the world origin.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.translate
    }

    /// Returns the lower zoom bound.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Returns the upper zoom bound.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Returns the world → screen transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.world_to_screen
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// An inverted pair is swapped so that `min_zoom <= max_zoom`. Bounds that
    /// are not finite and strictly positive are rejected and the previous
    /// limits are kept. The current zoom is clamped into the new range, with
    /// the translate left as is.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let valid = |z: f64| z.is_finite() && z > 0.0;
        if !valid(min_zoom) || !valid(max_zoom) {
            tracing::warn!(min_zoom, max_zoom, "ignoring invalid zoom limits");
            return;
        }
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.set_zoom(self.zoom);
    }

    /// Sets how zoom factors are folded into the current zoom.
    pub fn set_zoom_policy(&mut self, policy: ZoomPolicy) {
        self.zoom_policy = policy;
    }

    /// Returns the current zoom policy.
    #[must_use]
    pub fn zoom_policy(&self) -> ZoomPolicy {
        self.zoom_policy
    }

    /// Sets how fitted content should be positioned inside the surface.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    /// Returns the current fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Sets the zoom factor without an anchor, clamping it into the zoom range.
    ///
    /// The translate is left unchanged, so the world point under any screen
    /// position other than the world origin's may shift.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        if !zoom.is_finite() {
            return false;
        }
        let clamped = self.clamp_zoom(zoom);
        if clamped == self.zoom {
            return false;
        }
        tracing::trace!(from = self.zoom, to = clamped, "zoom");
        self.zoom = clamped;
        self.rebuild_transforms();
        true
    }

    /// Pans the view by a delta in screen space.
    pub fn pan(&mut self, delta: Vec2) -> bool {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return false;
        }
        self.translate += delta;
        self.rebuild_transforms();
        true
    }

    /// Applies a zoom factor under the current [`ZoomPolicy`].
    ///
    /// With an `anchor` (in screen space) the world point under it stays
    /// fixed, see [`CanvasViewport::zoom_to_point`]. Without one only the zoom
    /// changes.
    pub fn zoom_by(&mut self, factor: f64, anchor: Option<Point>) -> bool {
        if factor == 0.0 || !factor.is_finite() {
            return false;
        }
        let proposed = self.zoom_policy.propose(self.zoom, factor);
        match anchor {
            Some(anchor) => self.zoom_to_point(anchor, proposed),
            None => self.set_zoom(proposed),
        }
    }

    /// Sets the zoom to `new_zoom` (after clamping) while keeping the world
    /// point under `anchor` visually fixed.
    ///
    /// If clamping absorbs the whole change this is a no-op: neither the zoom
    /// nor the translate moves. The same holds when the anchored translate
    /// would not be finite.
    pub fn zoom_to_point(&mut self, anchor: Point, new_zoom: f64) -> bool {
        if !new_zoom.is_finite() || !anchor.is_finite() {
            return false;
        }
        let old_zoom = self.zoom;
        let new_zoom = self.clamp_zoom(new_zoom);
        if new_zoom == old_zoom {
            return false;
        }
        let Some(translate) =
            checked_anchored_translate(anchor, self.translate, old_zoom, new_zoom)
        else {
            tracing::debug!(anchor_x = anchor.x, anchor_y = anchor.y, "anchored zoom overflow");
            return false;
        };

        self.translate = translate;
        self.zoom = new_zoom;
        self.rebuild_transforms();
        tracing::trace!(
            from = old_zoom,
            to = new_zoom,
            anchor_x = anchor.x,
            anchor_y = anchor.y,
            "anchored zoom"
        );
        true
    }

    /// Zooms in by `step` without an anchor.
    ///
    /// Only the magnitude of `step` is used.
    pub fn zoom_in(&mut self, step: f64) -> bool {
        self.zoom_by(step.abs(), None)
    }

    /// Zooms out by `step` without an anchor.
    ///
    /// Only the magnitude of `step` is used.
    pub fn zoom_out(&mut self, step: f64) -> bool {
        self.zoom_by(-step.abs(), None)
    }

    /// Fits the given world-space rectangle into the surface, preserving
    /// aspect ratio.
    ///
    /// The fitted zoom is clamped to the zoom range, so very large or very
    /// small content may not fill the surface exactly.
    pub fn fit_rect(&mut self, rect: Rect) -> bool {
        if rect.width() <= 0.0 || rect.height() <= 0.0 || !rect.is_finite() {
            return false;
        }
        let size = self.surface_size;
        if size.width <= 0.0 || size.height <= 0.0 {
            return false;
        }

        let sx = size.width / rect.width();
        let sy = size.height / rect.height();
        let zoom = self.clamp_zoom(sx.min(sy));

        let translate = match self.fit_mode {
            FitMode::Center => {
                let surface_center = size.to_vec2() * 0.5;
                surface_center - rect.center().to_vec2() * zoom
            }
            FitMode::AlignMin => -rect.origin().to_vec2() * zoom,
        };
        if translate == self.translate && zoom == self.zoom {
            return false;
        }

        self.zoom = zoom;
        self.translate = translate;
        self.rebuild_transforms();
        true
    }

    /// Pans so that the given world-space point sits at the surface center.
    pub fn center_on(&mut self, world_pt: Point) -> bool {
        let surface_center = (self.surface_size.to_vec2() * 0.5).to_point();
        let delta = surface_center - self.world_to_screen_point(world_pt);
        self.pan(delta)
    }

    /// Restores the identity translate and a zoom of `1.0` (clamped).
    pub fn reset(&mut self) -> bool {
        let zoom = self.clamp_zoom(1.0);
        if self.translate == Vec2::ZERO && self.zoom == zoom {
            return false;
        }
        self.translate = Vec2::ZERO;
        self.zoom = zoom;
        self.rebuild_transforms();
        true
    }

    /// Returns the world-space rectangle currently visible on the surface.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.screen_to_world_rect(self.surface_size.to_rect())
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen_point(&self, pt: Point) -> Point {
        self.world_to_screen * pt
    }

    /// Converts a screen-space point into world coordinates.
    #[must_use]
    pub fn screen_to_world_point(&self, pt: Point) -> Point {
        self.screen_to_world * pt
    }

    /// Converts a world-space rectangle into screen coordinates.
    #[must_use]
    pub fn world_to_screen_rect(&self, rect: Rect) -> Rect {
        self.world_to_screen.transform_rect_bbox(rect)
    }

    /// Converts a screen-space rectangle into world coordinates.
    #[must_use]
    pub fn screen_to_world_rect(&self, rect: Rect) -> Rect {
        self.screen_to_world.transform_rect_bbox(rect)
    }

    fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    fn rebuild_transforms(&mut self) {
        // World → screen: scale, then translate.
        self.world_to_screen = ViewportState {
            translate: self.translate,
            zoom: self.zoom,
        }
        .transform();
        self.screen_to_world = self.world_to_screen.inverse();
    }
}

impl Default for CanvasViewport {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{CanvasViewport, FitMode, ZoomPolicy};

    fn viewport() -> CanvasViewport {
        CanvasViewport::new(Size::new(800.0, 600.0))
    }

    fn assert_close(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 1e-9, "{a:?} != {b:?}");
        assert!((a.y - b.y).abs() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn starts_at_identity() {
        let vp = viewport();
        assert_eq!(vp.zoom(), 1.0);
        assert_eq!(vp.translate(), Vec2::ZERO);
        assert_eq!(vp.screen_to_world_point(Point::new(12.0, 34.0)), Point::new(12.0, 34.0));
    }

    #[test]
    fn pan_adds_screen_delta() {
        let mut vp = viewport();
        assert!(vp.pan(Vec2::new(10.0, -5.0)));
        assert!(vp.pan(Vec2::new(2.5, 2.5)));
        assert_eq!(vp.translate(), Vec2::new(12.5, -2.5));
        assert_eq!(vp.zoom(), 1.0);
    }

    #[test]
    fn pan_rejects_zero_and_non_finite() {
        let mut vp = viewport();
        assert!(!vp.pan(Vec2::ZERO));
        assert!(!vp.pan(Vec2::new(f64::NAN, 1.0)));
        assert!(!vp.pan(Vec2::new(1.0, f64::INFINITY)));
        assert_eq!(vp.translate(), Vec2::ZERO);
    }

    #[test]
    fn zoom_to_point_keeps_anchor_fixed() {
        let mut vp = viewport();
        vp.pan(Vec2::new(100.0, 50.0));
        vp.set_zoom(1.5);

        let anchor = Point::new(600.0, 400.0);
        let before = vp.screen_to_world_point(anchor);
        assert!(vp.zoom_to_point(anchor, 1.8));
        let after = vp.screen_to_world_point(anchor);

        assert_eq!(vp.zoom(), 1.8);
        assert_close(before, after);
    }

    #[test]
    fn zoom_to_point_matches_worked_example() {
        let mut vp = viewport();
        assert!(vp.zoom_to_point(Point::new(500.0, 500.0), 1.1));
        assert!((vp.translate().x + 50.0).abs() < 1e-9);
        assert!((vp.translate().y + 50.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_to_point_clamps_and_is_idempotent_at_the_boundary() {
        let mut vp = viewport();
        let anchor = Point::new(250.0, 175.0);

        assert!(vp.zoom_to_point(anchor, 100.0));
        assert_eq!(vp.zoom(), vp.max_zoom());
        let translate = vp.translate();

        assert!(!vp.zoom_to_point(anchor, 100.0));
        assert!(!vp.zoom_by(2.0, Some(anchor)));
        assert_eq!(vp.zoom(), vp.max_zoom());
        assert_eq!(vp.translate(), translate);

        assert!(vp.zoom_to_point(anchor, 0.0));
        assert_eq!(vp.zoom(), vp.min_zoom());
        let translate = vp.translate();
        assert!(!vp.zoom_by(-2.0, Some(anchor)));
        assert_eq!(vp.translate(), translate);
    }

    #[test]
    fn zoom_by_zero_or_non_finite_is_noop() {
        let mut vp = viewport();
        vp.pan(Vec2::new(3.0, 4.0));
        assert!(!vp.zoom_by(0.0, Some(Point::new(10.0, 10.0))));
        assert!(!vp.zoom_by(f64::NAN, None));
        assert!(!vp.zoom_by(f64::INFINITY, None));
        assert!(!vp.zoom_to_point(Point::new(f64::NAN, 0.0), 2.0));
        assert!(!vp.zoom_to_point(Point::new(0.0, 0.0), f64::NAN));
        assert!(!vp.zoom_to_point(Point::new(300.0, 200.0), f64::INFINITY));
        assert!(!vp.zoom_to_point(Point::new(300.0, 200.0), f64::NEG_INFINITY));
        assert!(!vp.set_zoom(f64::INFINITY));
        assert!(!vp.set_zoom(f64::NEG_INFINITY));
        assert!(!vp.set_zoom(f64::NAN));
        assert_eq!(vp.zoom(), 1.0);
        assert_eq!(vp.translate(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn overflowing_anchor_leaves_view_intact() {
        let mut vp = viewport();
        assert!(!vp.zoom_to_point(Point::new(1e308, 0.0), 4.0));
        assert!(!vp.zoom_by(3.0, Some(Point::new(1e308, 0.0))));
        assert_eq!(vp.zoom(), 1.0);
        assert_eq!(vp.translate(), Vec2::ZERO);
        assert_eq!(vp.screen_to_world_point(Point::new(1.0, 1.0)), Point::new(1.0, 1.0));
    }

    #[test]
    fn tiny_zoom_limits_still_register_changes() {
        let mut vp = viewport().with_zoom_limits(1e-20, 1e-17);
        assert_eq!(vp.zoom(), 1e-17);

        assert!(vp.zoom_to_point(Point::new(10.0, 10.0), 5e-18));
        assert_eq!(vp.zoom(), 5e-18);
        assert!(vp.set_zoom(2e-18));
        assert_eq!(vp.zoom(), 2e-18);
        assert!(!vp.set_zoom(2e-18));
    }

    #[test]
    fn zoom_by_follows_policy() {
        let mut vp = viewport();
        assert!(vp.zoom_by(0.5, None));
        assert_eq!(vp.zoom(), 1.5);

        let mut vp = viewport().with_zoom_policy(ZoomPolicy::Multiplicative);
        assert!(vp.zoom_by(0.5, None));
        assert_eq!(vp.zoom(), 1.5);
        assert!(vp.zoom_by(0.5, None));
        assert_eq!(vp.zoom(), 2.25);
    }

    #[test]
    fn unanchored_zoom_leaves_translate() {
        let mut vp = viewport();
        vp.pan(Vec2::new(40.0, 30.0));
        assert!(vp.zoom_in(0.5));
        assert_eq!(vp.translate(), Vec2::new(40.0, 30.0));
        assert!(vp.zoom_out(0.25));
        assert_eq!(vp.zoom(), 1.25);
        assert!(vp.zoom_out(-0.25));
        assert_eq!(vp.zoom(), 1.0);
    }

    #[test]
    fn zoom_limits_are_normalized_and_validated() {
        let mut vp = viewport().with_zoom_limits(2.0, 0.5);
        assert_eq!(vp.min_zoom(), 0.5);
        assert_eq!(vp.max_zoom(), 2.0);

        vp.set_zoom_limits(0.0, 3.0);
        assert_eq!(vp.min_zoom(), 0.5);
        vp.set_zoom_limits(f64::NAN, 3.0);
        assert_eq!(vp.min_zoom(), 0.5);

        vp.set_zoom(2.0);
        vp.set_zoom_limits(0.25, 1.5);
        assert_eq!(vp.zoom(), 1.5);
    }

    #[test]
    fn fit_rect_shows_whole_rect() {
        let mut vp = CanvasViewport::new(Size::new(200.0, 100.0));
        let world = Rect::new(-50.0, -25.0, 50.0, 25.0);
        assert!(vp.fit_rect(world));

        let visible = vp.visible_world_rect();
        assert!(visible.min_x() <= world.min_x() + 1e-9);
        assert!(visible.max_x() >= world.max_x() - 1e-9);
        assert!(visible.min_y() <= world.min_y() + 1e-9);
        assert!(visible.max_y() >= world.max_y() - 1e-9);
    }

    #[test]
    fn fit_mode_align_min_aligns_world_min_to_surface_origin() {
        let mut vp = CanvasViewport::new(Size::new(200.0, 100.0));
        vp.set_fit_mode(FitMode::AlignMin);

        let world = Rect::new(-50.0, -20.0, 150.0, 80.0);
        vp.fit_rect(world);
        assert_close(vp.world_to_screen_point(world.origin()), Point::ZERO);
    }

    #[test]
    fn fit_rect_rejects_degenerate_input() {
        let mut vp = viewport();
        assert!(!vp.fit_rect(Rect::new(0.0, 0.0, 0.0, 10.0)));
        let mut empty = CanvasViewport::default();
        assert!(!empty.fit_rect(Rect::new(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn center_on_moves_point_to_surface_center() {
        let mut vp = viewport();
        vp.set_zoom(2.0);
        assert!(vp.center_on(Point::new(10.0, 20.0)));
        assert_close(vp.world_to_screen_point(Point::new(10.0, 20.0)), Point::new(400.0, 300.0));
        assert!(!vp.center_on(Point::new(10.0, 20.0)));
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut vp = viewport();
        vp.pan(Vec2::new(5.0, 5.0));
        vp.set_zoom(3.0);
        assert!(vp.reset());
        assert_eq!(vp.state(), crate::ViewportState::IDENTITY);
        assert!(!vp.reset());
    }

    #[test]
    fn rect_conversions_are_inverse() {
        let mut vp = viewport();
        vp.pan(Vec2::new(-20.0, 35.0));
        vp.set_zoom(2.5);
        let world = Rect::new(1.0, 2.0, 30.0, 40.0);
        let back = vp.screen_to_world_rect(vp.world_to_screen_rect(world));
        assert!((back.x0 - world.x0).abs() < 1e-9);
        assert!((back.y1 - world.y1).abs() < 1e-9);
    }
}
