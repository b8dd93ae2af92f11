// Copyright 2025 the Diagram Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagram View: the pan/zoom viewport of a node/edge diagram canvas.
//!
//! This crate provides a small, headless model of the visible region of a
//! diagram. It focuses on:
//! - Viewport state (translate + uniform zoom) with enforced zoom limits.
//! - Cursor-anchored zoom: the world point under the cursor stays put.
//! - Coordinate conversion between client, screen, and world space.
//! - Wheel delta → zoom factor conversion and zoom dispatch.
//! - Fitting and centering helpers.
//!
//! It does **not** paint anything or own the diagram. Callers are expected
//! to:
//! - Feed pointer and wheel input into [`CanvasViewport`] operations.
//! - Read [`CanvasViewport::state`] or [`CanvasViewport::transform`] once
//!   per frame to position shapes.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use diagram_view::{CanvasViewport, DEFAULT_ZOOM_SPEED, dispatch_wheel_zoom};
//!
//! let mut view = CanvasViewport::new(Size::new(800.0, 600.0));
//!
//! // Wheel toward the user at (500, 300): zoom in around the cursor.
//! let cursor = Point::new(500.0, 300.0);
//! let under_cursor = view.screen_to_world_point(cursor);
//! dispatch_wheel_zoom(&mut view, cursor, -10.0, DEFAULT_ZOOM_SPEED);
//!
//! assert!(view.zoom() > 1.0);
//! let still_under_cursor = view.screen_to_world_point(cursor);
//! assert!((under_cursor.x - still_under_cursor.x).abs() < 1e-9);
//! ```
//!
//! ## Coordinate conventions
//!
//! - `screen = world * zoom + translate`, `world = (screen - translate) / zoom`.
//! - Screen space is relative to the surface origin; use
//!   [`client_to_screen`] to get there from window coordinates.
//! - [`CanvasViewport::transform`] is `translate(t) * scale(z)`, consistent
//!   with the formulas above.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate std;

mod coords;
mod modes;
mod viewport;
mod wheel;

pub use coords::{ViewportState, anchored_translate, client_to_screen};
pub use modes::{FitMode, ZoomPolicy};
pub use viewport::{CanvasViewport, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};
pub use wheel::{
    AnchoredZoom, DEFAULT_ZOOM_SPEED, ZoomControls, dispatch_wheel_zoom, wheel_zoom_factor,
};
