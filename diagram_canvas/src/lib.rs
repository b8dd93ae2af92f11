// Copyright 2025 the Diagram Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagram Canvas: the editor session tying viewport and drag state together.
//!
//! A [`CanvasSession`] is owned by the editor and passed to whatever needs it;
//! there is no global state. Input adapters translate host events into
//! [`CanvasEvent`]s and hand them to [`CanvasSession::handle`]; the renderer
//! calls [`CanvasSession::frame`] once per pass and treats the result as a
//! read-only snapshot.
//!
//! - Wheel events zoom around the cursor (see [`diagram_view`]).
//! - Drag events are converted into world space and drive
//!   [`diagram_drag::DragInteraction`].
//! - [`CanvasConfig`] carries the recognized options and is validated up
//!   front; this is the only fallible part of the API.
//!
//! ## Example
//!
//! ```rust
//! use diagram_canvas::{CanvasConfig, CanvasEvent, CanvasSession};
//! use diagram_drag::{DragNodeSnapshot, DragType};
//! use kurbo::{Point, Size};
//!
//! let mut session = CanvasSession::new(CanvasConfig::default(), Size::new(800.0, 600.0))?;
//! session.handle(CanvasEvent::SurfaceMoved { origin: Point::new(100.0, 50.0) });
//!
//! // Wheel toward the user over client (600, 350) = screen (500, 300).
//! let outcome = session.handle(CanvasEvent::Wheel {
//!     client: Point::new(600.0, 350.0),
//!     delta_y: -10.0,
//! });
//! assert!(outcome.changed);
//!
//! session.handle(CanvasEvent::DragStart {
//!     client: Point::new(600.0, 350.0),
//!     drag_type: DragType::Node,
//!     snapshot: Some(DragNodeSnapshot::new("node-1").with_position(400.0, 250.0)),
//! });
//! session.handle(CanvasEvent::DragMove { client: Point::new(612.0, 350.0) });
//!
//! let frame = session.frame();
//! assert!(frame.preview.is_some());
//! # Ok::<(), diagram_canvas::ConfigError>(())
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

#[cfg(test)]
extern crate std;

mod config;
mod event;
mod session;

pub use config::{CanvasConfig, ConfigError};
pub use event::{CanvasEvent, EventOutcome};
pub use session::{CanvasFrame, CanvasSession};
