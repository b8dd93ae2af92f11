// Copyright 2025 the Diagram Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagram Drag: state for in-progress drags on a diagram canvas.
//!
//! While a node is being dragged, nothing is committed to the diagram yet;
//! instead a transient preview shows where it would land. This crate owns
//! that transient state:
//!
//! - [`DragTracker`]: anchor and latest pointer position, with per-move
//!   deltas and the total offset.
//! - [`DragSession`]: drag coordinates, the [`DragType`] being dragged, and
//!   the read-only flag.
//! - [`DragNodeSnapshot`]: the dragged node's committed render data,
//!   captured at drag start.
//! - [`should_render_drag_preview`] and [`split_snapshot_for_render`]: the
//!   preview eligibility rule and the parent/children split the renderer
//!   consumes.
//! - [`DragInteraction`]: the begin → update → drop/cancel lifecycle tying
//!   these together.
//!
//! The crate does not paint, hit-test, or commit anything. All positions are
//! world-space points; convert pointer positions through the viewport first.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use diagram_drag::{DragInteraction, DragNodeSnapshot, DragType};
//!
//! let mut drag = DragInteraction::new(false);
//! let node = DragNodeSnapshot::new("node-1")
//!     .with_position(100.0, 200.0)
//!     .with_size(150.0, 100.0);
//!
//! drag.begin(DragType::Node, Some(node), Point::new(110.0, 210.0));
//! drag.update(Point::new(130.0, 200.0));
//!
//! let preview = drag.preview().unwrap();
//! assert_eq!(preview.offset, Vec2::new(20.0, -10.0));
//! assert_eq!(preview.origin(), Some(Point::new(120.0, 190.0)));
//!
//! let dropped = drag.drop_at(Point::new(130.0, 200.0)).unwrap();
//! assert_eq!(dropped.offset, Vec2::new(20.0, -10.0));
//! assert!(drag.preview().is_none());
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod drag;
mod interaction;
mod session;
mod snapshot;

pub use drag::DragTracker;
pub use interaction::{DragDrop, DragInteraction, DragPreview};
pub use session::{DragSession, DragType, should_render_drag_preview};
pub use snapshot::{DragNodeProps, DragNodeSnapshot, split_snapshot_for_render};
