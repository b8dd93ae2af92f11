// Copyright 2025 the Diagram Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use diagram_drag::{DragDrop, DragNodeSnapshot, DragType};
use kurbo::{Point, Size, Vec2};

/// Input delivered to a [`crate::CanvasSession`] by the host's adapters.
///
/// Pointer positions are in client space (the host window); the session
/// converts them through the surface origin and the viewport.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasEvent<K> {
    /// A wheel gesture over the surface.
    Wheel {
        /// Pointer position.
        client: Point,
        /// Raw vertical wheel delta; positive scrolls away from the user.
        delta_y: f64,
    },
    /// A pan gesture, in screen pixels.
    Pan {
        /// Screen-space delta.
        delta: Vec2,
    },
    /// A drag gesture started on an entity.
    DragStart {
        /// Pointer position.
        client: Point,
        /// The entity being dragged.
        drag_type: DragType,
        /// Render data of the dragged node, if available.
        snapshot: Option<DragNodeSnapshot<K>>,
    },
    /// The pointer moved while dragging.
    DragMove {
        /// Pointer position.
        client: Point,
    },
    /// The drag ended with a drop.
    DragEnd {
        /// Pointer position.
        client: Point,
    },
    /// The drag was abandoned.
    DragCancel,
    /// The surface was resized.
    Resize {
        /// New surface size in screen pixels.
        size: Size,
    },
    /// The surface moved within the host window.
    SurfaceMoved {
        /// New top-left corner of the surface, in client space.
        origin: Point,
    },
}

impl<K> CanvasEvent<K> {
    /// Short name of the event, for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wheel { .. } => "wheel",
            Self::Pan { .. } => "pan",
            Self::DragStart { .. } => "drag_start",
            Self::DragMove { .. } => "drag_move",
            Self::DragEnd { .. } => "drag_end",
            Self::DragCancel => "drag_cancel",
            Self::Resize { .. } => "resize",
            Self::SurfaceMoved { .. } => "surface_moved",
        }
    }
}

/// Result of handling one [`CanvasEvent`].
#[derive(Clone, Debug, PartialEq)]
pub struct EventOutcome<K> {
    /// Whether any state changed, so that a re-render is due.
    pub changed: bool,
    /// A completed drag for the host to commit.
    pub dropped: Option<DragDrop<K>>,
}

impl<K> EventOutcome<K> {
    pub(crate) fn changed(changed: bool) -> Self {
        Self {
            changed,
            dropped: None,
        }
    }
}
