// Copyright 2025 the Diagram Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Point;

use crate::snapshot::DragNodeSnapshot;

/// What kind of entity is being dragged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DragType {
    /// A node is being moved.
    #[default]
    Node,
    /// An edge (or one of its endpoints) is being dragged.
    Edge,
    /// A new edge is being drawn out of a node's port.
    Port,
}

/// Transient state of a drag gesture.
///
/// `coords` is `None` while no drag is in progress. During a drag the first
/// element is the world-space anchor where the drag began and, once the
/// pointer has moved, the second is the latest pointer position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragSession {
    /// Drag anchor and latest pointer position, in world space.
    pub coords: Option<Vec<Point>>,
    /// The entity being dragged.
    pub drag_type: DragType,
    /// Disables all drag previews when set.
    pub readonly: bool,
}

impl DragSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new(readonly: bool) -> Self {
        Self {
            readonly,
            ..Self::default()
        }
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.coords.is_some()
    }

    /// Starts a drag of `drag_type` anchored at `at`.
    ///
    /// Returns `false` and leaves the session untouched if `at` is not finite.
    pub fn begin(&mut self, drag_type: DragType, at: Point) -> bool {
        if !at.is_finite() {
            return false;
        }
        self.drag_type = drag_type;
        self.coords = Some(vec![at]);
        true
    }

    /// Replaces the latest pointer position, keeping the anchor.
    ///
    /// Returns `false` when idle or when `at` is not finite.
    pub fn move_to(&mut self, at: Point) -> bool {
        if !at.is_finite() {
            return false;
        }
        match &mut self.coords {
            Some(coords) => {
                coords.truncate(1);
                coords.push(at);
                true
            }
            None => false,
        }
    }

    /// Ends the drag. Returns `false` if no drag was in progress.
    pub fn cancel(&mut self) -> bool {
        self.coords.take().is_some()
    }
}

/// Decides whether a node-shaped drag preview should be rendered.
///
/// True only if all of the following hold:
/// 1. `session.coords` is present (an empty sequence still counts) and
///    holds only finite points.
/// 2. `snapshot` is present and not [empty](DragNodeSnapshot::is_empty).
/// 3. `session.drag_type` is [`DragType::Node`].
/// 4. `session.readonly` is `false`.
#[must_use]
pub fn should_render_drag_preview<K>(
    session: &DragSession,
    snapshot: Option<&DragNodeSnapshot<K>>,
) -> bool {
    let in_progress = session
        .coords
        .as_ref()
        .is_some_and(|coords| coords.iter().all(|p| p.is_finite()));
    let is_node = match session.drag_type {
        DragType::Node => true,
        DragType::Edge | DragType::Port => false,
    };
    let has_data = snapshot.is_some_and(|s| !s.is_empty());

    in_progress && has_data && is_node && !session.readonly
}
