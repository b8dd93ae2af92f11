// Copyright 2025 the Diagram Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::drag::DragTracker;
use crate::session::{DragSession, DragType, should_render_drag_preview};
use crate::snapshot::{DragNodeProps, DragNodeSnapshot};

/// Everything a renderer needs to draw a drag preview.
#[derive(Clone, Debug, PartialEq)]
pub struct DragPreview<K> {
    /// Flat props of the dragged node, at their committed position.
    pub props: DragNodeProps<K>,
    /// Children to render as previews of their own, relative to the parent.
    pub children: Option<Vec<DragNodeSnapshot<K>>>,
    /// Offset of the pointer from where the drag began, in world space.
    pub offset: Vec2,
    /// Latest pointer position, in world space.
    pub pointer: Point,
}

impl<K> DragPreview<K> {
    /// Where the dragged node should be drawn: its committed origin moved by
    /// the drag offset.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.props.origin().map(|p| p + self.offset)
    }
}

/// A completed drag, handed back so the host can commit the move.
#[derive(Clone, Debug, PartialEq)]
pub struct DragDrop<K> {
    /// The entity that was dragged.
    pub drag_type: DragType,
    /// The snapshot captured when the drag began.
    pub snapshot: Option<DragNodeSnapshot<K>>,
    /// Total offset from the drag anchor to the drop point, in world space.
    pub offset: Vec2,
    /// The drop point, in world space.
    pub at: Point,
}

/// Drag lifecycle for one editor session.
///
/// A drag is started with [`begin`](Self::begin), fed pointer moves with
/// [`update`](Self::update) and finished with either
/// [`drop_at`](Self::drop_at) or [`cancel`](Self::cancel). Both finishing
/// calls discard the snapshot; only a drop reports it back.
///
/// All positions are in world space.
#[derive(Clone, Debug)]
pub struct DragInteraction<K> {
    session: DragSession,
    snapshot: Option<DragNodeSnapshot<K>>,
    tracker: DragTracker,
}

impl<K> Default for DragInteraction<K> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<K> DragInteraction<K> {
    /// Creates an idle interaction.
    #[must_use]
    pub fn new(readonly: bool) -> Self {
        Self {
            session: DragSession::new(readonly),
            snapshot: None,
            tracker: DragTracker::default(),
        }
    }

    /// Starts dragging an entity of `drag_type` from `at`.
    ///
    /// Any drag already in progress is replaced. Returns `false` (and stays
    /// idle) if `at` is not finite.
    pub fn begin(
        &mut self,
        drag_type: DragType,
        snapshot: Option<DragNodeSnapshot<K>>,
        at: Point,
    ) -> bool {
        if !self.session.begin(drag_type, at) {
            self.cancel();
            return false;
        }
        self.tracker.start(at);
        self.snapshot = snapshot;
        tracing::debug!(?drag_type, x = at.x, y = at.y, "drag started");
        true
    }

    /// Moves the drag to `at`, returning the delta since the last position.
    ///
    /// Returns `None` when idle or when `at` is not finite.
    pub fn update(&mut self, at: Point) -> Option<Vec2> {
        if !self.session.move_to(at) {
            return None;
        }
        self.tracker.update(at)
    }

    /// Finishes the drag at `at` and returns what was dragged.
    ///
    /// Returns `None` when idle. In read-only mode the drag is discarded
    /// without being reported. A non-finite `at` drops at the last known
    /// position.
    pub fn drop_at(&mut self, at: Point) -> Option<DragDrop<K>> {
        if !self.session.is_active() {
            return None;
        }
        self.update(at);
        let drag_type = self.session.drag_type;
        let at = self.tracker.current()?;
        let offset = self.tracker.total_offset()?;
        let snapshot = self.snapshot.take();
        self.finish();

        if self.session.readonly {
            tracing::debug!(?drag_type, "read-only, drop discarded");
            return None;
        }
        tracing::debug!(?drag_type, dx = offset.x, dy = offset.y, "drag dropped");
        Some(DragDrop {
            drag_type,
            snapshot,
            offset,
            at,
        })
    }

    /// Cancels the drag. Returns `false` if none was in progress.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.session.is_active();
        self.finish();
        if was_active {
            tracing::debug!("drag cancelled");
        }
        was_active
    }

    /// Sets the read-only flag. Returns `true` if it changed.
    pub fn set_readonly(&mut self, readonly: bool) -> bool {
        if self.session.readonly == readonly {
            return false;
        }
        self.session.readonly = readonly;
        true
    }

    /// Returns the read-only flag.
    #[must_use]
    pub fn readonly(&self) -> bool {
        self.session.readonly
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_active()
    }

    /// The underlying drag session.
    #[must_use]
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// The snapshot captured at drag start, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&DragNodeSnapshot<K>> {
        self.snapshot.as_ref()
    }

    /// Offset from the drag anchor to the latest pointer position.
    #[must_use]
    pub fn offset(&self) -> Option<Vec2> {
        self.tracker.total_offset()
    }

    /// See [`should_render_drag_preview`].
    #[must_use]
    pub fn should_render_preview(&self) -> bool {
        should_render_drag_preview(&self.session, self.snapshot.as_ref())
    }

    /// Returns the preview payload, or `None` when no preview should render.
    #[must_use]
    pub fn preview(&self) -> Option<DragPreview<K>>
    where
        K: Clone,
    {
        if !self.should_render_preview() {
            return None;
        }
        let (props, children) = self.snapshot.clone()?.split();
        Some(DragPreview {
            props,
            children,
            offset: self.tracker.total_offset()?,
            pointer: self.tracker.current()?,
        })
    }

    fn finish(&mut self) {
        self.session.cancel();
        self.snapshot = None;
        self.tracker.end();
    }
}
