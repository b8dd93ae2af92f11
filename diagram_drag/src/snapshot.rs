// Copyright 2025 the Diagram Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};

/// Render data of a dragged node, captured when the drag begins.
///
/// Geometry is the node's last committed layout. Every attribute is optional
/// because the host may start a drag before the node's data has loaded; a
/// snapshot with nothing populated is [empty](Self::is_empty) and never
/// previewed.
///
/// Composite (container) nodes carry `children`, each positioned relative to
/// its parent. Children are rendered as previews of their own, so they are
/// kept apart from the parent's flat props, see [`Self::split`].
#[derive(Clone, Debug, PartialEq)]
pub struct DragNodeSnapshot<K> {
    /// Identifier of the dragged node.
    pub id: Option<K>,
    /// Committed x position.
    pub x: Option<f64>,
    /// Committed y position.
    pub y: Option<f64>,
    /// Committed width.
    pub width: Option<f64>,
    /// Committed height.
    pub height: Option<f64>,
    /// Nested child snapshots, in render order.
    pub children: Option<Vec<DragNodeSnapshot<K>>>,
}

impl<K> Default for DragNodeSnapshot<K> {
    fn default() -> Self {
        Self {
            id: None,
            x: None,
            y: None,
            width: None,
            height: None,
            children: None,
        }
    }
}

impl<K> DragNodeSnapshot<K> {
    /// Creates a snapshot carrying only an identifier.
    #[must_use]
    pub fn new(id: K) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Sets the committed position.
    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Sets the committed size.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Sets the child snapshots.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children = Some(children.into_iter().collect());
        self
    }

    /// Returns `true` if no attribute at all is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.x.is_none()
            && self.y.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.children.is_none()
    }

    /// Separates the children from the flat render props.
    ///
    /// Equivalent to [`split_snapshot_for_render`].
    #[must_use]
    pub fn split(self) -> (DragNodeProps<K>, Option<Vec<Self>>) {
        let props = DragNodeProps {
            id: self.id,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        };
        (props, self.children)
    }
}

/// Separates a snapshot's `children` from the rest of its attributes.
///
/// The preview renderer draws the parent shape from the flat props and each
/// child as its own preview. `children` is `None` when the snapshot has none.
#[must_use]
pub fn split_snapshot_for_render<K>(
    snapshot: DragNodeSnapshot<K>,
) -> (DragNodeProps<K>, Option<Vec<DragNodeSnapshot<K>>>) {
    snapshot.split()
}

/// Identity and geometry of a dragged node, without its children.
#[derive(Clone, Debug, PartialEq)]
pub struct DragNodeProps<K> {
    /// Identifier of the dragged node.
    pub id: Option<K>,
    /// Committed x position.
    pub x: Option<f64>,
    /// Committed y position.
    pub y: Option<f64>,
    /// Committed width.
    pub width: Option<f64>,
    /// Committed height.
    pub height: Option<f64>,
}

impl<K> Default for DragNodeProps<K> {
    fn default() -> Self {
        Self {
            id: None,
            x: None,
            y: None,
            width: None,
            height: None,
        }
    }
}

impl<K> DragNodeProps<K> {
    /// The committed position, if both coordinates are known.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        Some(Point::new(self.x?, self.y?))
    }

    /// The committed bounds, if position and size are all known.
    #[must_use]
    pub fn rect(&self) -> Option<Rect> {
        let size = Size::new(self.width?, self.height?);
        Some(Rect::from_origin_size(self.origin()?, size))
    }

    /// Returns these props moved by `offset`. Unknown coordinates stay unknown.
    #[must_use]
    pub fn translated(mut self, offset: Vec2) -> Self {
        self.x = self.x.map(|x| x + offset.x);
        self.y = self.y.map(|y| y + offset.y);
        self
    }
}

impl<K> From<DragNodeProps<K>> for DragNodeSnapshot<K> {
    fn from(props: DragNodeProps<K>) -> Self {
        Self {
            id: props.id,
            x: props.x,
            y: props.y,
            width: props.width,
            height: props.height,
            children: None,
        }
    }
}
