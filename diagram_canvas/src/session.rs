// Copyright 2025 the Diagram Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use diagram_drag::{DragInteraction, DragPreview};
use diagram_view::{
    AnchoredZoom, CanvasViewport, ViewportState, ZoomControls, client_to_screen,
    dispatch_wheel_zoom,
};
use kurbo::{Affine, Point, Size};

use crate::config::{CanvasConfig, ConfigError};
use crate::event::{CanvasEvent, EventOutcome};

/// Read-only view of a session for one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasFrame<K> {
    /// Current pan/zoom pair.
    pub viewport: ViewportState,
    /// World → screen transform matching `viewport`.
    pub transform: Affine,
    /// Drag preview to draw on top of the diagram, if any.
    pub preview: Option<DragPreview<K>>,
    /// Session revision this frame was taken at.
    pub revision: u64,
}

/// One editor session: the viewport and drag state of a single canvas.
///
/// The session is an explicitly owned value; hosts pass it to their input
/// adapters (through [`handle`](Self::handle)) and to their renderer
/// (through [`frame`](Self::frame)). Each event is handled to completion
/// before the call returns. A host driving one session from several threads
/// must serialize access to it.
///
/// The revision counter only moves when state actually changes, so hosts can
/// skip re-rendering after no-op input such as wheel zoom at a zoom limit.
#[derive(Clone, Debug)]
pub struct CanvasSession<K> {
    config: CanvasConfig,
    viewport: CanvasViewport,
    drag: DragInteraction<K>,
    surface_origin: Point,
    revision: u64,
}

impl<K> CanvasSession<K> {
    /// Creates a session over a surface of the given size.
    pub fn new(config: CanvasConfig, surface_size: Size) -> Result<Self, ConfigError> {
        config.validate()?;
        let viewport = CanvasViewport::new(surface_size)
            .with_zoom_limits(config.min_zoom, config.max_zoom)
            .with_zoom_policy(config.zoom_policy);
        Ok(Self {
            config,
            viewport,
            drag: DragInteraction::new(config.readonly),
            surface_origin: Point::ZERO,
            revision: 0,
        })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &CanvasViewport {
        &self.viewport
    }

    /// Mutable access to the viewport, for operations without an event form
    /// such as fitting. Changes made here do not bump the revision; call
    /// [`Self::mark_changed`] when needed.
    pub fn viewport_mut(&mut self) -> &mut CanvasViewport {
        &mut self.viewport
    }

    /// The drag interaction.
    #[must_use]
    pub fn drag(&self) -> &DragInteraction<K> {
        &self.drag
    }

    /// Top-left corner of the surface in client space.
    #[must_use]
    pub fn surface_origin(&self) -> Point {
        self.surface_origin
    }

    /// Counter bumped on every state change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Bumps the revision after an out-of-band change.
    pub fn mark_changed(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Replaces the configuration.
    ///
    /// On error the session is left untouched. Returns whether any state
    /// changed (the zoom may be re-clamped into new limits).
    pub fn reconfigure(&mut self, config: CanvasConfig) -> Result<bool, ConfigError> {
        config.validate()?;
        let before = self.viewport.state();
        self.viewport.set_zoom_limits(config.min_zoom, config.max_zoom);
        self.viewport.set_zoom_policy(config.zoom_policy);
        let readonly_changed = self.drag.set_readonly(config.readonly);
        self.config = config;
        let changed = readonly_changed || self.viewport.state() != before;
        Ok(self.touch(changed))
    }

    /// Sets the read-only flag.
    pub fn set_readonly(&mut self, readonly: bool) -> bool {
        self.config.readonly = readonly;
        let changed = self.drag.set_readonly(readonly);
        self.touch(changed)
    }

    /// Converts a client-space pointer position into world space.
    #[must_use]
    pub fn client_to_world(&self, client: Point) -> Point {
        let screen = client_to_screen(client, self.surface_origin);
        self.viewport.screen_to_world_point(screen)
    }

    /// Handles one input event.
    pub fn handle(&mut self, event: CanvasEvent<K>) -> EventOutcome<K> {
        tracing::trace!(event = event.name(), "canvas event");
        let changed = match event {
            CanvasEvent::Wheel { client, delta_y } => {
                let anchor = client_to_screen(client, self.surface_origin);
                let speed = self.config.zoom_speed;
                dispatch_wheel_zoom(self, anchor, delta_y, speed)
            }
            CanvasEvent::Pan { delta } => {
                let changed = self.viewport.pan(delta);
                self.touch(changed)
            }
            CanvasEvent::DragStart {
                client,
                drag_type,
                snapshot,
            } => {
                let at = self.client_to_world(client);
                let changed = self.drag.begin(drag_type, snapshot, at);
                self.touch(changed)
            }
            CanvasEvent::DragMove { client } => {
                let at = self.client_to_world(client);
                let changed = self.drag.update(at).is_some();
                self.touch(changed)
            }
            CanvasEvent::DragEnd { client } => {
                let was_dragging = self.drag.is_dragging();
                let at = self.client_to_world(client);
                let dropped = self.drag.drop_at(at);
                self.touch(was_dragging);
                return EventOutcome {
                    changed: was_dragging,
                    dropped,
                };
            }
            CanvasEvent::DragCancel => {
                let changed = self.drag.cancel();
                self.touch(changed)
            }
            CanvasEvent::Resize { size } => {
                let changed = self.viewport.set_surface_size(size);
                self.touch(changed)
            }
            CanvasEvent::SurfaceMoved { origin } => {
                // Only future pointer conversions are affected.
                if origin.is_finite() {
                    self.surface_origin = origin;
                }
                false
            }
        };
        EventOutcome::changed(changed)
    }

    /// Captures what the renderer needs for one pass.
    #[must_use]
    pub fn frame(&self) -> CanvasFrame<K>
    where
        K: Clone,
    {
        CanvasFrame {
            viewport: self.viewport.state(),
            transform: self.viewport.transform(),
            preview: self.drag.preview(),
            revision: self.revision,
        }
    }

    /// Clears session state on editor teardown: identity viewport, no drag.
    pub fn reset(&mut self) -> bool {
        let viewport_changed = self.viewport.reset();
        let drag_changed = self.drag.cancel();
        self.touch(viewport_changed || drag_changed)
    }

    fn touch(&mut self, changed: bool) -> bool {
        if changed {
            self.mark_changed();
        }
        changed
    }
}

impl<K> AnchoredZoom for CanvasSession<K> {
    fn zoom_by_at(&mut self, anchor: Point, factor: f64) -> bool {
        let changed = self.viewport.zoom_by(factor, Some(anchor));
        self.touch(changed)
    }
}

impl<K> ZoomControls for CanvasSession<K> {
    fn zoom_in(&mut self, step: f64) -> bool {
        let changed = self.viewport.zoom_in(step);
        self.touch(changed)
    }

    fn zoom_out(&mut self, step: f64) -> bool {
        let changed = self.viewport.zoom_out(step);
        self.touch(changed)
    }

    fn anchored(&mut self) -> Option<&mut dyn AnchoredZoom> {
        Some(self)
    }
}
