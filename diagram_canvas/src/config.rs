// Copyright 2025 the Diagram Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use diagram_view::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_ZOOM_SPEED, ZoomPolicy};

/// Recognized canvas options.
///
/// With the `serde` feature, missing fields deserialize to their defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CanvasConfig {
    /// Lower zoom bound. Must be finite and greater than zero.
    pub min_zoom: f64,
    /// Upper zoom bound. Must be finite and at least `min_zoom`.
    pub max_zoom: f64,
    /// Wheel delta → zoom factor multiplier. Zero disables wheel zoom.
    pub zoom_speed: f64,
    /// How zoom factors are folded into the current zoom.
    pub zoom_policy: ZoomPolicy,
    /// Disables drag previews.
    pub readonly: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_speed: DEFAULT_ZOOM_SPEED,
            zoom_policy: ZoomPolicy::default(),
            readonly: false,
        }
    }
}

impl CanvasConfig {
    /// Sets the zoom bounds.
    #[must_use]
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Sets the wheel zoom speed.
    #[must_use]
    pub fn with_zoom_speed(mut self, zoom_speed: f64) -> Self {
        self.zoom_speed = zoom_speed;
        self
    }

    /// Sets the zoom policy.
    #[must_use]
    pub fn with_zoom_policy(mut self, zoom_policy: ZoomPolicy) -> Self {
        self.zoom_policy = zoom_policy;
        self
    }

    /// Sets the read-only flag.
    #[must_use]
    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Checks the options for values the canvas cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("min_zoom", self.min_zoom), ("max_zoom", self.max_zoom)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidZoomBound { name, value });
            }
        }
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::InvertedZoomLimits {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !self.zoom_speed.is_finite() || self.zoom_speed < 0.0 {
            return Err(ConfigError::InvalidZoomSpeed(self.zoom_speed));
        }
        Ok(())
    }
}

/// Rejected [`CanvasConfig`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A zoom bound is zero, negative, or not finite.
    #[error("{name} must be finite and greater than zero, got {value}")]
    InvalidZoomBound {
        /// Which bound.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// `min_zoom` is greater than `max_zoom`.
    #[error("min_zoom ({min}) is greater than max_zoom ({max})")]
    InvertedZoomLimits {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// The wheel zoom speed is negative or not finite.
    #[error("zoom_speed must be finite and non-negative, got {0}")]
    InvalidZoomSpeed(f64),
}
