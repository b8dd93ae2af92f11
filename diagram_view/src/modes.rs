// Copyright 2025 the Diagram Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How a zoom factor is folded into the current zoom.
///
/// Wheel input is converted into a signed factor by
/// [`crate::wheel_zoom_factor`]; the policy decides what that factor means.
/// Either way the result is clamped into the viewport's zoom limits, and
/// cursor anchoring is computed from the ratio of the new and old zoom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZoomPolicy {
    /// `proposed = zoom + factor`.
    #[default]
    Additive,
    /// `proposed = zoom * (1 + factor)`.
    ///
    /// Factors at or below `-1` propose a non-positive zoom, which clamps to
    /// the minimum zoom.
    Multiplicative,
}

impl ZoomPolicy {
    /// Returns the unclamped zoom proposed by applying `factor` to `zoom`.
    #[must_use]
    pub fn propose(self, zoom: f64, factor: f64) -> f64 {
        match self {
            Self::Additive => zoom + factor,
            Self::Multiplicative => zoom * (1.0 + factor),
        }
    }
}

/// How fitted content should be positioned inside the surface.
///
/// This mode is consulted by [`crate::CanvasViewport::fit_rect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FitMode {
    /// Center the fitted content within the surface.
    #[default]
    Center,
    /// Align the minimum corner of the fitted content with the surface origin.
    AlignMin,
}
