//! Orthographic 2D views of eye-space geometry.
//!
//! Screen coordinates grow rightwards and downwards, so every view flips its
//! vertical world axis.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geom::Vec3;
use crate::projection::{Corner, DisplayCorners};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrthoView {
    /// Looking down: X to the right, Z up the screen.
    Top,
    /// Looking from the side: Z to the right, Y up the screen.
    Left,
    /// Looking along +Z: X to the right, Y up the screen.
    Front,
}

impl OrthoView {
    pub const ALL: [Self; 3] = [Self::Top, Self::Left, Self::Front];

    /// World coordinates that map to screen (horizontal, vertical).
    #[must_use]
    pub const fn axes(self, p: Vec3) -> (f64, f64) {
        match self {
            Self::Top => (p.x, p.z),
            Self::Left => (p.z, p.y),
            Self::Front => (p.x, p.y),
        }
    }
}

impl fmt::Display for OrthoView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Front => "front",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view `{0}` (expected `top`, `left` or `front`)")]
pub struct ParseViewError(String);

impl FromStr for OrthoView {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "left" => Ok(Self::Left),
            "front" => Ok(Self::Front),
            _ => Err(ParseViewError(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// Pixels per meter plus the screen position of the eye.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewTransform {
    pub scale: f64,
    pub origin: ScreenPoint,
}

impl ViewTransform {
    #[must_use]
    pub const fn new(scale: f64, origin_x: f64, origin_y: f64) -> Self {
        Self {
            scale,
            origin: ScreenPoint {
                x: origin_x,
                y: origin_y,
            },
        }
    }

    #[must_use]
    pub fn project_point(&self, view: OrthoView, p: Vec3) -> ScreenPoint {
        let (horizontal, vertical) = view.axes(p);
        ScreenPoint {
            x: self.origin.x + horizontal * self.scale,
            y: self.origin.y - vertical * self.scale,
        }
    }

    /// Closed outline TL, TR, BR, BL.
    #[must_use]
    pub fn project_outline(&self, view: OrthoView, corners: &DisplayCorners) -> [ScreenPoint; 4] {
        Corner::OUTLINE.map(|corner| self.project_point(view, corners[corner]))
    }

    /// Border stroke width in pixels for a width given in centimeters.
    #[must_use]
    pub fn border_width_px(&self, border_width_cm: f64) -> f64 {
        border_width_cm / 100.0 * self.scale
    }

    /// Zoom relative to `default_scale`, as shown next to the view.
    #[must_use]
    pub fn zoom(&self, default_scale: f64) -> f64 {
        self.scale / default_scale
    }
}
