//! Physical display descriptors.

use serde::{Deserialize, Serialize};

use crate::geom::{Orientation, Rotation, Vec3};

/// Errors raised when a display descriptor cannot describe a real panel.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DisplayError {
    #[error("display {field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("display {field} must be greater than zero, got {value}")]
    NonPositiveSize { field: &'static str, value: f64 },
}

/// Cosmetic attributes carried along with a display. The projection engine
/// never reads them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_borders: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

/// A flat rectangular panel placed in eye space.
///
/// Sizes and positions are in meters, angles in degrees. The eye is at the
/// origin and displays are conventionally placed along +Z.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Display {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default)]
    pub yaw: f64,
    #[serde(default)]
    pub pitch: f64,
    #[serde(default)]
    pub roll: f64,
    /// Eye distance from older configuration files. Position is authoritative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(flatten)]
    pub style: DisplayStyle,
}

impl Display {
    #[must_use]
    pub fn new(width: f64, height: f64, position: Vec3, orientation: Orientation) -> Self {
        Self {
            width,
            height,
            x: position.x,
            y: position.y,
            z: position.z,
            yaw: orientation.yaw,
            pitch: orientation.pitch,
            roll: orientation.roll,
            distance: None,
            style: DisplayStyle::default(),
        }
    }

    /// Unrotated display centered straight ahead at `distance`.
    #[must_use]
    pub fn facing_eye(width: f64, height: f64, distance: f64) -> Self {
        Self::new(
            width,
            height,
            Vec3::new(0.0, 0.0, distance),
            Orientation::IDENTITY,
        )
    }

    /// Display sized from a diagonal preset, or `None` for unknown diagonals.
    #[must_use]
    pub fn from_preset(diagonal_inches: u32, position: Vec3, orientation: Orientation) -> Option<Self> {
        let preset = preset(diagonal_inches)?;
        Some(Self::new(preset.width, preset.height, position, orientation))
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.style.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        Orientation::new(self.yaw, self.pitch, self.roll)
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        Rotation::from_orientation(self.orientation())
    }

    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }

    #[must_use]
    pub fn half_height(&self) -> f64 {
        self.height * 0.5
    }

    /// Check that every geometric field is finite and the panel has a size.
    pub fn validate(&self) -> Result<(), DisplayError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("x", self.x),
            ("y", self.y),
            ("z", self.z),
            ("yaw", self.yaw),
            ("pitch", self.pitch),
            ("roll", self.roll),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(DisplayError::NonFinite { field, value });
            }
        }
        if self.width <= 0.0 {
            return Err(DisplayError::NonPositiveSize {
                field: "width",
                value: self.width,
            });
        }
        if self.height <= 0.0 {
            return Err(DisplayError::NonPositiveSize {
                field: "height",
                value: self.height,
            });
        }
        Ok(())
    }
}

/// Panel size for a common 16:9 diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPreset {
    pub diagonal_inches: u32,
    pub width: f64,
    pub height: f64,
}

/// Visible area of common 16:9 panels, in meters.
pub const DISPLAY_PRESETS: [DisplayPreset; 8] = [
    DisplayPreset { diagonal_inches: 27, width: 0.598, height: 0.336 },
    DisplayPreset { diagonal_inches: 32, width: 0.708, height: 0.398 },
    DisplayPreset { diagonal_inches: 40, width: 0.886, height: 0.498 },
    DisplayPreset { diagonal_inches: 43, width: 0.952, height: 0.535 },
    DisplayPreset { diagonal_inches: 50, width: 1.107, height: 0.623 },
    DisplayPreset { diagonal_inches: 55, width: 1.218, height: 0.685 },
    DisplayPreset { diagonal_inches: 65, width: 1.440, height: 0.810 },
    DisplayPreset { diagonal_inches: 75, width: 1.660, height: 0.934 },
];

#[must_use]
pub fn preset(diagonal_inches: u32) -> Option<DisplayPreset> {
    DISPLAY_PRESETS
        .iter()
        .copied()
        .find(|p| p.diagonal_inches == diagonal_inches)
}
