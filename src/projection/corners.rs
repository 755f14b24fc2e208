use std::ops::Index;

use serde::Serialize;

use crate::display::Display;
use crate::geom::Vec3;

/// Corner of a display, in the crate-wide order `[TL, TR, BL, BR]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Every corner, in storage order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Perimeter order for drawing a closed outline.
    pub const OUTLINE: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomLeft => 2,
            Self::BottomRight => 3,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TopLeft => "Top-Left",
            Self::TopRight => "Top-Right",
            Self::BottomLeft => "Bottom-Left",
            Self::BottomRight => "Bottom-Right",
        }
    }

    /// Signs of the corner along the display's local X and Y axes.
    const fn local_signs(self) -> (f64, f64) {
        match self {
            Self::TopLeft => (-1.0, 1.0),
            Self::TopRight => (1.0, 1.0),
            Self::BottomLeft => (-1.0, -1.0),
            Self::BottomRight => (1.0, -1.0),
        }
    }
}

/// The four corners of a display, always ordered `[TL, TR, BL, BR]`.
///
/// Serializes as a plain array of four points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DisplayCorners {
    points: [Vec3; 4],
}

impl DisplayCorners {
    #[must_use]
    pub const fn new(top_left: Vec3, top_right: Vec3, bottom_left: Vec3, bottom_right: Vec3) -> Self {
        Self {
            points: [top_left, top_right, bottom_left, bottom_right],
        }
    }

    #[must_use]
    pub const fn from_array(points: [Vec3; 4]) -> Self {
        Self { points }
    }

    #[must_use]
    pub const fn as_array(&self) -> &[Vec3; 4] {
        &self.points
    }

    #[must_use]
    pub const fn get(&self, corner: Corner) -> Vec3 {
        self.points[corner.index()]
    }

    #[must_use]
    pub const fn top_left(&self) -> Vec3 {
        self.get(Corner::TopLeft)
    }

    #[must_use]
    pub const fn top_right(&self) -> Vec3 {
        self.get(Corner::TopRight)
    }

    #[must_use]
    pub const fn bottom_left(&self) -> Vec3 {
        self.get(Corner::BottomLeft)
    }

    #[must_use]
    pub const fn bottom_right(&self) -> Vec3 {
        self.get(Corner::BottomRight)
    }

    /// Corners paired with their [`Corner`] tag, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Corner, Vec3)> + '_ {
        Corner::ALL.iter().map(|&corner| (corner, self.get(corner)))
    }

    #[must_use]
    pub fn map(&self, f: impl FnMut(Vec3) -> Vec3) -> Self {
        Self::from_array(self.points.map(f))
    }

    /// The same corners expressed relative to `origin`.
    #[must_use]
    pub fn relative_to(&self, origin: Vec3) -> Self {
        self.map(|p| p - origin)
    }

    #[must_use]
    pub fn centroid(&self) -> Vec3 {
        let sum = self.points.iter().fold(Vec3::ZERO, |acc, &p| acc + p);
        sum / 4.0
    }

    /// Midpoint of the left edge (TL–BL).
    #[must_use]
    pub fn left_edge_midpoint(&self) -> Vec3 {
        self.top_left().midpoint(self.bottom_left())
    }

    /// Midpoint of the right edge (TR–BR).
    #[must_use]
    pub fn right_edge_midpoint(&self) -> Vec3 {
        self.top_right().midpoint(self.bottom_right())
    }
}

impl Index<Corner> for DisplayCorners {
    type Output = Vec3;

    fn index(&self, corner: Corner) -> &Self::Output {
        &self.points[corner.index()]
    }
}

/// Corners of the display in its own frame, before rotation and translation.
#[must_use]
pub fn local_corners(width: f64, height: f64) -> DisplayCorners {
    let half_width = width * 0.5;
    let half_height = height * 0.5;
    DisplayCorners::from_array(Corner::ALL.map(|corner| {
        let (sx, sy) = corner.local_signs();
        Vec3::new(sx * half_width, sy * half_height, 0.0)
    }))
}

/// Eye-space corners of `display`: local corners rotated roll → pitch → yaw,
/// then moved to the display position.
#[must_use]
pub fn projection_corners(display: &Display) -> DisplayCorners {
    let rotation = display.rotation();
    let position = display.position();
    local_corners(display.width, display.height).map(|local| rotation.apply(local) + position)
}
