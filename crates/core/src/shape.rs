//! The Sierpinski shapes and their vertex sets.

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::FractalError;

/// Height of the unit equilateral triangle, √3/2.
pub const TRIANGLE_HEIGHT: f64 = 0.866_025_403_784_438_6;
/// y of the tetrahedron apex, √3/6 (centroid of the base triangle).
pub const APEX_Y: f64 = 0.288_675_134_594_812_87;
/// Height of the unit regular tetrahedron, √6/3.
pub const TETRAHEDRON_HEIGHT: f64 = 0.816_496_580_927_725_9;

/// Vertices of the equilateral triangle used by `triangle` and `diamond`.
pub const TRIANGLE_VERTICES: [DVec2; 3] = [
    DVec2::new(0.0, 0.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(0.5, TRIANGLE_HEIGHT),
];

/// Vertices of the regular tetrahedron.
pub const TETRAHEDRON_VERTICES: [DVec3; 4] = [
    DVec3::new(0.0, 0.0, 0.0),
    DVec3::new(1.0, 0.0, 0.0),
    DVec3::new(0.5, TRIANGLE_HEIGHT, 0.0),
    DVec3::new(0.5, APEX_Y, TETRAHEDRON_HEIGHT),
];

/// All shape names, in the order they are drawn side by side.
const SHAPE_NAMES: &[&str] = &["triangle", "diamond", "tetrahedron"];

/// A Sierpinski fractal the chaos game can sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Triangle,
    /// A triangle plus its mirror image across the x-axis.
    Diamond,
    Tetrahedron,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Triangle, Shape::Diamond, Shape::Tetrahedron];

    /// Looks a shape up by its lowercase name.
    ///
    /// Returns `FractalError::UnknownShape` for anything else.
    pub fn from_name(name: &str) -> Result<Self, FractalError> {
        match name {
            "triangle" => Ok(Shape::Triangle),
            "diamond" => Ok(Shape::Diamond),
            "tetrahedron" => Ok(Shape::Tetrahedron),
            _ => Err(FractalError::UnknownShape(name.to_string())),
        }
    }

    /// Returns a slice of all recognized shape names.
    pub fn list_names() -> &'static [&'static str] {
        SHAPE_NAMES
    }

    pub fn name(self) -> &'static str {
        match self {
            Shape::Triangle => "triangle",
            Shape::Diamond => "diamond",
            Shape::Tetrahedron => "tetrahedron",
        }
    }

    /// Number of coordinates per generated point.
    pub fn dimension(self) -> usize {
        match self {
            Shape::Triangle | Shape::Diamond => 2,
            Shape::Tetrahedron => 3,
        }
    }

    /// Number of points `generate` returns for `count` requested points.
    ///
    /// Diamond emits every triangle point twice (original and mirror).
    pub fn output_len(self, count: usize) -> usize {
        match self {
            Shape::Diamond => count * 2,
            Shape::Triangle | Shape::Tetrahedron => count,
        }
    }

    /// Axis-aligned bounding box of the attractor as (min, max) corners.
    ///
    /// 2D shapes report `z = 0` for both corners.
    pub fn bounds(self) -> (DVec3, DVec3) {
        match self {
            Shape::Triangle => (DVec3::ZERO, DVec3::new(1.0, TRIANGLE_HEIGHT, 0.0)),
            Shape::Diamond => (
                DVec3::new(0.0, -TRIANGLE_HEIGHT, 0.0),
                DVec3::new(1.0, TRIANGLE_HEIGHT, 0.0),
            ),
            Shape::Tetrahedron => (
                DVec3::ZERO,
                DVec3::new(1.0, TRIANGLE_HEIGHT, TETRAHEDRON_HEIGHT),
            ),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::from_name(s)
    }
}
