//! Parameters of a single render and the plain-text log they are saved as.
//!
//! A [`RunParams`] captures everything shown in a saved image: which shapes,
//! how many points, the two colors, and the image size. Its parameter log is
//! five `Key: value` lines in a fixed order:
//!
//! ```text
//! Shape: all
//! Points: 10000
//! Point Color: (0, 0, 1)
//! BG Color: (1, 1, 1)
//! Window: 1200x700
//! ```

use std::fmt;
use std::str::FromStr;

use crate::color::Srgb;
use crate::error::FractalError;
use crate::shape::Shape;
use serde::{Deserialize, Serialize};

pub const DEFAULT_POINTS: usize = 10_000;
pub const DEFAULT_WIDTH: usize = 1200;
pub const DEFAULT_HEIGHT: usize = 700;

/// Which shapes a render draws: one, or all three side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    #[default]
    All,
    Single(Shape),
}

impl Selection {
    /// Parses a shape name or `"all"`.
    pub fn from_name(name: &str) -> Result<Self, FractalError> {
        match name {
            "all" => Ok(Selection::All),
            other => Shape::from_name(other).map(Selection::Single),
        }
    }

    /// All accepted selection names, `"all"` last.
    pub fn list_names() -> Vec<&'static str> {
        let mut names = Shape::list_names().to_vec();
        names.push("all");
        names
    }

    pub fn name(self) -> &'static str {
        match self {
            Selection::All => "all",
            Selection::Single(shape) => shape.name(),
        }
    }

    /// The shapes to draw, left to right.
    pub fn shapes(self) -> Vec<Shape> {
        match self {
            Selection::All => Shape::ALL.to_vec(),
            Selection::Single(shape) => vec![shape],
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Selection {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selection::from_name(s)
    }
}

/// Everything needed to reproduce the look of one rendered image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunParams {
    pub selection: Selection,
    pub points: usize,
    pub point_color: Srgb,
    pub bg_color: Srgb,
    pub width: usize,
    pub height: usize,
}

impl Default for RunParams {
    /// Blue points on white, all three shapes, 10 000 points, 1200x700.
    fn default() -> Self {
        Self {
            selection: Selection::All,
            points: DEFAULT_POINTS,
            point_color: Srgb::BLUE,
            bg_color: Srgb::WHITE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl RunParams {
    /// Checks for a non-zero point count and non-zero dimensions whose
    /// pixel count does not overflow.
    pub fn validate(&self) -> Result<(), FractalError> {
        if self.points == 0 {
            return Err(FractalError::InvalidPointCount);
        }
        if self.width == 0 || self.height == 0 {
            return Err(FractalError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(FractalError::InvalidDimensions)?;
        Ok(())
    }

    /// Renders the parameter log text, newline-terminated.
    pub fn to_log(&self) -> String {
        format!(
            "Shape: {}\nPoints: {}\nPoint Color: {}\nBG Color: {}\nWindow: {}x{}\n",
            self.selection, self.points, self.point_color, self.bg_color, self.width, self.height
        )
    }
}
