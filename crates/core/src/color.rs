//! sRGB colors for points and backgrounds.
//!
//! Colors are stored as `f64` components in [0, 1], which is also the form
//! the parameter log records. They can be parsed either from a hex string
//! (`"#0000ff"`) or from a comma-separated triple (`"0,0,1"`).

use std::fmt;
use std::str::FromStr;

use crate::error::FractalError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"`. The hex round-trip has 8-bit
/// quantization (1/255 precision loss).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    pub const BLACK: Srgb = Srgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Srgb = Srgb::new(1.0, 1.0, 1.0);
    pub const BLUE: Srgb = Srgb::new(0.0, 0.0, 1.0);

    /// Creates a color from components. No clamping is applied.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `FractalError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb, FractalError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(FractalError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| FractalError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| FractalError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| FractalError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Srgb {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        })
    }

    /// Parses a comma-separated component triple like "0, 0.5, 1".
    ///
    /// Optional surrounding parentheses are accepted, so the `(r, g, b)` form
    /// written to parameter logs parses back. Every component must lie in [0, 1].
    pub fn from_components(text: &str) -> Result<Srgb, FractalError> {
        let inner = text.trim();
        let inner = inner
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(inner);
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(FractalError::InvalidColor(format!(
                "expected 3 components, got {}",
                parts.len()
            )));
        }
        let mut rgb = [0.0_f64; 3];
        for (slot, part) in rgb.iter_mut().zip(&parts) {
            let v: f64 = part
                .parse()
                .map_err(|e| FractalError::InvalidColor(format!("invalid component '{part}': {e}")))?;
            if !(0.0..=1.0).contains(&v) {
                return Err(FractalError::InvalidColor(format!(
                    "component {v} outside [0, 1]"
                )));
            }
            *slot = v;
        }
        Ok(Srgb::new(rgb[0], rgb[1], rgb[2]))
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Quantizes the color to 8-bit channels with rounding.
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

impl FromStr for Srgb {
    type Err = FractalError;

    /// Accepts either hex (`#rrggbb`) or a component triple (`r,g,b`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(',') {
            Srgb::from_components(s)
        } else {
            Srgb::from_hex(s)
        }
    }
}

impl fmt::Display for Srgb {
    /// Writes the parameter-log form `(r, g, b)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
