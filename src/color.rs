//! Color values accepted by icon requests.
//!
//! [`Color`] is a plain sRGB color with channels in the 0-255 range and an
//! alpha in 0-1. [`ColorValue`] is what a caller actually hands the resolver:
//! a usable color, the explicit "do not recolor" marker, or something that
//! could not be understood.

use std::fmt;
use std::str::FromStr;

use palette::{Srgb, Srgba};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Errors produced by [`Color::from_css`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorParseError {
    #[error("empty color value")]
    Empty,

    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    #[error("invalid color function: {0}")]
    InvalidFunction(String),

    #[error("color channel out of range: {0}")]
    OutOfRange(String),

    #[error("unknown color: {0}")]
    Unknown(String),
}

// ============================================================================
// Color
// ============================================================================

/// An sRGB color with fractional channels.
///
/// Channels are kept as written so that rounding happens in exactly one
/// place, the encoder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel (0-255).
    pub red: f64,
    /// Green channel (0-255).
    pub green: f64,
    /// Blue channel (0-255).
    pub blue: f64,
    /// Alpha (0-1).
    pub alpha: f64,
}

impl Color {
    /// Opaque black, the fallback for invalid color values.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255.0, 255.0, 255.0);

    /// Creates an opaque color.
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Creates a color with the given alpha.
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Returns true if alpha is exactly 1.
    pub fn is_opaque(&self) -> bool {
        self.alpha == 1.0
    }

    /// Returns true for opaque black (after channel rounding).
    pub fn is_black(&self) -> bool {
        self.is_opaque()
            && self.red.round() == 0.0
            && self.green.round() == 0.0
            && self.blue.round() == 0.0
    }

    /// Parses a CSS color.
    ///
    /// Accepts hex notation (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), CSS
    /// named colors, `transparent`, and `rgb()`/`rgba()` functions with
    /// comma or space separated arguments.
    ///
    /// ```
    /// use icon_uri::Color;
    ///
    /// assert_eq!(Color::from_css("#f00").unwrap(), Color::rgb(255.0, 0.0, 0.0));
    /// assert_eq!(Color::from_css("steelblue").unwrap(), Color::rgb(70.0, 130.0, 180.0));
    /// assert_eq!(Color::from_css("rgba(0, 0, 0, 0.5)").unwrap().alpha, 0.5);
    /// ```
    pub fn from_css(input: &str) -> Result<Self, ColorParseError> {
        let value = input.trim();
        if value.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex);
        }

        let lower = value.to_ascii_lowercase();
        if lower.starts_with("rgb") {
            return parse_function(&lower);
        }
        if lower == "transparent" {
            return Ok(Self::rgba(0.0, 0.0, 0.0, 0.0));
        }

        palette::named::from_str(&lower)
            .map(Self::from)
            .ok_or_else(|| ColorParseError::Unknown(value.to_string()))
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_css(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {})",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }
}

impl From<Srgb<u8>> for Color {
    fn from(color: Srgb<u8>) -> Self {
        Self::rgb(color.red.into(), color.green.into(), color.blue.into())
    }
}

impl From<Srgba<u8>> for Color {
    fn from(color: Srgba<u8>) -> Self {
        Self::rgba(
            color.red.into(),
            color.green.into(),
            color.blue.into(),
            f64::from(color.alpha) / 255.0,
        )
    }
}

impl From<Srgba<f32>> for Color {
    fn from(color: Srgba<f32>) -> Self {
        Self::rgba(
            f64::from(color.red) * 255.0,
            f64::from(color.green) * 255.0,
            f64::from(color.blue) * 255.0,
            f64::from(color.alpha),
        )
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_css(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "jsonschema")]
impl schemars::JsonSchema for Color {
    fn schema_name() -> String {
        "Color".to_string()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        <String as schemars::JsonSchema>::json_schema(generator)
    }
}

// ============================================================================
// Parsing helpers
// ============================================================================

fn parse_hex(hex: &str) -> Result<Color, ColorParseError> {
    let invalid = || ColorParseError::InvalidHex(format!("#{hex}"));
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    // palette handles the 3 and 6 digit forms, alpha digits are split off first
    let (rgb, alpha) = match hex.len() {
        3 | 6 => (hex, None),
        4 => (&hex[..3], Some(u8::from_str_radix(&hex[3..], 16).map(|n| n * 17))),
        8 => (&hex[..6], Some(u8::from_str_radix(&hex[6..], 16))),
        _ => return Err(invalid()),
    };

    let color: Srgb<u8> = rgb.parse().map_err(|_| invalid())?;
    let mut parsed = Color::from(color);
    if let Some(alpha) = alpha {
        parsed.alpha = f64::from(alpha.map_err(|_| invalid())?) / 255.0;
    }
    Ok(parsed)
}

fn parse_function(value: &str) -> Result<Color, ColorParseError> {
    let invalid = || ColorParseError::InvalidFunction(value.to_string());

    let (name, rest) = value.split_once('(').ok_or_else(invalid)?;
    let args = rest.trim_end().strip_suffix(')').ok_or_else(invalid)?;
    if !matches!(name.trim(), "rgb" | "rgba") {
        return Err(invalid());
    }

    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let (red, green, blue, alpha) = match parts.as_slice() {
        [r, g, b] => (r, g, b, None),
        [r, g, b, a] => (r, g, b, Some(a)),
        _ => return Err(invalid()),
    };

    let alpha = match alpha {
        Some(a) => parse_alpha(a)?,
        None => 1.0,
    };

    Ok(Color::rgba(
        parse_channel(red)?,
        parse_channel(green)?,
        parse_channel(blue)?,
        alpha,
    ))
}

fn parse_number(raw: &str) -> Result<(f64, bool), ColorParseError> {
    let (number, percent) = match raw.strip_suffix('%') {
        Some(number) => (number, true),
        None => (raw, false),
    };
    let value: f64 = number
        .parse()
        .map_err(|_| ColorParseError::InvalidFunction(raw.to_string()))?;
    if !value.is_finite() {
        return Err(ColorParseError::OutOfRange(raw.to_string()));
    }
    Ok((value, percent))
}

fn parse_channel(raw: &str) -> Result<f64, ColorParseError> {
    let (value, percent) = parse_number(raw)?;
    let value = if percent { value / 100.0 * 255.0 } else { value };
    if !(0.0..=255.0).contains(&value) {
        return Err(ColorParseError::OutOfRange(raw.to_string()));
    }
    Ok(value)
}

fn parse_alpha(raw: &str) -> Result<f64, ColorParseError> {
    let (value, percent) = parse_number(raw)?;
    let value = if percent { value / 100.0 } else { value };
    if !(0.0..=1.0).contains(&value) {
        return Err(ColorParseError::OutOfRange(raw.to_string()));
    }
    Ok(value)
}

// ============================================================================
// ColorValue
// ============================================================================

/// A color argument as supplied by a caller.
///
/// `Absent` means "keep the icon's embedded colors" and is kept apart from
/// `Invalid`, which degrades to black with a warning.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    /// A usable color.
    Color(Color),
    /// Explicit "do not recolor".
    Absent,
    /// A present value that is not a recognized color.
    Invalid(String),
}

impl ColorValue {
    /// Interprets a raw stylesheet value.
    ///
    /// `none` and `null` (any case) map to [`ColorValue::Absent`]; anything
    /// that fails to parse is kept verbatim as [`ColorValue::Invalid`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("none") || trimmed.eq_ignore_ascii_case("null") {
            return Self::Absent;
        }
        match Color::from_css(trimmed) {
            Ok(color) => Self::Color(color),
            Err(_) => Self::Invalid(raw.to_string()),
        }
    }

    /// Returns the color if this value holds one.
    pub fn color(&self) -> Option<&Color> {
        match self {
            Self::Color(color) => Some(color),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Color> for ColorValue {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<Option<Color>> for ColorValue {
    fn from(color: Option<Color>) -> Self {
        color.map_or(Self::Absent, Self::Color)
    }
}

// ============================================================================
// Tests
// ============================================================================
