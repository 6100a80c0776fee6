//! URI-safe color encoding.
//!
//! Colors end up inside an SVG that is itself inlined into a `url(...)`, so
//! the functional notation has its parentheses and commas percent-escaped.

use std::fmt;

use crate::color::Color;

/// A color already escaped for use inside a data URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedColor(String);

impl EncodedColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EncodedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EncodedColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Encodes a color as an escaped `rgb(...)` or `rgba(...)` string.
///
/// Channels are rounded half away from zero, each on its own. Alpha is
/// written as-is, and only a fully opaque color uses the `rgb` form.
///
/// ```
/// use icon_uri::{encode_color, Color};
///
/// assert_eq!(encode_color(&Color::rgb(255.0, 0.0, 0.0)).as_str(), "rgb%28255%2C0%2C0%29");
/// assert_eq!(
///     encode_color(&Color::rgba(0.0, 0.0, 0.0, 0.5)).as_str(),
///     "rgba%280%2C0%2C0%2C0.5%29"
/// );
/// ```
pub fn encode_color(color: &Color) -> EncodedColor {
    let red = round_channel(color.red);
    let green = round_channel(color.green);
    let blue = round_channel(color.blue);

    let encoded = if color.is_opaque() {
        format!("rgb%28{red}%2C{green}%2C{blue}%29")
    } else {
        format!("rgba%28{red}%2C{green}%2C{blue}%2C{}%29", color.alpha)
    };
    EncodedColor(encoded)
}

/// `f64::round` rounds ties away from zero.
fn round_channel(value: f64) -> i64 {
    value.round() as i64
}
