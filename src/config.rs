//! Resolver configuration.
//!
//! [`IconConfig`] holds the build-wide defaults every resolution starts
//! from. It is set once by the surrounding build and handed to the
//! resolver, which never changes it.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "defaultColor": "#000000",
//!   "emitUrl": true
//! }
//! ```
//!
//! A missing `defaultColor` means black; an explicit `null` means "do not
//! recolor" by default.

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorValue};

/// Defaults applied to every icon request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct IconConfig {
    /// Color used when a request names none. `None` keeps embedded colors.
    #[serde(default = "default_color")]
    pub default_color: Option<Color>,

    /// Whether results are wrapped in `url(...)` unless a request says
    /// otherwise.
    #[serde(default = "default_true")]
    pub emit_url: bool,
}

fn default_color() -> Option<Color> {
    Some(Color::BLACK)
}

fn default_true() -> bool {
    true
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            emit_url: default_true(),
        }
    }
}

impl IconConfig {
    /// Creates the default configuration (black, `url(...)` wrapping on).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default color. `None` disables recoloring by default.
    pub fn with_default_color(mut self, color: Option<Color>) -> Self {
        self.default_color = color;
        self
    }

    /// Sets the default URL wrapping.
    pub fn with_emit_url(mut self, emit_url: bool) -> Self {
        self.emit_url = emit_url;
        self
    }

    /// The default color as a request argument.
    pub fn default_color_value(&self) -> ColorValue {
        self.default_color.into()
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
