//! Icon resolution.
//!
//! Turns an [`IconRequest`] into the icon's data string: defaults cascade
//! from the [`IconConfig`], the name is checked against the registry, colors
//! are validated and encoded, and the template output is optionally wrapped
//! in `url(...)`.
//!
//! # Default cascade
//!
//! ```text
//! config.default_color ──▶ color ──┬──▶ fill_color
//!                                  └──▶ stroke_color
//! config.emit_url ───────▶ emit_url
//! ```
//!
//! Each step only applies when the caller left the value out.

use crate::color::{Color, ColorValue};
use crate::config::IconConfig;
use crate::encode::{encode_color, EncodedColor};
use crate::registry::IconRegistry;
use crate::warning::IconWarning;

// ============================================================================
// Requests
// ============================================================================

/// A request for one icon.
///
/// Unset fields fall back through the default cascade.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconRequest {
    pub icon: String,
    pub color: Option<ColorValue>,
    pub fill_color: Option<ColorValue>,
    pub stroke_color: Option<ColorValue>,
    pub emit_url: Option<bool>,
}

impl IconRequest {
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<ColorValue>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_fill_color(mut self, color: impl Into<ColorValue>) -> Self {
        self.fill_color = Some(color.into());
        self
    }

    pub fn with_stroke_color(mut self, color: impl Into<ColorValue>) -> Self {
        self.stroke_color = Some(color.into());
        self
    }

    pub fn with_url(mut self, emit_url: bool) -> Self {
        self.emit_url = Some(emit_url);
        self
    }

    /// Applies the default cascade.
    pub fn resolve_defaults(&self, config: &IconConfig) -> ResolvedIconRequest<'_> {
        let color = self
            .color
            .clone()
            .unwrap_or_else(|| config.default_color_value());
        let fill_color = self.fill_color.clone().unwrap_or_else(|| color.clone());
        let stroke_color = self.stroke_color.clone().unwrap_or_else(|| color.clone());

        ResolvedIconRequest {
            icon: &self.icon,
            color,
            fill_color,
            stroke_color,
            emit_url: self.emit_url.unwrap_or(config.emit_url),
        }
    }
}

/// A request after the default cascade. Lives for one resolution call.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedIconRequest<'a> {
    pub icon: &'a str,
    pub color: ColorValue,
    pub fill_color: ColorValue,
    pub stroke_color: ColorValue,
    pub emit_url: bool,
}

// ============================================================================
// Results
// ============================================================================

/// A successfully resolved icon.
///
/// `warnings` holds the non-fatal warnings raised on the way, each already
/// logged.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedIcon {
    /// The data string, wrapped in `url(...)` when requested.
    pub value: String,
    pub warnings: Vec<IconWarning>,
}

/// Wraps a data string as a CSS `url(...)` value.
///
/// ```
/// assert_eq!(icon_uri::wrap_url("data:x"), "url(\"data:x\")");
/// ```
pub fn wrap_url(data: &str) -> String {
    format!("url(\"{data}\")")
}

// ============================================================================
// IconResolver
// ============================================================================

/// Resolves icon requests against a registry.
///
/// The resolver only reads the registry and its own config, so it can be
/// shared across threads and every call stands on its own.
///
/// # Example
///
/// ```
/// use icon_uri::{Color, IconConfig, IconRegistry, IconRequest, IconResolver, SvgTemplate};
///
/// let mut registry = IconRegistry::new();
/// registry
///     .register("check", None, SvgTemplate::new(r##"<svg><path fill="#000"/></svg>"##))
///     .unwrap();
///
/// let resolver = IconResolver::new(&registry, IconConfig::default());
/// let icon = resolver
///     .resolve(&IconRequest::new("check").with_color(Color::rgb(255.0, 0.0, 0.0)))
///     .unwrap();
///
/// assert!(icon.value.starts_with("url(\"data:image/svg+xml"));
/// assert!(icon.value.contains("rgb%28255%2C0%2C0%29"));
/// ```
#[derive(Debug, Clone)]
pub struct IconResolver<'r> {
    registry: &'r IconRegistry,
    config: IconConfig,
}

impl<'r> IconResolver<'r> {
    pub fn new(registry: &'r IconRegistry, config: IconConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &'r IconRegistry {
        self.registry
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    /// Resolves an icon with every setting at its default.
    pub fn resolve_icon(&self, icon: &str) -> Result<ResolvedIcon, IconWarning> {
        self.resolve(&IconRequest::new(icon))
    }

    /// Resolves a request.
    ///
    /// Returns `Err` when the icon name is unusable or unknown. An invalid
    /// color does not fail the call: black is used instead and the warning
    /// is reported in [`ResolvedIcon::warnings`].
    pub fn resolve(&self, request: &IconRequest) -> Result<ResolvedIcon, IconWarning> {
        let resolved = request.resolve_defaults(&self.config);

        if resolved.icon.trim().is_empty() {
            return Err(raise(IconWarning::Misspelled {
                name: resolved.icon.to_string(),
            }));
        }

        let Some(entry) = self.registry.get(resolved.icon) else {
            return Err(raise(IconWarning::NotFound {
                name: resolved.icon.to_string(),
            }));
        };

        let mut warnings = Vec::new();
        let (fill, stroke) = resolve_paint(&resolved, &mut warnings);

        let data = entry.template().render(fill.as_ref(), stroke.as_ref());
        let value = if resolved.emit_url {
            wrap_url(&data)
        } else {
            data
        };

        Ok(ResolvedIcon { value, warnings })
    }

    /// Lists icon names in `folder` (`None` for root icons).
    pub fn list_icons(&self, folder: Option<&str>) -> Vec<&'r str> {
        self.registry.list_icons(folder)
    }
}

/// Works out the encoded fill and stroke for a request.
fn resolve_paint(
    request: &ResolvedIconRequest<'_>,
    warnings: &mut Vec<IconWarning>,
) -> (Option<EncodedColor>, Option<EncodedColor>) {
    match &request.color {
        ColorValue::Color(_) => (
            encode_channel(&request.fill_color, warnings),
            encode_channel(&request.stroke_color, warnings),
        ),
        ColorValue::Absent => (None, None),
        ColorValue::Invalid(value) => {
            warnings.push(raise(IconWarning::InvalidColor {
                value: value.clone(),
            }));
            let black = encode_color(&Color::BLACK);
            (Some(black.clone()), Some(black))
        }
    }
}

fn encode_channel(value: &ColorValue, warnings: &mut Vec<IconWarning>) -> Option<EncodedColor> {
    match value {
        ColorValue::Color(color) => Some(encode_color(color)),
        ColorValue::Absent => None,
        ColorValue::Invalid(raw) => {
            warnings.push(raise(IconWarning::InvalidColor { value: raw.clone() }));
            Some(encode_color(&Color::BLACK))
        }
    }
}

/// Logs a warning and hands it back.
fn raise(warning: IconWarning) -> IconWarning {
    tracing::warn!(target: "icon_uri::resolver", %warning, "icon warning");
    warning
}

// ============================================================================
// Tests
// ============================================================================
