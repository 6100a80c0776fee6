//! Background style composition.
//!
//! [`IconResolver::compose_style`] bundles a resolved icon with the
//! `background-repeat`, `background-position` and `background-size` values
//! most icon rules need, so a stylesheet can drop an icon in with one call.

use std::fmt;
use std::fmt::Write as _;

use crate::resolver::{IconRequest, IconResolver};
use crate::warning::IconWarning;

/// Default `background-position`.
pub const DEFAULT_POSITION: &str = "0 50%";
/// Default `background-size`.
pub const DEFAULT_SIZE: &str = "2rem 2rem";
/// Default `background-repeat`.
pub const DEFAULT_REPEAT: &str = "no-repeat";

// ============================================================================
// CssToken
// ============================================================================

/// A literal, unquoted CSS value such as `0 50%` or `no-repeat`.
///
/// Values arriving as quoted strings are unquoted; nothing else about them
/// changes.
///
/// ```
/// use icon_uri::CssToken;
///
/// assert_eq!(CssToken::new("'center'").as_str(), "center");
/// assert_eq!(CssToken::new(" 1rem 2rem ").as_str(), "1rem 2rem");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssToken(String);

impl CssToken {
    pub fn new(raw: impl AsRef<str>) -> Self {
        let trimmed = raw.as_ref().trim();
        let unquoted = ['"', '\'']
            .into_iter()
            .find_map(|q| trimmed.strip_prefix(q)?.strip_suffix(q))
            .unwrap_or(trimmed);
        Self(unquoted.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CssToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CssToken {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for CssToken {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

// ============================================================================
// StyleOptions
// ============================================================================

/// Layout overrides for [`IconResolver::compose_style`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleOptions {
    pub position: Option<CssToken>,
    pub size: Option<CssToken>,
    pub repeat: Option<CssToken>,
}

impl StyleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: impl Into<CssToken>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<CssToken>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_repeat(mut self, repeat: impl Into<CssToken>) -> Self {
        self.repeat = Some(repeat.into());
        self
    }
}

// ============================================================================
// IconStyle
// ============================================================================

/// The four background declarations for one icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    /// `url(...)` value of the icon.
    pub image: String,
    pub repeat: CssToken,
    pub position: CssToken,
    pub size: CssToken,
    /// Non-fatal warnings from resolving the image.
    pub warnings: Vec<IconWarning>,
}

impl IconStyle {
    /// Returns `(property, value)` pairs in declaration order.
    pub fn declarations(&self) -> [(&'static str, &str); 4] {
        [
            ("background-image", self.image.as_str()),
            ("background-repeat", self.repeat.as_str()),
            ("background-position", self.position.as_str()),
            ("background-size", self.size.as_str()),
        ]
    }

    /// Renders a complete rule for `selector`.
    pub fn to_rule(&self, selector: &str) -> String {
        let mut rule = format!("{selector} {{\n");
        for (property, value) in self.declarations() {
            let _ = writeln!(rule, "  {property}: {value};");
        }
        rule.push('}');
        rule
    }
}

impl fmt::Display for IconStyle {
    /// One declaration per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations().into_iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}

/// Rules generated for a whole folder.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FolderStylesheet {
    /// Rule text, one rule per resolved icon, separated by blank lines.
    pub css: String,
    /// Warnings from every icon, including skipped ones.
    pub warnings: Vec<IconWarning>,
}

// ============================================================================
// Composition
// ============================================================================

impl IconResolver<'_> {
    /// Resolves an icon as a background style bundle.
    ///
    /// URL wrapping is always on. Layout values left unset or empty use
    /// [`DEFAULT_POSITION`], [`DEFAULT_SIZE`] and [`DEFAULT_REPEAT`]. A
    /// failed lookup is returned unchanged.
    ///
    /// ```
    /// use icon_uri::{IconConfig, IconRegistry, IconRequest, IconResolver, StyleOptions, SvgTemplate};
    ///
    /// let mut registry = IconRegistry::new();
    /// registry.register("check", None, SvgTemplate::new("<svg/>")).unwrap();
    /// let resolver = IconResolver::new(&registry, IconConfig::default());
    ///
    /// let style = resolver
    ///     .compose_style(&IconRequest::new("check"), &StyleOptions::new())
    ///     .unwrap();
    /// assert_eq!(style.position.as_str(), "0 50%");
    /// assert!(style.image.starts_with("url("));
    /// ```
    pub fn compose_style(
        &self,
        request: &IconRequest,
        options: &StyleOptions,
    ) -> Result<IconStyle, IconWarning> {
        let request = request.clone().with_url(true);
        let resolved = self.resolve(&request)?;

        Ok(IconStyle {
            image: resolved.value,
            repeat: layout_value(options.repeat.as_ref(), DEFAULT_REPEAT),
            position: layout_value(options.position.as_ref(), DEFAULT_POSITION),
            size: layout_value(options.size.as_ref(), DEFAULT_SIZE),
            warnings: resolved.warnings,
        })
    }

    /// Renders one rule per icon in `folder`, in registry order.
    ///
    /// `template` supplies the colors for every icon; its name is ignored.
    /// Selectors are `.{class_prefix}{name}`. An icon that fails to resolve
    /// is skipped and does not affect the others.
    pub fn folder_stylesheet(
        &self,
        folder: Option<&str>,
        template: &IconRequest,
        options: &StyleOptions,
        class_prefix: &str,
    ) -> FolderStylesheet {
        let mut sheet = FolderStylesheet::default();

        for name in self.list_icons(folder) {
            let request = IconRequest {
                icon: name.to_string(),
                ..template.clone()
            };
            match self.compose_style(&request, options) {
                Ok(style) => {
                    if !sheet.css.is_empty() {
                        sheet.css.push_str("\n\n");
                    }
                    sheet.css.push_str(&style.to_rule(&format!(".{class_prefix}{name}")));
                    sheet.warnings.extend(style.warnings);
                }
                Err(warning) => sheet.warnings.push(warning),
            }
        }

        sheet
    }
}

/// An empty token would render as a blank declaration.
fn layout_value(value: Option<&CssToken>, default: &str) -> CssToken {
    value
        .filter(|token| !token.is_empty())
        .cloned()
        .unwrap_or_else(|| CssToken::new(default))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, ColorValue};
    use crate::config::IconConfig;
    use crate::encode::EncodedColor;
    use crate::registry::{IconRegistry, SvgTemplate};
    use pretty_assertions::assert_eq;

    fn registry() -> IconRegistry {
        let mut registry = IconRegistry::new();
        registry
            .register("check", None, SvgTemplate::new(r##"<svg><path fill="#000"/></svg>"##))
            .unwrap();
        registry
            .register("facebook", Some("social"), |_: Option<&EncodedColor>, _: Option<&EncodedColor>| {
                String::from("data:fb")
            })
            .unwrap();
        registry
            .register("twitter", Some("social"), |_: Option<&EncodedColor>, _: Option<&EncodedColor>| {
                String::from("data:tw")
            })
            .unwrap();
        registry
    }

    #[test]
    fn css_token_normalization() {
        assert_eq!(CssToken::new("\"0 50%\"").as_str(), "0 50%");
        assert_eq!(CssToken::new("'no-repeat'").as_str(), "no-repeat");
        assert_eq!(CssToken::new("center").as_str(), "center");
        assert_eq!(CssToken::new("'mismatched\"").as_str(), "'mismatched\"");
    }

    #[test]
    fn empty_layout_values_fall_back_to_defaults() {
        let registry = registry();
        let resolver = IconResolver::new(&registry, IconConfig::default());
        let options = StyleOptions::new()
            .with_size("''")
            .with_position("  ")
            .with_repeat("\"\"");

        let style = resolver
            .compose_style(&IconRequest::new("check"), &options)
            .unwrap();

        assert_eq!(style.size.as_str(), DEFAULT_SIZE);
        assert_eq!(style.position.as_str(), DEFAULT_POSITION);
        assert_eq!(style.repeat.as_str(), DEFAULT_REPEAT);
        assert!(!style.to_rule(".icon-check").contains(": ;"));
    }

    #[test]
    fn compose_uses_defaults() {
        let registry = registry();
        let resolver = IconResolver::new(&registry, IconConfig::default());

        let style = resolver
            .compose_style(&IconRequest::new("check"), &StyleOptions::new())
            .unwrap();

        assert_eq!(style.position.as_str(), "0 50%");
        assert_eq!(style.size.as_str(), "2rem 2rem");
        assert_eq!(style.repeat.as_str(), "no-repeat");
        assert!(style.image.starts_with("url(\"data:image/svg+xml"));
        assert!(style.image.ends_with("\")"));
        assert!(style.warnings.is_empty());
    }

    #[test]
    fn compose_forces_url_even_when_config_disables_it() {
        let registry = registry();
        let config = IconConfig::default().with_emit_url(false);
        let resolver = IconResolver::new(&registry, config);

        let request = IconRequest::new("check").with_url(false);
        let style = resolver.compose_style(&request, &StyleOptions::new()).unwrap();
        assert!(style.image.starts_with("url("));
    }

    #[test]
    fn compose_overrides() {
        let registry = registry();
        let resolver = IconResolver::new(&registry, IconConfig::default());

        let options = StyleOptions::new()
            .with_position("'center'")
            .with_size("1rem")
            .with_repeat("repeat-x");
        let style = resolver
            .compose_style(&IconRequest::new("check"), &options)
            .unwrap();

        assert_eq!(
            style.declarations(),
            [
                ("background-image", style.image.as_str()),
                ("background-repeat", "repeat-x"),
                ("background-position", "center"),
                ("background-size", "1rem"),
            ]
        );
    }

    #[test]
    fn compose_image_matches_resolver() {
        let registry = registry();
        let resolver = IconResolver::new(&registry, IconConfig::default());
        let request = IconRequest::new("check").with_color(Color::rgb(0.0, 128.0, 0.0));

        let style = resolver.compose_style(&request, &StyleOptions::new()).unwrap();
        let resolved = resolver.resolve(&request.with_url(true)).unwrap();
        assert_eq!(style.image, resolved.value);
    }

    #[test]
    fn compose_forwards_lookup_warning() {
        let registry = registry();
        let resolver = IconResolver::new(&registry, IconConfig::default());

        let result = resolver.compose_style(&IconRequest::new("nope"), &StyleOptions::new());
        assert_eq!(result, Err(IconWarning::NotFound { name: "nope".into() }));
    }

    #[test]
    fn compose_keeps_color_warning() {
        let registry = registry();
        let resolver = IconResolver::new(&registry, IconConfig::default());

        let request = IconRequest::new("check").with_color(ColorValue::parse("bad"));
        let style = resolver.compose_style(&request, &StyleOptions::new()).unwrap();
        assert_eq!(
            style.warnings,
            [IconWarning::InvalidColor { value: "bad".into() }]
        );
    }

    #[test]
    fn display_and_rule() {
        let style = IconStyle {
            image: "url(\"data:x\")".into(),
            repeat: CssToken::new(DEFAULT_REPEAT),
            position: CssToken::new(DEFAULT_POSITION),
            size: CssToken::new(DEFAULT_SIZE),
            warnings: Vec::new(),
        };

        assert_eq!(
            style.to_string(),
            "background-image: url(\"data:x\");\n\
             background-repeat: no-repeat;\n\
             background-position: 0 50%;\n\
             background-size: 2rem 2rem;"
        );
        assert_eq!(
            style.to_rule(".icon-x"),
            ".icon-x {\n  \
             background-image: url(\"data:x\");\n  \
             background-repeat: no-repeat;\n  \
             background-position: 0 50%;\n  \
             background-size: 2rem 2rem;\n}"
        );
    }

    #[test]
    fn folder_stylesheet_in_registry_order() {
        let registry = registry();
        let resolver = IconResolver::new(&registry, IconConfig::default());

        let sheet = resolver.folder_stylesheet(
            Some("social"),
            &IconRequest::default(),
            &StyleOptions::new(),
            "icon-",
        );

        let facebook = sheet.css.find(".icon-facebook {").unwrap();
        let twitter = sheet.css.find(".icon-twitter {").unwrap();
        assert!(facebook < twitter);
        assert!(sheet.css.contains("url(\"data:fb\")"));
        assert!(!sheet.css.contains("icon-check"));
        assert!(sheet.warnings.is_empty());
    }

    #[test]
    fn folder_stylesheet_collects_warnings() {
        let registry = registry();
        let resolver = IconResolver::new(&registry, IconConfig::default());

        let template = IconRequest::default().with_color(ColorValue::parse("bad"));
        let sheet = resolver.folder_stylesheet(Some("social"), &template, &StyleOptions::new(), "");

        assert_eq!(sheet.warnings.len(), 2);
        assert!(sheet.css.contains(".facebook {"));
        assert!(sheet.css.contains(".twitter {"));
    }

    #[test]
    fn folder_stylesheet_for_unknown_folder_is_empty() {
        let registry = registry();
        let resolver = IconResolver::new(&registry, IconConfig::default());

        let sheet =
            resolver.folder_stylesheet(Some("missing"), &IconRequest::default(), &StyleOptions::new(), "");
        assert_eq!(sheet, FolderStylesheet::default());
    }
}
