//! Icon templates.
//!
//! A template turns an optional fill and stroke color into the final SVG
//! data string. Templates normally come precompiled from the build step; the
//! [`SvgTemplate`] here covers the common case of a monochrome SVG whose
//! black paths get recolored.

use std::fmt;

use crate::color::Color;
use crate::encode::EncodedColor;

/// Prefix of every data string produced by [`SvgTemplate`].
pub const SVG_DATA_PREFIX: &str = "data:image/svg+xml;charset=utf8,";

// ============================================================================
// IconTemplate
// ============================================================================

/// Generates an icon's data string for a fill and stroke color.
///
/// `None` for a color means "keep whatever the SVG has embedded".
///
/// Any matching closure is a template:
///
/// ```
/// use icon_uri::{EncodedColor, IconTemplate};
///
/// let template = |fill: Option<&EncodedColor>, _stroke: Option<&EncodedColor>| {
///     format!("fill={}", fill.map_or("none", |c| c.as_str()))
/// };
/// assert_eq!(template.render(None, None), "fill=none");
/// ```
pub trait IconTemplate: Send + Sync {
    fn render(&self, fill: Option<&EncodedColor>, stroke: Option<&EncodedColor>) -> String;
}

impl<F> IconTemplate for F
where
    F: Fn(Option<&EncodedColor>, Option<&EncodedColor>) -> String + Send + Sync,
{
    fn render(&self, fill: Option<&EncodedColor>, stroke: Option<&EncodedColor>) -> String {
        self(fill, stroke)
    }
}

// ============================================================================
// SvgTemplate
// ============================================================================

/// A template built from raw SVG markup.
///
/// On render, every `fill="..."` / `stroke="..."` attribute whose value is
/// opaque black is replaced with the matching encoded color. Other values
/// (`none`, non-black colors) are preserved, as is everything when the color
/// is `None`. The markup is then escaped into a `data:` string.
#[derive(Clone, PartialEq, Eq)]
pub struct SvgTemplate {
    markup: String,
}

impl SvgTemplate {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }

    /// Returns the source markup.
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl fmt::Debug for SvgTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SvgTemplate")
            .field("len", &self.markup.len())
            .finish()
    }
}

impl IconTemplate for SvgTemplate {
    fn render(&self, fill: Option<&EncodedColor>, stroke: Option<&EncodedColor>) -> String {
        let mut out = String::with_capacity(SVG_DATA_PREFIX.len() + self.markup.len());
        out.push_str(SVG_DATA_PREFIX);
        recolor_into(&mut out, &self.markup, fill, stroke);
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaintAttr {
    Fill,
    Stroke,
}

impl PaintAttr {
    fn pattern(self) -> &'static str {
        match self {
            Self::Fill => "fill=\"",
            Self::Stroke => "stroke=\"",
        }
    }
}

/// Finds the next `fill="` or `stroke="` that starts a whole attribute name.
fn next_paint_attr(svg: &str) -> Option<(usize, PaintAttr)> {
    [PaintAttr::Fill, PaintAttr::Stroke]
        .into_iter()
        .filter_map(|attr| find_attr(svg, attr.pattern()).map(|pos| (pos, attr)))
        .min_by_key(|(pos, _)| *pos)
}

fn find_attr(svg: &str, pattern: &str) -> Option<usize> {
    let mut offset = 0;
    while let Some(found) = svg[offset..].find(pattern) {
        let start = offset + found;
        let preceded_by_space = svg[..start]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace);
        if preceded_by_space {
            return Some(start);
        }
        offset = start + pattern.len();
    }
    None
}

/// Writes the escaped markup to `out`, substituting black paint values.
fn recolor_into(
    out: &mut String,
    svg: &str,
    fill: Option<&EncodedColor>,
    stroke: Option<&EncodedColor>,
) {
    let mut remaining = svg;

    while let Some((start, attr)) = next_paint_attr(remaining) {
        let value_start = start + attr.pattern().len();
        escape_into(out, &remaining[..value_start]);
        remaining = &remaining[value_start..];

        let Some(end) = remaining.find('"') else {
            break;
        };
        let value = &remaining[..end];
        let replacement = match attr {
            PaintAttr::Fill => fill,
            PaintAttr::Stroke => stroke,
        };
        match replacement {
            Some(color) if is_black(value) => out.push_str(color.as_str()),
            _ => escape_into(out, value),
        }
        remaining = &remaining[end..];
    }

    escape_into(out, remaining);
}

fn is_black(value: &str) -> bool {
    Color::from_css(value).is_ok_and(|color| color.is_black())
}

/// Escapes SVG markup for a `data:` URI.
///
/// Double quotes become single quotes so the result can sit inside
/// `url("...")`. Single quotes already in the markup are percent-escaped
/// so they cannot close a rewritten attribute. Whitespace runs collapse to
/// a single space.
pub fn escape_into(out: &mut String, markup: &str) {
    let mut last_was_space = out.ends_with(' ');
    for c in markup.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
            continue;
        }
        last_was_space = false;
        match c {
            '"' => out.push('\''),
            '\'' => out.push_str("%27"),
            '%' => out.push_str("%25"),
            '#' => out.push_str("%23"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '{' => out.push_str("%7B"),
            '}' => out.push_str("%7D"),
            _ => out.push(c),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_color;
    use pretty_assertions::assert_eq;

    const CHECK_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#000" d="M2 8l4 4 8-8"/><circle fill="none" stroke="black" r="7"/></svg>"##;

    fn red() -> EncodedColor {
        encode_color(&Color::rgb(255.0, 0.0, 0.0))
    }

    #[test]
    fn render_without_colors_keeps_markup() {
        let data = SvgTemplate::new(CHECK_SVG).render(None, None);
        assert_eq!(
            data,
            "data:image/svg+xml;charset=utf8,%3Csvg xmlns='http://www.w3.org/2000/svg' \
             viewBox='0 0 16 16'%3E%3Cpath fill='%23000' d='M2 8l4 4 8-8'/%3E%3Ccircle \
             fill='none' stroke='black' r='7'/%3E%3C/svg%3E"
        );
    }

    #[test]
    fn render_recolors_black_fill_and_stroke() {
        let red = red();
        let white = encode_color(&Color::WHITE);
        let data = SvgTemplate::new(CHECK_SVG).render(Some(&red), Some(&white));

        assert!(data.contains("fill='rgb%28255%2C0%2C0%29'"));
        assert!(data.contains("stroke='rgb%28255%2C255%2C255%29'"));
        assert!(data.contains("fill='none'"), "none must be preserved");
        assert!(!data.contains("%23000"));
    }

    #[test]
    fn render_leaves_non_black_values() {
        let svg = r##"<svg><path fill="#ff0000" stroke="#000000"/></svg>"##;
        let red = red();
        let data = SvgTemplate::new(svg).render(Some(&red), None);

        assert!(data.contains("fill='%23ff0000'"));
        assert!(data.contains("stroke='%23000000'"));
    }

    #[test]
    fn attribute_prefixes_are_not_recolored() {
        let svg = r##"<svg><path data-fill="#000" stroke-width="2" fill="#000"/></svg>"##;
        let red = red();
        let data = SvgTemplate::new(svg).render(Some(&red), Some(&red));

        assert!(data.contains("data-fill='%23000'"));
        assert!(data.contains("stroke-width='2'"));
        assert!(data.contains(" fill='rgb%28255%2C0%2C0%29'"));
    }

    #[test]
    fn single_quotes_inside_double_quoted_attributes_stay_balanced() {
        let svg = r##"<text font-family="'Arial'" fill="#000">A</text>"##;
        let red = red();
        let data = SvgTemplate::new(svg).render(Some(&red), None);

        assert!(data.contains("font-family='%27Arial%27'"));
        assert!(data.contains(" fill='rgb%28255%2C0%2C0%29'"));
        assert!(!data.contains("''"));
    }

    #[test]
    fn escape_collapses_whitespace() {
        let mut out = String::new();
        escape_into(&mut out, "<g>\n    <path/>\n</g>");
        assert_eq!(out, "%3Cg%3E %3Cpath/%3E %3C/g%3E");
    }

    #[test]
    fn escape_percent_and_braces() {
        let mut out = String::new();
        escape_into(&mut out, "width=\"100%\" style=\"{}\"");
        assert_eq!(out, "width='100%25' style='%7B%7D'");
    }

    #[test]
    fn closures_are_templates() {
        let template = |fill: Option<&EncodedColor>, stroke: Option<&EncodedColor>| {
            format!("{:?}/{:?}", fill.map(EncodedColor::as_str), stroke.map(EncodedColor::as_str))
        };
        assert_eq!(template.render(None, None), "None/None");
    }
}
