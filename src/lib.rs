//! icon-uri: inline SVG icons as CSS background images
//!
//! This crate turns a registry of SVG icon templates into data URIs for use
//! in generated stylesheets, recoloring the icons' black fill and stroke
//! paths on request. It runs at build time; nothing here targets the
//! browser.
//!
//! # Example
//!
//! ```
//! use icon_uri::{Color, IconConfig, IconRegistry, IconRequest, IconResolver, StyleOptions};
//!
//! let registry = IconRegistry::from_manifest_json(r##"{
//!     "icons": [
//!         { "name": "check", "svg": "<svg><path fill=\"#000\"/></svg>" },
//!         { "name": "facebook", "folder": "social", "svg": "<svg/>" }
//!     ]
//! }"##).unwrap();
//!
//! let resolver = IconResolver::new(&registry, IconConfig::default());
//!
//! // A recolored data URI wrapped in url(...)
//! let icon = resolver
//!     .resolve(&IconRequest::new("check").with_color(Color::rgb(0.0, 128.0, 0.0)))
//!     .unwrap();
//! assert!(icon.value.contains("rgb%280%2C128%2C0%29"));
//!
//! // Icons grouped by folder
//! assert_eq!(resolver.list_icons(Some("social")), ["facebook"]);
//!
//! // A ready-made background declaration bundle
//! let style = resolver
//!     .compose_style(&IconRequest::new("check"), &StyleOptions::new())
//!     .unwrap();
//! assert_eq!(style.size.as_str(), "2rem 2rem");
//! ```
//!
//! # Warnings
//!
//! Problems never abort a build. Unknown icons make a single call return
//! `Err(IconWarning)`; invalid colors fall back to black and are reported in
//! [`ResolvedIcon::warnings`]. Every warning is also logged through
//! `tracing`.

mod color;
mod config;
mod encode;
mod registry;
mod resolver;
mod style;
mod warning;

pub use color::{Color, ColorParseError, ColorValue};
pub use config::IconConfig;
pub use encode::{encode_color, EncodedColor};
pub use registry::template::SVG_DATA_PREFIX;
pub use registry::{
    IconEntry, IconManifest, IconRegistry, IconTemplate, ManifestIcon, RegistryError, SvgTemplate,
};
pub use resolver::{wrap_url, IconRequest, IconResolver, ResolvedIcon, ResolvedIconRequest};
pub use style::{
    CssToken, FolderStylesheet, IconStyle, StyleOptions, DEFAULT_POSITION, DEFAULT_REPEAT,
    DEFAULT_SIZE,
};
pub use warning::IconWarning;
