//! Serializable icon manifest.
//!
//! The SVG compile step writes an [`IconManifest`] as JSON; loading it gives
//! a ready [`IconRegistry`] of [`SvgTemplate`]s.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "icons": [
//!     { "name": "check", "svg": "<svg>...</svg>" },
//!     { "name": "facebook", "folder": "social", "svg": "<svg>...</svg>" }
//!   ]
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use icon_uri::IconRegistry;
//!
//! let json = r#"{ "icons": [{ "name": "check", "svg": "<svg/>" }] }"#;
//! let registry = IconRegistry::from_manifest_json(json).unwrap();
//! assert!(registry.contains("check"));
//! ```

use serde::{Deserialize, Serialize};

use super::{IconEntry, IconRegistry, RegistryError, SvgTemplate};

/// One icon in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ManifestIcon {
    /// Unique icon name.
    pub name: String,

    /// Grouping folder; omitted for root icons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,

    /// Raw SVG markup.
    pub svg: String,
}

/// The full list of icons produced by the compile step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct IconManifest {
    #[serde(default)]
    pub icons: Vec<ManifestIcon>,
}

impl IconManifest {
    /// Creates an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an icon.
    pub fn with_icon(
        mut self,
        name: impl Into<String>,
        folder: Option<&str>,
        svg: impl Into<String>,
    ) -> Self {
        self.icons.push(ManifestIcon {
            name: name.into(),
            folder: folder.map(str::to_string),
            svg: svg.into(),
        });
        self
    }

    /// Serializes the manifest to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the manifest to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Builds a registry, keeping manifest order.
    pub fn into_registry(self) -> Result<IconRegistry, RegistryError> {
        let mut registry = IconRegistry::new();
        for icon in self.icons {
            registry.insert(IconEntry::new(icon.name, icon.folder, SvgTemplate::new(icon.svg)))?;
        }
        tracing::debug!(icons = registry.len(), "loaded icon manifest");
        Ok(registry)
    }
}

impl IconRegistry {
    /// Builds a registry from a manifest.
    pub fn from_manifest(manifest: IconManifest) -> Result<Self, RegistryError> {
        manifest.into_registry()
    }

    /// Parses a JSON manifest and builds a registry from it.
    pub fn from_manifest_json(json: &str) -> Result<Self, RegistryError> {
        IconManifest::from_json(json)?.into_registry()
    }
}
