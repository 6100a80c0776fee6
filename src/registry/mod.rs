//! The icon registry.
//!
//! Maps icon names to their template and folder. The registry is filled once
//! (usually from a manifest produced by the SVG compile step) and only read
//! afterwards, so a single instance can be shared by any number of
//! resolution calls.

pub mod manifest;
pub mod template;

pub use manifest::{IconManifest, ManifestIcon};
pub use template::{IconTemplate, SvgTemplate};

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur while building a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two icons share a name.
    #[error("duplicate icon definition: {name}")]
    Duplicate { name: String },

    /// The manifest could not be parsed.
    #[error("invalid icon manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

// ============================================================================
// IconEntry
// ============================================================================

/// A single registered icon.
#[derive(Clone)]
pub struct IconEntry {
    name: String,
    folder: Option<String>,
    template: Arc<dyn IconTemplate>,
}

impl IconEntry {
    pub fn new(
        name: impl Into<String>,
        folder: Option<String>,
        template: impl IconTemplate + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            folder,
            template: Arc::new(template),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The grouping folder, `None` for icons at the root.
    pub fn folder(&self) -> Option<&str> {
        self.folder.as_deref()
    }

    pub fn template(&self) -> &dyn IconTemplate {
        self.template.as_ref()
    }
}

impl fmt::Debug for IconEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconEntry")
            .field("name", &self.name)
            .field("folder", &self.folder)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// IconRegistry
// ============================================================================

/// Ordered collection of icons, keyed by name.
///
/// Insertion order is kept and drives [`list_icons`](Self::list_icons).
///
/// ```
/// use icon_uri::{IconRegistry, SvgTemplate};
///
/// let mut registry = IconRegistry::new();
/// registry.register("facebook", Some("social"), SvgTemplate::new("<svg/>")).unwrap();
/// registry.register("twitter", Some("social"), SvgTemplate::new("<svg/>")).unwrap();
/// registry.register("logo", None, SvgTemplate::new("<svg/>")).unwrap();
///
/// assert_eq!(registry.list_icons(Some("social")), ["facebook", "twitter"]);
/// assert_eq!(registry.list_icons(None), ["logo"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    entries: Vec<IconEntry>,
    index: HashMap<String, usize>,
}

impl IconRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an icon entry. Names must be unique.
    pub fn insert(&mut self, entry: IconEntry) -> Result<(), RegistryError> {
        if self.index.contains_key(&entry.name) {
            return Err(RegistryError::Duplicate { name: entry.name });
        }
        self.index.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Registers a template under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        folder: Option<&str>,
        template: impl IconTemplate + 'static,
    ) -> Result<(), RegistryError> {
        self.insert(IconEntry::new(name, folder.map(str::to_string), template))
    }

    /// Looks up an icon by name.
    pub fn get(&self, name: &str) -> Option<&IconEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates over all entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &IconEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the names of icons in `folder`, in insertion order.
    ///
    /// `None` selects root icons (those without a folder). An unknown folder
    /// yields an empty list.
    pub fn list_icons(&self, folder: Option<&str>) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.folder() == folder)
            .map(IconEntry::name)
            .collect()
    }

    /// Returns each distinct folder once, in order of first appearance.
    pub fn folders(&self) -> Vec<Option<&str>> {
        let mut folders: Vec<Option<&str>> = Vec::new();
        for entry in &self.entries {
            if !folders.contains(&entry.folder()) {
                folders.push(entry.folder());
            }
        }
        folders
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::EncodedColor;

    fn noop(_: Option<&EncodedColor>, _: Option<&EncodedColor>) -> String {
        String::from("data")
    }

    fn social_registry() -> IconRegistry {
        let mut registry = IconRegistry::new();
        registry.register("facebook", Some("social"), noop).unwrap();
        registry.register("logo", None, noop).unwrap();
        registry.register("twitter", Some("social"), noop).unwrap();
        registry.register("check", Some("ui"), noop).unwrap();
        registry
    }

    #[test]
    fn register_and_get() {
        let registry = social_registry();
        assert_eq!(registry.len(), 4);
        assert!(registry.contains("twitter"));

        let entry = registry.get("facebook").unwrap();
        assert_eq!(entry.name(), "facebook");
        assert_eq!(entry.folder(), Some("social"));
        assert_eq!(entry.template().render(None, None), "data");

        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut registry = social_registry();
        let result = registry.register("logo", Some("other"), noop);
        assert!(matches!(result, Err(RegistryError::Duplicate { name }) if name == "logo"));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn list_preserves_order() {
        let registry = social_registry();
        assert_eq!(registry.list_icons(Some("social")), ["facebook", "twitter"]);
        assert_eq!(registry.list_icons(None), ["logo"]);
        assert!(registry.list_icons(Some("missing-folder")).is_empty());
    }

    #[test]
    fn list_is_restartable() {
        let registry = social_registry();
        assert_eq!(
            registry.list_icons(Some("social")),
            registry.list_icons(Some("social"))
        );
    }

    #[test]
    fn folders_in_first_seen_order() {
        let registry = social_registry();
        assert_eq!(registry.folders(), [Some("social"), None, Some("ui")]);
    }

    #[test]
    fn entries_iterate_in_insertion_order() {
        let registry = social_registry();
        let names: Vec<_> = registry.entries().map(IconEntry::name).collect();
        assert_eq!(names, ["facebook", "logo", "twitter", "check"]);
    }

    #[test]
    fn registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IconRegistry>();
    }
}
