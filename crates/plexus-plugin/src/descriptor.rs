// SPDX-FileCopyrightText: 2026 Plexus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin descriptors built from parsed property maps.
//!
//! A descriptor file is a properties file whose name ends with
//! [`FILE_EXTENSION`]:
//!
//! ```text
//! id=alpha
//! name=Alpha Plugin
//! version=1.2.0
//! class=com.example.AlphaPlugin
//! dependencies=beta, gamma
//! ```
//!
//! Only `id` is required. Every property, known or not, stays reachable
//! through [`PluginDescriptor::property`].

use plexus_core::{PlexusError, PluginId};

use crate::properties::PropertyMap;

/// File-name suffix marking a file as a plugin descriptor.
pub const FILE_EXTENSION: &str = ".plugin";

/// Well-known descriptor property keys.
pub mod keys {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const VERSION: &str = "version";
    pub const CLASS: &str = "class";
    pub const DEPENDENCIES: &str = "dependencies";
}

/// Returns true iff `filename` ends with [`FILE_EXTENSION`].
///
/// Case-sensitive and anchored at the end: `foo.plugin.txt` does not match.
pub fn matches_descriptor_extension(filename: &str) -> bool {
    filename.ends_with(FILE_EXTENSION)
}

/// Immutable metadata record identifying a plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginDescriptor {
    id: PluginId,
    name: Option<String>,
    version: Option<String>,
    plugin_class: Option<String>,
    dependencies: Vec<PluginId>,
    properties: PropertyMap,
}

impl PluginDescriptor {
    /// A descriptor carrying only an identifier.
    pub fn new(id: PluginId) -> Self {
        let mut properties = PropertyMap::new();
        properties.insert(keys::ID.to_string(), id.to_string());
        Self {
            id,
            name: None,
            version: None,
            plugin_class: None,
            dependencies: Vec::new(),
            properties,
        }
    }

    /// Build a descriptor from parsed properties.
    ///
    /// Fails when `id` is absent or blank, which is also how an empty map
    /// returned by a failed parse gets rejected. Empty optional values are
    /// treated as absent. The id is trimmed, and the stored `id` property
    /// holds the trimmed value.
    pub fn from_properties(properties: &PropertyMap) -> Result<Self, PlexusError> {
        let id = properties
            .get(keys::ID)
            .ok_or_else(|| PlexusError::MissingDescriptorKey {
                key: keys::ID.to_string(),
            })?;
        let id = PluginId::new(id.trim())?;

        let optional = |key: &str| {
            properties
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let dependencies = properties
            .get(keys::DEPENDENCIES)
            .map(|deps| {
                deps.split(',')
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .map(PluginId::new)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        let mut stored = properties.clone();
        stored.insert(keys::ID.to_string(), id.to_string());

        Ok(Self {
            id,
            name: optional(keys::NAME),
            version: optional(keys::VERSION),
            plugin_class: optional(keys::CLASS),
            dependencies,
            properties: stored,
        })
    }

    pub fn id(&self) -> &PluginId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Entry-point class or symbol the loader should instantiate.
    pub fn plugin_class(&self) -> Option<&str> {
        self.plugin_class.as_deref()
    }

    /// Identifiers of plugins this one declares a dependency on.
    pub fn dependencies(&self) -> &[PluginId] {
        &self.dependencies
    }

    /// Raw lookup of any descriptor property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn props(pairs: &[(&str, &str)]) -> PropertyMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn full_descriptor_from_properties() {
        let map = props(&[
            ("id", "alpha"),
            ("name", "Alpha Plugin"),
            ("version", "1.2.0"),
            ("class", "com.example.AlphaPlugin"),
            ("dependencies", "beta, gamma,,"),
            ("vendor", "Example"),
        ]);
        let descriptor = PluginDescriptor::from_properties(&map).unwrap();

        assert_eq!(descriptor.id().as_str(), "alpha");
        assert_eq!(descriptor.name(), Some("Alpha Plugin"));
        assert_eq!(descriptor.version(), Some("1.2.0"));
        assert_eq!(descriptor.plugin_class(), Some("com.example.AlphaPlugin"));
        let deps: Vec<&str> = descriptor.dependencies().iter().map(PluginId::as_str).collect();
        assert_eq!(deps, vec!["beta", "gamma"]);
        assert_eq!(descriptor.property("vendor"), Some("Example"));
    }

    #[test]
    fn empty_map_is_rejected() {
        let err = PluginDescriptor::from_properties(&PropertyMap::new()).unwrap_err();
        assert!(matches!(err, PlexusError::MissingDescriptorKey { ref key } if key == "id"));
    }

    #[test]
    fn blank_id_is_rejected() {
        let err = PluginDescriptor::from_properties(&props(&[("id", "  ")])).unwrap_err();
        assert!(matches!(err, PlexusError::InvalidPluginId(_)));
    }

    #[test]
    fn minimal_descriptor() {
        let descriptor =
            PluginDescriptor::from_properties(&props(&[("id", "beta"), ("name", "")])).unwrap();
        assert_eq!(descriptor.id().as_str(), "beta");
        assert!(descriptor.name().is_none());
        assert!(descriptor.dependencies().is_empty());
    }

    #[test]
    fn id_property_matches_trimmed_id() {
        let descriptor =
            PluginDescriptor::from_properties(&props(&[("id", "  alpha \t"), ("name", " A ")]))
                .unwrap();
        assert_eq!(descriptor.id().as_str(), "alpha");
        assert_eq!(descriptor.property(keys::ID), Some(descriptor.id().as_str()));
        assert_eq!(descriptor.property(keys::NAME), Some(" A "));
    }

    #[test]
    fn new_records_id_property() {
        let descriptor = PluginDescriptor::new(PluginId::new("gamma").unwrap());
        assert_eq!(descriptor.property(keys::ID), Some("gamma"));
    }

    #[test]
    fn extension_match_is_anchored() {
        assert!(matches_descriptor_extension("foo.plugin"));
        assert!(matches_descriptor_extension(".plugin"));
        assert!(!matches_descriptor_extension("foo.plugin.txt"));
        assert!(!matches_descriptor_extension("foo.PLUGIN"));
        assert!(!matches_descriptor_extension("fooxplugin"));
    }

    proptest! {
        #[test]
        fn extension_match_iff_suffix(
            stem in ".*",
            suffix in prop_oneof![
                Just(".plugin"),
                Just(".plug"),
                Just("plugin"),
                Just(".plugins"),
                Just(""),
            ],
        ) {
            let name = format!("{stem}{suffix}");
            prop_assert_eq!(matches_descriptor_extension(&name), name.ends_with(".plugin"));
        }
    }
}
