// SPDX-FileCopyrightText: 2026 Plexus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Plexus plugin repository.
//!
//! Holds the error type and identifier types used by the plugin crate.

pub mod error;
pub mod types;

pub use error::PlexusError;
pub use types::PluginId;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plexus_error_has_all_variants() {
        let _duplicate = PlexusError::duplicate_plugin("alpha");
        let _invalid = PlexusError::InvalidPluginId(String::new());
        let _missing = PlexusError::MissingDescriptorKey { key: "id".into() };
    }

    #[test]
    fn invalid_plugin_id_surfaces_through_root_exports() {
        let err = PluginId::new("").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
