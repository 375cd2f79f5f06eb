// SPDX-FileCopyrightText: 2026 Plexus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Plexus plugin repository.

use thiserror::Error;

/// The primary error type returned by repository and descriptor operations.
///
/// Descriptor *parsing* failures are not represented here: the parser absorbs
/// them and returns an empty property map instead.
#[derive(Debug, Error)]
pub enum PlexusError {
    /// A plugin with the same identifier is already registered.
    #[error("duplicate plugin `{id}`: {message}")]
    DuplicatePlugin { id: String, message: String },

    /// A plugin identifier was empty or whitespace-only.
    #[error("invalid plugin id `{0}`: must not be empty")]
    InvalidPluginId(String),

    /// A descriptor property required to build a plugin descriptor is absent.
    #[error("plugin descriptor is missing required key `{key}`")]
    MissingDescriptorKey { key: String },
}

impl PlexusError {
    /// Builds the error returned when `id` is registered twice.
    pub fn duplicate_plugin(id: impl Into<String>) -> Self {
        Self::DuplicatePlugin {
            id: id.into(),
            message: "Duplicate plugin with same id in repository".to_string(),
        }
    }

    /// The plugin identifier carried by a `DuplicatePlugin` error.
    pub fn duplicate_id(&self) -> Option<&str> {
        match self {
            Self::DuplicatePlugin { id, .. } => Some(id),
            _ => None,
        }
    }
}
