// SPDX-FileCopyrightText: 2026 Plexus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the plugin repository.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so typos are reported
//! instead of silently ignored.

use serde::{Deserialize, Serialize};

/// Upper bound accepted for `parser.max_descriptor_bytes` (16 MiB).
pub const MAX_DESCRIPTOR_BYTES_LIMIT: u64 = 16 * 1024 * 1024;

/// Top-level Plexus configuration. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PlexusConfig {
    /// Registry settings.
    #[serde(default)]
    pub repository: RepositoryConfig,

    /// Descriptor parser settings.
    #[serde(default)]
    pub parser: ParserConfig,
}

/// Registry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    /// Number of entries the registry preallocates room for.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
        }
    }
}

fn default_initial_capacity() -> usize {
    16
}

/// Descriptor parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    /// Descriptors larger than this are treated as malformed.
    #[serde(default = "default_max_descriptor_bytes")]
    pub max_descriptor_bytes: u64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_descriptor_bytes: default_max_descriptor_bytes(),
        }
    }
}

fn default_max_descriptor_bytes() -> u64 {
    64 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = PlexusConfig::default();
        assert_eq!(config.repository.initial_capacity, 16);
        assert_eq!(config.parser.max_descriptor_bytes, 65536);
        assert!(config.parser.max_descriptor_bytes <= MAX_DESCRIPTOR_BYTES_LIMIT);
    }
}
