// SPDX-FileCopyrightText: 2026 Plexus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::{MAX_DESCRIPTOR_BYTES_LIMIT, PlexusConfig};

/// Validate a deserialized configuration.
///
/// Collects every violation instead of failing on the first one.
pub fn validate_config(config: &PlexusConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.repository.initial_capacity == 0 {
        errors.push(ConfigError::Validation {
            message: "repository.initial_capacity must be greater than 0".to_string(),
        });
    }

    let max_bytes = config.parser.max_descriptor_bytes;
    if max_bytes == 0 {
        errors.push(ConfigError::Validation {
            message: "parser.max_descriptor_bytes must be greater than 0".to_string(),
        });
    } else if max_bytes > MAX_DESCRIPTOR_BYTES_LIMIT {
        errors.push(ConfigError::Validation {
            message: format!(
                "parser.max_descriptor_bytes must be at most {}, got {}",
                MAX_DESCRIPTOR_BYTES_LIMIT, max_bytes
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
