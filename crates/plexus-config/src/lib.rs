// SPDX-FileCopyrightText: 2026 Plexus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the Plexus plugin repository.
//!
//! TOML parsing with strict validation (`deny_unknown_fields`), Figment
//! layering over compiled defaults, and miette diagnostics with typo
//! suggestions.
//!
//! # Usage
//!
//! ```
//! use plexus_config::load_and_validate_str;
//!
//! let config = load_and_validate_str("[parser]\nmax_descriptor_bytes = 4096\n")
//!     .expect("config errors");
//! assert_eq!(config.parser.max_descriptor_bytes, 4096);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::ConfigError;
pub use loader::{load_config_from_path, load_config_from_str};
pub use model::{ParserConfig, PlexusConfig, RepositoryConfig};
pub use validation::validate_config;

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<PlexusConfig, Vec<ConfigError>> {
    let config = loader::load_config_from_str(toml_content)
        .map_err(diagnostic::figment_to_config_errors)?;
    validation::validate_config(&config)?;
    Ok(config)
}

/// Load configuration from a TOML file and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<PlexusConfig, Vec<ConfigError>> {
    let config = loader::load_config_from_path(path)
        .map_err(diagnostic::figment_to_config_errors)?;
    validation::validate_config(&config)?;
    Ok(config)
}
