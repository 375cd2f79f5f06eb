// SPDX-FileCopyrightText: 2026 Plexus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Compiled defaults are merged with exactly one TOML source. The repository
//! has no environment-variable surface, so no `Env` provider is layered in.

// figment::Error is external and cannot be boxed without a wrapper.
#![allow(clippy::result_large_err)]

use std::path::Path;

use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};

use crate::model::PlexusConfig;

/// Load configuration from a TOML string merged over the defaults.
pub fn load_config_from_str(toml_content: &str) -> Result<PlexusConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PlexusConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a TOML file merged over the defaults.
///
/// A missing file is not an error: Figment treats it as an empty layer and the
/// defaults apply.
pub fn load_config_from_path(path: &Path) -> Result<PlexusConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PlexusConfig::default()))
        .merge(Toml::file(path))
        .extract()
}
