// SPDX-FileCopyrightText: 2026 Plexus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Descriptor parsing from loose files and from entries of zip archives.
//!
//! Parsing never fails to the caller. Any I/O error, archive error, oversized
//! descriptor or malformed content is logged at warn level and turned into an
//! empty [`PropertyMap`], which descriptor construction then rejects. A scan
//! over many candidates therefore survives individual corrupt files.
//!
//! Files, archives and entry readers are owned by the parsing call and are
//! dropped on every return path.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use plexus_config::ParserConfig;
use zip::ZipArchive;

use crate::error::DescriptorError;
use crate::properties::{self, PropertyMap};

/// Reads descriptor properties with a configured size limit.
#[derive(Debug, Clone)]
pub struct DescriptorParser {
    max_descriptor_bytes: u64,
}

impl Default for DescriptorParser {
    fn default() -> Self {
        Self::new(&ParserConfig::default())
    }
}

impl DescriptorParser {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            max_descriptor_bytes: config.max_descriptor_bytes,
        }
    }

    /// Parse a descriptor file on the local filesystem.
    ///
    /// Failures are reported with the absolute path of `path`.
    pub fn parse_file(&self, path: &Path) -> PropertyMap {
        let result = File::open(path)
            .map_err(DescriptorError::from)
            .and_then(|file| self.read_limited(file));

        self.or_warn(result, || {
            std::path::absolute(path)
                .unwrap_or_else(|_| path.to_path_buf())
                .display()
                .to_string()
        })
    }

    /// Parse the entry `entry_name` of an already-open archive.
    ///
    /// `archive_name` identifies the archive in the warning on failure.
    pub fn parse_archive_entry<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        archive_name: &str,
        entry_name: &str,
    ) -> PropertyMap {
        let result = self.read_entry(archive, entry_name);
        self.or_warn(result, || archive_name.to_string())
    }

    /// Open the archive at `archive_path` and parse its entry `entry_name`.
    pub fn parse_archive(&self, archive_path: &Path, entry_name: &str) -> PropertyMap {
        let result = File::open(archive_path)
            .map_err(DescriptorError::from)
            .and_then(|file| ZipArchive::new(file).map_err(DescriptorError::from))
            .and_then(|mut archive| self.read_entry(&mut archive, entry_name));

        self.or_warn(result, || archive_path.display().to_string())
    }

    fn read_entry<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        entry_name: &str,
    ) -> Result<PropertyMap, DescriptorError> {
        let entry = archive.by_name(entry_name)?;
        self.read_limited(entry)
    }

    fn read_limited<R: Read>(&self, reader: R) -> Result<PropertyMap, DescriptorError> {
        let limit = self.max_descriptor_bytes;
        let mut bytes = Vec::new();
        reader.take(limit.saturating_add(1)).read_to_end(&mut bytes)?;
        if bytes.len() as u64 > limit {
            return Err(DescriptorError::TooLarge { limit });
        }
        Ok(properties::parse_properties(&properties::decode_latin1(&bytes))?)
    }

    fn or_warn(
        &self,
        result: Result<PropertyMap, DescriptorError>,
        source: impl FnOnce() -> String,
    ) -> PropertyMap {
        match result {
            Ok(map) => map,
            Err(err) => {
                tracing::warn!(error = %err, "Could not parse plugin descriptor {}", source());
                PropertyMap::new()
            }
        }
    }
}

/// Parse a descriptor file with the default parser configuration.
pub fn parse_descriptor_file(path: &Path) -> PropertyMap {
    DescriptorParser::default().parse_file(path)
}

/// Parse an archive entry with the default parser configuration.
pub fn parse_descriptor_archive(archive_path: &Path, entry_name: &str) -> PropertyMap {
    DescriptorParser::default().parse_archive(archive_path, entry_name)
}
