// SPDX-FileCopyrightText: 2026 Plexus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin repository and descriptor parser.
//!
//! A discoverer finds candidate descriptors (files whose name passes
//! [`matches_descriptor_extension`], loose or inside a zip archive), parses
//! them into a [`PropertyMap`], builds a [`PluginDescriptor`], pairs it with a
//! [`Classpath`] and calls [`BasePluginRepository::add`]. Loaders then read
//! the registry through the [`PluginRepository`] trait.

pub mod classpath;
pub mod descriptor;
pub mod entry;
mod error;
pub mod parser;
pub mod properties;
pub mod repository;

pub use classpath::{Classpath, ClasspathKind};
pub use descriptor::{matches_descriptor_extension, PluginDescriptor, FILE_EXTENSION};
pub use entry::RepositoryEntry;
pub use parser::{parse_descriptor_archive, parse_descriptor_file, DescriptorParser};
pub use properties::{parse_properties, write_properties, PropertyMap};
pub use repository::{BasePluginRepository, PluginRepository, RepositorySnapshot};
