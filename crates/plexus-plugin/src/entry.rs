// SPDX-FileCopyrightText: 2026 Plexus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A registered plugin: descriptor plus classpath.

use plexus_core::PluginId;

use crate::classpath::Classpath;
use crate::descriptor::PluginDescriptor;

/// Entry stored by the repository. Fields are private so an entry cannot be
/// changed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryEntry {
    descriptor: PluginDescriptor,
    classpath: Classpath,
}

impl RepositoryEntry {
    pub fn new(descriptor: PluginDescriptor, classpath: Classpath) -> Self {
        Self {
            descriptor,
            classpath,
        }
    }

    /// Shorthand for `descriptor().id()`.
    pub fn id(&self) -> &PluginId {
        self.descriptor.id()
    }

    pub fn descriptor(&self) -> &PluginDescriptor {
        &self.descriptor
    }

    pub fn classpath(&self) -> &Classpath {
        &self.classpath
    }
}
