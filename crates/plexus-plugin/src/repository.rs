// SPDX-FileCopyrightText: 2026 Plexus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin repository: the registry loaders consult before activation.
//!
//! `BasePluginRepository` stores [`RepositoryEntry`] records keyed by plugin
//! id. It is append-only: entries are added exactly once and never replaced
//! or removed. It is `Send + Sync`; share it behind an `Arc` between the
//! discovery thread and the readers.

use std::ops::Deref;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use plexus_config::RepositoryConfig;
use plexus_core::{PlexusError, PluginId};

use crate::entry::RepositoryEntry;

/// Read-only view of a repository, as consumed by a plugin loader.
pub trait PluginRepository: Send + Sync {
    /// True iff a plugin with this id is registered.
    fn contains(&self, id: &str) -> bool;

    /// The entry registered under `id`, if any.
    fn get(&self, id: &str) -> Option<Arc<RepositoryEntry>>;

    /// Snapshot of all registered entries, in no particular order.
    fn list(&self) -> RepositorySnapshot;
}

/// Point-in-time collection of registered entries.
///
/// Derefs to a shared slice, so callers can iterate and index but cannot
/// add, remove or replace entries. Entries added to the repository after the
/// snapshot was taken are not included.
#[derive(Debug, Clone, Default)]
pub struct RepositorySnapshot {
    entries: Arc<[Arc<RepositoryEntry>]>,
}

impl RepositorySnapshot {
    /// Find an entry in the snapshot by id.
    pub fn find(&self, id: &str) -> Option<&Arc<RepositoryEntry>> {
        self.entries.iter().find(|e| e.id().as_str() == id)
    }
}

impl Deref for RepositorySnapshot {
    type Target = [Arc<RepositoryEntry>];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a RepositorySnapshot {
    type Item = &'a Arc<RepositoryEntry>;
    type IntoIter = std::slice::Iter<'a, Arc<RepositoryEntry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Concurrent in-memory repository enforcing unique plugin ids.
#[derive(Debug, Default)]
pub struct BasePluginRepository {
    entries: DashMap<PluginId, Arc<RepositoryEntry>>,
}

impl BasePluginRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &RepositoryConfig) -> Self {
        Self {
            entries: DashMap::with_capacity(config.initial_capacity),
        }
    }

    /// Register `entry` under its descriptor id.
    ///
    /// The uniqueness check and the insertion happen under the same shard
    /// write lock, so concurrent adds of one id cannot both succeed. On a
    /// duplicate the repository is left unchanged.
    pub fn add(&self, entry: RepositoryEntry) -> Result<(), PlexusError> {
        match self.entries.entry(entry.id().clone()) {
            Entry::Occupied(_) => Err(PlexusError::duplicate_plugin(entry.id().as_str())),
            Entry::Vacant(vacant) => {
                let entry = Arc::new(entry);
                vacant.insert(Arc::clone(&entry));
                tracing::debug!(
                    plugin_id = %entry.id(),
                    classpath = %entry.classpath(),
                    "Plugin added: {} {}",
                    entry.id(),
                    entry.classpath()
                );
                Ok(())
            }
        }
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<PluginId> {
        let mut ids: Vec<PluginId> = self.entries.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PluginRepository for BasePluginRepository {
    fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    fn get(&self, id: &str) -> Option<Arc<RepositoryEntry>> {
        self.entries.get(id).map(|e| Arc::clone(e.value()))
    }

    fn list(&self) -> RepositorySnapshot {
        let entries: Vec<Arc<RepositoryEntry>> =
            self.entries.iter().map(|e| Arc::clone(e.value())).collect();
        RepositorySnapshot {
            entries: entries.into(),
        }
    }
}
