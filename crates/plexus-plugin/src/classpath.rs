// SPDX-FileCopyrightText: 2026 Plexus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Opaque locator of a plugin's code.

use std::fmt;
use std::path::{Path, PathBuf};

/// Where a plugin's code is packaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClasspathKind {
    /// An unpacked directory.
    Directory,
    /// A compressed archive containing code and descriptor.
    Archive,
}

impl fmt::Display for ClasspathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClasspathKind::Directory => write!(f, "directory"),
            ClasspathKind::Archive => write!(f, "archive"),
        }
    }
}

/// Classpath handle. The repository only observes its path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Classpath {
    kind: ClasspathKind,
    path: PathBuf,
}

impl Classpath {
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: ClasspathKind::Directory,
            path: path.into(),
        }
    }

    pub fn archive(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: ClasspathKind::Archive,
            path: path.into(),
        }
    }

    pub fn kind(&self) -> ClasspathKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for Classpath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        let dir = Classpath::directory("/opt/plugins/alpha");
        let jar = Classpath::archive("/tmp/alpha.jar");
        assert_eq!(dir.kind(), ClasspathKind::Directory);
        assert_eq!(jar.kind(), ClasspathKind::Archive);
        assert_eq!(jar.path(), Path::new("/tmp/alpha.jar"));
    }

    #[test]
    fn display_is_the_path() {
        assert_eq!(Classpath::archive("/tmp/alpha.jar").to_string(), "/tmp/alpha.jar");
        assert_eq!(ClasspathKind::Archive.to_string(), "archive");
    }
}
