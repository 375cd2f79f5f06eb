// SPDX-FileCopyrightText: 2026 Plexus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Failures inside the descriptor parser.
//!
//! These never leave the crate's public parsing functions: they are logged and
//! replaced by an empty property map.

use thiserror::Error;

use crate::properties::PropertiesError;

#[derive(Debug, Error)]
pub(crate) enum DescriptorError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("descriptor exceeds {limit} bytes")]
    TooLarge { limit: u64 },

    #[error("malformed descriptor: {0}")]
    Syntax(#[from] PropertiesError),
}
