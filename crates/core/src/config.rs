// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace configuration.
//!
//! A workspace directory carries a single config file recording the on-disk
//! format version. Raw config input goes through
//! [`validate_workspace_config`](crate::schema::validate_workspace_config)
//! like any other record.

use serde::{Deserialize, Serialize};

/// The on-disk format version written by this build.
pub const CURRENT_VERSION: u32 = 1;

/// On-disk format version of a workspace directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Positive format version, defaults to 1.
    pub version: u32,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        WorkspaceConfig {
            version: CURRENT_VERSION,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
