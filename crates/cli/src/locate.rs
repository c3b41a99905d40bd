// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace discovery.
//!
//! Commands other than `init` operate on the nearest workspace: the first
//! ancestor of the current directory (including itself) containing the
//! config file.

use std::path::{Path, PathBuf};

use ar_core::workspace::CONFIG_FILE_NAME;

use crate::error::{Error, Result};

/// Finds the workspace root by walking up from the current directory.
pub fn find_workspace_root() -> Result<PathBuf> {
    find_workspace_root_from(&std::env::current_dir()?)
}

/// Finds the workspace root by walking up from `start`.
pub fn find_workspace_root_from(start: &Path) -> Result<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        if dir.join(CONFIG_FILE_NAME).is_file() {
            return Ok(dir);
        }
        if !dir.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

#[cfg(test)]
#[path = "locate_tests.rs"]
mod tests;
