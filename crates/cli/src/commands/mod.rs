// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod delete;
pub mod init;
pub mod list;
pub mod new;
pub mod resolve;
pub mod show;
pub mod status;

use ar_core::Workspace;

use crate::error::Result;
use crate::locate::find_workspace_root;

/// Helper to open the workspace from the current context.
pub fn open_workspace() -> Result<Workspace> {
    let root = find_workspace_root()?;
    Ok(Workspace::open(&root)?)
}
