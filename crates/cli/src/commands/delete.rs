// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ar_core::ItemId;

use crate::error::Result;

use super::open_workspace;

pub fn run(id: String) -> Result<()> {
    let id: ItemId = id.parse()?;
    let workspace = open_workspace()?;
    workspace.delete(&id)?;
    println!("Deleted {}", id);
    Ok(())
}
