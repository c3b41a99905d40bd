// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ar_core::ItemId;
use serde_json::Value;

use crate::error::Result;

use super::open_workspace;

pub fn run(id: String, status: String) -> Result<()> {
    let id: ItemId = id.parse()?;
    let workspace = open_workspace()?;

    let mut raw = workspace.load_raw(&id)?;
    apply_status(&mut raw, &status);
    workspace.save_raw(&id, &raw)?;

    println!("Updated {}: status -> {}", id, status);
    Ok(())
}

/// Set the new status and drop `modified`, so re-validation stamps the
/// edit with the current time.
pub(crate) fn apply_status(raw: &mut Value, status: &str) {
    if let Value::Object(fields) = raw {
        fields.insert("status".into(), Value::String(status.to_string()));
        fields.remove("modified");
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
