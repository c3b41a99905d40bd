// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ar_core::{ItemId, ItemKind};
use serde_json::Value;

use crate::error::Result;

use super::open_workspace;

pub fn run(id: String, ids: Vec<String>) -> Result<()> {
    let id = ItemId::parse_as(ItemKind::Improvement, &id)?;
    let workspace = open_workspace()?;

    let mut raw = workspace.load_raw(&id)?;
    merge_resolves(&mut raw, &ids);
    workspace.save_raw(&id, &raw)?;

    println!("Updated {}: resolves {}", id, ids.join(", "));
    Ok(())
}

/// Append ids to the `resolves` sequence, skipping ones already present,
/// and drop `modified` so re-validation stamps the edit. The appended
/// values are validated by the schema engine on save, not here.
pub(crate) fn merge_resolves(raw: &mut Value, ids: &[String]) {
    let Value::Object(fields) = raw else { return };
    let resolves = fields
        .entry("resolves")
        .or_insert_with(|| Value::Array(Vec::new()));
    if let Value::Array(entries) = resolves {
        for id in ids {
            let value = Value::String(id.clone());
            if !entries.contains(&value) {
                entries.push(value);
            }
        }
    }
    fields.remove("modified");
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
