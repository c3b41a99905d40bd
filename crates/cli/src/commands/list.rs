// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::str::FromStr;

use ar_core::{Item, ItemId, ItemKind};
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::display::{format_item_line, item_json};
use crate::error::Result;

use super::open_workspace;

pub fn run(kind: Option<String>, status: Option<String>, output: OutputFormat) -> Result<()> {
    let kinds: Vec<ItemKind> = match kind {
        Some(k) => vec![ItemKind::from_str(&k)?],
        None => ItemKind::ALL.to_vec(),
    };

    let workspace = open_workspace()?;
    let mut items: Vec<(ItemId, Item)> = Vec::new();
    for kind in kinds {
        items.extend(workspace.load_all(kind)?);
    }
    items.retain(|(_, item)| matches_status(item, status.as_deref()));

    match output {
        OutputFormat::Text => {
            for (id, item) in &items {
                println!("{}", format_item_line(id, item));
            }
        }
        OutputFormat::Json => {
            let values: Result<Vec<Value>> =
                items.iter().map(|(id, item)| item_json(id, item)).collect();
            println!("{}", serde_json::to_string_pretty(&values?)?);
        }
        OutputFormat::Ids => {
            for (id, _) in &items {
                println!("{}", id);
            }
        }
    }
    Ok(())
}

/// True when no filter is given or the item's status matches it.
pub(crate) fn matches_status(item: &Item, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(status) => item.status_str() == status,
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
