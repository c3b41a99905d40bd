// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::str::FromStr;

use ar_core::ItemKind;
use serde_json::{json, Map, Value};

use crate::cli::OutputFormat;
use crate::display::{format_item_detail, item_json};
use crate::error::{Error, Result};

use super::open_workspace;

#[allow(clippy::too_many_arguments)]
pub fn run(
    kind: String,
    title: String,
    description: Option<String>,
    tags: Vec<String>,
    ticket: Option<String>,
    status: Option<String>,
    caused_by: Vec<String>,
    resolves: Vec<String>,
    modifies: Vec<String>,
    creates: Vec<String>,
    output: OutputFormat,
) -> Result<()> {
    let kind = ItemKind::from_str(&kind)?;
    let raw = build_raw(
        kind,
        title,
        description,
        tags,
        ticket,
        status,
        caused_by,
        resolves,
        modifies,
        creates,
    )?;

    let workspace = open_workspace()?;
    let id = workspace.next_id(kind)?;
    let item = workspace.save_raw(&id, &Value::Object(raw))?;

    match output {
        OutputFormat::Text => println!("Created {}", format_item_detail(&id, &item)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&item_json(&id, &item)?)?),
        OutputFormat::Ids => println!("{}", id),
    }
    Ok(())
}

/// Assemble the raw input mapping for the schema engine from CLI flags.
///
/// Only provided flags become fields, so the engine's defaulting applies
/// exactly as it would for any other producer. `resolves` is always
/// present for improvements, so an omitted flag reads as an empty
/// sequence rather than a missing field.
#[allow(clippy::too_many_arguments)]
pub(crate) fn build_raw(
    kind: ItemKind,
    title: String,
    description: Option<String>,
    tags: Vec<String>,
    ticket: Option<String>,
    status: Option<String>,
    caused_by: Vec<String>,
    resolves: Vec<String>,
    modifies: Vec<String>,
    creates: Vec<String>,
) -> Result<Map<String, Value>> {
    let flag_misuse = match kind {
        ItemKind::Improvement if !caused_by.is_empty() => Some("caused-by"),
        ItemKind::Issue | ItemKind::Risk if !resolves.is_empty() => Some("resolves"),
        ItemKind::Issue | ItemKind::Risk if !modifies.is_empty() => Some("modifies"),
        ItemKind::Issue | ItemKind::Risk if !creates.is_empty() => Some("creates"),
        _ => None,
    };
    if let Some(flag) = flag_misuse {
        return Err(Error::FlagNotApplicable {
            flag,
            kind: kind.to_string(),
        });
    }

    let mut raw = Map::new();
    raw.insert("title".into(), json!(title));
    if let Some(description) = description {
        raw.insert("description".into(), json!(description));
    }
    if !tags.is_empty() {
        raw.insert("tags".into(), json!(tags));
    }
    if let Some(ticket) = ticket {
        raw.insert("ticket".into(), json!(ticket));
    }
    if let Some(status) = status {
        raw.insert("status".into(), json!(status));
    }
    match kind {
        ItemKind::Issue | ItemKind::Risk => {
            if !caused_by.is_empty() {
                raw.insert("causedBy".into(), json!(caused_by));
            }
        }
        ItemKind::Improvement => {
            raw.insert("resolves".into(), json!(resolves));
            if !modifies.is_empty() {
                raw.insert("modifies".into(), json!(modifies));
            }
            if !creates.is_empty() {
                raw.insert("creates".into(), json!(creates));
            }
        }
    }
    Ok(raw)
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
