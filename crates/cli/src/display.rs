// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON rendering of items.

use ar_core::{Item, ItemId};
use serde_json::{Map, Value};

/// Format an item as a single aligned list line.
pub fn format_item_line(id: &ItemId, item: &Item) -> String {
    let tags = if item.base().tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", item.base().tags.join(", "))
    };
    format!(
        "{:<16} {:<12} {}{}",
        id.to_string(),
        item.status_str(),
        item.title(),
        tags
    )
}

/// Format an item as a multi-line detail view.
pub fn format_item_detail(id: &ItemId, item: &Item) -> String {
    let base = item.base();
    let mut lines = vec![
        format!("{}: {}", id, base.title),
        format!("  kind:     {}", item.kind()),
        format!("  status:   {}", item.status_str()),
    ];
    if !base.tags.is_empty() {
        lines.push(format!("  tags:     {}", base.tags.join(", ")));
    }
    if let Some(ticket) = &base.ticket {
        lines.push(format!("  ticket:   {}", ticket));
    }
    lines.push(format!("  created:  {}", base.created.to_rfc3339()));
    lines.push(format!("  modified: {}", base.modified.to_rfc3339()));

    match item {
        Item::Issue(issue) => push_id_line(&mut lines, "caused by", &issue.caused_by),
        Item::Risk(risk) => push_id_line(&mut lines, "caused by", &risk.caused_by),
        Item::Improvement(improvement) => {
            push_id_line(&mut lines, "resolves", &improvement.resolves);
            push_id_line(&mut lines, "modifies", &improvement.modifies);
            push_id_line(&mut lines, "creates", &improvement.creates);
        }
    }

    if let Some(description) = &base.description {
        lines.push(String::new());
        lines.push(description.clone());
    }
    lines.join("\n")
}

fn push_id_line(lines: &mut Vec<String>, label: &str, ids: &[ItemId]) {
    if ids.is_empty() {
        return;
    }
    let rendered: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    lines.push(format!("  {:<9} {}", format!("{}:", label), rendered.join(", ")));
}

/// JSON representation of an item: the serialized record with `id` and
/// `kind` prepended.
pub fn item_json(id: &ItemId, item: &Item) -> crate::error::Result<Value> {
    let mut out = Map::new();
    out.insert("id".into(), Value::String(id.to_string()));
    out.insert("kind".into(), Value::String(item.kind().as_str().into()));
    if let Value::Object(fields) = serde_json::to_value(item)? {
        out.extend(fields);
    }
    Ok(Value::Object(out))
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
