// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ar_core::ItemId;

use crate::cli::OutputFormat;
use crate::display::{format_item_detail, item_json};
use crate::error::Result;

use super::open_workspace;

pub fn run(id: String, output: OutputFormat) -> Result<()> {
    let id: ItemId = id.parse()?;
    let workspace = open_workspace()?;
    let item = workspace.load(&id)?;

    match output {
        OutputFormat::Text => println!("{}", format_item_detail(&id, &item)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&item_json(&id, &item)?)?)
        }
        OutputFormat::Ids => println!("{}", id),
    }
    Ok(())
}
