// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use ar_core::Workspace;

use crate::error::Result;

pub fn run(path: Option<String>) -> Result<()> {
    let root = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    let workspace = Workspace::init(&root)?;
    println!(
        "Initialized arev workspace at {}",
        workspace.root().display()
    );
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
