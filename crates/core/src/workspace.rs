// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Directory-backed item store.
//!
//! A workspace is a user-chosen directory holding one YAML file per item
//! plus a config file and a generated README:
//!
//! ```text
//! <root>/arev.yaml              config ({ version: 1 })
//! <root>/README.md              generated once, never overwritten
//! <root>/issues/issue-1.yaml
//! <root>/risks/risk-1.yaml
//! <root>/improvements/improvement-1.yaml
//! ```
//!
//! Everything read from disk passes through the schema engine, so
//! hand-edited files get the same defaulting and field-level errors as any
//! other input.

use serde_json::Value;
use std::fmt;
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use crate::clock::{Clock, SystemClock};
use crate::config::WorkspaceConfig;
use crate::error::{Error, Result};
use crate::id::{ItemId, ItemKind};
use crate::item::Item;
use crate::schema::{validate_item, validate_workspace_config};

/// Name of the config file marking a directory as a workspace.
pub const CONFIG_FILE_NAME: &str = "arev.yaml";

/// Name of the README generated on first init.
pub const README_FILE_NAME: &str = "README.md";

const README_CONTENT: &str = "\
# arev Workspace

This directory contains data for arev, a record-keeping tool for software
architecture reviews. Point `arev` at this directory to work with it.

<!-- This file is generated once when creating a workspace to give others a
hint what is contained in this directory. Feel free to edit or delete it. -->
";

/// A directory-backed store of items and a config file.
pub struct Workspace {
    root: PathBuf,
    config: WorkspaceConfig,
    clock: Box<dyn Clock>,
}

// Manual impl: the boxed clock has no Debug bound.
impl fmt::Debug for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workspace")
            .field("root", &self.root)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Workspace {
    /// Initializes a workspace at `root`, creating the directory, config,
    /// and README as needed. Idempotent: an existing config is read back
    /// instead of overwritten, and the README is only written when missing
    /// or empty.
    pub fn init(root: &Path) -> Result<Workspace> {
        Self::init_with_clock(root, Box::new(SystemClock))
    }

    /// [`Workspace::init`] with an injected clock, for deterministic tests.
    pub fn init_with_clock(root: &Path, clock: Box<dyn Clock>) -> Result<Workspace> {
        fs::create_dir_all(root)?;

        let config_path = root.join(CONFIG_FILE_NAME);
        let config = if config_path.exists() {
            read_config(&config_path)?
        } else {
            let config = validate_workspace_config(&Value::Object(Default::default()))?;
            write_config(&config_path, &config)?;
            config
        };

        let readme_path = root.join(README_FILE_NAME);
        let existing = match fs::read_to_string(&readme_path) {
            Ok(content) => content,
            Err(e) if e.kind() == IoErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };
        if existing.is_empty() {
            fs::write(&readme_path, README_CONTENT)?;
        }

        tracing::debug!(root = %root.display(), "initialized workspace");
        Ok(Workspace {
            root: root.to_path_buf(),
            config,
            clock,
        })
    }

    /// Opens an existing workspace. Fails if the config file is absent.
    pub fn open(root: &Path) -> Result<Workspace> {
        Self::open_with_clock(root, Box::new(SystemClock))
    }

    /// [`Workspace::open`] with an injected clock, for deterministic tests.
    pub fn open_with_clock(root: &Path, clock: Box<dyn Clock>) -> Result<Workspace> {
        let config_path = root.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Err(Error::NotInitialized(root.display().to_string()));
        }
        let config = read_config(&config_path)?;
        Ok(Workspace {
            root: root.to_path_buf(),
            config,
            clock,
        })
    }

    /// The workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The validated workspace config.
    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// Path of the file holding the given item.
    pub fn item_path(&self, id: &ItemId) -> PathBuf {
        self.root
            .join(id.kind().dir_name())
            .join(format!("{}.yaml", id))
    }

    /// Next free id for a kind: max existing sequence + 1, starting at 1.
    pub fn next_id(&self, kind: ItemKind) -> Result<ItemId> {
        let dir = self.root.join(kind.dir_name());
        let mut max = 0;
        if dir.is_dir() {
            for entry in fs::read_dir(&dir)? {
                let name = entry?.file_name();
                let stem = Path::new(&name).file_stem().and_then(|s| s.to_str());
                if let Some(Ok(id)) = stem.map(|s| s.parse::<ItemId>()) {
                    if id.kind() == kind {
                        max = max.max(id.seq());
                    }
                }
            }
        }
        ItemId::new(kind, max + 1)
    }

    /// Validates raw input for the id's kind and writes the normalized
    /// item. Returns the normalized item.
    pub fn save_raw(&self, id: &ItemId, raw: &Value) -> Result<Item> {
        let item = validate_item(id.kind(), raw, &*self.clock)?;
        self.save(id, &item)?;
        Ok(item)
    }

    /// Writes an already-normalized item under the given id.
    pub fn save(&self, id: &ItemId, item: &Item) -> Result<()> {
        if item.kind() != id.kind() {
            return Err(Error::KindMismatch {
                id: id.to_string(),
                expected: item.kind().as_str(),
            });
        }
        let path = self.item_path(id);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(item)?;
        fs::write(&path, yaml)?;
        tracing::debug!(id = %id, path = %path.display(), "wrote item");
        Ok(())
    }

    /// Loads and validates one item.
    pub fn load(&self, id: &ItemId) -> Result<Item> {
        let raw = self.load_raw(id)?;
        let item = validate_item(id.kind(), &raw, &*self.clock)?;
        Ok(item)
    }

    /// Loads the raw mapping of one item without validation, for callers
    /// that edit a subset of fields and re-validate on save.
    pub fn load_raw(&self, id: &ItemId) -> Result<Value> {
        let path = self.item_path(id);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                return Err(Error::ItemNotFound(id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(id = %id, path = %path.display(), "read item");
        let raw: Value = serde_yaml::from_str(&content)?;
        Ok(raw)
    }

    /// Loads every item of a kind, sorted by sequence number. An absent
    /// kind directory yields an empty list.
    pub fn load_all(&self, kind: ItemKind) -> Result<Vec<(ItemId, Item)>> {
        let dir = self.root.join(kind.dir_name());
        let mut ids = Vec::new();
        if dir.is_dir() {
            for entry in fs::read_dir(&dir)? {
                let name = entry?.file_name();
                let stem = Path::new(&name).file_stem().and_then(|s| s.to_str());
                if let Some(Ok(id)) = stem.map(|s| s.parse::<ItemId>()) {
                    if id.kind() == kind {
                        ids.push(id);
                    }
                }
            }
        }
        ids.sort();
        let mut items = Vec::with_capacity(ids.len());
        for id in ids {
            items.push((id, self.load(&id)?));
        }
        Ok(items)
    }

    /// Deletes one item file.
    pub fn delete(&self, id: &ItemId) -> Result<()> {
        let path = self.item_path(id);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(id = %id, "deleted item");
                Ok(())
            }
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                Err(Error::ItemNotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn read_config(path: &Path) -> Result<WorkspaceConfig> {
    let content = fs::read_to_string(path)?;
    let raw: Value = serde_yaml::from_str(&content)?;
    let config = validate_workspace_config(&raw)?;
    Ok(config)
}

fn write_config(path: &Path, config: &WorkspaceConfig) -> Result<()> {
    let yaml = serde_yaml::to_string(config)?;
    fs::write(path, yaml)?;
    Ok(())
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
