// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ar-core: Shared library for the arev architecture-review tracker
//!
//! This crate provides the item data model, the validation/normalization
//! engine, and the directory-backed workspace store used by the `arev`
//! CLI. The domain model follows the aim42 taxonomy of architecture-review
//! artifacts: issues, risks, and improvements.

pub mod clock;
pub mod config;
pub mod error;
pub mod id;
pub mod item;
pub mod schema;
pub mod workspace;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::WorkspaceConfig;
pub use error::{Error, Result};
pub use id::{ItemId, ItemKind};
pub use item::{
    Improvement, ImprovementStatus, Issue, IssueStatus, Item, ItemBase, Risk, RiskStatus,
};
pub use schema::{
    validate_item, validate_workspace_config, FieldError, FieldErrorKind, ValidationError,
};
pub use workspace::Workspace;
