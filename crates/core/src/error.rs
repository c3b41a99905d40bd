// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ar-core operations.

use thiserror::Error;

use crate::schema::ValidationError;

/// All possible errors that can occur in ar-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("workspace not initialized at {0}\n  hint: run 'arev init' first")]
    NotInitialized(String),

    #[error("item not found: {0}")]
    ItemNotFound(String),

    #[error("invalid item kind: '{0}'\n  hint: valid kinds are: issue, risk, improvement")]
    InvalidKind(String),

    #[error("invalid item id: '{0}'\n  hint: ids look like issue-1, risk-3, improvement-12")]
    InvalidId(String),

    #[error("wrong id kind: '{id}' is not an '{expected}' id")]
    KindMismatch { id: String, expected: &'static str },

    #[error(
        "invalid issue status: '{0}'\n  hint: valid statuses are: current, resolved, discarded"
    )]
    InvalidIssueStatus(String),

    #[error("invalid risk status: '{0}'\n  hint: valid statuses are: potential, current, mitigated, discarded")]
    InvalidRiskStatus(String),

    #[error("invalid improvement status: '{0}'\n  hint: valid statuses are: proposed, accepted, implemented, discarded")]
    InvalidImprovementStatus(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for ar-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
