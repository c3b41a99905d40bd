// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the arevrs library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'arev init' first")]
    NotInitialized,

    #[error("--{flag} does not apply to kind '{kind}'")]
    FlagNotApplicable { flag: &'static str, kind: String },

    #[error(transparent)]
    Core(#[from] ar_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for arevrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
