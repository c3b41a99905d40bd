// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! arevrs - library behind the `arev` CLI.
//!
//! `arev` tracks architecture-review artifacts (issues, risks,
//! improvements) as YAML files in a workspace directory. The data model
//! and validation live in [`ar_core`]; this crate adds workspace
//! discovery, the command surface, and output formatting.

mod cli;
mod commands;
mod display;
pub mod error;
pub mod locate;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{Error, Result};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { path } => commands::init::run(path),
        Command::New {
            kind,
            title,
            description,
            tag,
            ticket,
            status,
            caused_by,
            resolves,
            modifies,
            creates,
            output,
        } => commands::new::run(
            kind,
            title,
            description,
            tag,
            ticket,
            status,
            caused_by,
            resolves,
            modifies,
            creates,
            output,
        ),
        Command::List {
            kind,
            status,
            output,
        } => commands::list::run(kind, status, output),
        Command::Show { id, output } => commands::show::run(id, output),
        Command::Status { id, status } => commands::status::run(id, status),
        Command::Resolve { id, ids } => commands::resolve::run(id, ids),
        Command::Delete { id } => commands::delete::run(id),
    }
}
