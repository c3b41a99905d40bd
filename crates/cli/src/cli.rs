// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Ids,
}

const QUICKSTART_HELP: &str = "\
Get started:
  arev init                                Initialize a workspace here
  arev new issue \"Slow deploys\"            Record an issue
  arev new risk \"Vendor lock-in\"           Record a risk
  arev new improvement \"Add caching\" \\
      --resolves issue-1                   Propose an improvement
  arev list                                List all items
  arev status issue-1 resolved             Update an item's status";

#[derive(Parser)]
#[command(name = "arev")]
#[command(about = "A file-backed tracker for architecture-review issues, risks, and improvements")]
#[command(
    long_about = "A file-backed tracker for architecture-review artifacts.\n\n\
    Records issues, risks, and improvements (the aim42 domain model) as YAML\n\
    files in a workspace directory, so reviews can live next to the code."
)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize a workspace (config file and README)
    Init {
        /// Directory to initialize (defaults to the current directory)
        path: Option<String>,
    },

    /// Create a new item
    #[command(after_help = "Examples:\n  \
        arev new issue \"Slow deploys\"                        Record an issue\n  \
        arev new issue \"Flaky tests\" --caused-by issue-1     Record a caused issue\n  \
        arev new risk \"Vendor lock-in\" -t platform           Record a tagged risk\n  \
        arev new improvement \"Add caching\" --resolves issue-1")]
    New {
        /// Item kind (issue, risk, improvement)
        kind: String,

        /// Short title for the item
        title: String,

        /// Longer description providing context
        #[arg(long, short)]
        description: Option<String>,

        /// Add a tag (repeatable)
        #[arg(long, short)]
        tag: Vec<String>,

        /// External ticket reference
        #[arg(long)]
        ticket: Option<String>,

        /// Initial status (defaults to current, or proposed for improvements)
        #[arg(long, short)]
        status: Option<String>,

        /// Issue id this item is caused by (issues and risks, repeatable)
        #[arg(long = "caused-by")]
        caused_by: Vec<String>,

        /// Issue or risk id this improvement resolves (repeatable)
        #[arg(long)]
        resolves: Vec<String>,

        /// Risk id this improvement modifies (repeatable)
        #[arg(long)]
        modifies: Vec<String>,

        /// Risk id this improvement creates (repeatable)
        #[arg(long)]
        creates: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// List items
    List {
        /// Restrict to one kind (issue, risk, improvement)
        kind: Option<String>,

        /// Filter by status
        #[arg(long, short)]
        status: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Show item details
    Show {
        /// Item id, e.g. issue-1
        id: String,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Set an item's status
    Status {
        /// Item id, e.g. risk-2
        id: String,

        /// New status (valid values depend on the kind)
        status: String,
    },

    /// Record ids an improvement resolves
    Resolve {
        /// Improvement id, e.g. improvement-1
        id: String,

        /// Issue or risk id(s) to add
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Delete an item
    Delete {
        /// Item id, e.g. issue-1
        id: String,
    },
}
