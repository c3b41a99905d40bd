// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end specs for the `arev` CLI.
//!
//! The spec files under `cli/` are wired as `[[test]]` targets of the
//! `arev` crate so they run against the built binary.
