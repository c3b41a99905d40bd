// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Item kinds and kind-prefixed identifiers.
//!
//! An identifier renders as `<kind>-<n>` with a 1-based sequence number and
//! no leading zeros (`issue-1`, `risk-42`). The three id spaces are
//! disjoint; uniqueness is per kind.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{Error, Result};

// Pre-compiled identifier pattern. The pattern is a compile-time constant
// verified at test time, so a failure to compile is unreachable.
static ID_RE: LazyLock<Regex> =
    LazyLock::new(
        || match Regex::new(r"^(issue|risk|improvement)-([1-9][0-9]*)$") {
            Ok(re) => re,
            Err(_) => unreachable!("static regex pattern"),
        },
    );

/// The three record kinds tracked by arev.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A problem observed in the architecture under review.
    Issue,
    /// A potential future problem. Structurally independent of Issue:
    /// its id space and status set are distinct.
    Risk,
    /// A proposed change that resolves issues or risks.
    Improvement,
}

impl ItemKind {
    /// All kinds, in display order.
    pub const ALL: [ItemKind; 3] = [ItemKind::Issue, ItemKind::Risk, ItemKind::Improvement];

    /// Returns the string representation used in ids, storage, and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Issue => "issue",
            ItemKind::Risk => "risk",
            ItemKind::Improvement => "improvement",
        }
    }

    /// Returns the workspace directory name holding items of this kind.
    pub fn dir_name(&self) -> &'static str {
        match self {
            ItemKind::Issue => "issues",
            ItemKind::Risk => "risks",
            ItemKind::Improvement => "improvements",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "issue" => Ok(ItemKind::Issue),
            "risk" => Ok(ItemKind::Risk),
            "improvement" => Ok(ItemKind::Improvement),
            _ => Err(Error::InvalidKind(s.to_string())),
        }
    }
}

/// A kind-prefixed item identifier with a positive sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId {
    kind: ItemKind,
    seq: u64,
}

impl ItemId {
    /// Creates an id from a kind and a 1-based sequence number.
    pub fn new(kind: ItemKind, seq: u64) -> Result<Self> {
        if seq == 0 {
            return Err(Error::InvalidId(format!("{}-{}", kind, seq)));
        }
        Ok(ItemId { kind, seq })
    }

    /// The kind this id belongs to.
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// The 1-based sequence number.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Parses an id and requires it to belong to the given kind.
    pub fn parse_as(kind: ItemKind, s: &str) -> Result<Self> {
        let id: ItemId = s.parse()?;
        if id.kind != kind {
            return Err(Error::KindMismatch {
                id: s.to_string(),
                expected: kind.as_str(),
            });
        }
        Ok(id)
    }

    /// Returns true if the string lexically matches any id pattern.
    pub fn is_valid(s: &str) -> bool {
        ID_RE.is_match(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.seq)
    }
}

impl FromStr for ItemId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let caps = ID_RE
            .captures(s)
            .ok_or_else(|| Error::InvalidId(s.to_string()))?;
        let kind = match &caps[1] {
            "issue" => ItemKind::Issue,
            "risk" => ItemKind::Risk,
            _ => ItemKind::Improvement,
        };
        // Overflow of the sequence number is rejected like any other bad id.
        let seq: u64 = caps[2]
            .parse()
            .map_err(|_| Error::InvalidId(s.to_string()))?;
        Ok(ItemId { kind, seq })
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
