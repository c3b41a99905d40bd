// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core record types for architecture-review artifacts.
//!
//! The aim42 domain model distinguishes three kinds: Issue, Risk, and
//! Improvement. All three share the [`ItemBase`] shape, embedded by value
//! and flattened in the serialized form. The [`Item`] enum tags a record
//! with its kind explicitly; there is no runtime type inspection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::id::{ItemId, ItemKind};

/// Workflow status of an issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    /// The problem exists today. Initial state.
    #[default]
    Current,
    /// The problem has been addressed.
    Resolved,
    /// The record was abandoned without resolution.
    Discarded,
}

impl IssueStatus {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Current => "current",
            IssueStatus::Resolved => "resolved",
            IssueStatus::Discarded => "discarded",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "current" => Ok(IssueStatus::Current),
            "resolved" => Ok(IssueStatus::Resolved),
            "discarded" => Ok(IssueStatus::Discarded),
            _ => Err(Error::InvalidIssueStatus(s.to_string())),
        }
    }
}

/// Workflow status of a risk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    /// The risk may materialize in the future.
    Potential,
    /// The risk is materializing today. Initial state.
    #[default]
    Current,
    /// Countermeasures are in place.
    Mitigated,
    /// The record was abandoned without mitigation.
    Discarded,
}

impl RiskStatus {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::Potential => "potential",
            RiskStatus::Current => "current",
            RiskStatus::Mitigated => "mitigated",
            RiskStatus::Discarded => "discarded",
        }
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "potential" => Ok(RiskStatus::Potential),
            "current" => Ok(RiskStatus::Current),
            "mitigated" => Ok(RiskStatus::Mitigated),
            "discarded" => Ok(RiskStatus::Discarded),
            _ => Err(Error::InvalidRiskStatus(s.to_string())),
        }
    }
}

/// Workflow status of an improvement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImprovementStatus {
    /// Suggested but not yet agreed. Initial state.
    #[default]
    Proposed,
    /// Agreed and planned.
    Accepted,
    /// Carried out.
    Implemented,
    /// Rejected or abandoned.
    Discarded,
}

impl ImprovementStatus {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImprovementStatus::Proposed => "proposed",
            ImprovementStatus::Accepted => "accepted",
            ImprovementStatus::Implemented => "implemented",
            ImprovementStatus::Discarded => "discarded",
        }
    }
}

impl fmt::Display for ImprovementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ImprovementStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "proposed" => Ok(ImprovementStatus::Proposed),
            "accepted" => Ok(ImprovementStatus::Accepted),
            "implemented" => Ok(ImprovementStatus::Implemented),
            "discarded" => Ok(ImprovementStatus::Discarded),
            _ => Err(Error::InvalidImprovementStatus(s.to_string())),
        }
    }
}

/// Attributes shared by all three item kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemBase {
    /// Short description of the record. Never empty after validation.
    pub title: String,
    /// Longer description providing context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form labels; order is preserved as given, duplicates untouched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// When the record was created. Always populated after validation.
    pub created: DateTime<Utc>,
    /// When the record was last modified. Always populated after validation.
    pub modified: DateTime<Utc>,
    /// External ticket reference (e.g. an issue-tracker key).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<String>,
}

/// A problem observed in the architecture under review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(flatten)]
    pub base: ItemBase,
    #[serde(default)]
    pub status: IssueStatus,
    /// Issues this issue is caused by.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caused_by: Vec<ItemId>,
}

/// A potential future problem.
///
/// In the original aim42 model, risk inherits from issue. We treat it as an
/// independent item kind, so its id space and status set are distinct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    #[serde(flatten)]
    pub base: ItemBase,
    #[serde(default)]
    pub status: RiskStatus,
    /// Issues this risk is caused by.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caused_by: Vec<ItemId>,
}

/// A proposed change resolving issues or risks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvement {
    #[serde(flatten)]
    pub base: ItemBase,
    #[serde(default)]
    pub status: ImprovementStatus,
    /// Issues or risks this improvement resolves. Never empty after
    /// validation.
    pub resolves: Vec<ItemId>,
    /// Risks this improvement modifies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifies: Vec<ItemId>,
    /// Risks this improvement creates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub creates: Vec<ItemId>,
}

/// Any tracked architecture-review record, tagged by kind.
///
/// Serializes as the inner struct; the kind is carried out of band (by the
/// id or the workspace directory), matching the on-disk layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Item {
    Issue(Issue),
    Risk(Risk),
    Improvement(Improvement),
}

impl Item {
    /// The kind tag of this record.
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Issue(_) => ItemKind::Issue,
            Item::Risk(_) => ItemKind::Risk,
            Item::Improvement(_) => ItemKind::Improvement,
        }
    }

    /// The shared base attributes.
    pub fn base(&self) -> &ItemBase {
        match self {
            Item::Issue(issue) => &issue.base,
            Item::Risk(risk) => &risk.base,
            Item::Improvement(improvement) => &improvement.base,
        }
    }

    /// The record's status as its storage string.
    pub fn status_str(&self) -> &'static str {
        match self {
            Item::Issue(issue) => issue.status.as_str(),
            Item::Risk(risk) => risk.status.as_str(),
            Item::Improvement(improvement) => improvement.status.as_str(),
        }
    }

    /// The record's title.
    pub fn title(&self) -> &str {
        &self.base().title
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
