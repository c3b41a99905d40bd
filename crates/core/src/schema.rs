// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validation and normalization of raw item input.
//!
//! Raw input is an untyped [`serde_json::Value`] mapping, typically from a
//! deserialized YAML file, a form, or CLI flags. Validation runs in three
//! stages:
//!
//! 1. Preprocessing: `null` becomes "absent" for the nullable-optional
//!    fields, and only for those; date-typed fields accept ISO-8601 text.
//! 2. Structural checks: required presence, non-empty strings, enum
//!    membership, id patterns, per-element sequence checks.
//! 3. Defaulting: every declared default substitutes for an absent value.
//!    Timestamp defaults come from the injected [`Clock`] at validation
//!    time.
//!
//! Validation is all-or-nothing: either a fully normalized [`Item`] is
//! produced, or a [`ValidationError`] listing every failing field. It is a
//! pure function of its input and performs no I/O.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::clock::Clock;
use crate::config::WorkspaceConfig;
use crate::id::{ItemId, ItemKind};
use crate::item::{
    Improvement, ImprovementStatus, Issue, IssueStatus, Item, ItemBase, Risk, RiskStatus,
};

/// Fields where an explicit `null` is rewritten to "absent" before any
/// structural check. Upstream producers (forms, YAML files) use `null` for
/// "no value"; the rest of the contract works in terms of absence.
const NULLABLE_FIELDS: &[&str] = &["description", "ticket"];

/// Fields holding a timestamp, coerced from ISO-8601 text.
const DATE_FIELDS: &[&str] = &["created", "modified"];

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// A required field is absent after null-coercion and defaulting.
    MissingRequiredField,
    /// A field's value does not match its declared primitive, enum, or
    /// pattern.
    ShapeMismatch,
    /// A sequence field violates a minimum-length constraint.
    BelowMinimum,
}

impl FieldErrorKind {
    /// Returns the string representation used in display and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldErrorKind::MissingRequiredField => "missing_required_field",
            FieldErrorKind::ShapeMismatch => "shape_mismatch",
            FieldErrorKind::BelowMinimum => "below_minimum",
        }
    }
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single field-addressed validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The originating field, e.g. `title` or `resolves[2]`.
    pub field: String,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation failure carrying every failing field, so a caller (e.g. a
/// form) can surface field-level feedback in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render_field_errors(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    fn single(field: &str, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        ValidationError {
            errors: vec![FieldError {
                field: field.to_string(),
                kind,
                message: message.into(),
            }],
        }
    }

    /// Returns true if some error is addressed to the given field.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

fn render_field_errors(errors: &[FieldError]) -> String {
    let lines: Vec<String> = errors.iter().map(|e| format!("  {}", e)).collect();
    format!("validation failed:\n{}", lines.join("\n"))
}

/// Validates and normalizes raw input into an [`Item`] of the given kind.
///
/// On success every default is applied and `created`/`modified` are
/// populated (from `clock` when absent in the input). On failure no item
/// is produced and every failing field is reported.
pub fn validate_item(
    kind: ItemKind,
    raw: &Value,
    clock: &dyn Clock,
) -> std::result::Result<Item, ValidationError> {
    let mut checker = Checker::new(raw, clock)?;
    let base = checker.base();
    let item = match kind {
        ItemKind::Issue => Item::Issue(Issue {
            base,
            status: checker.status::<IssueStatus>("current, resolved, discarded"),
            caused_by: checker.id_list("causedBy", &[ItemKind::Issue], 0),
        }),
        ItemKind::Risk => Item::Risk(Risk {
            base,
            status: checker.status::<RiskStatus>("potential, current, mitigated, discarded"),
            caused_by: checker.id_list("causedBy", &[ItemKind::Issue], 0),
        }),
        ItemKind::Improvement => Item::Improvement(Improvement {
            base,
            status: checker
                .status::<ImprovementStatus>("proposed, accepted, implemented, discarded"),
            resolves: checker.id_list("resolves", &[ItemKind::Issue, ItemKind::Risk], 1),
            modifies: checker.id_list("modifies", &[ItemKind::Risk], 0),
            creates: checker.id_list("creates", &[ItemKind::Risk], 0),
        }),
    };
    checker.finish(item)
}

/// Validates a raw workspace config, defaulting `version` to 1.
pub fn validate_workspace_config(
    raw: &Value,
) -> std::result::Result<WorkspaceConfig, ValidationError> {
    let obj = raw.as_object().ok_or_else(|| {
        ValidationError::single("$", FieldErrorKind::ShapeMismatch, "expected a mapping")
    })?;
    let version = match obj.get("version") {
        None => 1,
        Some(Value::Number(n)) => match n.as_u64() {
            Some(v) if (1..=u64::from(u32::MAX)).contains(&v) => v as u32,
            _ => {
                return Err(ValidationError::single(
                    "version",
                    FieldErrorKind::ShapeMismatch,
                    "must be a positive integer",
                ))
            }
        },
        Some(_) => {
            return Err(ValidationError::single(
                "version",
                FieldErrorKind::ShapeMismatch,
                "must be a positive integer",
            ))
        }
    };
    Ok(WorkspaceConfig { version })
}

/// Parses a date-typed raw value: RFC 3339, or a bare `YYYY-MM-DD` date
/// taken as midnight UTC. Both normalize to the same internal timestamp.
fn coerce_date(value: &Value) -> Option<DateTime<Utc>> {
    let s = value.as_str()?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|ndt| ndt.and_utc());
    }
    None
}

/// Walks the declared fields of one raw input, collecting field errors.
///
/// Unknown extra fields are never read and therefore silently ignored
/// (permissive contract). Reader methods return placeholder values on
/// error; [`Checker::finish`] discards the assembled item unless the error
/// list is empty, so no partially normalized item can escape.
struct Checker<'a> {
    fields: Map<String, Value>,
    errors: Vec<FieldError>,
    clock: &'a dyn Clock,
}

impl<'a> Checker<'a> {
    /// Runs the preprocessing pass: requires a mapping and rewrites `null`
    /// to absent for the nullable-optional fields only.
    fn new(raw: &Value, clock: &'a dyn Clock) -> std::result::Result<Self, ValidationError> {
        let obj = raw.as_object().ok_or_else(|| {
            ValidationError::single("$", FieldErrorKind::ShapeMismatch, "expected a mapping")
        })?;
        let mut fields = obj.clone();
        for name in NULLABLE_FIELDS {
            if matches!(fields.get(*name), Some(Value::Null)) {
                fields.remove(*name);
            }
        }
        Ok(Checker {
            fields,
            errors: Vec::new(),
            clock,
        })
    }

    fn finish(self, item: Item) -> std::result::Result<Item, ValidationError> {
        if self.errors.is_empty() {
            Ok(item)
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }

    fn push(&mut self, field: impl Into<String>, kind: FieldErrorKind, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            kind,
            message: message.into(),
        });
    }

    /// Reads the shared base fields, applying defaults.
    fn base(&mut self) -> ItemBase {
        ItemBase {
            title: self.required_string("title"),
            description: self.optional_string("description"),
            tags: self.tags(),
            created: self.date_or_now(DATE_FIELDS[0]),
            modified: self.date_or_now(DATE_FIELDS[1]),
            ticket: self.optional_string("ticket"),
        }
    }

    fn required_string(&mut self, name: &str) -> String {
        match self.fields.get(name) {
            None => {
                self.push(name, FieldErrorKind::MissingRequiredField, "is required");
                String::new()
            }
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::String(_)) => {
                self.push(
                    name,
                    FieldErrorKind::ShapeMismatch,
                    "must be a non-empty string",
                );
                String::new()
            }
            Some(_) => {
                self.push(name, FieldErrorKind::ShapeMismatch, "must be a string");
                String::new()
            }
        }
    }

    fn optional_string(&mut self, name: &str) -> Option<String> {
        match self.fields.get(name) {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.push(name, FieldErrorKind::ShapeMismatch, "must be a string");
                None
            }
        }
    }

    fn tags(&mut self) -> Vec<String> {
        let values = match self.fields.get("tags") {
            None => return Vec::new(),
            Some(Value::Array(values)) => values.clone(),
            Some(_) => {
                self.push(
                    "tags",
                    FieldErrorKind::ShapeMismatch,
                    "must be a sequence of strings",
                );
                return Vec::new();
            }
        };
        let mut tags = Vec::with_capacity(values.len());
        for (i, value) in values.iter().enumerate() {
            match value {
                Value::String(s) if !s.is_empty() => tags.push(s.clone()),
                _ => self.push(
                    format!("tags[{}]", i),
                    FieldErrorKind::ShapeMismatch,
                    "must be a non-empty string",
                ),
            }
        }
        tags
    }

    /// Reads a date field, defaulting to the clock's now when absent.
    /// The default is computed at validation time, so validating the same
    /// absent-timestamp input twice yields different timestamps.
    fn date_or_now(&mut self, name: &str) -> DateTime<Utc> {
        match self.fields.get(name) {
            None => self.clock.now(),
            Some(value) => match coerce_date(value) {
                Some(dt) => dt,
                None => {
                    self.push(
                        name,
                        FieldErrorKind::ShapeMismatch,
                        "must be an ISO-8601 date",
                    );
                    self.clock.now()
                }
            },
        }
    }

    fn status<T>(&mut self, valid: &'static str) -> T
    where
        T: FromStr + Default,
    {
        let message = || format!("must be one of: {}", valid);
        match self.fields.get("status") {
            None => T::default(),
            Some(Value::String(s)) => match s.parse::<T>() {
                Ok(status) => status,
                Err(_) => {
                    self.push("status", FieldErrorKind::ShapeMismatch, message());
                    T::default()
                }
            },
            Some(_) => {
                self.push("status", FieldErrorKind::ShapeMismatch, message());
                T::default()
            }
        }
    }

    /// Reads a sequence of ids restricted to the given kinds. `min` is
    /// checked against the raw element count, after per-element shape
    /// validation.
    fn id_list(&mut self, name: &str, kinds: &[ItemKind], min: usize) -> Vec<ItemId> {
        let values = match self.fields.get(name) {
            None if min == 0 => return Vec::new(),
            None => {
                self.push(name, FieldErrorKind::MissingRequiredField, "is required");
                return Vec::new();
            }
            Some(Value::Array(values)) => values.clone(),
            Some(_) => {
                self.push(
                    name,
                    FieldErrorKind::ShapeMismatch,
                    "must be a sequence of ids",
                );
                return Vec::new();
            }
        };
        let expected: Vec<String> = kinds.iter().map(|k| format!("{}-<n>", k)).collect();
        let expected = expected.join(" or ");
        let mut ids = Vec::with_capacity(values.len());
        for (i, value) in values.iter().enumerate() {
            let parsed = value
                .as_str()
                .and_then(|s| s.parse::<ItemId>().ok())
                .filter(|id| kinds.contains(&id.kind()));
            match parsed {
                Some(id) => ids.push(id),
                None => self.push(
                    format!("{}[{}]", name, i),
                    FieldErrorKind::ShapeMismatch,
                    format!("must match {}", expected),
                ),
            }
        }
        if values.len() < min {
            self.push(
                name,
                FieldErrorKind::BelowMinimum,
                format!("must contain at least {} entry", min),
            );
        }
        ids
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
