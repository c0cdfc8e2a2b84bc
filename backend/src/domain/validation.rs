//! Employee record validation.
//!
//! Two entry points share one rule set: [`validate`] checks a whole submission
//! (and, in edit mode, detects no-op updates), while [`validate_field`] checks
//! a single field for live feedback. Both apply the same per-field rules, so a
//! field accepted keystroke-by-keystroke is also accepted at submission time.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::domain::employee::{Employee, EmployeeDraft};
use crate::domain::error::Error;

/// General error raised when an edit changes nothing.
pub const NO_CHANGES_MESSAGE: &str = "No changes detected to update";

static FIELD_PATTERN: OnceLock<Regex> = OnceLock::new();

fn field_pattern() -> &'static Regex {
    FIELD_PATTERN.get_or_init(|| {
        // Emptiness is reported separately; this constrains the character set.
        Regex::new("^[A-Za-z ]+$")
            .unwrap_or_else(|error| panic!("field pattern failed to compile: {error}"))
    })
}

/// The three validated employee fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    /// The `name` field.
    Name,
    /// The `role` field.
    Role,
    /// The `department` field.
    Department,
}

impl EmployeeField {
    /// Capitalised label used in user-facing messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Role => "Role",
            Self::Department => "Department",
        }
    }

    /// JSON key for this field in structured error details.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Role => "role",
            Self::Department => "department",
        }
    }
}

/// Outcome of validating one submission.
///
/// An empty report means the submission is valid. Field slots hold the
/// user-facing message for that field; `general` holds the cross-field
/// no-change message, which is independent of the per-field slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Message for the `name` field, if invalid.
    pub name: Option<String>,
    /// Message for the `role` field, if invalid.
    pub role: Option<String>,
    /// Message for the `department` field, if invalid.
    pub department: Option<String>,
    /// Message not attributable to a single field.
    pub general: Option<String>,
}

impl ValidationReport {
    /// True when no field or general error was recorded.
    pub fn is_valid(&self) -> bool {
        self.name.is_none()
            && self.role.is_none()
            && self.department.is_none()
            && self.general.is_none()
    }

    /// Message recorded for `field`, if any.
    pub fn message(&self, field: EmployeeField) -> Option<&str> {
        match field {
            EmployeeField::Name => self.name.as_deref(),
            EmployeeField::Role => self.role.as_deref(),
            EmployeeField::Department => self.department.as_deref(),
        }
    }

    /// Convert an invalid report into a request error carrying the messages
    /// as structured details keyed by field name plus `general`.
    pub fn into_error(self) -> Error {
        let mut details = Map::new();
        let entries = [
            (EmployeeField::Name.key(), self.name),
            (EmployeeField::Role.key(), self.role),
            (EmployeeField::Department.key(), self.department),
            ("general", self.general),
        ];
        for (key, message) in entries {
            if let Some(message) = message {
                details.insert(key.to_owned(), Value::String(message));
            }
        }
        Error::invalid_request("employee validation failed").with_details(Value::Object(details))
    }
}

/// Validate a single field value.
///
/// Returns the user-facing message when the value is invalid. Whitespace-only
/// input is reported as missing, not as a character-set violation.
pub fn validate_field(field: EmployeeField, value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{} is required", field.label()));
    }
    if !field_pattern().is_match(trimmed) {
        return Some(format!(
            "{} must contain only letters and spaces",
            field.label()
        ));
    }
    None
}

/// Validate a full submission.
///
/// Supply `original` when editing an existing record; the no-change check then
/// fires when every trimmed candidate field equals its trimmed original,
/// regardless of the per-field outcomes.
pub fn validate(candidate: &EmployeeDraft, original: Option<&Employee>) -> ValidationReport {
    let mut report = ValidationReport {
        name: validate_field(EmployeeField::Name, &candidate.name),
        role: validate_field(EmployeeField::Role, &candidate.role),
        department: validate_field(EmployeeField::Department, &candidate.department),
        general: None,
    };

    if let Some(original) = original {
        let unchanged = candidate.name.trim() == original.name.trim()
            && candidate.role.trim() == original.role.trim()
            && candidate.department.trim() == original.department.trim();
        if unchanged {
            report.general = Some(NO_CHANGES_MESSAGE.to_owned());
        }
    }

    report
}
