//! Employee entity and the input shapes accepted from clients.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Errors raised when parsing an [`EmployeeId`] from its string form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeIdError {
    /// The identifier was empty.
    #[error("employee id must not be empty")]
    Empty,
    /// The identifier was not a valid UUID.
    #[error("employee id must be a valid UUID")]
    InvalidUuid,
}

/// Stable employee identifier.
///
/// Assigned by the store on insert and immutable afterward. Stored as a UUID
/// so rapid concurrent inserts cannot collide the way timestamp-derived ids
/// do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validate and construct an [`EmployeeId`] from borrowed input.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, EmployeeIdError> {
        let raw = raw.as_ref();
        if raw.is_empty() {
            return Err(EmployeeIdError::Empty);
        }
        let parsed = Uuid::parse_str(raw).map_err(|_| EmployeeIdError::InvalidUuid)?;
        Ok(Self(parsed))
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EmployeeId> for String {
    fn from(value: EmployeeId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for EmployeeId {
    type Error = EmployeeIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// One employee record.
///
/// ## Invariants
/// - `name`, `role`, and `department` are non-empty after trimming and contain
///   only letters and spaces at the moment of persistence. The validation gate
///   in [`crate::domain::directory_service`] enforces this before any store
///   call; the fields themselves are plain text and are not re-checked
///   afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Stable identifier assigned by the store.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: EmployeeId,
    /// Full name of the employee.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Job role or designation.
    #[schema(example = "Engineer")]
    pub role: String,
    /// Department the employee works in.
    #[schema(example = "Engineering")]
    pub department: String,
    /// When the record was first persisted.
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    /// When the record was last replaced.
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

/// Unvalidated employee fields as submitted by a client.
///
/// Missing JSON fields deserialise to empty strings so the validation gate can
/// report them as required rather than failing opaquely in serde.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    /// Candidate name.
    pub name: String,
    /// Candidate role.
    pub role: String,
    /// Candidate department.
    pub department: String,
}

impl EmployeeDraft {
    /// Build a draft from owned field values.
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            department: department.into(),
        }
    }
}

impl From<&Employee> for EmployeeDraft {
    fn from(value: &Employee) -> Self {
        Self {
            name: value.name.clone(),
            role: value.role.clone(),
            department: value.department.clone(),
        }
    }
}

/// Partial employee fields accepted by the update operation.
///
/// `None` means "keep the persisted value"; the service merges the update onto
/// the original record before validating the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeUpdate {
    /// Replacement name, if any.
    pub name: Option<String>,
    /// Replacement role, if any.
    pub role: Option<String>,
    /// Replacement department, if any.
    pub department: Option<String>,
}

impl EmployeeUpdate {
    /// Merge this update onto `original`, producing the candidate draft.
    pub fn apply_to(&self, original: &Employee) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone().unwrap_or_else(|| original.name.clone()),
            role: self.role.clone().unwrap_or_else(|| original.role.clone()),
            department: self
                .department
                .clone()
                .unwrap_or_else(|| original.department.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_employee() -> Employee {
        Employee {
            id: EmployeeId::random(),
            name: "Ada Lovelace".to_owned(),
            role: "Engineer".to_owned(),
            department: "Engineering".to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[rstest]
    fn employee_id_round_trips_through_string() {
        let id = EmployeeId::random();
        let raw: String = id.into();
        assert_eq!(EmployeeId::parse(&raw), Ok(id));
    }

    #[rstest]
    #[case("")]
    #[case("not-a-uuid")]
    #[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    fn employee_id_rejects_invalid_input(#[case] raw: &str) {
        assert!(EmployeeId::parse(raw).is_err());
    }

    #[rstest]
    fn employee_serialises_with_camel_case_keys() {
        let employee = sample_employee();
        let value = serde_json::to_value(&employee).expect("serialise employee");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["name"], "Ada Lovelace");
    }

    #[rstest]
    fn update_merges_only_supplied_fields() {
        let original = sample_employee();
        let update = EmployeeUpdate {
            role: Some("Manager".to_owned()),
            ..EmployeeUpdate::default()
        };

        let candidate = update.apply_to(&original);
        assert_eq!(candidate.name, original.name);
        assert_eq!(candidate.role, "Manager");
        assert_eq!(candidate.department, original.department);
    }

    #[rstest]
    fn empty_update_reproduces_original_fields() {
        let original = sample_employee();
        let candidate = EmployeeUpdate::default().apply_to(&original);
        assert_eq!(candidate, EmployeeDraft::from(&original));
    }
}
