//! Driving ports for the employee directory use-cases.
//!
//! Inbound adapters depend on these traits rather than on the concrete
//! service so handlers stay testable without persistence.

use async_trait::async_trait;

use crate::domain::employee::{Employee, EmployeeDraft, EmployeeId, EmployeeUpdate};
use crate::domain::error::Error;

/// Read side of the directory.
#[async_trait]
pub trait DirectoryQuery: Send + Sync {
    /// List employees, optionally narrowed by a case-insensitive search over
    /// name and department.
    async fn list_employees(&self, search: Option<&str>) -> Result<Vec<Employee>, Error>;
}

/// Mutating side of the directory.
#[async_trait]
pub trait DirectoryCommand: Send + Sync {
    /// Validate and persist a new employee.
    async fn create_employee(&self, draft: EmployeeDraft) -> Result<Employee, Error>;

    /// Validate and apply a partial update to an existing employee.
    async fn update_employee(&self, id: &EmployeeId, update: EmployeeUpdate)
    -> Result<(), Error>;

    /// Remove an employee by identifier.
    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), Error>;
}
