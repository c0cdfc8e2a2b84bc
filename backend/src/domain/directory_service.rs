//! Employee directory domain service.
//!
//! Implements the driving ports over an [`EmployeeRepository`], running the
//! validation gate before every mutation so the store only ever sees records
//! that satisfy the field invariants.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::employee::{Employee, EmployeeDraft, EmployeeId, EmployeeUpdate};
use crate::domain::error::Error;
use crate::domain::ports::{
    DirectoryCommand, DirectoryQuery, EmployeeRepository, EmployeeRepositoryError,
};
use crate::domain::search::filter_directory;
use crate::domain::validation::validate;

/// Directory use-cases backed by a store adapter.
///
/// Generic over the store so unit tests can inject mocks while the server
/// erases the adapter behind `dyn EmployeeRepository`.
pub struct DirectoryService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for DirectoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> DirectoryService<R> {
    /// Create a new service over the given store.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: EmployeeRepository + ?Sized> DirectoryService<R> {
    fn map_store_error(error: EmployeeRepositoryError) -> Error {
        match error {
            EmployeeRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("employee store unavailable: {message}"))
            }
            EmployeeRepositoryError::Query { message } => {
                Error::internal(format!("employee store error: {message}"))
            }
            EmployeeRepositoryError::Serialization { message } => {
                Error::internal(format!("employee store serialization failed: {message}"))
            }
        }
    }

    fn gate(candidate: &EmployeeDraft, original: Option<&Employee>) -> Result<(), Error> {
        let report = validate(candidate, original);
        if report.is_valid() {
            Ok(())
        } else {
            Err(report.into_error())
        }
    }

    fn missing(id: &EmployeeId) -> Error {
        Error::not_found(format!("no employee with id {id}"))
    }
}

#[async_trait]
impl<R: EmployeeRepository + ?Sized> DirectoryQuery for DirectoryService<R> {
    async fn list_employees(&self, search: Option<&str>) -> Result<Vec<Employee>, Error> {
        let employees = self
            .repository
            .list()
            .await
            .map_err(Self::map_store_error)?;
        Ok(match search {
            Some(query) => filter_directory(&employees, query),
            None => employees,
        })
    }
}

#[async_trait]
impl<R: EmployeeRepository + ?Sized> DirectoryCommand for DirectoryService<R> {
    async fn create_employee(&self, draft: EmployeeDraft) -> Result<Employee, Error> {
        Self::gate(&draft, None)?;
        let created = self
            .repository
            .insert(draft)
            .await
            .map_err(Self::map_store_error)?;
        info!(employee_id = %created.id, "employee created");
        Ok(created)
    }

    async fn update_employee(
        &self,
        id: &EmployeeId,
        update: EmployeeUpdate,
    ) -> Result<(), Error> {
        let original = self
            .repository
            .find_by_id(id)
            .await
            .map_err(Self::map_store_error)?
            .ok_or_else(|| Self::missing(id))?;

        let candidate = update.apply_to(&original);
        Self::gate(&candidate, Some(&original))?;

        // The record can disappear between the read and the write; surface
        // that as not-found rather than a silent success.
        self.repository
            .replace(id, candidate)
            .await
            .map_err(Self::map_store_error)?
            .ok_or_else(|| Self::missing(id))?;
        info!(employee_id = %id, "employee updated");
        Ok(())
    }

    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), Error> {
        let removed = self
            .repository
            .remove(id)
            .await
            .map_err(Self::map_store_error)?;
        if !removed {
            return Err(Self::missing(id));
        }
        info!(employee_id = %id, "employee deleted");
        Ok(())
    }
}
