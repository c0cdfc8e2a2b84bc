//! Driven port for employee persistence adapters.
//!
//! The store owns identifier assignment and timestamp maintenance. Each call
//! is one request-response unit: no transactions and no cross-call atomicity
//! are promised, and none are required by the callers.

use async_trait::async_trait;

use crate::domain::employee::{Employee, EmployeeDraft, EmployeeId};

/// Persistence errors raised by employee store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeRepositoryError {
    /// The backing store could not be reached.
    #[error("employee store connection failed: {message}")]
    Connection {
        /// Adapter-specific description of the failure.
        message: String,
    },
    /// A query or mutation failed during execution.
    #[error("employee store query failed: {message}")]
    Query {
        /// Adapter-specific description of the failure.
        message: String,
    },
    /// Stored data could not be encoded or decoded.
    #[error("employee store serialization failed: {message}")]
    Serialization {
        /// Adapter-specific description of the failure.
        message: String,
    },
}

impl EmployeeRepositoryError {
    /// Construct a [`EmployeeRepositoryError::Connection`] error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Construct a [`EmployeeRepositoryError::Query`] error.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Construct a [`EmployeeRepositoryError::Serialization`] error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

/// Port for employee storage and retrieval.
///
/// Validation is a gate applied by the caller before mutation calls; adapters
/// persist what they are given.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Fetch every stored employee in insertion order.
    async fn list(&self) -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// Fetch one employee by identifier.
    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Persist a new employee, assigning its identifier and timestamps.
    async fn insert(&self, draft: EmployeeDraft) -> Result<Employee, EmployeeRepositoryError>;

    /// Replace the fields of an existing employee, preserving its identifier
    /// and creation timestamp. Returns `None` when no record has `id`.
    async fn replace(
        &self,
        id: &EmployeeId,
        draft: EmployeeDraft,
    ) -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Remove an employee. Returns `false` when no record had `id`.
    async fn remove(&self, id: &EmployeeId) -> Result<bool, EmployeeRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn errors_render_their_adapter_message() {
        let error = EmployeeRepositoryError::connection("refused");
        assert_eq!(
            error.to_string(),
            "employee store connection failed: refused"
        );

        let error = EmployeeRepositoryError::serialization("bad json");
        assert_eq!(
            error.to_string(),
            "employee store serialization failed: bad json"
        );
    }
}
