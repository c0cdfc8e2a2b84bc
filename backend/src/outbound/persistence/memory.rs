//! In-memory employee store.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeDraft, EmployeeId};

/// Employee store backed by a guarded `Vec`, preserving insertion order.
///
/// Suitable for tests and single-process deployments where records may be
/// lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    entries: RwLock<Vec<Employee>>,
}

impl InMemoryEmployeeRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`, keeping their order.
    pub fn with_entries(entries: Vec<Employee>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    fn poisoned() -> EmployeeRepositoryError {
        EmployeeRepositoryError::query("employee store lock poisoned")
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.clone())
    }

    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.iter().find(|entry| entry.id == *id).cloned())
    }

    async fn insert(&self, draft: EmployeeDraft) -> Result<Employee, EmployeeRepositoryError> {
        let now = Utc::now();
        let employee = Employee {
            id: EmployeeId::random(),
            name: draft.name,
            role: draft.role,
            department: draft.department,
            created_at: now,
            updated_at: now,
        };
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.push(employee.clone());
        Ok(employee)
    }

    async fn replace(
        &self,
        id: &EmployeeId,
        draft: EmployeeDraft,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        let Some(entry) = entries.iter_mut().find(|entry| entry.id == *id) else {
            return Ok(None);
        };
        entry.name = draft.name;
        entry.role = draft.role;
        entry.department = draft.department;
        entry.updated_at = Utc::now();
        Ok(Some(entry.clone()))
    }

    async fn remove(&self, id: &EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        let before = entries.len();
        entries.retain(|entry| entry.id != *id);
        Ok(entries.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> EmployeeDraft {
        EmployeeDraft::new(name, "Engineer", "Engineering")
    }

    #[tokio::test]
    async fn insert_assigns_unique_ids_and_timestamps() {
        let store = InMemoryEmployeeRepository::new();
        let first = store.insert(draft("Ada")).await.expect("insert first");
        let second = store.insert(draft("Grace")).await.expect("insert second");

        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, first.updated_at);

        let listed = store.list().await.expect("list");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "Ada");
        assert_eq!(listed[1].name, "Grace");
    }

    #[tokio::test]
    async fn replace_preserves_id_and_creation_time() {
        let store = InMemoryEmployeeRepository::new();
        let created = store.insert(draft("Ada")).await.expect("insert");

        let updated = store
            .replace(&created.id, EmployeeDraft::new("Ada", "Manager", "Engineering"))
            .await
            .expect("replace")
            .expect("record exists");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.role, "Manager");
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn replace_of_unknown_id_returns_none() {
        let store = InMemoryEmployeeRepository::new();
        let outcome = store
            .replace(&EmployeeId::random(), draft("Ada"))
            .await
            .expect("replace");
        assert!(outcome.is_none());
    }

    #[tokio::test]
    async fn remove_reports_whether_a_record_existed() {
        let store = InMemoryEmployeeRepository::new();
        let created = store.insert(draft("Ada")).await.expect("insert");

        assert!(store.remove(&created.id).await.expect("remove"));
        assert!(!store.remove(&created.id).await.expect("second remove"));
        assert!(store.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn find_by_id_returns_the_matching_record() {
        let store = InMemoryEmployeeRepository::new();
        let created = store.insert(draft("Ada")).await.expect("insert");

        let found = store
            .find_by_id(&created.id)
            .await
            .expect("find")
            .expect("record exists");
        assert_eq!(found, created);

        assert!(
            store
                .find_by_id(&EmployeeId::random())
                .await
                .expect("find missing")
                .is_none()
        );
    }
}
